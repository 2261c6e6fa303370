use serde::{Deserialize, Serialize};

/// A bus, train, or flight the user can book a seat on. Static and
/// read-only; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransportEntry {
    pub id: String,
    pub name: String,
    pub source: String,
    pub dest: String,
    pub price: i64,
}

/// A hotel listing. Static and read-only; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HotelEntry {
    pub id: String,
    pub name: String,
    pub city: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: i64,
}
