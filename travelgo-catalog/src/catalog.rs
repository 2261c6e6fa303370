use serde::{Deserialize, Serialize};

use crate::entry::{HotelEntry, TransportEntry};

/// Display label used when an id matches nothing in any section.
pub const FALLBACK_DETAILS: &str = "Transport Details";

/// Immutable travel catalog, loaded from configuration at startup and
/// injected into the booking workflow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub buses: Vec<TransportEntry>,
    #[serde(default)]
    pub trains: Vec<TransportEntry>,
    #[serde(default)]
    pub flights: Vec<TransportEntry>,
    #[serde(default)]
    pub hotels: Vec<HotelEntry>,
}

impl Catalog {
    /// Human-readable description for a transport or hotel id.
    ///
    /// Linear scan across all four sections; unknown ids get a fallback
    /// label rather than an error, so a stale form submission still stages.
    pub fn describe(&self, id: &str) -> String {
        let transports = self
            .buses
            .iter()
            .chain(self.trains.iter())
            .chain(self.flights.iter());

        for t in transports {
            if t.id == id {
                return format!("{} | {} - {}", t.name, t.source, t.dest);
            }
        }

        for h in &self.hotels {
            if h.id == id {
                return format!("{} | {} ({})", h.name, h.city, h.kind);
            }
        }

        FALLBACK_DETAILS.to_string()
    }
}
