use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

/// Durable booking record, keyed by (email, booking_id).
///
/// The composite key is unique and immutable after creation; records are
/// only ever inserted at payment time and deleted at cancellation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Booking {
    pub email: String,
    pub booking_id: String,
    pub transport_id: String,
    pub seat: String,
    pub price: Money,
    pub date: NaiveDate,
    pub payment_method: String,
    pub payment_reference: String,
    pub details: String,
}

/// Staged, not-yet-committed booking held per session between seat
/// selection and payment. Price stays as submitted; it is parsed into an
/// exact [`Money`] only when the booking commits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingDraft {
    pub transport_id: String,
    pub details: String,
    pub seat: String,
    pub price: String,
    pub date: NaiveDate,
}

/// Short random booking identifier: the first 8 hex chars of a v4 UUID.
pub fn new_booking_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}
