use async_trait::async_trait;

use crate::booking::{Booking, BookingDraft};
use crate::user::User;

/// Repository trait for the account store.
///
/// `upsert` is an unconditional put: a second registration with the same
/// email overwrites the first, and no error path reports "already exists".
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn upsert(
        &self,
        user: &User,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn find(
        &self,
        email: &str,
    ) -> Result<Option<User>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Repository trait for durable booking records.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn put(
        &self,
        booking: &Booking,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Unconditional delete at (email, booking_id). Deleting a key that was
    /// never written is not an error.
    async fn delete(
        &self,
        email: &str,
        booking_id: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// All bookings whose email equals `email`, via an indexed key lookup.
    /// No pagination, no ordering guarantee.
    async fn list_for_user(
        &self,
        email: &str,
    ) -> Result<Vec<Booking>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Short-lived staged-booking storage, keyed by the caller's session
/// identity. Entries expire after the configured TTL and are cleared
/// explicitly on commit or logout.
#[async_trait]
pub trait DraftStore: Send + Sync {
    async fn stage(
        &self,
        email: &str,
        draft: &BookingDraft,
        ttl_seconds: u64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn get(
        &self,
        email: &str,
    ) -> Result<Option<BookingDraft>, Box<dyn std::error::Error + Send + Sync>>;

    async fn clear(
        &self,
        email: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
