use std::sync::Arc;

use travelgo_catalog::Catalog;
use travelgo_core::notify::Notifier;
use travelgo_core::repository::{BookingRepository, DraftStore, UserRepository};

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub expiration: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub drafts: Arc<dyn DraftStore>,
    pub notifier: Arc<dyn Notifier>,
    pub catalog: Arc<Catalog>,
    pub auth: AuthConfig,
    pub draft_ttl_seconds: u64,
}
