pub mod catalog;
pub mod entry;

pub use catalog::{Catalog, FALLBACK_DETAILS};
pub use entry::{HotelEntry, TransportEntry};
