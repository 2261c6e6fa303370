pub mod booking;
pub mod money;
pub mod notify;
pub mod repository;
pub mod user;

pub use booking::{new_booking_id, Booking, BookingDraft};
pub use money::{Money, MoneyError};
pub use user::User;
