pub mod app_config;
pub mod booking_repo;
pub mod database;
pub mod events;
pub mod redis_repo;
pub mod user_repo;

pub use booking_repo::PgBookingRepository;
pub use database::DbClient;
pub use events::{EventProducer, KafkaNotifier};
pub use redis_repo::RedisClient;
pub use user_repo::PgUserRepository;
