use std::net::SocketAddr;
use std::sync::Arc;

use travelgo_api::{app, state::{AppState, AuthConfig}};
use travelgo_store::{DbClient, EventProducer, KafkaNotifier, PgBookingRepository, PgUserRepository, RedisClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "travelgo_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = travelgo_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting TravelGo API on port {}", config.server.port);

    let db = DbClient::new(&config.database.url)
        .await
        .expect("Failed to connect to Postgres");
    db.migrate().await.expect("Failed to run migrations");

    let redis_client = RedisClient::new(&config.redis.url)
        .await
        .expect("Failed to connect to Redis");

    let kafka_producer = EventProducer::new(&config.kafka.brokers)
        .expect("Failed to create Kafka producer");
    let notifier = KafkaNotifier::new(kafka_producer, config.kafka.topic.clone());

    let app_state = AppState {
        users: Arc::new(PgUserRepository::new(db.pool.clone())),
        bookings: Arc::new(PgBookingRepository::new(db.pool.clone())),
        drafts: Arc::new(redis_client),
        notifier: Arc::new(notifier),
        catalog: Arc::new(config.catalog.clone()),
        auth: AuthConfig {
            secret: config.auth.jwt_secret.clone(),
            expiration: config.auth.jwt_expiration_seconds,
        },
        draft_ttl_seconds: config.booking.draft_ttl_seconds,
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
