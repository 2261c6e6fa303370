use axum::{extract::State, routing::get, Json, Router};
use serde_json::json;
use travelgo_catalog::{HotelEntry, TransportEntry};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/bus", get(buses))
        .route("/train", get(trains))
        .route("/flight", get(flights))
        .route("/hotels", get(hotels))
}

async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "service": "travelgo",
        "sections": ["bus", "train", "flight", "hotels"],
    }))
}

async fn buses(State(state): State<AppState>) -> Json<Vec<TransportEntry>> {
    Json(state.catalog.buses.clone())
}

async fn trains(State(state): State<AppState>) -> Json<Vec<TransportEntry>> {
    Json(state.catalog.trains.clone())
}

async fn flights(State(state): State<AppState>) -> Json<Vec<TransportEntry>> {
    Json(state.catalog.flights.clone())
}

async fn hotels(State(state): State<AppState>) -> Json<Vec<HotelEntry>> {
    Json(state.catalog.hotels.clone())
}
