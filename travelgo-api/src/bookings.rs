use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};
use travelgo_core::{new_booking_id, Booking, BookingDraft, Money};

use crate::error::AppError;
use crate::middleware::auth::SessionClaims;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct BookRequest {
    transport_id: String,
    seat: String,
    price: String,
}

#[derive(Debug, Deserialize)]
struct PaymentRequest {
    method: String,
    reference: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/seat/{transport_id}/{price}", get(seat))
        .route("/book", post(book))
        .route("/payment", post(payment))
        .route("/cancel/{booking_id}", post(cancel))
}

/// Seat-selection context: echoes the chosen transport and price back with
/// the catalog description, ready for the booking form.
async fn seat(
    State(state): State<AppState>,
    Path((transport_id, price)): Path<(String, String)>,
) -> Json<serde_json::Value> {
    let details = state.catalog.describe(&transport_id);
    Json(json!({
        "transport_id": transport_id,
        "price": price,
        "details": details,
    }))
}

/// SelectingSeat -> ReviewingBooking: stages a pending booking under the
/// caller's session. Nothing durable happens here.
async fn book(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    Json(req): Json<BookRequest>,
) -> Result<Json<BookingDraft>, AppError> {
    let draft = BookingDraft {
        details: state.catalog.describe(&req.transport_id),
        transport_id: req.transport_id,
        seat: req.seat,
        price: req.price,
        date: Utc::now().date_naive(),
    };

    state
        .drafts
        .stage(&claims.sub, &draft, state.draft_ttl_seconds)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    Ok(Json(draft))
}

/// ReviewingBooking -> Paid: commits the staged booking.
///
/// The notification publish is best-effort; a failure is logged and never
/// rolls back the stored record. Resubmitting a payment stages nothing, so
/// it lands back on the dashboard.
async fn payment(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    Json(req): Json<PaymentRequest>,
) -> Result<Response, AppError> {
    let draft = state
        .drafts
        .get(&claims.sub)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    let draft = match draft {
        Some(d) => d,
        None => return Ok(Redirect::to("/dashboard").into_response()),
    };

    let price: Money = draft
        .price
        .parse()
        .map_err(|e| AppError::ValidationError(format!("Invalid price: {}", e)))?;

    let booking = Booking {
        email: claims.sub.clone(),
        booking_id: new_booking_id(),
        transport_id: draft.transport_id,
        seat: draft.seat,
        price,
        date: draft.date,
        payment_method: req.method,
        payment_reference: req.reference,
        details: draft.details,
    };

    state
        .bookings
        .put(&booking)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    let message = format!(
        "Booking ID: {}\nDetails: {}\nSeat: {}\nPrice: {}",
        booking.booking_id, booking.details, booking.seat, booking.price
    );
    if let Err(e) = state.notifier.publish("Booking Confirmed", &message).await {
        warn!("Notification publish failed for {}: {}", booking.booking_id, e);
    }

    if let Err(e) = state.drafts.clear(&claims.sub).await {
        warn!("Failed to clear draft for {}: {}", claims.sub, e);
    }

    info!("Booking committed: {} for {}", booking.booking_id, booking.email);

    Ok((StatusCode::CREATED, Json(booking)).into_response())
}

/// Paid -> Cancelled: unconditional delete at (caller email, booking_id).
/// The partition key scopes the delete to the caller's own records, so no
/// separate ownership or existence check is needed.
async fn cancel(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    Path(booking_id): Path<String>,
) -> Result<StatusCode, AppError> {
    state
        .bookings
        .delete(&claims.sub, &booking_id)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    let message = format!("Booking ID {} has been cancelled.", booking_id);
    if let Err(e) = state.notifier.publish("Booking Cancelled", &message).await {
        warn!("Notification publish failed for {}: {}", booking_id, e);
    }

    Ok(StatusCode::NO_CONTENT)
}

/// All of the caller's bookings, looked up by the email key. No pagination,
/// no ordering guarantee.
async fn dashboard(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = state
        .bookings
        .list_for_user(&claims.sub)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    Ok(Json(bookings))
}
