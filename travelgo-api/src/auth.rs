use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::Redirect,
    routing::{get, post},
    Json, Router,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;
use travelgo_core::User;

use crate::error::AppError;
use crate::middleware::auth::SessionClaims;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct RegisterRequest {
    email: String,
    name: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Serialize)]
struct AuthResponse {
    token: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Routes that need an authenticated caller; wired behind the session
/// middleware by the app assembler.
pub fn session_routes() -> Router<AppState> {
    Router::new().route("/logout", get(logout))
}

/// Unconditional put: registering an email twice overwrites the first
/// record. No uniqueness check, no error path for "already exists".
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let user = User::new(req.email, req.name, req.password);

    state
        .users
        .upsert(&user)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    Ok((StatusCode::CREATED, Json(json!({ "email": user.email }))))
}

/// Succeeds iff the record exists and the password matches by exact string
/// equality. The login path is the one place a store failure is caught and
/// surfaced as a display string.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let user = state
        .users
        .find(&req.email)
        .await
        .map_err(|e| AppError::StoreUnavailable(e.to_string()))?;

    let user = match user {
        Some(u) if u.password_matches(&req.password) => u,
        _ => return Err(AppError::AuthenticationError("Invalid Credentials".to_string())),
    };

    let claims = SessionClaims {
        sub: user.email,
        name: user.name,
        exp: (Utc::now() + Duration::seconds(state.auth.expiration as i64)).timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(state.auth.secret.as_bytes()),
    )?;

    Ok(Json(AuthResponse { token }))
}

/// Drops any staged booking the session was carrying, then sends the
/// caller back to the index. Token invalidation itself is client-side.
async fn logout(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
) -> Redirect {
    if let Err(e) = state.drafts.clear(&claims.sub).await {
        warn!("Failed to clear draft on logout for {}: {}", claims.sub, e);
    }
    Redirect::to("/")
}
