//! API key middleware for the `/api` routes.

use crate::error::ApiError;
use crate::AppState;
use api_shared::auth;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use plant_core::constants::API_KEY_HEADER;

/// Rejects requests whose `x-api-key` header does not equal the configured secret.
///
/// A header that is not valid UTF-8 counts as missing.
pub async fn require_api_key(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let provided = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    if let Err(e) = auth::validate_api_key(provided, state.cfg.api_key()) {
        tracing::warn!("Rejected {} {}: {}", req.method(), req.uri().path(), e);
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(req).await)
}
