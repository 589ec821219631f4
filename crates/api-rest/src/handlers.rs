//! REST endpoint handlers.

use crate::error::ApiError;
use crate::AppState;
use api_shared::{ErrorRes, HealthService, HomeRes};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use plant_core::Plant;

/// Query string as ordered key/value pairs. Repeated keys are kept.
type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// First value given for `key`; later repeats are ignored.
fn first_param(pairs: QueryPairs, key: &str) -> Result<Option<String>, ApiError> {
    let Query(pairs) = pairs?;
    Ok(pairs.into_iter().find(|(k, _)| k == key).map(|(_, v)| v))
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Liveness message", body = HomeRes)
    )
)]
/// Liveness endpoint for the REST API
///
/// Requires no API key and never touches the plant store.
pub async fn home() -> Json<HomeRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/plants",
    params(
        ("x-api-key" = String, Header, description = "Shared API secret")
    ),
    responses(
        (status = 200, description = "Every plant in the collection", body = [Plant]),
        (status = 401, description = "Missing or invalid API key", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// List all plants
///
/// # Errors
/// Returns `500 Internal Server Error` if the plant store fails.
#[axum::debug_handler]
pub async fn list_plants(State(state): State<AppState>) -> Result<Json<Vec<Plant>>, ApiError> {
    let plants = state.plant_service.list_plants().await?;
    Ok(Json(plants))
}

#[utoipa::path(
    get,
    path = "/api/plant",
    params(
        ("x-api-key" = String, Header, description = "Shared API secret"),
        ("name" = String, Query, description = "Common or botanical name, matched exactly ignoring case")
    ),
    responses(
        (status = 200, description = "First matching plant", body = Plant),
        (status = 401, description = "Missing or invalid API key", body = ErrorRes),
        (status = 404, description = "Plant not found", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Fetch one plant by common or botanical name
///
/// A missing `name` parameter is looked up as the empty string. If `name` is repeated, the
/// first value is used.
///
/// # Errors
/// Returns `404 Not Found` if no plant matches.
#[axum::debug_handler]
pub async fn plant_by_name(
    State(state): State<AppState>,
    params: QueryPairs,
) -> Result<Json<Plant>, ApiError> {
    let name = first_param(params, "name")?.unwrap_or_default();
    let plant = state.plant_service.plant_by_name(&name).await?;
    Ok(Json(plant))
}

#[utoipa::path(
    get,
    path = "/api/plants/search",
    params(
        ("x-api-key" = String, Header, description = "Shared API secret"),
        ("condition" = String, Query, description = "Comma-separated condition keywords")
    ),
    responses(
        (status = 200, description = "Plants matching any keyword", body = [Plant]),
        (status = 400, description = "No condition given", body = ErrorRes),
        (status = 401, description = "Missing or invalid API key", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Search plants by condition keywords
///
/// Each comma-separated keyword is matched as a case-insensitive substring of the plant's
/// medicinal uses and search tags; the result is the union over all keywords. If `condition`
/// is repeated, the first value is used.
///
/// # Errors
/// Returns `400 Bad Request` if `condition` is missing, empty, or only separators.
#[axum::debug_handler]
pub async fn search_plants(
    State(state): State<AppState>,
    params: QueryPairs,
) -> Result<Json<Vec<Plant>>, ApiError> {
    let condition = first_param(params, "condition")?.unwrap_or_default();
    let plants = state.plant_service.search_by_condition(&condition).await?;
    Ok(Json(plants))
}
