//! # API REST
//!
//! REST API implementation for the plant lookup service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - API key checks on the `/api` routes
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON error payloads, CORS)
//!
//! Uses `plant-core` for data operations and `api-shared` for common types.

#![warn(rust_2018_idioms)]

pub mod auth;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod startup;

use axum::{middleware, routing::get, Router};
use plant_core::{CoreConfig, PlantService, PlantStore};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use docs::ApiDoc;
pub use error::ApiError;

/// Application state shared across REST API handlers
#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<CoreConfig>,
    pub plant_service: PlantService,
}

impl AppState {
    pub fn new(cfg: Arc<CoreConfig>, store: Arc<dyn PlantStore>) -> Self {
        Self {
            cfg,
            plant_service: PlantService::new(store),
        }
    }
}

/// Build the REST router.
///
/// `/` and the Swagger UI are open; everything under `/api` requires the `x-api-key` header.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/plants", get(handlers::list_plants))
        .route("/api/plant", get(handlers::plant_by_name))
        .route("/api/plants/search", get(handlers::search_plants))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_key,
        ));

    Router::new()
        .route("/", get(handlers::home))
        .merge(api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
