//! OpenAPI document.

use crate::handlers;
use api_shared::{ErrorRes, HomeRes};
use plant_core::Plant;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::home,
        handlers::list_plants,
        handlers::plant_by_name,
        handlers::search_plants,
    ),
    components(schemas(Plant, HomeRes, ErrorRes))
)]
pub struct ApiDoc;
