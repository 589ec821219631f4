//! JSON bodies shared by every API surface.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness message returned by `GET /`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HomeRes {
    pub message: String,
}

/// Error payload returned with every non-2xx response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

impl ErrorRes {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
