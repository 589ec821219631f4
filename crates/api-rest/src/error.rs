//! Mapping of failures onto HTTP responses.
//!
//! Every error is rendered as `{"error": "<message>"}` with the matching status code.

use api_shared::ErrorRes;
use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use plant_core::PlantError;

#[derive(Debug)]
pub enum ApiError {
    /// Missing or wrong `x-api-key` header.
    Unauthorized,
    BadRequest(String),
    NotFound(String),
    /// Store or decoding failure; details are logged, not returned.
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Unauthorized => "Unauthorized",
            Self::BadRequest(msg) | Self::NotFound(msg) => msg,
            Self::Internal => "Internal error",
        }
    }
}

impl From<PlantError> for ApiError {
    fn from(err: PlantError) -> Self {
        match err {
            PlantError::InvalidInput(msg) => Self::BadRequest(msg),
            PlantError::NotFound => Self::NotFound("Plant not found".into()),
            other => {
                tracing::error!("Plant store error: {:?}", other);
                Self::Internal
            }
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorRes::new(self.message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plant_errors_map_to_status_codes() {
        let bad = ApiError::from(PlantError::InvalidInput("Invalid search terms".into()));
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
        assert_eq!(bad.message(), "Invalid search terms");

        let missing = ApiError::from(PlantError::NotFound);
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.message(), "Plant not found");

        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let internal = ApiError::from(PlantError::Decode(decode));
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.message(), "Internal error");
    }

    #[test]
    fn unauthorized_message() {
        assert_eq!(ApiError::Unauthorized.message(), "Unauthorized");
        assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
    }
}
