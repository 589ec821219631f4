use crate::types::HomeRes;

/// Liveness message served at the API root.
pub const LIVE_MESSAGE: &str = "🌿 Plant API is live!";

/// Simple health service shared by the API binaries
///
/// Liveness does not touch the plant store, so it answers even when the database is
/// unreachable.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Check liveness without creating an instance.
    ///
    /// # Returns
    /// A `HomeRes` carrying the static liveness message.
    pub fn check_health() -> HomeRes {
        HomeRes {
            message: LIVE_MESSAGE.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_serialises_to_message_object() {
        let body = serde_json::to_value(HealthService::check_health()).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "🌿 Plant API is live!" }));
    }
}
