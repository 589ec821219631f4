/// Reasons an API key check can fail.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("missing x-api-key header")]
    MissingKey,
    #[error("invalid API key")]
    InvalidKey,
}

/// Validates the provided API key against the configured secret.
///
/// Comparison is literal string equality. The key itself is never logged.
///
/// Returns `Ok(())` if the key is valid, or an error if invalid or missing.
pub fn validate_api_key(provided_key: Option<&str>, expected_key: &str) -> Result<(), AuthError> {
    let provided_key = provided_key.ok_or(AuthError::MissingKey)?;
    tracing::debug!("received API key ({} chars)", provided_key.len());

    if provided_key == expected_key {
        Ok(())
    } else {
        Err(AuthError::InvalidKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_key_is_accepted() {
        assert_eq!(validate_api_key(Some("letmein"), "letmein"), Ok(()));
    }

    #[test]
    fn missing_key_is_rejected() {
        assert_eq!(
            validate_api_key(None, "letmein"),
            Err(AuthError::MissingKey)
        );
    }

    #[test]
    fn comparison_is_case_sensitive_and_literal() {
        assert_eq!(
            validate_api_key(Some("LETMEIN"), "letmein"),
            Err(AuthError::InvalidKey)
        );
        assert_eq!(
            validate_api_key(Some(" letmein"), "letmein"),
            Err(AuthError::InvalidKey)
        );
    }
}
