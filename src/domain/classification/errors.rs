use super::entity::ClassificationResult;
use thiserror::Error;

/// Failure modes of one classification round-trip.
///
/// Exactly one of these (or a `ClassificationResult`) is produced per
/// request; there are no partial results. `Server` carries whatever the
/// remote API answered with so the presentation layer can decide how
/// much of it to surface. `Transport` covers connection-level failures
/// and undecodable success bodies alike; neither is retried.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("classification API returned status {status}")]
    Server { status: u16, body: String },

    #[error("transport failure: {0}")]
    Transport(String),
}

/// What one call to the classifier yields: a normalized result or a
/// typed failure for callers to pattern-match on.
pub type RequestOutcome = Result<ClassificationResult, ClassifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_display_names_status() {
        let err = ClassifyError::Server {
            status: 500,
            body: r#"{"error":"model unavailable"}"#.into(),
        };
        assert_eq!(err.to_string(), "classification API returned status 500");
    }

    #[test]
    fn transport_error_carries_message() {
        let err = ClassifyError::Transport("connection refused".into());
        assert!(err.to_string().contains("connection refused"));
    }
}
