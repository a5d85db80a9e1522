use crate::domain::validation::ValidationError;

/// Why a send produced a locally synthesized outcome instead of a provider response.
///
/// The `Display` text is what ends up in [`crate::SendOutcome::error`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendFailure {
    /// The recipient failed number validation; nothing was sent.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The HTTP exchange failed (connect, TLS, timeout, body read).
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-2xx HTTP status with a body that is not a provider response.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// The response body is not a provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The HTTP client could not be constructed.
    #[error("client error: {0}")]
    Client(String),
}

impl SendFailure {
    /// Whether the request left this process.
    pub fn reached_network(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::HttpStatus { .. } | Self::Parse(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_descriptive() {
        let err = SendFailure::Transport("connection refused".to_owned());
        assert_eq!(err.to_string(), "transport error: connection refused");

        let err = SendFailure::HttpStatus {
            status: 502,
            body: None,
        };
        assert_eq!(err.to_string(), "unexpected HTTP status: 502");

        let err = SendFailure::from(ValidationError::NotDigits {
            input: "x".to_owned(),
        });
        assert_eq!(err.to_string(), "Number provided is invalid.");
        assert!(!err.reached_network());
    }
}
