//! Error types for paged downloads.

use thiserror::Error;

/// Errors produced by [`JsonPageSource`](crate::JsonPageSource) and
/// [`QueryTransport`](crate::QueryTransport) implementations.
///
/// [`BatchDownloader`](crate::BatchDownloader) never creates these itself;
/// it returns whatever error its page source produced.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The query transport failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// The total row count is missing or not a non-negative whole number.
    #[error("invalid row count at '{path}': {value}")]
    InvalidCount {
        /// Dotted path that was read.
        path: String,
        /// What was found there.
        value: String,
    },

    /// The rows field is present but not an array.
    #[error("invalid rows at '{path}': expected an array, got {value}")]
    InvalidRows {
        /// Dotted path that was read.
        path: String,
        /// What was found there.
        value: String,
    },

    /// A row could not be decoded into the requested type.
    #[error("row deserialization failed: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl FetchError {
    /// Creates a transport error from any displayable cause.
    pub fn transport(cause: impl std::fmt::Display) -> Self {
        Self::Transport(cause.to_string())
    }
}

/// Result type for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_transport() {
        let err = FetchError::transport("502 Bad Gateway");
        assert_eq!(err.to_string(), "transport error: 502 Bad Gateway");
    }

    #[test]
    fn test_error_display_invalid_count() {
        let err = FetchError::InvalidCount {
            path: "target.associatedDiseases.count".to_string(),
            value: "missing".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid row count at 'target.associatedDiseases.count': missing"
        );
    }

    #[test]
    fn test_error_display_invalid_rows() {
        let err = FetchError::InvalidRows {
            path: "rows".to_string(),
            value: "\"x\"".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid rows at 'rows': expected an array, got \"x\""
        );
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: FetchError = json_err.into();
        assert!(matches!(err, FetchError::Deserialize(_)));
    }
}
