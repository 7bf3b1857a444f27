//! Form error types.
//!
//! Validation failures are not errors: they come back as an
//! [`ErrorMap`](crate::ErrorMap) inside a successful outcome. The types here
//! cover what can go wrong around them.

use std::path::PathBuf;

/// Errors from turning a picture into a data URL.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The backing file could not be read.
    #[error("failed to read picture {path}: {source}")]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The attachment has a descriptor but no readable content.
    #[error("picture {file_name} has no readable content")]
    MissingContent {
        /// Name of the attachment.
        file_name: String,
    },
}

/// Errors from a submission attempt.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The record was valid but its picture could not be encoded.
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodeError),

    /// Another submission is already validating or encoding.
    #[error("a submission is already in progress")]
    InFlight,

    /// The attempt was cancelled before the picture finished encoding.
    #[error("submission cancelled")]
    Cancelled,

    /// Synchronous validation found errors, so submission is disabled.
    #[error("submission blocked: {count} field error(s)")]
    Blocked {
        /// Number of fields with an error.
        count: usize,
    },
}

impl SubmitError {
    /// Whether retrying the same record can succeed.
    ///
    /// Cancellation and in-flight rejections are transient; an unreadable
    /// picture or a blocked form needs user action first.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::InFlight | Self::Cancelled)
    }
}

/// Errors from loading a [`FormConfig`](crate::FormConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid JSON for the config shape.
    #[error("invalid form config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The country catalog contains an empty or duplicated entry.
    #[error("invalid country entry: {entry:?}")]
    InvalidCountry {
        /// The offending entry.
        entry: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_error_display() {
        let err = SubmitError::from(EncodeError::MissingContent {
            file_name: "me.png".into(),
        });
        assert_eq!(
            err.to_string(),
            "encoding error: picture me.png has no readable content"
        );
        assert!(!err.is_retryable());
    }

    #[test]
    fn io_error_keeps_source() {
        let err = EncodeError::Io {
            path: PathBuf::from("/nope/me.png"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("failed to read picture /nope/me.png"));
    }

    #[test]
    fn transient_errors_are_retryable() {
        assert!(SubmitError::InFlight.is_retryable());
        assert!(SubmitError::Cancelled.is_retryable());
        assert!(!SubmitError::Blocked { count: 2 }.is_retryable());
    }
}
