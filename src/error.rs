//! Error types used by the restartvisor configuration surface.
//!
//! Restart decisions themselves never fail: every input maps to a
//! [`RestartDecision`](crate::RestartDecision). Errors only arise while turning
//! external input (policy JSON, status names) into typed values.
//!
//! [`ParseError`] provides helper methods (`as_label`, `as_message`) for logging/metrics.

use thiserror::Error;

/// # Errors produced while loading restart configuration.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ParseError {
    /// Restart policy document could not be decoded.
    #[error("invalid restart policy: {error}")]
    InvalidPolicy {
        /// The underlying decoder message.
        error: String,
    },

    /// Container status name is not one of the known wire names.
    #[error("unknown container status {value:?}")]
    UnknownStatus {
        /// The rejected input.
        value: String,
    },
}

impl ParseError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use restartvisor::ParseError;
    ///
    /// let err = ParseError::UnknownStatus { value: "paused".into() };
    /// assert_eq!(err.as_label(), "unknown_status");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ParseError::InvalidPolicy { .. } => "invalid_policy",
            ParseError::UnknownStatus { .. } => "unknown_status",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ParseError::InvalidPolicy { error } => format!("policy: {error}"),
            ParseError::UnknownStatus { value } => format!("status: {value}"),
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::InvalidPolicy {
            error: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_stable() {
        let policy = ParseError::InvalidPolicy { error: "eof".into() };
        let status = ParseError::UnknownStatus { value: "x".into() };
        assert_eq!(policy.as_label(), "invalid_policy");
        assert_eq!(status.as_label(), "unknown_status");
    }

    #[test]
    fn test_display_includes_details() {
        let err = ParseError::UnknownStatus { value: "PAUSED".into() };
        assert_eq!(err.to_string(), "unknown container status \"PAUSED\"");
        assert_eq!(err.as_message(), "status: PAUSED");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<bool>("nope").unwrap_err();
        let err = ParseError::from(json_err);
        assert_eq!(err.as_label(), "invalid_policy");
        assert!(err.to_string().starts_with("invalid restart policy: "));
    }
}
