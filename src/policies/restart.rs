//! # Restart policy for managed containers.
//!
//! [`RestartPolicy`] holds the three knobs a container definition carries for automatic
//! restarts:
//!
//! - [`RestartPolicy::enabled`] master switch; `false` means never restart.
//! - [`RestartPolicy::ignored_exit_codes`] exit codes that never trigger a restart.
//! - [`RestartPolicy::attempt_reset_period`] minimum uptime since the last start before a
//!   restart counts as recovery rather than a crash loop.
//!
//! ## Wire format
//! ```text
//! {
//!   "enabled": true,
//!   "ignoredExitCodes": [0, 143],
//!   "attemptResetPeriod": 300000000000      // nanoseconds, or "5m"
//! }
//! ```
//! Every key is optional. Missing keys (and `null`) take the zero value, so an empty
//! document is a disabled policy.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use restartvisor::RestartPolicy;
//!
//! let policy = RestartPolicy::from_json(
//!     r#"{"enabled": true, "ignoredExitCodes": [0], "attemptResetPeriod": "1m"}"#,
//! ).unwrap();
//!
//! assert!(policy.enabled);
//! assert!(policy.is_ignored(0));
//! assert_eq!(policy.attempt_reset_period, Duration::from_secs(60));
//! ```

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ParseError;

/// Policy controlling whether an exited container may be restarted.
///
/// The zero value ([`RestartPolicy::default`]) is disabled, ignores nothing and has no
/// reset period.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestartPolicy {
    /// Master switch. When `false` no restart is ever permitted.
    #[serde(default)]
    pub enabled: bool,

    /// Exit codes that must never trigger a restart. Order is irrelevant.
    #[serde(default, deserialize_with = "nullable_codes")]
    pub ignored_exit_codes: Vec<i32>,

    /// Minimum time since the last start before a restart is allowed.
    #[serde(default, with = "crate::policies::duration")]
    pub attempt_reset_period: Duration,
}

impl RestartPolicy {
    /// Returns a disabled policy (same as [`RestartPolicy::default`]).
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Returns an enabled policy with the given reset period and no ignored exit codes.
    pub fn enabled_after(attempt_reset_period: Duration) -> Self {
        Self {
            enabled: true,
            ignored_exit_codes: Vec::new(),
            attempt_reset_period,
        }
    }

    /// Replaces the ignored exit codes.
    pub fn with_ignored_exit_codes(mut self, codes: impl IntoIterator<Item = i32>) -> Self {
        self.ignored_exit_codes = codes.into_iter().collect();
        self
    }

    /// Reports whether `code` is listed as ignored.
    #[inline]
    pub fn is_ignored(&self, code: i32) -> bool {
        self.ignored_exit_codes.contains(&code)
    }

    /// Decodes a policy from its JSON representation.
    ///
    /// See the [module docs](self) for the accepted shape.
    pub fn from_json(input: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(input)?)
    }
}

fn nullable_codes<'de, D>(deserializer: D) -> Result<Vec<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<i32>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_disabled() {
        let policy = RestartPolicy::default();
        assert!(!policy.enabled);
        assert!(policy.ignored_exit_codes.is_empty());
        assert_eq!(policy.attempt_reset_period, Duration::ZERO);
        assert_eq!(policy, RestartPolicy::disabled());
    }

    #[test]
    fn test_empty_document_is_default() {
        let policy = RestartPolicy::from_json("{}").unwrap();
        assert_eq!(policy, RestartPolicy::default());
    }

    #[test]
    fn test_missing_and_null_ignored_codes_equal_empty() {
        let missing =
            RestartPolicy::from_json(r#"{"enabled": false, "attemptResetPeriod": 60000000000}"#)
                .unwrap();
        let null = RestartPolicy::from_json(
            r#"{"enabled": false, "ignoredExitCodes": null, "attemptResetPeriod": 60000000000}"#,
        )
        .unwrap();
        let empty = RestartPolicy {
            enabled: false,
            ignored_exit_codes: vec![],
            attempt_reset_period: Duration::from_secs(60),
        };
        assert_eq!(missing, empty);
        assert_eq!(null, empty);
    }

    #[test]
    fn test_period_from_nanoseconds_and_text() {
        let nanos = RestartPolicy::from_json(r#"{"attemptResetPeriod": 300000000000}"#).unwrap();
        let text = RestartPolicy::from_json(r#"{"attemptResetPeriod": "5m"}"#).unwrap();
        assert_eq!(nanos.attempt_reset_period, Duration::from_secs(300));
        assert_eq!(text.attempt_reset_period, Duration::from_secs(300));
    }

    #[test]
    fn test_negative_period_rejected() {
        let err = RestartPolicy::from_json(r#"{"attemptResetPeriod": -1}"#).unwrap_err();
        assert_eq!(err.as_label(), "invalid_policy");
        assert!(
            err.to_string().contains("must not be negative"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_wrong_types_rejected() {
        assert!(RestartPolicy::from_json(r#"{"enabled": "yes"}"#).is_err());
        assert!(RestartPolicy::from_json(r#"{"ignoredExitCodes": ["1"]}"#).is_err());
        assert!(RestartPolicy::from_json(r#"{"attemptResetPeriod": "soon"}"#).is_err());
        assert!(RestartPolicy::from_json("").is_err());
    }

    #[test]
    fn test_serializes_camel_case_nanoseconds() {
        let policy =
            RestartPolicy::enabled_after(Duration::from_secs(60)).with_ignored_exit_codes([0, 143]);
        let value = serde_json::to_value(&policy).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "enabled": true,
                "ignoredExitCodes": [0, 143],
                "attemptResetPeriod": 60_000_000_000i64,
            })
        );
    }

    #[test]
    fn test_serialized_period_clamps_to_i64() {
        let policy = RestartPolicy::enabled_after(Duration::MAX);
        let value = serde_json::to_value(&policy).unwrap();
        assert_eq!(value["attemptResetPeriod"], serde_json::json!(i64::MAX));
    }

    #[test]
    fn test_is_ignored_membership_only() {
        let policy =
            RestartPolicy::enabled_after(Duration::ZERO).with_ignored_exit_codes([137, 0, 137]);
        assert!(policy.is_ignored(0));
        assert!(policy.is_ignored(137));
        assert!(!policy.is_ignored(1));
    }
}
