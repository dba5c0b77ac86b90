//! # Restart decisions.
//!
//! [`RestartDecision`] is the answer a [`RestartTracker`](crate::RestartTracker) gives for
//! one container exit. A refusal carries a [`SkipReason`] naming the first check that
//! blocked the restart.
//!
//! ## Reason text
//! The `Display` output of [`SkipReason`] is part of the observable contract; callers
//! log and report it verbatim.
//!
//! | Variant                   | Label                  | Reason text                               |
//! |---------------------------|------------------------|-------------------------------------------|
//! | `PolicyDisabled`          | `policy_disabled`      | `restart policy is not enabled`           |
//! | `DesiredStopped`          | `desired_stopped`      | `container's desired status is stopped`   |
//! | `ExitCodeMissing`         | `exit_code_missing`    | `exit code is nil`                        |
//! | `ExitCodeIgnored{code}`   | `exit_code_ignored`    | `exit code {code} should be ignored`      |
//! | `ResetPeriodPending{..}`  | `reset_period_pending` | `attempt reset period has not elapsed`    |
//!
//! An approved restart has the label `restart` and an empty reason.
//!
//! ## Example
//! ```rust
//! use restartvisor::{RestartDecision, SkipReason};
//!
//! let skip = RestartDecision::Skip(SkipReason::ExitCodeIgnored { code: 0 });
//! assert!(!skip.should_restart());
//! assert_eq!(skip.reason(), "exit code 0 should be ignored");
//!
//! assert_eq!(RestartDecision::Restart.into_parts(), (true, String::new()));
//! ```

use std::fmt;
use std::time::Duration;

/// Why a restart was refused.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The policy's master switch is off.
    PolicyDisabled,
    /// The container is wanted stopped.
    DesiredStopped,
    /// No exit code has been reported for the container.
    ExitCodeMissing,
    /// The exit code is listed as ignored by the policy.
    ExitCodeIgnored {
        /// The reported exit code.
        code: i32,
    },
    /// The container has not been running for the attempt reset period.
    ResetPeriodPending {
        /// How much longer the container would have had to run.
        remaining: Duration,
    },
}

impl SkipReason {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            SkipReason::PolicyDisabled => "policy_disabled",
            SkipReason::DesiredStopped => "desired_stopped",
            SkipReason::ExitCodeMissing => "exit_code_missing",
            SkipReason::ExitCodeIgnored { .. } => "exit_code_ignored",
            SkipReason::ResetPeriodPending { .. } => "reset_period_pending",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::PolicyDisabled => f.write_str("restart policy is not enabled"),
            SkipReason::DesiredStopped => f.write_str("container's desired status is stopped"),
            SkipReason::ExitCodeMissing => f.write_str("exit code is nil"),
            SkipReason::ExitCodeIgnored { code } => write!(f, "exit code {code} should be ignored"),
            SkipReason::ResetPeriodPending { .. } => {
                f.write_str("attempt reset period has not elapsed")
            }
        }
    }
}

/// Outcome of evaluating a restart policy for one container exit.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestartDecision {
    /// Restart the container.
    Restart,
    /// Leave the container as it is.
    Skip(SkipReason),
}

impl RestartDecision {
    /// `true` when the container should be restarted.
    #[inline]
    pub fn should_restart(&self) -> bool {
        matches!(self, RestartDecision::Restart)
    }

    /// Returns the refusal reason, if any.
    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            RestartDecision::Restart => None,
            RestartDecision::Skip(reason) => Some(reason),
        }
    }

    /// Returns the reason text; empty when the restart is approved.
    pub fn reason(&self) -> String {
        self.skip_reason()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// Splits into the `(should_restart, reason)` pair.
    pub fn into_parts(self) -> (bool, String) {
        (self.should_restart(), self.reason())
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            RestartDecision::Restart => "restart",
            RestartDecision::Skip(reason) => reason.as_label(),
        }
    }
}

impl fmt::Display for RestartDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestartDecision::Restart => f.write_str("restart"),
            RestartDecision::Skip(reason) => write!(f, "skip: {reason}"),
        }
    }
}
