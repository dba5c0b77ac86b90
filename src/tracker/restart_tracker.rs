//! # Per-container restart tracker.
//!
//! [`RestartTracker`] pairs a [`RestartPolicy`] with the number of restarts performed so
//! far. The container's owner consults it on every exit and records every restart it
//! actually performs.
//!
//! ## Decision order
//! ```text
//! should_restart(exit_code, started_at, desired)
//!   ├─ policy disabled                     ─► Skip(PolicyDisabled)
//!   ├─ desired == Stopped                  ─► Skip(DesiredStopped)
//!   ├─ exit_code == None                   ─► Skip(ExitCodeMissing)
//!   ├─ exit_code ∈ ignored_exit_codes      ─► Skip(ExitCodeIgnored{code})
//!   ├─ now - started_at < reset period     ─► Skip(ResetPeriodPending{remaining})
//!   └─ otherwise                           ─► Restart
//! ```
//! The first failing check wins. Running for exactly the reset period is enough.
//! A start time in the future counts as negative uptime and is always pending.
//!
//! ## Ownership
//! The tracker has no internal locking. Deciding borrows it shared, recording borrows it
//! exclusively; owners that share a tracker across tasks wrap it in a mutex or keep it
//! inside a single actor.

use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::container::ContainerStatus;
use crate::policies::RestartPolicy;
use crate::tracker::decision::{RestartDecision, SkipReason};

/// Restart policy plus restart count for one container.
///
/// Serializes as `{"restartCount": n}`; the count is omitted while zero and the policy is
/// never written. A deserialized tracker carries the default (disabled) policy until
/// [`set_restart_policy`](Self::set_restart_policy) is called.
///
/// # Example
/// ```rust
/// use std::time::{Duration, SystemTime};
/// use restartvisor::{ContainerStatus, RestartPolicy, RestartTracker};
///
/// let policy = RestartPolicy::enabled_after(Duration::from_secs(60)).with_ignored_exit_codes([0]);
/// let mut tracker = RestartTracker::new(policy);
///
/// let started_at = SystemTime::now() - Duration::from_secs(120);
/// let decision = tracker.should_restart(Some(1), started_at, ContainerStatus::Running);
/// assert!(decision.should_restart());
///
/// tracker.record_restart();
/// assert_eq!(tracker.restart_count(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestartTracker {
    #[serde(default, skip_serializing_if = "is_zero")]
    restart_count: u64,
    #[serde(skip)]
    restart_policy: RestartPolicy,
}

impl RestartTracker {
    /// Creates a tracker with a zero restart count.
    pub fn new(restart_policy: RestartPolicy) -> Self {
        Self {
            restart_count: 0,
            restart_policy,
        }
    }

    /// Number of restarts recorded since construction.
    #[inline]
    pub fn restart_count(&self) -> u64 {
        self.restart_count
    }

    /// Policy currently evaluated by [`should_restart`](Self::should_restart).
    #[inline]
    pub fn restart_policy(&self) -> &RestartPolicy {
        &self.restart_policy
    }

    /// Replaces the policy. The restart count is kept.
    pub fn set_restart_policy(&mut self, restart_policy: RestartPolicy) {
        if self.restart_policy != restart_policy {
            debug!(
                enabled = restart_policy.enabled,
                ignored_exit_codes = ?restart_policy.ignored_exit_codes,
                attempt_reset_period = ?restart_policy.attempt_reset_period,
                "restart policy updated"
            );
        }
        self.restart_policy = restart_policy;
    }

    /// Records one restart performed by the owner.
    ///
    /// Call exactly once per restart, after deciding to restart. Calls are not
    /// deduplicated. The count saturates at `u64::MAX`.
    pub fn record_restart(&mut self) {
        self.restart_count = self.restart_count.saturating_add(1);
        debug!(restart_count = self.restart_count, "restart recorded");
    }

    /// Decides whether the container should be restarted, measured against the current
    /// wall-clock time.
    ///
    /// Does not change the tracker.
    pub fn should_restart(
        &self,
        exit_code: Option<i32>,
        started_at: SystemTime,
        desired_status: ContainerStatus,
    ) -> RestartDecision {
        self.should_restart_at(SystemTime::now(), exit_code, started_at, desired_status)
    }

    /// Same as [`should_restart`](Self::should_restart) with an explicit `now`.
    pub fn should_restart_at(
        &self,
        now: SystemTime,
        exit_code: Option<i32>,
        started_at: SystemTime,
        desired_status: ContainerStatus,
    ) -> RestartDecision {
        let decision = self.evaluate(now, exit_code, started_at, desired_status);
        debug!(
            exit_code = ?exit_code,
            desired_status = %desired_status,
            decision = decision.as_label(),
            reason = %decision.reason(),
            "restart decision"
        );
        decision
    }

    fn evaluate(
        &self,
        now: SystemTime,
        exit_code: Option<i32>,
        started_at: SystemTime,
        desired_status: ContainerStatus,
    ) -> RestartDecision {
        let policy = &self.restart_policy;

        if !policy.enabled {
            return RestartDecision::Skip(SkipReason::PolicyDisabled);
        }
        if desired_status.is_stopped() {
            return RestartDecision::Skip(SkipReason::DesiredStopped);
        }
        let Some(code) = exit_code else {
            return RestartDecision::Skip(SkipReason::ExitCodeMissing);
        };
        if policy.is_ignored(code) {
            return RestartDecision::Skip(SkipReason::ExitCodeIgnored { code });
        }
        let required = policy.attempt_reset_period;
        if let Some(remaining) = remaining_reset_period(now, started_at, required) {
            return RestartDecision::Skip(SkipReason::ResetPeriodPending { remaining });
        }

        RestartDecision::Restart
    }
}

/// Time still missing from `required` uptime, or `None` once it has been reached.
fn remaining_reset_period(
    now: SystemTime,
    started_at: SystemTime,
    required: Duration,
) -> Option<Duration> {
    match now.duration_since(started_at) {
        Ok(elapsed) => required.checked_sub(elapsed).filter(|rest| !rest.is_zero()),
        Err(ahead) => Some(required.saturating_add(ahead.duration())),
    }
}

fn is_zero(n: &u64) -> bool {
    *n == 0
}
