//! Restart policy configuration.
//!
//! This module groups the knobs that control **whether** an exited container may be
//! restarted. Nothing here schedules or delays restarts; the owner of the container
//! does that after consulting a [`RestartTracker`](crate::RestartTracker).
//!
//! ## Contents
//! - [`RestartPolicy`] enabled flag, ignored exit codes, attempt reset period
//! - [`parse_duration`] the text form accepted for `attemptResetPeriod`
//!
//! ## Quick wiring
//! ```text
//! container definition JSON ──► RestartPolicy::from_json
//!      └─► RestartTracker::new(policy)
//!           - should_restart(exit_code, started_at, desired) on every exit
//!           - record_restart() after each restart actually performed
//! ```
//!
//! ## Defaults
//! - `RestartPolicy::default()` → enabled=false, ignored=[], reset period=0s.

mod duration;
mod restart;

pub use duration::parse_duration;
pub use restart::RestartPolicy;
