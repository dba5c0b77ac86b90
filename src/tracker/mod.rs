//! Restart tracking for a single container.
//!
//! ## Contents
//! - [`RestartTracker`] policy + restart count; decides and records restarts
//! - [`RestartDecision`] the outcome of one decision
//! - [`SkipReason`] why a restart was refused (its `Display` is the reason text)

mod decision;
mod restart_tracker;

pub use decision::{RestartDecision, SkipReason};
pub use restart_tracker::RestartTracker;
