//! # restartvisor
//!
//! **Restartvisor** decides whether an exited container should be restarted
//! automatically and keeps count of the restarts performed.
//!
//! It is the policy-evaluation piece of a container agent. The agent owns one
//! [`RestartTracker`] per container, asks it for a [`RestartDecision`] whenever the
//! container exits, performs the restart itself, and then records it. Restarting,
//! persisting counts, and scheduling backoff stay with the agent.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   container definition (JSON)
//!              │ RestartPolicy::from_json
//!              ▼
//!     ┌──────────────────┐
//!     │  RestartPolicy   │  enabled / ignoredExitCodes / attemptResetPeriod
//!     └────────┬─────────┘
//!              ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │  RestartTracker (one per container, single owner)             │
//! │  - restart_count (monotonic)                                  │
//! │  - should_restart(exit_code, started_at, desired) ─► decision │
//! │  - record_restart()                                           │
//! └──────────────┬───────────────────────────────▲────────────────┘
//!                │ RestartDecision               │ record_restart()
//!                ▼                               │
//! ┌───────────────────────────────────────────────────────────────┐
//! │  container lifecycle manager (agent, out of crate)            │
//! │  - restarts the container through the runtime                 │
//! │  - logs/reports the reason text                               │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! ### Lifecycle
//! ```text
//! container exits
//!   ├─► decision = tracker.should_restart(exit_code, started_at, desired_status)
//!   │       ├─ Skip(reason) ─► leave the container stopped, report reason
//!   │       └─ Restart      ─► runtime restart (agent)
//!   │                            └─► tracker.record_restart()
//!   └─ policy update (desired state changed) ─► tracker.set_restart_policy(policy)
//! ```
//!
//! ## Features
//! | Area              | Description                                                   | Key types                                 |
//! |-------------------|---------------------------------------------------------------|-------------------------------------------|
//! | **Policies**      | Restart policy value type and its JSON form.                  | [`RestartPolicy`]                         |
//! | **Tracking**      | Ordered restart checks and restart accounting.                | [`RestartTracker`]                        |
//! | **Decisions**     | Typed outcome with stable labels and reason text.             | [`RestartDecision`], [`SkipReason`]       |
//! | **Container**     | Lifecycle states the desired status is drawn from.            | [`ContainerStatus`]                       |
//! | **Errors**        | Typed errors for configuration input.                         | [`ParseError`]                            |
//!
//! ## Logging
//! Decisions, recorded restarts and policy updates are emitted as `tracing` events at
//! `debug` level. Install any `tracing` subscriber to see them.
//!
//! ## Example
//! ```rust
//! use std::time::{Duration, SystemTime};
//! use restartvisor::{ContainerStatus, RestartPolicy, RestartTracker};
//!
//! let policy = RestartPolicy::from_json(
//!     r#"{"enabled": true, "ignoredExitCodes": [0], "attemptResetPeriod": "1m"}"#,
//! )?;
//! let mut tracker = RestartTracker::new(policy);
//!
//! // Clean exit: ignored.
//! let started_at = SystemTime::now() - Duration::from_secs(120);
//! let decision = tracker.should_restart(Some(0), started_at, ContainerStatus::Running);
//! assert_eq!(decision.reason(), "exit code 0 should be ignored");
//!
//! // Crash after two minutes of uptime: restart.
//! let decision = tracker.should_restart(Some(1), started_at, ContainerStatus::Running);
//! if decision.should_restart() {
//!     // ... restart through the container runtime ...
//!     tracker.record_restart();
//! }
//! assert_eq!(tracker.restart_count(), 1);
//! # Ok::<(), restartvisor::ParseError>(())
//! ```
mod container;
mod error;
mod policies;
mod tracker;

// ---- Public re-exports ----

pub use container::ContainerStatus;
pub use error::ParseError;
pub use policies::{RestartPolicy, parse_duration};
pub use tracker::{RestartDecision, RestartTracker, SkipReason};
