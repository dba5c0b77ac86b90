//! # Example: lifecycle
//!
//! Drives a [`RestartTracker`] the way a container agent does: one task owns the
//! tracker, exit events arrive over a channel, and every approved restart is recorded.
//!
//! The runtime is simulated. Each exit event carries the simulated uptime, so the
//! attempt reset period is visible without waiting for it.
//!
//! ## Flow
//! ```text
//! producer ── ExitEvent ──► owner task
//!                             ├─► tracker.should_restart_at(now, exit_code, started_at, desired)
//!                             ├─ Skip(reason)  ─► log reason
//!                             └─ Restart       ─► "restart" container, tracker.record_restart()
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=debug cargo run --example lifecycle
//! ```

use std::time::{Duration, SystemTime};

use restartvisor::{ContainerStatus, RestartPolicy, RestartTracker};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// One observed container exit.
#[derive(Debug)]
struct ExitEvent {
    exit_code: Option<i32>,
    uptime: Duration,
    desired: ContainerStatus,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Logging (RUST_LOG controls verbosity, default info)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Policy as it would appear in a container definition
    let policy = RestartPolicy::from_json(
        r#"{"enabled": true, "ignoredExitCodes": [0], "attemptResetPeriod": "30s"}"#,
    )?;

    // 3. Owner task: the only place the tracker lives
    let (tx, mut rx) = mpsc::channel::<ExitEvent>(16);
    let owner = tokio::spawn(async move {
        let mut tracker = RestartTracker::new(policy);
        let mut now = SystemTime::now();

        while let Some(ev) = rx.recv().await {
            let started_at = now;
            now += ev.uptime;

            let decision = tracker.should_restart_at(now, ev.exit_code, started_at, ev.desired);
            if decision.should_restart() {
                tracker.record_restart();
                info!(
                    exit_code = ?ev.exit_code,
                    restarts = tracker.restart_count(),
                    "container restarted"
                );
            } else {
                warn!(
                    exit_code = ?ev.exit_code,
                    label = decision.as_label(),
                    reason = %decision.reason(),
                    "container left stopped"
                );
            }
        }
        tracker
    });

    // 4. Scripted exits
    let script = [
        (Some(1), Duration::from_secs(45), ContainerStatus::Running),
        (Some(1), Duration::from_secs(5), ContainerStatus::Running),
        (Some(0), Duration::from_secs(60), ContainerStatus::Running),
        (None, Duration::from_secs(60), ContainerStatus::Running),
        (Some(137), Duration::from_secs(90), ContainerStatus::Stopped),
        (Some(2), Duration::from_secs(30), ContainerStatus::Running),
    ];
    for (exit_code, uptime, desired) in script {
        tx.send(ExitEvent {
            exit_code,
            uptime,
            desired,
        })
        .await?;
    }
    drop(tx);

    // 5. Final state, as the agent would persist it
    let tracker = owner.await?;
    println!("final state: {}", serde_json::to_string(&tracker)?);
    Ok(())
}
