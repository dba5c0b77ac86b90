//! # Container lifecycle states.
//!
//! [`ContainerStatus`] enumerates the states an agent moves a container through. The
//! variants are declared in lifecycle order, so `Ord` compares progression:
//!
//! ```text
//! None ─► ManifestPulled ─► Pulled ─► Created ─► Running ─► ResourcesProvisioned ─► Stopped
//!                                                                                  Zombie
//! ```
//!
//! Restart decisions only care whether the **desired** status is [`ContainerStatus::Stopped`];
//! every other variant is treated as "not stopped".
//!
//! ## Example
//! ```rust
//! use restartvisor::ContainerStatus;
//!
//! let status: ContainerStatus = "RESOURCES_PROVISIONED".parse().unwrap();
//! assert!(status > ContainerStatus::Running);
//! assert!(!status.is_stopped());
//! assert_eq!(ContainerStatus::Stopped.to_string(), "STOPPED");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// State of a container as seen by the agent (desired or observed).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainerStatus {
    /// Not yet acted upon.
    #[default]
    None,
    /// Image manifest resolved.
    ManifestPulled,
    /// Image pulled.
    Pulled,
    /// Container created in the runtime but not started.
    Created,
    /// Container process is running.
    Running,
    /// Container is running and its resources (network, volumes) are provisioned.
    ResourcesProvisioned,
    /// Container has stopped, or is wanted stopped.
    Stopped,
    /// Container is gone from the runtime and will not be observed again.
    Zombie,
}

impl ContainerStatus {
    /// All variants in lifecycle order.
    pub const ALL: [ContainerStatus; 8] = [
        ContainerStatus::None,
        ContainerStatus::ManifestPulled,
        ContainerStatus::Pulled,
        ContainerStatus::Created,
        ContainerStatus::Running,
        ContainerStatus::ResourcesProvisioned,
        ContainerStatus::Stopped,
        ContainerStatus::Zombie,
    ];

    /// Returns the wire name (`"RUNNING"`, `"STOPPED"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerStatus::None => "NONE",
            ContainerStatus::ManifestPulled => "MANIFEST_PULLED",
            ContainerStatus::Pulled => "PULLED",
            ContainerStatus::Created => "CREATED",
            ContainerStatus::Running => "RUNNING",
            ContainerStatus::ResourcesProvisioned => "RESOURCES_PROVISIONED",
            ContainerStatus::Stopped => "STOPPED",
            ContainerStatus::Zombie => "ZOMBIE",
        }
    }

    /// `true` only for [`ContainerStatus::Stopped`].
    #[inline]
    pub fn is_stopped(&self) -> bool {
        matches!(self, ContainerStatus::Stopped)
    }

    /// `true` for states a container never leaves (`Stopped`, `Zombie`).
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, ContainerStatus::Stopped | ContainerStatus::Zombie)
    }
}

impl fmt::Display for ContainerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContainerStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContainerStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseError::UnknownStatus {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip_through_from_str() {
        for status in ContainerStatus::ALL {
            assert_eq!(status.as_str().parse::<ContainerStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_serde_matches_display() {
        for status in ContainerStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
        let parsed: ContainerStatus = serde_json::from_str("\"MANIFEST_PULLED\"").unwrap();
        assert_eq!(parsed, ContainerStatus::ManifestPulled);
    }

    #[test]
    fn test_unknown_name_rejected() {
        let err = "running".parse::<ContainerStatus>().unwrap_err();
        assert_eq!(err.as_label(), "unknown_status");
        assert!(serde_json::from_str::<ContainerStatus>("\"PAUSED\"").is_err());
    }

    #[test]
    fn test_only_stopped_is_stopped() {
        let stopped: Vec<_> = ContainerStatus::ALL
            .into_iter()
            .filter(ContainerStatus::is_stopped)
            .collect();
        assert_eq!(stopped, vec![ContainerStatus::Stopped]);
        assert!(ContainerStatus::Zombie.is_terminal());
        assert!(!ContainerStatus::Running.is_terminal());
    }

    #[test]
    fn test_lifecycle_order() {
        assert!(ContainerStatus::None < ContainerStatus::Pulled);
        assert!(ContainerStatus::Created < ContainerStatus::Running);
        assert!(ContainerStatus::Running < ContainerStatus::Stopped);
        assert_eq!(ContainerStatus::default(), ContainerStatus::None);
    }
}
