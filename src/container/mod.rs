//! Container-side inputs consumed by restart decisions.
//!
//! ## Contents
//! - [`ContainerStatus`] the agent's container lifecycle states (desired or observed)

mod status;

pub use status::ContainerStatus;
