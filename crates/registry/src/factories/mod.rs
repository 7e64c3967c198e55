//! Fixed-shape instrument groups
//!
//! Unlike [`crate::MetricsCache`], these constructors do not remember what
//! they registered. Calling one twice with the same identity fails with
//! [`promkit_core::Error::AlreadyRegistered`].

mod host;
mod probe;

pub use host::{HostMetrics, HostSample, HOST_LABEL, STATE_LABEL};
pub use probe::{ProbeMetrics, NAME_LABEL};
