//! Deduplicated prometheus instrument registration
//!
//! - [`MetricsCache`] memoizes probe [`MetricBundle`]s by sanitized
//!   namespace/subsystem/name key and registers each bundle exactly once.
//! - [`HostMetrics`] and [`ProbeMetrics`] build fixed-shape instrument
//!   groups without caching.
//! - [`MetricsConfig`] carries constant labels, help text overrides and the
//!   default namespace/subsystem.
//!
//! The registry is always passed in explicitly; pass
//! `prometheus::default_registry().clone()` to use the process-wide one.

pub mod bundle;
pub mod cache;
pub mod config;
pub mod factories;
mod registrar;

pub use bundle::{MetricBundle, PROBE_LABEL, STATUS_LABEL};
pub use cache::MetricsCache;
pub use config::MetricsConfig;
pub use factories::{HostMetrics, HostSample, ProbeMetrics};
pub use prometheus::{CounterVec, GaugeVec, Registry};
pub use promkit_core::{build_key, metric_key, metric_prefix, sanitize, Error, Result};
