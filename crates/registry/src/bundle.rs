//! Cached probe instrument bundle

use crate::config::MetricsConfig;
use crate::registrar::Registrar;
use prometheus::{CounterVec, GaugeVec, Registry};
use promkit_core::{build_key, Result};
use std::fmt;
use std::time::Duration;

/// Label carrying the probe identity
pub const PROBE_LABEL: &str = "probe";
/// Label carrying the probe outcome
pub const STATUS_LABEL: &str = "status";

/// Counter and gauges sharing one metric key.
///
/// Bundles are created and registered by [`crate::MetricsCache`] and handed
/// out behind an `Arc`; they are never mutated after construction.
pub struct MetricBundle {
    key: String,
    /// `<key>_total`, labels `probe`, `status`
    pub total: CounterVec,
    /// `<key>_duration`, label `probe`
    pub duration: GaugeVec,
    /// `<key>_status`, label `probe`
    pub status: GaugeVec,
}

impl MetricBundle {
    /// Build the three instruments for `key` and register them.
    ///
    /// Either all three end up in `registry` or none do.
    pub(crate) fn register(
        registry: &Registry,
        config: &MetricsConfig,
        key: &str,
    ) -> Result<Self> {
        let mut registrar = Registrar::new(registry, config, key)?;

        let total = registrar.counter_vec(
            &build_key("", "", &[key, "total"]),
            "total",
            &[PROBE_LABEL, STATUS_LABEL],
        )?;
        let duration = registrar.gauge_vec(
            &build_key("", "", &[key, "duration"]),
            "duration",
            &[PROBE_LABEL],
        )?;
        let status = registrar.gauge_vec(
            &build_key("", "", &[key, "status"]),
            "status",
            &[PROBE_LABEL],
        )?;

        registrar.commit();
        Ok(Self {
            key: key.to_string(),
            total,
            duration,
            status,
        })
    }

    /// Cache key the bundle was created under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Record one probe run: bump the counter, store the duration in seconds
    /// and set the status gauge to 1 when `up`, 0 otherwise.
    pub fn observe(&self, probe: &str, status: &str, elapsed: Duration, up: bool) {
        self.total.with_label_values(&[probe, status]).inc();
        self.duration
            .with_label_values(&[probe])
            .set(elapsed.as_secs_f64());
        self.status
            .with_label_values(&[probe])
            .set(if up { 1.0 } else { 0.0 });
    }
}

impl fmt::Debug for MetricBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricBundle")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
