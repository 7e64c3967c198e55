//! Probe run counter plus duration and status gauges labelled by target name

use crate::bundle::STATUS_LABEL;
use crate::config::MetricsConfig;
use crate::registrar::Registrar;
use prometheus::{CounterVec, GaugeVec, Registry};
use promkit_core::{build_key, Result};
use std::time::Duration;

/// Label carrying the probe target name
pub const NAME_LABEL: &str = "name";

/// Counter and gauges for a family of probes
#[derive(Clone)]
pub struct ProbeMetrics {
    /// `<ns>_<sub>_<name>_total`, labels `name`, `status`
    pub total: CounterVec,
    /// `<ns>_<sub>_<name>_duration`, labels `name`, `status`
    pub duration: GaugeVec,
    /// `<ns>_<sub>_<name>_status`, label `name`
    pub status: GaugeVec,
}

impl ProbeMetrics {
    /// Register the probe instruments with default settings
    pub fn register(
        registry: &Registry,
        namespace: &str,
        subsystem: &str,
        name: &str,
    ) -> Result<Self> {
        Self::register_with_config(
            registry,
            &MetricsConfig::default(),
            namespace,
            subsystem,
            name,
        )
    }

    /// Register the probe instruments with `config` applied.
    ///
    /// Constant labels are validated first; clashing with `name` or `status`
    /// yields [`promkit_core::Error::Configuration`].
    pub fn register_with_config(
        registry: &Registry,
        config: &MetricsConfig,
        namespace: &str,
        subsystem: &str,
        name: &str,
    ) -> Result<Self> {
        let subject = build_key(namespace, subsystem, &[name]);
        let mut registrar = Registrar::new(registry, config, &subject)?;

        let total = registrar.counter_vec(
            &build_key(namespace, subsystem, &[name, "total"]),
            "total",
            &[NAME_LABEL, STATUS_LABEL],
        )?;
        let duration = registrar.gauge_vec(
            &build_key(namespace, subsystem, &[name, "duration"]),
            "duration",
            &[NAME_LABEL, STATUS_LABEL],
        )?;
        let status = registrar.gauge_vec(
            &build_key(namespace, subsystem, &[name, "status"]),
            "status",
            &[NAME_LABEL],
        )?;

        registrar.commit();
        Ok(Self {
            total,
            duration,
            status,
        })
    }

    /// Record one run of the probe `name` that finished with `status`
    pub fn observe(&self, name: &str, status: &str, elapsed: Duration, up: bool) {
        self.total.with_label_values(&[name, status]).inc();
        self.duration
            .with_label_values(&[name, status])
            .set(elapsed.as_secs_f64());
        self.status
            .with_label_values(&[name])
            .set(if up { 1.0 } else { 0.0 });
    }
}
