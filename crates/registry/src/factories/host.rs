//! Host resource gauges (cpu, memory, disk) labelled by host and state

use crate::config::MetricsConfig;
use crate::registrar::Registrar;
use prometheus::{GaugeVec, Registry};
use promkit_core::{build_key, Result};

/// Label carrying the host name
pub const HOST_LABEL: &str = "host";
/// Label carrying the host state (e.g. `up`, `degraded`)
pub const STATE_LABEL: &str = "state";

/// Resource gauges for a group of hosts
#[derive(Clone)]
pub struct HostMetrics {
    /// `<ns>_<sub>_<name>_cpu`
    pub cpu: GaugeVec,
    /// `<ns>_<sub>_<name>_memory`
    pub memory: GaugeVec,
    /// `<ns>_<sub>_<name>_disk`
    pub disk: GaugeVec,
}

/// One reading of host resource usage
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HostSample {
    /// CPU usage, in whatever unit the collector reports (usually a ratio)
    pub cpu: f64,
    /// Memory usage, usually bytes
    pub memory: f64,
    /// Disk usage, usually a ratio of capacity
    pub disk: f64,
}

impl HostMetrics {
    /// Register the cpu/memory/disk gauges with default settings
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

    /// Register the cpu/memory/disk gauges with `config` applied.
    ///
    /// Constant labels are validated first; clashing with `host` or `state`
    /// yields [`promkit_core::Error::Configuration`].
    pub fn register_with_config(
        registry: &Registry,
        config: &MetricsConfig,
        namespace: &str,
        subsystem: &str,
        name: &str,
    ) -> Result<Self> {
        let labels = [HOST_LABEL, STATE_LABEL];
        let subject = build_key(namespace, subsystem, &[name]);
        let mut registrar = Registrar::new(registry, config, &subject)?;

        let cpu = registrar.gauge_vec(
            &build_key(namespace, subsystem, &[name, "cpu"]),
            "cpu",
            &labels,
        )?;
        let memory = registrar.gauge_vec(
            &build_key(namespace, subsystem, &[name, "memory"]),
            "memory",
            &labels,
        )?;
        let disk = registrar.gauge_vec(
            &build_key(namespace, subsystem, &[name, "disk"]),
            "disk",
            &labels,
        )?;

        registrar.commit();
        Ok(Self { cpu, memory, disk })
    }

    /// Store a sample for `host` in `state`
    pub fn record(&self, host: &str, state: &str, sample: &HostSample) {
        let labels = [host, state];
        self.cpu.with_label_values(&labels).set(sample.cpu);
        self.memory.with_label_values(&labels).set(sample.memory);
        self.disk.with_label_values(&labels).set(sample.disk);
    }
}
