//! Transactional instrument registration
//!
//! A [`Registrar`] builds instruments and registers them one by one. If it
//! is dropped before [`Registrar::commit`] is called, every instrument it
//! registered is unregistered again, so a partially built group never stays
//! in the registry.
//!
//! Help texts describe the subject (the key without its instrument suffix),
//! and the configuration is validated before anything is registered.

use crate::config::MetricsConfig;
use prometheus::core::Collector;
use prometheus::{CounterVec, GaugeVec, Opts, Registry};
use promkit_core::{Error, Result};
use tracing::{debug, warn};

pub(crate) struct Registrar<'a> {
    registry: &'a Registry,
    config: &'a MetricsConfig,
    subject: &'a str,
    registered: Vec<(String, Box<dyn Collector>)>,
}

impl<'a> Registrar<'a> {
    /// Start registering instruments for `subject`.
    ///
    /// Fails with [`Error::Configuration`] if `config` carries constant
    /// labels that are invalid or clash with instrument labels.
    pub(crate) fn new(
        registry: &'a Registry,
        config: &'a MetricsConfig,
        subject: &'a str,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            registry,
            config,
            subject,
            registered: Vec::new(),
        })
    }

    /// Build and register a counter vector named `name`
    pub(crate) fn counter_vec(
        &mut self,
        name: &str,
        kind: &str,
        labels: &[&str],
    ) -> Result<CounterVec> {
        let counter = CounterVec::new(self.opts(name, kind), labels)
            .map_err(|e| Error::registration(name, e))?;
        self.register(name, counter.clone())?;
        Ok(counter)
    }

    /// Build and register a gauge vector named `name`
    pub(crate) fn gauge_vec(
        &mut self,
        name: &str,
        kind: &str,
        labels: &[&str],
    ) -> Result<GaugeVec> {
        let gauge = GaugeVec::new(self.opts(name, kind), labels)
            .map_err(|e| Error::registration(name, e))?;
        self.register(name, gauge.clone())?;
        Ok(gauge)
    }

    /// Keep everything registered so far
    pub(crate) fn commit(mut self) {
        self.registered.clear();
    }

    fn opts(&self, name: &str, kind: &str) -> Opts {
        Opts::new(name, self.config.help_for(kind, self.subject))
            .const_labels(self.config.const_labels.clone())
    }

    fn register<C>(&mut self, name: &str, collector: C) -> Result<()>
    where
        C: Collector + Clone + 'static,
    {
        self.registry
            .register(Box::new(collector.clone()))
            .map_err(|e| Error::registration(name, e))?;
        debug!(metric = %name, "registered instrument");
        self.registered.push((name.to_string(), Box::new(collector)));
        Ok(())
    }
}

impl Drop for Registrar<'_> {
    fn drop(&mut self) {
        while let Some((name, collector)) = self.registered.pop() {
            warn!(metric = %name, "rolling back partial registration");
            if let Err(e) = self.registry.unregister(collector) {
                warn!(metric = %name, error = %e, "failed to unregister instrument");
            }
        }
    }
}
