//! Deduplicating metric bundle cache
//!
//! The prometheus registry refuses a second registration of the same
//! instrument name. [`MetricsCache`] remembers every bundle it has
//! registered, keyed by the sanitized namespace/subsystem/name key, and hands
//! the existing bundle back on later lookups.
//!
//! Lookup, construction, registration and insertion all happen while the map
//! lock is held, so concurrent first callers for one key still produce a
//! single bundle.

use crate::bundle::MetricBundle;
use crate::config::MetricsConfig;
use parking_lot::Mutex;
use prometheus::Registry;
use promkit_core::{metric_key, metric_prefix, Result, SEPARATOR};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Registry-backed cache of [`MetricBundle`]s
pub struct MetricsCache {
    registry: Registry,
    config: MetricsConfig,
    bundles: Mutex<HashMap<String, Arc<MetricBundle>>>,
}

impl MetricsCache {
    /// Create a cache that registers into `registry` with default settings
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            config: MetricsConfig::default(),
            bundles: Mutex::new(HashMap::new()),
        }
    }

    /// Create a cache with explicit configuration
    pub fn with_config(registry: Registry, config: MetricsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            registry,
            config,
            bundles: Mutex::new(HashMap::new()),
        })
    }

    /// Return the bundle for `(namespace, subsystem, name)`, registering it
    /// on first use.
    ///
    /// Repeated calls with arguments that sanitize to the same key return the
    /// same `Arc`. A registration failure leaves both the cache and the
    /// registry unchanged.
    pub fn get_or_create(
        &self,
        namespace: &str,
        subsystem: &str,
        name: &str,
    ) -> Result<Arc<MetricBundle>> {
        let key = metric_key(namespace, subsystem, name);

        let mut bundles = self.bundles.lock();
        if let Some(bundle) = bundles.get(&key) {
            debug!(key = %key, "metric bundle cache hit");
            return Ok(Arc::clone(bundle));
        }

        let bundle = match MetricBundle::register(&self.registry, &self.config, &key) {
            Ok(bundle) => Arc::new(bundle),
            Err(e) => {
                warn!(key = %key, error = %e, "failed to register metric bundle");
                return Err(e);
            }
        };
        bundles.insert(key.clone(), Arc::clone(&bundle));
        info!(key = %key, cached = bundles.len(), "registered metric bundle");

        Ok(bundle)
    }

    /// [`Self::get_or_create`] using the configured namespace and subsystem
    pub fn get_or_create_default(&self, name: &str) -> Result<Arc<MetricBundle>> {
        self.get_or_create(&self.config.namespace, &self.config.subsystem, name)
    }

    /// Cached bundle for the triple, without registering anything
    pub fn get(&self, namespace: &str, subsystem: &str, name: &str) -> Option<Arc<MetricBundle>> {
        let key = metric_key(namespace, subsystem, name);
        self.bundles.lock().get(&key).cloned()
    }

    /// Whether a bundle exists for the triple
    pub fn contains(&self, namespace: &str, subsystem: &str, name: &str) -> bool {
        self.get(namespace, subsystem, name).is_some()
    }

    /// Number of cached bundles
    pub fn len(&self) -> usize {
        self.bundles.lock().len()
    }

    /// Whether no bundle has been created yet
    pub fn is_empty(&self) -> bool {
        self.bundles.lock().is_empty()
    }

    /// All cached keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.bundles.lock().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Cached keys belonging to a namespace/subsystem pair, sorted
    pub fn keys_under(&self, namespace: &str, subsystem: &str) -> Vec<String> {
        let prefix = metric_prefix(namespace, subsystem);
        if prefix.is_empty() {
            return self.keys();
        }
        self.keys()
            .into_iter()
            .filter(|key| {
                key.strip_prefix(&prefix)
                    .is_some_and(|rest| rest.is_empty() || rest.starts_with(SEPARATOR))
            })
            .collect()
    }

    /// Registry the bundles are registered with
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Active configuration
    pub fn config(&self) -> &MetricsConfig {
        &self.config
    }
}
