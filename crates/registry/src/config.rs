//! Registration configuration with environment overrides and validation
use promkit_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Environment variable holding the default namespace
pub const NAMESPACE_ENV: &str = "PROMKIT_NAMESPACE";
/// Environment variable holding the default subsystem
pub const SUBSYSTEM_ENV: &str = "PROMKIT_SUBSYSTEM";
/// Environment variable holding constant labels as `key=value,key=value`
pub const CONST_LABELS_ENV: &str = "PROMKIT_CONST_LABELS";

/// Label names used by the instruments themselves; constant labels may not
/// reuse them.
pub const RESERVED_LABELS: &[&str] = &["probe", "status", "name", "host", "state"];

/// Settings applied to every instrument built by this crate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Namespace used by [`crate::MetricsCache::get_or_create_default`]
    pub namespace: String,
    /// Subsystem used by [`crate::MetricsCache::get_or_create_default`]
    pub subsystem: String,
    /// Labels with fixed values attached to every instrument
    pub const_labels: HashMap<String, String>,
    /// Help text overrides keyed by instrument kind (`total`, `cpu`, ...)
    pub help: HashMap<String, String>,
}

impl MetricsConfig {
    /// Load configuration from `PROMKIT_*` environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Override fields from any `PROMKIT_*` variables that are set
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(namespace) = std::env::var(NAMESPACE_ENV) {
            self.namespace = namespace;
        }
        if let Ok(subsystem) = std::env::var(SUBSYSTEM_ENV) {
            self.subsystem = subsystem;
        }
        if let Ok(labels) = std::env::var(CONST_LABELS_ENV) {
            self.const_labels.extend(parse_const_labels(&labels)?);
        }
        self.validate()
    }

    /// Check constant label names before they reach the prometheus client
    pub fn validate(&self) -> Result<()> {
        for name in self.const_labels.keys() {
            if !is_valid_label_name(name) {
                return Err(Error::configuration(format!(
                    "invalid constant label name '{name}'"
                )));
            }
            if RESERVED_LABELS.contains(&name.as_str()) {
                return Err(Error::configuration(format!(
                    "constant label '{name}' clashes with an instrument label"
                )));
            }
        }
        Ok(())
    }

    /// Help text for an instrument of the given kind
    pub fn help_for(&self, kind: &str, metric: &str) -> String {
        if let Some(help) = self.help.get(kind) {
            return help.clone();
        }
        match kind {
            "total" => format!("Total number of {metric} probe runs"),
            "duration" => format!("Duration of the last {metric} probe in seconds"),
            "status" => format!("Status of the last {metric} probe (1 = up, 0 = down)"),
            "cpu" => format!("CPU usage reported for {metric}"),
            "memory" => format!("Memory usage reported for {metric}"),
            "disk" => format!("Disk usage reported for {metric}"),
            other => format!("{other} for {metric}"),
        }
    }
}

/// Parse `key=value,key=value` into a label map
pub fn parse_const_labels(raw: &str) -> Result<HashMap<String, String>> {
    let mut labels = HashMap::new();
    for pair in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            Error::configuration(format!("constant label '{pair}' is missing '='"))
        })?;
        labels.insert(key.trim().to_string(), value.trim().to_string());
    }
    Ok(labels)
}

fn is_valid_label_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    !name.starts_with("__") && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var(NAMESPACE_ENV);
        std::env::remove_var(SUBSYSTEM_ENV);
        std::env::remove_var(CONST_LABELS_ENV);
    }

    #[test]
    fn test_parse_const_labels() {
        let labels = parse_const_labels("region=eu, zone = a ,").unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels["region"], "eu");
        assert_eq!(labels["zone"], "a");

        assert!(parse_const_labels("").unwrap().is_empty());
        assert!(parse_const_labels("region").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_label_names() {
        let mut config = MetricsConfig::default();
        config.const_labels.insert("1abc".into(), "x".into());
        assert!(config.validate().is_err());

        let mut config = MetricsConfig::default();
        config.const_labels.insert("__reserved".into(), "x".into());
        assert!(config.validate().is_err());

        let mut config = MetricsConfig::default();
        config.const_labels.insert("status".into(), "x".into());
        assert!(config.validate().is_err());

        let mut config = MetricsConfig::default();
        config.const_labels.insert("cluster_id".into(), "x".into());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_help_overrides() {
        let mut config = MetricsConfig::default();
        assert_eq!(
            config.help_for("cpu", "web_host"),
            "CPU usage reported for web_host"
        );

        config.help.insert("cpu".into(), "CPU seconds".into());
        assert_eq!(config.help_for("cpu", "web_host"), "CPU seconds");
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: MetricsConfig =
            serde_json::from_str(r#"{"namespace": "blackbox", "const_labels": {"env": "prod"}}"#)
                .unwrap();
        assert_eq!(config.namespace, "blackbox");
        assert_eq!(config.subsystem, "");
        assert_eq!(config.const_labels["env"], "prod");
        assert!(config.help.is_empty());
    }

    #[test]
    #[serial]
    fn test_from_env() {
        clear_env();
        std::env::set_var(NAMESPACE_ENV, "blackbox");
        std::env::set_var(SUBSYSTEM_ENV, "http");
        std::env::set_var(CONST_LABELS_ENV, "env=prod");

        let config = MetricsConfig::from_env().unwrap();
        assert_eq!(config.namespace, "blackbox");
        assert_eq!(config.subsystem, "http");
        assert_eq!(config.const_labels["env"], "prod");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_reserved_label() {
        clear_env();
        std::env::set_var(CONST_LABELS_ENV, "host=a");

        let err = MetricsConfig::from_env().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));

        clear_env();
    }
}
