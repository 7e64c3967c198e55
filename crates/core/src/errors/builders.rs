//! Builder methods for creating errors with context

use super::types::Error;

impl Error {
    /// Create an already-registered error for the given metric name
    #[must_use]
    pub fn already_registered(name: impl Into<String>) -> Self {
        Error::AlreadyRegistered { name: name.into() }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error means the registry already holds the metric
    pub fn is_already_registered(&self) -> bool {
        matches!(self, Error::AlreadyRegistered { .. })
    }
}
