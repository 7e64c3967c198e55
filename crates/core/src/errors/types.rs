/// Result type alias for promkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for metric registration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An instrument with the same fully-qualified name is already present in
    /// the registry. Treat as a fatal misconfiguration.
    #[error("metric '{name}' is already registered")]
    AlreadyRegistered { name: String },

    /// Label values passed to an instrument do not match its label schema
    #[error("metric '{name}' expects {expected} label values, got {got}")]
    InconsistentCardinality {
        name: String,
        expected: usize,
        got: usize,
    },

    /// Any other failure reported by the prometheus client
    #[error("failed to build or register metric '{name}': {source}")]
    Instrument {
        name: String,
        #[source]
        source: prometheus::Error,
    },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },
}
