use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, trace, warn, Level, Span};

/// Error returned when the global subscriber cannot be installed
pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Initialize the tracing system
///
/// Reads filter directives from `RUST_LOG`, falling back to `info`, and logs
/// compact lines to stderr. Fails if a global subscriber is already set.
pub fn init() -> Result<(), InitError> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;
    install(filter)
}

/// Initialize the tracing system with explicit filter directives, ignoring
/// `RUST_LOG`
pub fn init_with_filter(directives: &str) -> Result<(), InitError> {
    install(EnvFilter::try_new(directives)?)
}

fn install(filter: EnvFilter) -> Result<(), InitError> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(is_tty())
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Check if we're running in a TTY environment
fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}
