//! Core building blocks for `promkit`.
//!
//! - **`naming`**: turns free-form text into metric-name-safe identifiers and
//!   joins namespace/subsystem/name segments into metric keys.
//! - **`errors`**: the `Error` enum and `Result` alias shared by the
//!   registration crates.

pub mod errors;
pub mod naming;

pub use self::{
    errors::{Error, Result},
    naming::{build_key, metric_key, metric_prefix, sanitize, SEPARATOR},
};
