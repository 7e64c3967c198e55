//! Error types for promkit operations

mod builders;
mod conversions;
mod types;

pub use types::{Error, Result};
