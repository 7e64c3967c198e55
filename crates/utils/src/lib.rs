//! Shared utilities for promkit
//!
//! Currently this is the tracing subscriber setup used by applications and
//! integration tests that want to see registration events.

pub mod tracing;
