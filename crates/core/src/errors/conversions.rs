//! Conversions from prometheus client errors

use super::types::Error;

impl Error {
    /// Attach the metric name to a prometheus error.
    ///
    /// `AlreadyReg` and `InconsistentCardinality` get their own variants so
    /// callers can match on them; everything else is wrapped as-is.
    pub fn registration(name: impl Into<String>, source: prometheus::Error) -> Self {
        let name = name.into();
        match source {
            prometheus::Error::AlreadyReg => Error::AlreadyRegistered { name },
            prometheus::Error::InconsistentCardinality { expect, got } => {
                Error::InconsistentCardinality {
                    name,
                    expected: expect,
                    got,
                }
            }
            other => Error::Instrument {
                name,
                source: other,
            },
        }
    }
}
