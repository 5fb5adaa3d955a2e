//! Error types
//!
//! The per-frame simulation never fails; errors only surface while building
//! shape templates or loading settings at startup.

use thiserror::Error;

/// Shape template construction errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// Flat vertex data is not made of whole (x, y, z) triples.
    #[error("malformed shape template: {components} components is not a multiple of 3")]
    Malformed {
        /// Number of flat components supplied.
        components: usize,
    },
}

/// Settings loading errors.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Settings file could not be read.
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid JSON for [`crate::Settings`].
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value parsed but is out of range.
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        /// Offending field name.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}
