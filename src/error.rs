//! Error types for configuration loading, intent parsing and the drivers.
//!
//! Layout and state-transition code never fails: invalid intents are
//! declined through [`crate::controller::Outcome::Rejected`] instead.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced outside the layout core.
#[derive(Error, Debug)]
pub enum Error {
    /// A name did not match any variant of a selectable enum
    #[error("unknown {kind}: {value:?}")]
    UnknownVariant {
        /// What was being parsed (e.g. "lattice type")
        kind: &'static str,
        /// The rejected input
        value: String,
    },

    /// A numeric intent argument could not be parsed
    #[error("invalid {what}: {value:?}")]
    InvalidNumber {
        /// Which argument was malformed
        what: &'static str,
        /// The rejected input
        value: String,
    },

    /// Config file could not be read
    #[error("cannot read config {path}: {source}")]
    ConfigIo {
        /// Config path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for [`crate::config::VisualizerConfig`]
    #[error("cannot parse config {path}: {source}")]
    ConfigParse {
        /// Config path
        path: PathBuf,
        /// Underlying JSON failure
        #[source]
        source: serde_json::Error,
    },

    /// Any other I/O failure (socket bind, stdout)
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Snapshot serialization failure
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
