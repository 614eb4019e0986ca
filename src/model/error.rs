//! Error taxonomy for preference persistence and threshold validation.
//!
//! The layout computation itself is infallible by design: malformed inputs
//! degrade to the last known good state instead of erroring. Errors here are
//! confined to the persistence seam and to explicit user configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while loading or saving preferences through a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The preferences file exists but could not be read.
    #[error("failed to read preferences from {path}: {source}")]
    Read {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The preferences file contained invalid TOML.
    #[error("failed to parse preferences at {path}: {reason}")]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// Parser diagnostic.
        reason: String,
    },

    /// Preferences could not be serialized for writing.
    #[error("failed to serialize preferences: {reason}")]
    Serialize {
        /// Serializer diagnostic.
        reason: String,
    },

    /// The preferences file could not be written.
    #[error("failed to write preferences to {path}: {source}")]
    Write {
        /// Path that was being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// No platform config directory could be resolved.
    #[error("could not determine a configuration directory for this platform")]
    NoConfigDir,
}

/// Rejected breakpoint threshold set.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThresholdError {
    /// Thresholds must satisfy `mobile < tablet < laptop < desktop`.
    #[error(
        "breakpoint thresholds must be strictly increasing, \
         got mobile={mobile} tablet={tablet} laptop={laptop} desktop={desktop}"
    )]
    NotIncreasing {
        /// Supplied mobile entry width.
        mobile: u32,
        /// Supplied tablet entry width.
        tablet: u32,
        /// Supplied laptop entry width.
        laptop: u32,
        /// Supplied desktop entry width.
        desktop: u32,
    },
}
