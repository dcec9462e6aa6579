//! Error types for env-file loading and typed lookups.
//!
//! Responsibilities:
//! - Define error variants for lookup, load, and cast failures.
//!
//! Does NOT handle:
//! - Skipping malformed lines (not an error; see `parse.rs`).
//!
//! Invariants:
//! - All error variants include context for debugging (key names, paths, cast targets).
//! - Errors NEVER include raw values read from the env file to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::types::CastType;

/// Errors that can occur while loading an env file or reading values from it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Env Variable with key '{0}' doesn't exist")]
    KeyNotFound(String),

    /// The env file could not be opened.
    ///
    /// Holds the I/O error kind only; the source error is not retained.
    #[error("Failed to open env file at {}: {kind}", .path.display())]
    FileOpen { path: PathBuf, kind: ErrorKind },

    /// A stored raw value could not be converted to the requested type.
    ///
    /// SAFETY: `reason` comes from the std parser error messages, which do not
    /// echo the input, so the raw value never reaches logs through this error.
    #[error("Error in casting ConfigVar {key} to {target}: {reason}")]
    InvalidCast {
        key: String,
        target: CastType,
        reason: String,
    },

    #[error("Unknown casting type - {0}")]
    UnknownCastType(String),

    #[error("Global config store is already initialized")]
    AlreadyInitialized,
}
