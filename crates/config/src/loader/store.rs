//! The env-file backed configuration store.
//!
//! Responsibilities:
//! - Hold the env file path and the key -> `ConfigVariable` mapping.
//! - Load the file line by line, writing each pair to an `EnvSink` and the mapping.
//! - Serve exact-match lookups.
//!
//! Does NOT handle:
//! - Line syntax (delegated to parse.rs).
//! - Typed casting (see `types::ConfigVariable`).
//!
//! Invariants / Assumptions:
//! - The mapping only grows; reloading overwrites entries for keys seen again.
//! - Lines with an empty key are skipped silently.
//! - Entries the environment cannot hold (NUL bytes) are still stored in the mapping.
//! - Not safe for concurrent mutation; callers wrap the store in a lock if shared.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::env::{EnvSink, ProcessEnv, is_settable};
use super::error::ConfigError;
use super::parse::parse_line;
use crate::constants::DEFAULT_ENV_PATH;
use crate::types::ConfigVariable;

/// Counts reported by a completed load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Lines that produced an entry in the mapping.
    pub applied: usize,
    /// Lines that were blank, comments, or had no key.
    pub skipped: usize,
}

/// Configuration loaded from an env file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    mapping: HashMap<String, ConfigVariable>,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore {
    /// Create an empty store reading from `./.env`.
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_ENV_PATH),
            mapping: HashMap::new(),
        }
    }

    /// Override the env file path.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Change the env file path used by the next `load`.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
    }

    /// The env file path `load` reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a variable by its exact (upper-cased) key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::KeyNotFound` if the key was never loaded.
    pub fn get(&self, key: &str) -> Result<&ConfigVariable, ConfigError> {
        self.mapping
            .get(key)
            .ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))
    }

    /// Mutable lookup, for casting a stored variable in place.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::KeyNotFound` if the key was never loaded.
    pub fn get_mut(&mut self, key: &str) -> Result<&mut ConfigVariable, ConfigError> {
        self.mapping
            .get_mut(key)
            .ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))
    }

    /// Whether `key` has been loaded (exact match).
    pub fn contains_key(&self, key: &str) -> bool {
        self.mapping.contains_key(key)
    }

    /// Loaded keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.mapping.keys().map(String::as_str)
    }

    /// Number of distinct keys loaded so far.
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// Whether nothing has been loaded yet.
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Load the env file into the process environment and this store.
    ///
    /// Writes to the process environment are global; do not call this while
    /// other threads read or write environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::FileOpen` if the file cannot be opened.
    pub fn load(&mut self) -> Result<LoadSummary, ConfigError> {
        self.load_with(&mut ProcessEnv)
    }

    /// Load the env file, writing pairs to `sink` instead of the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::FileOpen` if the file cannot be opened.
    pub fn load_with<S: EnvSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<LoadSummary, ConfigError> {
        let file = File::open(&self.path).map_err(|e| ConfigError::FileOpen {
            path: self.path.clone(),
            kind: e.kind(),
        })?;

        tracing::debug!(path = %self.path.display(), "Loading env file");
        let summary = self.load_from_reader(BufReader::new(file), sink);
        tracing::debug!(
            path = %self.path.display(),
            applied = summary.applied,
            skipped = summary.skipped,
            "Env file loaded"
        );

        Ok(summary)
    }

    /// Apply every line of `reader` to `sink` and the mapping.
    ///
    /// Lines are decoded lossily, so bytes that are not valid UTF-8 become
    /// U+FFFD instead of stopping the scan. Only an I/O error ends the scan
    /// early; entries read before it are kept.
    pub fn load_from_reader<R, S>(&mut self, mut reader: R, sink: &mut S) -> LoadSummary
    where
        R: BufRead,
        S: EnvSink + ?Sized,
    {
        let mut summary = LoadSummary::default();
        let mut buf = Vec::new();
        let mut line_no = 0usize;

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => line_no += 1,
                Err(e) => {
                    tracing::warn!(
                        line = line_no + 1,
                        error = %e,
                        "Stopped reading env file early"
                    );
                    break;
                }
            }

            let line = String::from_utf8_lossy(trim_line_ending(&buf));
            let (key, value) = parse_line(&line);
            if key.is_empty() {
                summary.skipped += 1;
                continue;
            }

            if is_settable(&key, &value) {
                sink.set(&key, &value);
                tracing::trace!(key = %key, "Applied env entry");
            } else {
                // The value is not logged; it may be a secret.
                tracing::warn!(
                    line = line_no,
                    "Env entry contains a NUL byte; stored but not exported"
                );
            }

            self.mapping
                .insert(key.clone(), ConfigVariable::new(key, value));
            summary.applied += 1;
        }

        summary
    }
}

fn trim_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}
