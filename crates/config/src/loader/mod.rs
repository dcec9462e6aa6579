//! Env-file loading into the process environment and a typed store.
//!
//! Responsibilities:
//! - Parse `KEY=VALUE` lines (`parse.rs`).
//! - Write parsed pairs into an environment sink (`env.rs`).
//! - Keep a key -> `ConfigVariable` mapping for typed lookups (`store.rs`).
//!
//! Does NOT handle:
//! - Multi-line values, quoting, escapes, or `${VAR}` interpolation.
//! - Watching the file for changes.
//!
//! Invariants / Assumptions:
//! - `ConfigStore::load()` must be called explicitly; nothing is loaded at startup.
//! - Malformed lines are skipped; only open failures and bad casts are errors.

mod env;
mod error;
mod parse;
mod store;

#[cfg(test)]
mod tests;

pub use env::{EnvSink, ProcessEnv};
pub use error::ConfigError;
pub use parse::parse_line;
pub use store::{ConfigStore, LoadSummary};
