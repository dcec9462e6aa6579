//! Tests for the env-file store.
//!
//! Responsibilities:
//! - Test loading from files on disk into the process environment.
//! - Test the line loop against in-memory readers and sinks.
//! - Test lookups and in-place casts on loaded entries.
//!
//! Does NOT handle:
//! - Line parsing edge cases (tested in parse.rs).
//! - Cast rules (tested in `types`).
//!
//! Invariants:
//! - Tests that write the process environment or cwd hold `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod reader_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
