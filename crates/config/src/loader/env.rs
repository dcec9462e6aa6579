//! Destinations for parsed env-file pairs.
//!
//! Responsibilities:
//! - Define the `EnvSink` seam that `ConfigStore::load_with` writes through.
//! - Provide `ProcessEnv`, the sink that writes into the process environment.
//! - Let a plain `HashMap` act as an in-memory sink for tests and dry runs.
//!
//! Does NOT handle:
//! - Parsing lines (see parse.rs).
//! - Deciding which pairs to apply (see store.rs).
//!
//! Invariants:
//! - Writes overwrite any existing value for the same key.
//! - Callers never pass keys containing `=` or keys/values containing NUL;
//!   `store.rs` filters those before calling `set`.

use std::collections::HashMap;

/// Somewhere parsed `key=value` pairs can be written.
///
/// # Thread Safety
///
/// Does **not** require `Send + Sync`. `ProcessEnv` mutates process-global
/// state, so loads that target it must not run concurrently with other
/// threads reading or writing the environment.
pub trait EnvSink {
    fn set(&mut self, key: &str, value: &str);
}

/// Writes into the real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSink for ProcessEnv {
    fn set(&mut self, key: &str, value: &str) {
        // SAFETY: env-file loading is a single-threaded startup step. Callers
        // that load while other threads touch the environment must synchronize
        // externally, as documented on `EnvSink` and `ConfigStore::load`.
        unsafe {
            std::env::set_var(key, value);
        }
    }
}

impl EnvSink for HashMap<String, String> {
    fn set(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), value.to_string());
    }
}

/// Whether `std::env::set_var` would accept this pair without panicking.
pub(crate) fn is_settable(key: &str, value: &str) -> bool {
    !key.is_empty() && !key.contains(['=', '\0']) && !value.contains('\0')
}
