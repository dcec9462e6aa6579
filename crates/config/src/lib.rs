//! Env-file configuration loading.
//!
//! This crate reads `KEY=VALUE` files into the process environment and keeps
//! the parsed entries in a [`ConfigStore`] for typed lookups.
//!
//! ```no_run
//! use dotcfg_config::{CastType, ConfigStore};
//!
//! # fn main() -> Result<(), dotcfg_config::ConfigError> {
//! let mut store = ConfigStore::new().with_path("./.env.local");
//! store.load()?;
//! let port = store.get_mut("PORT")?.cast(CastType::Int)?.import();
//! # let _ = port;
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod global;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigStore, EnvSink, LoadSummary, ProcessEnv, parse_line};
pub use types::{CastType, ConfigVariable, Value};
