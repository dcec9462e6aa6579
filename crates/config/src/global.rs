//! Optional process-wide store.
//!
//! Nothing is installed implicitly. An application that wants ambient access
//! loads a `ConfigStore` itself and hands it to [`init`] once at startup.

use std::sync::OnceLock;

use crate::loader::{ConfigError, ConfigStore};

static GLOBAL: OnceLock<ConfigStore> = OnceLock::new();

/// Install `store` as the process-wide store.
///
/// # Errors
///
/// Returns `ConfigError::AlreadyInitialized` if a store was installed before.
pub fn init(store: ConfigStore) -> Result<(), ConfigError> {
    GLOBAL
        .set(store)
        .map_err(|_| ConfigError::AlreadyInitialized)?;
    tracing::debug!("Global config store initialized");
    Ok(())
}

/// The installed store, or `None` before [`init`] is called.
pub fn get() -> Option<&'static ConfigStore> {
    GLOBAL.get()
}
