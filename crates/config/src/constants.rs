//! Centralized constants for the env-file loader.

/// Env file read by a store that has not been given another path.
pub const DEFAULT_ENV_PATH: &str = "./.env";
