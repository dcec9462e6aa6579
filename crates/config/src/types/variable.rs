//! A single key/value pair read from an env file.
//!
//! Invariants:
//! - `raw_value` never changes after construction.
//! - `casted_value` holds the result of the most recent successful cast only;
//!   a failed cast leaves it as it was.

use super::value::{CastType, Value};
use crate::loader::ConfigError;

/// One parsed env-file entry with an optional typed cast.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigVariable {
    key: String,
    raw_value: String,
    casted_value: Option<Value>,
}

impl ConfigVariable {
    /// Create a variable with no cast value. The key is stored as given.
    pub fn new(key: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            raw_value: raw_value.into(),
            casted_value: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    pub fn casted_value(&self) -> Option<&Value> {
        self.casted_value.as_ref()
    }

    /// Cast the raw value to `target` and remember the result.
    ///
    /// Returns `self` so the call can be chained with [`import`](Self::import).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidCast` if the raw value cannot be parsed as `target`.
    pub fn cast(&mut self, target: CastType) -> Result<&mut Self, ConfigError> {
        let value = target
            .parse(&self.raw_value)
            .map_err(|reason| ConfigError::InvalidCast {
                key: self.key.clone(),
                target,
                reason,
            })?;
        self.casted_value = Some(value);
        Ok(self)
    }

    /// Cast using a type tag (`"string"`, `"int"`, `"float"`, or `"bool"`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownCastType` for any other tag, or
    /// `ConfigError::InvalidCast` if the value does not parse.
    pub fn cast_tag(&mut self, tag: &str) -> Result<&mut Self, ConfigError> {
        let target: CastType = tag.parse()?;
        self.cast(target)
    }

    /// The cast value if one has been set, otherwise the raw string.
    pub fn import(&self) -> Value {
        match &self.casted_value {
            Some(value) => value.clone(),
            None => Value::String(self.raw_value.clone()),
        }
    }
}
