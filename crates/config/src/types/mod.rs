//! Value types for env-file entries.
//!
//! Responsibilities:
//! - Define `ConfigVariable`, one parsed key/value pair with an optional cast.
//! - Define `Value` and `CastType`, the typed side of a variable.
//!
//! Does NOT handle:
//! - Reading files or touching the environment (see `loader` module).
//!
//! Invariants:
//! - A variable's raw string is immutable; casting only replaces the typed value.

mod value;
mod variable;

pub use value::{CastType, Value};
pub use variable::ConfigVariable;
