//! Typed values produced by casting a raw env-file string.
//!
//! Responsibilities:
//! - Define `Value`, the closed set of types a variable can be cast to.
//! - Define `CastType` and its parsing from the `"string" | "int" | "float" | "bool"` tags.
//! - Implement the per-type parsing rules used by `ConfigVariable::cast`.
//!
//! Invariants:
//! - Boolean parsing accepts exactly `1`, `t`, `true`, `0`, `f`, `false` (case-insensitive).
//! - Integers are base-10 signed 64-bit; floats are 64-bit IEEE.
//! - A float literal that overflows `f64` is an error; only `inf`/`infinity` yield infinity.

use std::fmt;
use std::str::FromStr;

use crate::loader::ConfigError;

/// A value that has been cast from its raw string form.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The cast type this value corresponds to.
    pub fn cast_type(&self) -> CastType {
        match self {
            Value::String(_) => CastType::String,
            Value::Int(_) => CastType::Int,
            Value::Float(_) => CastType::Float,
            Value::Bool(_) => CastType::Bool,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Target type for `ConfigVariable::cast`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastType {
    String,
    Int,
    Float,
    Bool,
}

impl CastType {
    /// The tag used to name this type in `FromStr` and error messages.
    pub fn as_tag(&self) -> &'static str {
        match self {
            CastType::String => "string",
            CastType::Int => "int",
            CastType::Float => "float",
            CastType::Bool => "bool",
        }
    }

    /// Parse `raw` into a value of this type.
    ///
    /// On failure returns the parser's reason, which never contains `raw`.
    pub(crate) fn parse(&self, raw: &str) -> Result<Value, String> {
        match self {
            CastType::String => Ok(Value::String(raw.to_string())),
            CastType::Int => raw
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|e| e.to_string()),
            CastType::Float => parse_float(raw).map(Value::Float),
            CastType::Bool => parse_bool(raw).map(Value::Bool),
        }
    }
}

impl fmt::Display for CastType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for CastType {
    type Err = ConfigError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "string" => Ok(CastType::String),
            "int" => Ok(CastType::Int),
            "float" => Ok(CastType::Float),
            "bool" => Ok(CastType::Bool),
            other => Err(ConfigError::UnknownCastType(other.to_string())),
        }
    }
}

/// Parse a 64-bit float, rejecting finite literals that overflow to infinity.
fn parse_float(raw: &str) -> Result<f64, String> {
    let x = raw.parse::<f64>().map_err(|e| e.to_string())?;
    if x.is_infinite() && !spells_infinity(raw) {
        return Err("value out of range".to_string());
    }
    Ok(x)
}

fn spells_infinity(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    const TRUE: [&str; 3] = ["1", "t", "true"];
    const FALSE: [&str; 3] = ["0", "f", "false"];

    if TRUE.iter().any(|lit| raw.eq_ignore_ascii_case(lit)) {
        Ok(true)
    } else if FALSE.iter().any(|lit| raw.eq_ignore_ascii_case(lit)) {
        Ok(false)
    } else {
        Err("must be one of 1, t, true, 0, f, false".to_string())
    }
}
