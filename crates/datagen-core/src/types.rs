//! Logical data kinds understood by the dispatcher.
//!
//! `DataKind` is the type descriptor that selects a generator. It is a closed
//! set: adding a generator means adding a variant here and an arm in the
//! dispatcher.
//!
//! # Names
//!
//! Kinds can be parsed from their short names, which is how declared
//! parameter types are read from text signatures:
//!
//! ```text
//! int | integer        -> Int
//! float                -> Float
//! str | string         -> Str
//! bool | boolean       -> Bool
//! ip                   -> Ip
//! dict | object | json | map -> Object
//! url                  -> Url
//! list | tuple | set   -> List | Tuple | Set (recognised, no generator)
//! ```

use crate::error::GeneratorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Logical type descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataKind {
    /// Integer in [-100, 100]
    Int,

    /// Float with a two-digit fractional part
    Float,

    /// Bounded random string (needs a length)
    Str,

    /// Boolean
    Bool,

    /// IPv4 address
    Ip,

    /// JSON-like object of string keys to string values
    Object,

    /// URL of an exact length
    Url,

    // Recognised collection kinds without a generator
    /// List
    List,

    /// Tuple
    Tuple,

    /// Set
    Set,
}

impl DataKind {
    /// Canonical short name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
            Self::Bool => "bool",
            Self::Ip => "ip",
            Self::Object => "dict",
            Self::Url => "url",
            Self::List => "list",
            Self::Tuple => "tuple",
            Self::Set => "set",
        }
    }

    /// Whether the dispatcher has a generator for this kind.
    pub fn is_generatable(&self) -> bool {
        !matches!(self, Self::List | Self::Tuple | Self::Set)
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataKind {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "int" | "integer" => Ok(Self::Int),
            "float" => Ok(Self::Float),
            "str" | "string" => Ok(Self::Str),
            "bool" | "boolean" => Ok(Self::Bool),
            "ip" => Ok(Self::Ip),
            "dict" | "object" | "json" | "map" => Ok(Self::Object),
            "url" => Ok(Self::Url),
            "list" => Ok(Self::List),
            "tuple" => Ok(Self::Tuple),
            "set" => Ok(Self::Set),
            _ => Err(GeneratorError::TypeUnknown(format!(
                "data type '{s}' is not supported"
            ))),
        }
    }
}
