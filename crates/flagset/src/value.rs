//! Flag types and the values they hold.

use serde::Serialize;
use std::fmt;

/// Declared type of a long flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagType {
    Bool,
    Int,
    UInt,
    Float,
    String,
}

impl FlagType {
    /// Name used in usage text and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Float => "float",
            Self::String => "string",
        }
    }
}

impl fmt::Display for FlagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A converted long-flag value.
///
/// Serializes untagged, so `Bool(true)` becomes `true` and `UInt(3)` becomes `3`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
}

impl Value {
    pub fn flag_type(&self) -> FlagType {
        match self {
            Self::Bool(_) => FlagType::Bool,
            Self::Int(_) => FlagType::Int,
            Self::UInt(_) => FlagType::UInt,
            Self::Float(_) => FlagType::Float,
            Self::String(_) => FlagType::String,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(v) => f.write_str(v),
        }
    }
}

/// Rust types that can back a long flag.
///
/// Ties a typed handle (`Flag<u64>`, `Flag<String>`, ...) to the [`FlagType`]
/// recorded in the registry.
pub trait FlagValue: Sized {
    const TYPE: FlagType;

    fn into_value(self) -> Value;

    fn from_value(value: &Value) -> Option<Self>;
}

impl FlagValue for bool {
    const TYPE: FlagType = FlagType::Bool;

    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl FlagValue for i64 {
    const TYPE: FlagType = FlagType::Int;

    fn into_value(self) -> Value {
        Value::Int(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl FlagValue for u64 {
    const TYPE: FlagType = FlagType::UInt;

    fn into_value(self) -> Value {
        Value::UInt(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::UInt(v) => Some(*v),
            _ => None,
        }
    }
}

impl FlagValue for f64 {
    const TYPE: FlagType = FlagType::Float;

    fn into_value(self) -> Value {
        Value::Float(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl FlagValue for String {
    const TYPE: FlagType = FlagType::String;

    fn into_value(self) -> Value {
        Value::String(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(v) => Some(v.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names_match_usage_text() {
        let names: Vec<&str> = [
            FlagType::Bool,
            FlagType::Int,
            FlagType::UInt,
            FlagType::Float,
            FlagType::String,
        ]
        .iter()
        .map(FlagType::as_str)
        .collect();
        assert_eq!(names, ["bool", "int", "uint", "float", "string"]);
    }

    #[test]
    fn values_serialize_untagged() {
        let json = serde_json::to_string(&vec![
            Value::Bool(false),
            Value::UInt(14),
            Value::Int(-5),
            Value::String("59".to_string()),
        ])
        .unwrap();
        assert_eq!(json, r#"[false,14,-5,"59"]"#);
    }

    #[test]
    fn from_value_rejects_other_types() {
        assert_eq!(u64::from_value(&Value::UInt(3)), Some(3));
        assert_eq!(u64::from_value(&Value::Int(3)), None);
        assert_eq!(String::from_value(&Value::Bool(true)), None);
    }
}
