//! Uniform value type for configuration leaves and records

use regex::Regex;
use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

/// Named fields of a record. Field order carries no meaning.
pub type Record = BTreeMap<String, ConfigValue>;

/// A node of the configuration tree
///
/// Patterns compare equal when their source text is equal.
#[derive(Debug, Clone)]
pub enum ConfigValue {
    /// Text
    String(String),
    /// Whole number
    Integer(i64),
    /// Decimal number
    Float(f64),
    /// Flag
    Bool(bool),
    /// Precompiled regular expression
    Pattern(Regex),
    /// Ordered list of strings or records
    List(Vec<ConfigValue>),
    /// Nested record
    Record(Record),
}

impl ConfigValue {
    /// Build a list of strings
    pub fn strings<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(items.into_iter().map(|s| Self::String(s.into())).collect())
    }

    /// Name of this value's kind, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
            Self::Pattern(_) => "pattern",
            Self::List(_) => "list",
            Self::Record(_) => "record",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Decimal view; integers widen to `f64`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            Self::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_pattern(&self) -> Option<&Regex> {
        match self {
            Self::Pattern(re) => Some(re),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ConfigValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(fields) => Some(fields),
            _ => None,
        }
    }

    /// Whether this value is a record (an interior node of the tree)
    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    /// Render as JSON. Patterns render as their source text.
    pub fn to_json(&self) -> Value {
        match self {
            Self::String(s) => Value::String(s.clone()),
            Self::Integer(n) => Value::Number((*n).into()),
            Self::Float(n) => Number::from_f64(*n).map_or(Value::Null, Value::Number),
            Self::Bool(b) => Value::Bool(*b),
            Self::Pattern(re) => Value::String(re.as_str().to_string()),
            Self::List(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Record(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}

impl PartialEq for ConfigValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Record(a), Self::Record(b)) => a == b,
            _ => false,
        }
    }
}

impl Serialize for ConfigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for ConfigValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Regex> for ConfigValue {
    fn from(re: Regex) -> Self {
        Self::Pattern(re)
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(items: Vec<ConfigValue>) -> Self {
        Self::List(items)
    }
}

impl From<Record> for ConfigValue {
    fn from(fields: Record) -> Self {
        Self::Record(fields)
    }
}
