//! Tagged representation of decoded message contents.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum DecodedValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    List(Vec<DecodedValue>),
    /// Named fields sorted by name. Unset optional fields are absent.
    Record(Vec<(String, DecodedValue)>),
}

impl DecodedValue {
    /// Field lookup on a record, `None` for every other variant.
    pub fn get(&self, field: &str) -> Option<&DecodedValue> {
        match self {
            DecodedValue::Record(fields) => fields
                .iter()
                .find(|(name, _)| name == field)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            DecodedValue::UInt(v) => Some(*v),
            DecodedValue::Int(v) => u64::try_from(*v).ok(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DecodedValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_empty_record(&self) -> bool {
        matches!(self, DecodedValue::Record(fields) if fields.is_empty())
    }
}

impl From<serde_json::Value> for DecodedValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => DecodedValue::Null,
            Value::Bool(b) => DecodedValue::Bool(b),
            Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    DecodedValue::UInt(u)
                } else if let Some(i) = n.as_i64() {
                    DecodedValue::Int(i)
                } else {
                    DecodedValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => DecodedValue::Text(s),
            Value::Array(items) => {
                DecodedValue::List(items.into_iter().map(DecodedValue::from).collect())
            }
            Value::Object(map) => DecodedValue::Record(
                map.into_iter()
                    .filter(|(_, v)| !v.is_null())
                    .map(|(k, v)| (k, DecodedValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for DecodedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DecodedValue::Null => serializer.serialize_unit(),
            DecodedValue::Bool(b) => serializer.serialize_bool(*b),
            DecodedValue::Int(i) => serializer.serialize_i64(*i),
            DecodedValue::UInt(u) => serializer.serialize_u64(*u),
            DecodedValue::Float(f) => serializer.serialize_f64(*f),
            DecodedValue::Text(s) => serializer.serialize_str(s),
            DecodedValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            DecodedValue::Record(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (name, value) in fields {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
        }
    }
}

impl Display for DecodedValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodedValue::Null => write!(f, "null"),
            DecodedValue::Bool(b) => write!(f, "{}", b),
            DecodedValue::Int(i) => write!(f, "{}", i),
            DecodedValue::UInt(u) => write!(f, "{}", u),
            DecodedValue::Float(v) => write!(f, "{}", v),
            DecodedValue::Text(s) => write!(f, "{:?}", s),
            DecodedValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            DecodedValue::Record(fields) => {
                write!(f, "{{")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", name, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}
