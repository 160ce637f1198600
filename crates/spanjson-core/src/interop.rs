//! Bridges between [`Value`] and the serde ecosystem.
//!
//! `Value` implements [`Serialize`], so any serde format (including
//! `serde_json::to_string_pretty`) can render a parsed tree. Conversions to
//! and from `serde_json::Value` are provided for hosts already holding one.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::error::JsonError;
use crate::value::{sorted_entries, Dict, Value};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Dict(dict) => {
                let mut map = serializer.serialize_map(Some(dict.len()))?;
                for (key, item) in sorted_entries(dict) {
                    map.serialize_entry(key, item)?;
                }
                map.end()
            }
        }
    }
}

/// Non-finite floats become `null`; dict keys are inserted in sorted order.
impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(n) => serde_json::Value::Number(n.into()),
            Value::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s),
            Value::List(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Dict(dict) => {
                let mut entries: Vec<_> = dict.into_iter().collect();
                entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
                serde_json::Value::Object(
                    entries
                        .into_iter()
                        .map(|(key, item)| (key, item.into()))
                        .collect(),
                )
            }
        }
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = JsonError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        Ok(match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if n.is_u64() {
                    return Err(JsonError::Conversion(format!(
                        "integer {n} does not fit in i64"
                    )));
                } else {
                    let f = n.as_f64().ok_or_else(|| {
                        JsonError::Conversion(format!("number {n} is not representable"))
                    })?;
                    Value::Float(f)
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::List(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            serde_json::Value::Object(map) => {
                let mut dict = Dict::with_capacity(map.len());
                for (key, item) in map {
                    dict.insert(key, Value::try_from(item)?);
                }
                Value::Dict(dict)
            }
        })
    }
}
