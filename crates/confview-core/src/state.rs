//! Configuration snapshots and their JSON decoding

use crate::{ConfViewError, ConfigValue, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Point-in-time snapshot of the configuration slice.
///
/// Owned by the external store; the view only ever borrows it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationState {
    pub data: HashMap<String, ConfigValue>,
}

impl ConfigurationState {
    pub fn new(data: HashMap<String, ConfigValue>) -> Self {
        Self { data }
    }

    /// Decode a snapshot from a JSON object of the form `{"data": {...}}`.
    ///
    /// Members other than `data` are ignored. A missing or non-object `data`
    /// is a contract violation; no partial state is ever returned.
    pub fn from_json_value(value: &Value) -> Result<Self> {
        let root = value.as_object().ok_or_else(|| {
            ConfViewError::ContractViolation(format!(
                "configuration snapshot must be an object, got {}",
                json_kind(value)
            ))
        })?;

        let data = root.get("data").ok_or_else(|| {
            ConfViewError::ContractViolation("configuration snapshot has no `data` mapping".to_string())
        })?;

        let entries = data.as_object().ok_or_else(|| {
            ConfViewError::ContractViolation(format!(
                "configuration `data` must be an object, got {}",
                json_kind(data)
            ))
        })?;

        let data = entries
            .iter()
            .map(|(key, value)| scalar_from_json(key, value).map(|v| (key.clone(), v)))
            .collect::<Result<HashMap<_, _>>>()?;

        Ok(Self { data })
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_json_value(&value)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl FromIterator<(String, ConfigValue)> for ConfigurationState {
    fn from_iter<I: IntoIterator<Item = (String, ConfigValue)>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

/// Select the configuration slice of a larger state document.
///
/// `pointer` is an RFC 6901 JSON Pointer such as `/configuration`; the empty
/// pointer selects the whole document.
pub fn select_slice<'a>(document: &'a Value, pointer: &str) -> Result<&'a Value> {
    document
        .pointer(pointer)
        .ok_or_else(|| ConfViewError::SliceNotFound(pointer.to_string()))
}

fn scalar_from_json(key: &str, value: &Value) -> Result<ConfigValue> {
    match value {
        Value::Bool(b) => Ok(ConfigValue::Boolean(*b)),
        Value::String(s) => Ok(ConfigValue::String(s.clone())),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Ok(ConfigValue::Integer(i)),
            // u64 beyond i64::MAX, or a fractional number
            None => n.as_f64().map(ConfigValue::Float).ok_or_else(|| unsupported(key, value)),
        },
        Value::Null | Value::Array(_) | Value::Object(_) => Err(unsupported(key, value)),
    }
}

fn unsupported(key: &str, value: &Value) -> ConfViewError {
    ConfViewError::UnsupportedValue {
        key: key.to_string(),
        kind: json_kind(value),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
