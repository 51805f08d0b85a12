//! Canonical JSON and YAML helpers for plan requests and reports.

use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use wall_core::{ErrorInfo, WallError};

fn serde_error(code: &str, err: impl ToString) -> WallError {
    WallError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered = map
                .into_iter()
                .map(|(key, value)| (key, canonicalize(value)))
                .collect::<BTreeMap<_, _>>();
            Value::Object(ordered.into_iter().collect::<Map<_, _>>())
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into JSON with keys in sorted order.
pub fn to_canonical_json<T: Serialize>(value: &T) -> Result<String, WallError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json_serialize", err))?;
    serde_json::to_string_pretty(&canonicalize(value))
        .map_err(|err| serde_error("json_write", err))
}

/// Deserializes a JSON document.
pub fn from_json_str<T: DeserializeOwned>(data: &str) -> Result<T, WallError> {
    serde_json::from_str(data).map_err(|err| serde_error("json_deserialize", err))
}

/// Serializes a value into YAML.
pub fn to_yaml_string<T: Serialize>(value: &T) -> Result<String, WallError> {
    serde_yaml::to_string(value).map_err(|err| serde_error("yaml_serialize", err))
}

/// Deserializes a YAML document.
pub fn from_yaml_str<T: DeserializeOwned>(data: &str) -> Result<T, WallError> {
    serde_yaml::from_str(data).map_err(|err| serde_error("yaml_deserialize", err))
}
