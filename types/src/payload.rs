//! Payload records produced by data sources.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// A record produced by a data source.
///
/// Always a JSON object. The pipeline only ever reads the `valid` field;
/// every other field passes through untouched, in its original order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct Payload(Map<String, Value>);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("payload must be a JSON object, got {kind}")]
pub struct PayloadError {
    kind: &'static str,
}

impl PayloadError {
    #[must_use]
    pub const fn kind(self) -> &'static str {
        self.kind
    }
}

impl Payload {
    pub fn new(value: Value) -> Result<Self, PayloadError> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(PayloadError {
                kind: json_kind(&other),
            }),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
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

impl TryFrom<Value> for Payload {
    type Error = PayloadError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl From<Payload> for Value {
    fn from(payload: Payload) -> Self {
        payload.into_value()
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
