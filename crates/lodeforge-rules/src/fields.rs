use lodeforge_core::CompileError;
use serde_json::{Map, Value};

/// Typed, read-only view over the members of a rule body.
///
/// Absent keys are `Ok(None)`; present keys of the wrong JSON type are
/// `InvalidField`. Explicit `null` counts as present.
#[derive(Debug, Clone, Copy)]
pub struct RuleFields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> RuleFields<'a> {
    pub fn new(rule: &str, body: &'a Value) -> Result<Self, CompileError> {
        match body {
            Value::Object(map) => Ok(Self { map }),
            _ => Err(CompileError::MalformedRule(format!(
                "rule '{rule}' must be a JSON object"
            ))),
        }
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    pub fn int(&self, key: &'static str) -> Result<Option<i32>, CompileError> {
        match self.map.get(key) {
            None => Ok(None),
            Some(value) => as_i32(value).map(Some).ok_or(CompileError::InvalidField {
                field: key,
                expected: "a 32-bit integer",
            }),
        }
    }

    pub fn require_int(&self, key: &'static str) -> Result<i32, CompileError> {
        self.int(key)?.ok_or(CompileError::MissingField(key))
    }

    pub fn bool(&self, key: &'static str) -> Result<Option<bool>, CompileError> {
        match self.map.get(key) {
            None => Ok(None),
            Some(value) => value.as_bool().map(Some).ok_or(CompileError::InvalidField {
                field: key,
                expected: "a boolean",
            }),
        }
    }

    pub fn array(&self, key: &'static str) -> Result<Option<&'a [Value]>, CompileError> {
        match self.map.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_array()
                .map(|items| Some(items.as_slice()))
                .ok_or(CompileError::InvalidField {
                    field: key,
                    expected: "an array",
                }),
        }
    }
}

/// Integer value that fits in `i32`; floats and strings are rejected.
pub fn as_i32(value: &Value) -> Option<i32> {
    value.as_i64().and_then(|value| i32::try_from(value).ok())
}
