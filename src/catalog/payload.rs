//! Raw payloads as returned by the remote catalog.
//!
//! The catalog answers both endpoints with `{"drinks": [record, ...] | null}` where
//! each record is a flat object of mostly-optional string fields. [`RawPayload`]
//! keeps that body untyped so the normalizer can decide what to do with partial
//! or unexpected shapes instead of failing at deserialization time.

use crate::domain::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level key holding the result records.
pub const DRINKS_KEY: &str = "drinks";

/// A single remote record, keyed by the catalog's field names.
pub type RawRecord = Map<String, Value>;

/// Parsed but otherwise untouched JSON body of a catalog response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawPayload(pub Value);

impl RawPayload {
    /// Parses a response body.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Decode`] if the body is not valid JSON.
    pub fn from_body(body: &str) -> Result<Self> {
        Ok(Self(serde_json::from_str(body)?))
    }

    /// Returns the result records, or `None` when the catalog reported no data.
    ///
    /// Both a `null` and a missing `drinks` key count as "no data".
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MalformedPayload`] if the body is not an object or
    /// `drinks` is neither `null` nor an array.
    pub fn drinks(&self) -> Result<Option<&[Value]>> {
        let Some(body) = self.0.as_object() else {
            return Err(CatalogError::MalformedPayload(format!(
                "expected a JSON object, got {}",
                type_name(&self.0)
            )));
        };

        match body.get(DRINKS_KEY) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Array(records)) => Ok(Some(records.as_slice())),
            Some(other) => Err(CatalogError::MalformedPayload(format!(
                "`{DRINKS_KEY}` should be an array or null, got {}",
                type_name(other)
            ))),
        }
    }
}

impl From<Value> for RawPayload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

pub(crate) const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_and_missing_drinks_mean_no_data() {
        assert!(RawPayload(json!({ "drinks": null })).drinks().unwrap().is_none());
        assert!(RawPayload(json!({})).drinks().unwrap().is_none());
    }

    #[test]
    fn non_object_body_is_malformed() {
        let err = RawPayload(json!([1, 2])).drinks().unwrap_err();
        assert!(matches!(err, CatalogError::MalformedPayload(_)));
    }

    #[test]
    fn string_drinks_is_malformed() {
        let err = RawPayload(json!({ "drinks": "no data found" })).drinks().unwrap_err();
        assert!(err.to_string().contains("a string"));
    }

    #[test]
    fn non_json_body_is_a_decode_error() {
        let err = RawPayload::from_body("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }
}
