//! Strict handling of JSON-object responses.
//!
//! Models are told to answer with a bare JSON object but sometimes wrap it in
//! a Markdown code fence. The fence is stripped; nothing else is repaired.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::error::OracleError;

/// Parse `text` as a single JSON object, tolerating a surrounding code fence.
pub fn parse_json_object(text: &str) -> Result<Map<String, Value>, OracleError> {
    let body = strip_code_fence(text);
    let value: Value = serde_json::from_str(&body).map_err(|source| OracleError::InvalidJson {
        source,
        response: text.to_string(),
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(OracleError::NotAnObject),
    }
}

/// Remove a leading ```` ``` ```` / ```` ```json ```` fence line and a trailing
/// fence line, if present.
pub fn strip_code_fence(text: &str) -> String {
    let text = text.trim();
    if !text.starts_with("```") {
        return text.to_string();
    }

    let mut lines: Vec<&str> = text.lines().skip(1).collect();
    if lines.last().is_some_and(|l| l.trim().starts_with("```")) {
        lines.pop();
    }
    if lines.first().is_some_and(|l| l.trim().eq_ignore_ascii_case("json")) {
        lines.remove(0);
    }

    lines.join("\n").trim().to_string()
}

/// Require the object's key set to equal `required` exactly.
pub fn require_exact_keys(object: &Map<String, Value>, required: &[&str]) -> Result<(), OracleError> {
    let required: BTreeSet<&str> = required.iter().copied().collect();
    let actual: BTreeSet<&str> = object.keys().map(String::as_str).collect();

    if actual == required {
        return Ok(());
    }

    Err(OracleError::KeyMismatch {
        missing: required.difference(&actual).map(|k| k.to_string()).collect(),
        unexpected: actual.difference(&required).map(|k| k.to_string()).collect(),
    })
}
