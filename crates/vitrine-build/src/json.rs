#![forbid(unsafe_code)]

//! JSON import/export and template hydration.
//!
//! This is the subsystem's only wire format: a widget-shaped JSON
//! document, produced by a tool backend or a hydrated template and
//! consumed by [`from_json`]/[`from_value`]. Errors are structured and
//! local — a bad payload is a value the caller can degrade on, never a
//! panic.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;
use tracing::warn;
use vitrine_schema::{ValidationError, WidgetNode, validate_widget};

/// Failure to turn external JSON into a widget tree.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetJsonError {
    /// The input was not JSON at all.
    Parse(String),
    /// The input parsed but is not a well-formed widget document.
    Invalid(ValidationError),
}

impl core::fmt::Display for WidgetJsonError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "invalid JSON: {msg}"),
            Self::Invalid(err) => write!(f, "invalid widget: {err}"),
        }
    }
}

impl std::error::Error for WidgetJsonError {}

impl From<ValidationError> for WidgetJsonError {
    fn from(err: ValidationError) -> Self {
        Self::Invalid(err)
    }
}

/// Parse and validate a widget document from a JSON string.
pub fn from_json(json: &str) -> Result<WidgetNode, WidgetJsonError> {
    let value: Value =
        serde_json::from_str(json).map_err(|err| WidgetJsonError::Parse(err.to_string()))?;
    from_value(&value)
}

/// Validate a widget document from an already-parsed value.
pub fn from_value(value: &Value) -> Result<WidgetNode, WidgetJsonError> {
    Ok(validate_widget(value)?)
}

/// Serialize a tree to pretty-printed JSON.
#[must_use]
pub fn to_json(widget: &WidgetNode) -> String {
    serde_json::to_string_pretty(widget).expect("widget tree serialization is infallible")
}

/// Serialize a tree to compact JSON.
#[must_use]
pub fn to_json_compact(widget: &WidgetNode) -> String {
    serde_json::to_string(widget).expect("widget tree serialization is infallible")
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("pattern is well-formed"))
}

/// Substitute `{{key}}` placeholders throughout a widget template, then
/// validate the result.
///
/// Placeholders are replaced anywhere a string value occurs — text
/// values, labels, aria values. String data substitutes verbatim; other
/// values substitute as their JSON rendering. A placeholder with no
/// matching key is logged and left intact, not blanked.
pub fn hydrate_template(
    template: &Value,
    data: &HashMap<String, Value>,
) -> Result<WidgetNode, WidgetJsonError> {
    let hydrated = hydrate_value(template, data);
    from_value(&hydrated)
}

fn hydrate_value(value: &Value, data: &HashMap<String, Value>) -> Value {
    match value {
        Value::String(s) => Value::String(hydrate_string(s, data)),
        Value::Array(items) => {
            Value::Array(items.iter().map(|item| hydrate_value(item, data)).collect())
        }
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), hydrate_value(item, data)))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn hydrate_string(input: &str, data: &HashMap<String, Value>) -> String {
    placeholder_pattern()
        .replace_all(input, |caps: &regex::Captures<'_>| {
            let key = &caps[1];
            match data.get(key) {
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
                None => {
                    warn!(key, "missing template value; leaving placeholder intact");
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}
