//! Per-field defaulting rules.
//!
//! Each helper reads one property from the top-level JSON object and never
//! fails: absent, `null` or wrong-shaped values fall back to the field's
//! default.  Wrong shapes are logged at `warn` so a bad launcher payload is
//! visible without aborting startup.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::domain::window_position::WindowPosition;

type Object = Map<String, Value>;

/// Reads an array of strings.
///
/// Absent and falsy values (`null`, `false`, `0`, `""`) give an empty list.
/// Non-string elements are skipped.
pub(crate) fn string_list(obj: &Object, key: &str) -> Vec<String> {
    match obj.get(key) {
        None => Vec::new(),
        Some(v) if is_falsy(v) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                other => {
                    warn!("ignoring non-string entry in CONFIG.{key}: {other}");
                    None
                }
            })
            .collect(),
        Some(other) => {
            warn!("CONFIG.{key} must be an array of strings, got {other}; using empty list");
            Vec::new()
        }
    }
}

/// Reads an optional string, passed through verbatim.
pub(crate) fn optional_string(obj: &Object, key: &str) -> Option<String> {
    match obj.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            warn!("CONFIG.{key} must be a string, got {other}; ignoring");
            None
        }
    }
}

/// Reads an optional `{x, y, width, height}` object.
pub(crate) fn window_position(obj: &Object, key: &str) -> Option<WindowPosition> {
    match obj.get(key) {
        None | Some(Value::Null) => None,
        Some(v @ Value::Object(_)) => match WindowPosition::deserialize(v) {
            Ok(pos) => Some(pos),
            Err(e) => {
                warn!("CONFIG.{key} is not a valid window position ({e}); ignoring");
                None
            }
        },
        Some(other) => {
            warn!("CONFIG.{key} must be an object, got {other}; ignoring");
            None
        }
    }
}

/// Reads a boolean, used only when the JSON value is strictly a boolean.
pub(crate) fn strict_bool(obj: &Object, key: &str, default: bool) -> bool {
    match obj.get(key) {
        Some(Value::Bool(b)) => *b,
        None => default,
        Some(other) => {
            debug!("CONFIG.{key} is not a boolean ({other}); using {default}");
            default
        }
    }
}

/// JavaScript truthiness, restricted to what JSON can express.
fn is_falsy(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
