//! Normalisation of `POST /skills` bodies.
//!
//! The body is untyped JSON: a single skill object or an array of them.
//! Entries whose `name` is not a string with visible characters are dropped;
//! everything else is coerced rather than rejected.

use folio_core::NewSkill;
use serde_json::Value;

/// Turn a request body into the skills that should be inserted.
pub fn normalize_skills(body: Value) -> Vec<NewSkill> {
    let items = match body {
        Value::Array(items) => items,
        other => vec![other],
    };

    items.iter().filter_map(normalize_skill).collect()
}

fn normalize_skill(item: &Value) -> Option<NewSkill> {
    let name = item.get("name")?.as_str()?.trim();
    if name.is_empty() {
        return None;
    }
    Some(NewSkill {
        name: name.to_string(),
        category: item.get("category").and_then(truthy_string),
        level: item.get("level").and_then(truthy_string),
    })
}

/// String form of a truthy JSON value; falsy values (`null`, `false`, `0`,
/// `""`) become `None`.
fn truthy_string(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        other => Some(coerce(other)),
    }
}

/// Loose string coercion: integral numbers lose their fraction, arrays join
/// their elements with `,` (nulls as empty), objects become a fixed marker.
fn coerce(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                return n.to_string();
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
                Some(f) => f.to_string(),
                None => n.to_string(),
            }
        }
        Value::Array(items) => items.iter().map(coerce).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".into(),
    }
}
