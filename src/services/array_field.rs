//! Parsing of loosely-typed list columns.
//!
//! Court images, videos and amenity ids have been written by several admin
//! tools over time, so a single column can hold a JSON array string, a
//! Postgres array literal, a comma separated string, a bare value, or a native
//! array. Everything here is pure and operates on the decoded
//! [`serde_json::Value`] of a [`crate::database::types::FlexibleArray`].

use serde_json::Value;

/// Parses a list column into trimmed, non-empty strings.
///
/// Rules are applied in order, and the first that matches wins:
///
/// 1. absent or null → empty
/// 2. native list → each truthy element stringified and trimmed, empties dropped
/// 3. string, trimmed:
///    - empty → empty
///    - `[...]` that parses as a JSON array → as for a native list;
///      a parse failure falls through to the next rule
///    - `{...}` → braces stripped, split on `,`
///    - contains `,` → split on `,`
///    - otherwise → the single trimmed string
///
/// Any other JSON shape yields an empty list.
pub fn parse_array_field(raw: Option<&Value>) -> Vec<String> {
    match raw {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => list_items(items),
        Some(Value::String(text)) => parse_text(text),
        Some(_) => Vec::new(),
    }
}

fn parse_text(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    if text.starts_with('[') && text.ends_with(']') {
        if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(text) {
            return list_items(&items);
        }
    }

    if text.starts_with('{') && text.ends_with('}') {
        return split_on_commas(&text[1..text.len() - 1]);
    }

    if text.contains(',') {
        return split_on_commas(text);
    }

    vec![text.to_string()]
}

/// Normalizes an amenity column into raw id tokens.
///
/// Stricter than [`parse_array_field`]: only a native list, a `{...}` array
/// literal or a `[...]` JSON array produce tokens. A bracketed string that is
/// not valid JSON, and any other bare string, produce nothing. Tokens are
/// trimmed and empties dropped; quote characters are left in place so a
/// degraded lookup can echo the stored identifier.
pub fn amenity_tokens(raw: Option<&Value>) -> Vec<String> {
    let items: Vec<Value> = match raw {
        Some(Value::Array(items)) => items.clone(),
        Some(Value::String(text)) if text.starts_with('{') && text.ends_with('}') => text
            [1..text.len() - 1]
            .split(',')
            .map(|piece| Value::String(piece.to_string()))
            .collect(),
        Some(Value::String(text)) if text.starts_with('[') && text.ends_with(']') => {
            match serde_json::from_str::<Value>(text) {
                Ok(Value::Array(items)) => items,
                _ => Vec::new(),
            }
        }
        _ => Vec::new(),
    };

    items
        .iter()
        .filter_map(display_value)
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Removes stray `"` and `'` characters left over from array literals.
pub fn strip_quotes(token: &str) -> String {
    token.replace(['"', '\''], "")
}

fn list_items(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter(|item| is_truthy(item))
        .filter_map(display_value)
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

fn split_on_commas(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(true) => Some("True".to_string()),
        Value::Bool(false) => Some("False".to_string()),
        other => Some(other.to_string()),
    }
}
