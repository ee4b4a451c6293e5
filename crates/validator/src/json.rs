//! Helpers for treating `serde_json::Value` as a field value.
//!
//! A *collection* is an array (keyed by index) or an object (keyed by name,
//! in insertion order thanks to `serde_json`'s `preserve_order` feature).
//! Every other value is a scalar.
//!
//! # Examples
//!
//! ```rust
//! use sieve_validator::json::{elements, is_collection};
//! use serde_json::json;
//!
//! assert!(is_collection(&json!([1, 2])));
//! assert!(is_collection(&json!({"a": 1})));
//! assert!(!is_collection(&json!("a")));
//!
//! let object = json!({"b": 2, "a": 1});
//! let values: Vec<_> = elements(&object).unwrap().collect();
//! assert_eq!(values, [&json!(2), &json!(1)]);
//! ```

use serde_json::{Map, Value};

/// Returns a human-readable type name for a JSON value.
#[must_use]
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Whether the value is an array or an object.
#[must_use]
pub fn is_collection(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

/// Whether the value counts as empty: null, `""`, `[]` or `{}`.
#[must_use]
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Iterator over the elements of a collection, in iteration order.
#[derive(Debug)]
pub enum Elements<'a> {
    /// Elements of an array.
    Array(std::slice::Iter<'a, Value>),
    /// Values of an object.
    Object(serde_json::map::Values<'a>),
}

impl<'a> Iterator for Elements<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Array(iter) => iter.next(),
            Self::Object(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Array(iter) => iter.size_hint(),
            Self::Object(iter) => iter.size_hint(),
        }
    }
}

/// Returns the elements of a collection, or `None` for a scalar.
#[must_use]
pub fn elements(value: &Value) -> Option<Elements<'_>> {
    match value {
        Value::Array(items) => Some(Elements::Array(items.iter())),
        Value::Object(map) => Some(Elements::Object(map.values())),
        _ => None,
    }
}

/// Builds a new collection with the same keys, in the same order, with every
/// element passed through `f`.
///
/// Returns `Ok(None)` for a scalar. The first error from `f` aborts the map
/// and is returned as is.
pub fn map_elements<E, F>(value: &Value, mut f: F) -> Result<Option<Value>, E>
where
    F: FnMut(&Value) -> Result<Value, E>,
{
    match value {
        Value::Array(items) => {
            let mapped = items.iter().map(&mut f).collect::<Result<Vec<_>, E>>()?;
            Ok(Some(Value::Array(mapped)))
        }
        Value::Object(map) => {
            let mut mapped = Map::with_capacity(map.len());
            for (key, element) in map {
                mapped.insert(key.clone(), f(element)?);
            }
            Ok(Some(Value::Object(mapped)))
        }
        _ => Ok(None),
    }
}
