//! Field store an [`EachRule`](crate::EachRule) reads from and writes to.

use serde_json::{Map, Value};

use crate::foundation::ValidationError;

/// Access to a model's fields and its error list.
///
/// Implement this for your own record types; [`Record`] is a ready-made
/// JSON-backed model.
pub trait Model {
    /// Reads a field. `None` when the field is absent.
    fn field(&self, name: &str) -> Option<&Value>;

    /// Writes a field, creating it if absent.
    fn set_field(&mut self, name: &str, value: Value);

    /// Records a validation failure against the model.
    fn add_error(&mut self, error: ValidationError);
}

/// An ordered map of JSON fields with the failures recorded against it.
///
/// # Examples
///
/// ```rust
/// use sieve_validator::model::{Model, Record};
/// use serde_json::json;
///
/// let mut record = Record::new().with_field("tags", json!(["a", "b"]));
/// assert_eq!(record.field("tags"), Some(&json!(["a", "b"])));
/// assert!(record.field("missing").is_none());
///
/// record.set_field("tags", json!([]));
/// assert_eq!(record.field("tags"), Some(&json!([])));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Map<String, Value>,
    errors: Vec<ValidationError>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// The fields, in insertion order.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Every recorded failure, oldest first.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Failures recorded for one field.
    pub fn errors_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors
            .iter()
            .filter(move |error| error.field.as_deref() == Some(field))
    }

    /// Whether any failure was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Drops every recorded failure.
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Consumes the record, returning its fields.
    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self {
            fields,
            errors: Vec::new(),
        }
    }
}

impl Model for Record {
    fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    fn set_field(&mut self, name: &str, value: Value) {
        self.fields.insert(name.to_owned(), value);
    }

    fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_field_keeps_position() {
        let mut record = Record::new()
            .with_field("a", json!(1))
            .with_field("b", json!(2));
        record.set_field("a", json!(10));

        let keys: Vec<_> = record.fields().keys().cloned().collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(record.field("a"), Some(&json!(10)));
    }

    #[test]
    fn errors_are_grouped_by_field() {
        let mut record = Record::new();
        record.add_error(ValidationError::new("x", "first").with_field("tags"));
        record.add_error(ValidationError::new("y", "second").with_field("ids"));
        record.add_error(ValidationError::new("z", "third").with_field("tags"));

        let codes: Vec<_> = record.errors_for("tags").map(|e| e.code.as_ref()).collect();
        assert_eq!(codes, ["x", "z"]);
        assert!(record.has_errors());

        record.clear_errors();
        assert!(!record.has_errors());
    }

    #[test]
    fn from_map() {
        let map = json!({"ids": [1, 2]}).as_object().cloned().unwrap();
        let record = Record::from(map.clone());
        assert_eq!(record.into_fields(), map);
    }
}
