//! Conversions from input values into the types checks operate on.
//!
//! `AsValidatable` lets a check written for `str` or `i64` accept a
//! `serde_json::Value` directly; a value of the wrong JSON type becomes a
//! `type_mismatch` error instead of a panic.

use std::borrow::Borrow;

use serde_json::Value;

use crate::foundation::ValidationError;
use crate::json::json_type_name;

/// Trait for types that can be converted for validation.
///
/// The GAT lets an implementation hand out either a borrow (`&str`) or an
/// owned copy (`i64`), unified through `Borrow`.
pub trait AsValidatable<T: ?Sized> {
    /// The output type, which must be borrowable as `&T`.
    type Output<'a>: Borrow<T>
    where
        Self: 'a;

    /// Converts self to a validatable form.
    fn as_validatable(&self) -> Result<Self::Output<'_>, ValidationError>;
}

impl AsValidatable<str> for str {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self)
    }
}

impl AsValidatable<str> for String {
    type Output<'a> = &'a str;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self.as_str())
    }
}

impl AsValidatable<i64> for i64 {
    type Output<'a> = i64;

    #[inline]
    fn as_validatable(&self) -> Result<i64, ValidationError> {
        Ok(*self)
    }
}

impl AsValidatable<f64> for f64 {
    type Output<'a> = f64;

    #[inline]
    fn as_validatable(&self) -> Result<f64, ValidationError> {
        Ok(*self)
    }
}

fn type_mismatch(expected: &'static str, actual: &Value) -> ValidationError {
    let actual = json_type_name(actual);
    ValidationError::new("type_mismatch", format!("Expected {expected}, got {actual}"))
        .with_param("expected", expected)
        .with_param("actual", actual)
}

impl AsValidatable<str> for Value {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        match self {
            Value::String(s) => Ok(s.as_str()),
            other => Err(type_mismatch("string", other)),
        }
    }
}

impl AsValidatable<i64> for Value {
    type Output<'a> = i64;

    #[inline]
    fn as_validatable(&self) -> Result<i64, ValidationError> {
        match self {
            Value::Number(n) => n.as_i64().ok_or_else(|| type_mismatch("integer", self)),
            other => Err(type_mismatch("integer", other)),
        }
    }
}

impl AsValidatable<f64> for Value {
    type Output<'a> = f64;

    #[inline]
    fn as_validatable(&self) -> Result<f64, ValidationError> {
        match self {
            Value::Number(n) => n.as_f64().ok_or_else(|| type_mismatch("number", self)),
            other => Err(type_mismatch("number", other)),
        }
    }
}

impl AsValidatable<bool> for Value {
    type Output<'a> = bool;

    #[inline]
    fn as_validatable(&self) -> Result<bool, ValidationError> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(type_mismatch("boolean", other)),
        }
    }
}
