//! Core validation trait.

use std::borrow::Borrow;

use crate::foundation::ValidationError;
use crate::foundation::validatable::AsValidatable;

/// The trait every check implements.
///
/// Generic over its input so typed checks (`str`, `i64`) and JSON checks
/// (`serde_json::Value`) share one shape. Element rules are `Validate`
/// implementations over `Value`.
///
/// # Examples
///
/// ```rust
/// use sieve_validator::foundation::{Validate, ValidationError};
///
/// struct NonBlank;
///
/// impl Validate for NonBlank {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.trim().is_empty() {
///             Err(ValidationError::new("required", "{field} cannot be blank"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NonBlank.validate("x").is_ok());
/// assert!(NonBlank.validate_any(&String::from("  ")).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// `?Sized` so unsized inputs like `str` work.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Validates any value convertible to `Self::Input`.
    ///
    /// Conversion failures (for example a JSON number given to a string
    /// check) come back as a `type_mismatch` error.
    fn validate_any<S>(&self, value: &S) -> Result<(), ValidationError>
    where
        Self: Sized,
        S: AsValidatable<Self::Input> + ?Sized,
        for<'a> <S as AsValidatable<Self::Input>>::Output<'a>: Borrow<Self::Input>,
    {
        let output = value.as_validatable()?;
        self.validate(output.borrow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct MinChars(usize);

    impl Validate for MinChars {
        type Input = str;

        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input.chars().count() >= self.0 {
                Ok(())
            } else {
                Err(ValidationError::new("min", "too short"))
            }
        }
    }

    #[test]
    fn validate_any_accepts_json_strings() {
        let validator = MinChars(3);
        assert!(validator.validate_any(&json!("abc")).is_ok());
        assert!(validator.validate_any(&json!("ab")).is_err());
    }

    #[test]
    fn validate_any_reports_type_mismatch() {
        let err = MinChars(1).validate_any(&json!(7)).unwrap_err();
        assert_eq!(err.code, "type_mismatch");
        assert_eq!(err.param("actual"), Some("number"));
    }
}
