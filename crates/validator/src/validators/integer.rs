//! Numeric element rules: `integer` and `number`.

use serde::Deserialize;
use serde_json::Value;

use crate::error::RuleError;
use crate::foundation::{AsValidatable, Validate, ValidationError};
use crate::rule::{ElementRule, RuleOptions};
use crate::validators::options::{failure, parse_options};

// ============================================================================
// INTEGER
// ============================================================================

/// Checks that an element is an integer, optionally within bounds.
///
/// Unless `strict`, a string holding an integer (`"42"`) is accepted too.
///
/// # Examples
///
/// ```rust
/// use sieve_validator::foundation::Validate;
/// use sieve_validator::validators::Integer;
/// use serde_json::json;
///
/// let rule = Integer::new().min(1);
/// assert!(rule.validate(&json!(3)).is_ok());
/// assert!(rule.validate(&json!("3")).is_ok());
/// assert_eq!(rule.validate(&json!(0)).unwrap_err().code, "min");
/// assert_eq!(rule.validate(&json!("x")).unwrap_err().code, "integer");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Integer {
    /// Inclusive lower bound.
    #[serde(default)]
    pub min: Option<i64>,
    /// Inclusive upper bound.
    #[serde(default)]
    pub max: Option<i64>,
    /// Reject numeric strings.
    #[serde(default)]
    pub strict: bool,
    /// Replaces every message template of the rule.
    #[serde(default)]
    pub message: Option<String>,
}

impl Integer {
    /// Creates an unbounded, non-strict integer rule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the rule from declaration options.
    pub fn from_options(options: &RuleOptions) -> Result<Self, RuleError> {
        let rule: Self = parse_options("integer", options)?;
        check_order("integer", rule.min, rule.max)?;
        Ok(rule)
    }

    /// Sets the inclusive lower bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the inclusive upper bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    /// Rejects numeric strings.
    #[must_use = "builder methods must be chained or built"]
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Integers beyond `i64` (up to `u64::MAX`) are still integers; they are
    /// widened so the bounds can reject them.
    fn parse(&self, input: &Value) -> Option<i128> {
        match input {
            Value::Number(n) => n
                .as_i64()
                .map(i128::from)
                .or_else(|| n.as_u64().map(i128::from)),
            Value::String(s) if !self.strict => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl Validate for Integer {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        let message = self.message.as_deref();
        let Some(n) = self.parse(input) else {
            return Err(failure("integer", "{field} must be an integer", message));
        };
        check_bounds(n, self.min.map(i128::from), self.max.map(i128::from), message)
    }
}

impl ElementRule for Integer {
    fn kind(&self) -> &str {
        "integer"
    }
}

// ============================================================================
// NUMBER
// ============================================================================

/// Checks that an element is a JSON number, optionally within bounds.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Number {
    /// Inclusive lower bound.
    #[serde(default)]
    pub min: Option<f64>,
    /// Inclusive upper bound.
    #[serde(default)]
    pub max: Option<f64>,
    /// Replaces every message template of the rule.
    #[serde(default)]
    pub message: Option<String>,
}

impl Number {
    /// Creates an unbounded number rule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the rule from declaration options.
    pub fn from_options(options: &RuleOptions) -> Result<Self, RuleError> {
        let rule: Self = parse_options("number", options)?;
        check_order("number", rule.min, rule.max)?;
        Ok(rule)
    }

    /// Sets the inclusive lower bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the inclusive upper bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

impl Validate for Number {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        let message = self.message.as_deref();
        let n: f64 = AsValidatable::<f64>::as_validatable(input)
            .map_err(|_| failure("number", "{field} must be a number", message))?;
        check_bounds(n, self.min, self.max, message)
    }
}

impl ElementRule for Number {
    fn kind(&self) -> &str {
        "number"
    }
}

fn check_order<T>(kind: &str, min: Option<T>, max: Option<T>) -> Result<(), RuleError>
where
    T: PartialOrd + std::fmt::Display,
{
    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(RuleError::invalid_options(
            kind,
            format!("min ({min}) is greater than max ({max})"),
        )),
        _ => Ok(()),
    }
}

fn check_bounds<T>(
    n: T,
    min: Option<T>,
    max: Option<T>,
    message: Option<&str>,
) -> Result<(), ValidationError>
where
    T: PartialOrd + ToString + Copy,
{
    if let Some(min) = min.filter(|min| n < *min) {
        return Err(
            failure("min", "{field} must be no less than {min}", message)
                .with_param("min", min.to_string()),
        );
    }
    if let Some(max) = max.filter(|max| n > *max) {
        return Err(
            failure("max", "{field} must be no greater than {max}", message)
                .with_param("max", max.to_string()),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options(value: Value) -> RuleOptions {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn integer_accepts_integers() {
        let rule = Integer::new();
        assert!(rule.validate(&json!(0)).is_ok());
        assert!(rule.validate(&json!(-12)).is_ok());
    }

    #[test]
    fn integer_rejects_non_integers() {
        let rule = Integer::new();
        for value in [json!("x"), json!(1.5), json!(null), json!([1]), json!(true)] {
            let err = rule.validate(&value).unwrap_err();
            assert_eq!(err.code, "integer", "{value}");
            assert_eq!(err.message, "{field} must be an integer");
        }
    }

    #[test]
    fn integer_strict_rejects_strings() {
        assert!(Integer::new().validate(&json!(" 7 ")).is_ok());
        assert!(Integer::new().strict().validate(&json!("7")).is_err());
    }

    #[test]
    fn integer_bounds() {
        let rule = Integer::new().min(1).max(10);
        let err = rule.validate(&json!(0)).unwrap_err();
        assert_eq!(err.code, "min");
        assert_eq!(err.param("min"), Some("1"));

        let err = rule.validate(&json!(11)).unwrap_err();
        assert_eq!(err.code, "max");
        assert_eq!(err.param("max"), Some("10"));

        assert!(rule.validate(&json!(10)).is_ok());
    }

    #[test]
    fn integer_from_options() {
        let rule = Integer::from_options(&options(json!({"min": 2, "strict": true}))).unwrap();
        assert_eq!(rule, Integer::new().min(2).strict());
    }

    #[test]
    fn integer_message_override() {
        let rule = Integer::from_options(&options(json!({"message": "{field}: whole numbers only"})))
            .unwrap();
        let err = rule.validate(&json!("x")).unwrap_err();
        assert_eq!(err.message, "{field}: whole numbers only");
    }

    #[test]
    fn number_accepts_floats_and_integers() {
        let rule = Number::new().min(0.5);
        assert!(rule.validate(&json!(0.5)).is_ok());
        assert!(rule.validate(&json!(3)).is_ok());
        assert_eq!(rule.validate(&json!(0.1)).unwrap_err().code, "min");
        assert_eq!(rule.validate(&json!("1.0")).unwrap_err().code, "number");
    }

    #[test]
    fn integer_beyond_i64_is_still_an_integer() {
        let big: Value = serde_json::from_str("18446744073709551615").unwrap();
        assert!(Integer::new().validate(&big).is_ok());

        let err = Integer::new().max(100).validate(&big).unwrap_err();
        assert_eq!(err.code, "max");
        assert_eq!(err.param("max"), Some("100"));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = Integer::from_options(&options(json!({"min": 5, "max": 1}))).unwrap_err();
        assert_eq!(
            err,
            RuleError::invalid_options("integer", "min (5) is greater than max (1)")
        );
        let err = Number::from_options(&options(json!({"min": 2.5, "max": 1.0}))).unwrap_err();
        assert!(matches!(err, RuleError::InvalidOptions { ref kind, .. } if kind == "number"));
        assert!(Integer::from_options(&options(json!({"min": 3, "max": 3}))).is_ok());
    }

    #[test]
    fn number_rejects_unknown_option() {
        assert!(Number::from_options(&options(json!({"precision": 2}))).is_err());
    }
}
