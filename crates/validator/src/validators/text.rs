//! The `string` element rule.

use serde::Deserialize;
use serde_json::Value;

use crate::error::RuleError;
use crate::foundation::{AsValidatable, Validate, ValidationError};
use crate::rule::{ElementRule, RuleOptions};
use crate::validators::options::{failure, parse_options};

/// Checks that an element is a string, optionally with a length range
/// counted in characters.
///
/// # Examples
///
/// ```rust
/// use sieve_validator::foundation::Validate;
/// use sieve_validator::validators::Text;
/// use serde_json::json;
///
/// let rule = Text::new().min(2).max(4);
/// assert!(rule.validate(&json!("héé")).is_ok());
/// assert_eq!(rule.validate(&json!("h")).unwrap_err().code, "min_length");
/// assert_eq!(rule.validate(&json!(12)).unwrap_err().code, "string");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Text {
    /// Minimum length in characters.
    #[serde(default)]
    pub min: Option<usize>,
    /// Maximum length in characters.
    #[serde(default)]
    pub max: Option<usize>,
    /// Replaces every message template of the rule.
    #[serde(default)]
    pub message: Option<String>,
}

impl Text {
    /// Creates a string rule with no length constraint.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the rule from declaration options.
    pub fn from_options(options: &RuleOptions) -> Result<Self, RuleError> {
        let rule: Self = parse_options("string", options)?;
        if let (Some(min), Some(max)) = (rule.min, rule.max) {
            if min > max {
                return Err(RuleError::invalid_options(
                    "string",
                    format!("min ({min}) is greater than max ({max})"),
                ));
            }
        }
        Ok(rule)
    }

    /// Sets the minimum length.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the maximum length.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }
}

impl Validate for Text {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        let message = self.message.as_deref();
        let text: &str = AsValidatable::<str>::as_validatable(input)
            .map_err(|_| failure("string", "{field} must be a string", message))?;

        let length = text.chars().count();
        if let Some(min) = self.min.filter(|min| length < *min) {
            return Err(failure(
                "min_length",
                "{field} should contain at least {min} characters",
                message,
            )
            .with_param("min", min.to_string()));
        }
        if let Some(max) = self.max.filter(|max| length > *max) {
            return Err(failure(
                "max_length",
                "{field} should contain at most {max} characters",
                message,
            )
            .with_param("max", max.to_string()));
        }
        Ok(())
    }
}

impl ElementRule for Text {
    fn kind(&self) -> &str {
        "string"
    }
}
