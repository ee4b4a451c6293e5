//! The `required` element rule.

use serde::Deserialize;
use serde_json::Value;

use crate::error::RuleError;
use crate::foundation::{Validate, ValidationError};
use crate::json::is_empty_value;
use crate::rule::{ElementRule, RuleOptions};
use crate::validators::options::{failure, parse_options};

/// Rejects empty elements: null, `""`, `[]` and `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Required {
    /// Replaces the message template of the rule.
    #[serde(default)]
    pub message: Option<String>,
}

impl Required {
    /// Creates the rule with its default message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the rule from declaration options.
    pub fn from_options(options: &RuleOptions) -> Result<Self, RuleError> {
        parse_options("required", options)
    }
}

impl Validate for Required {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        if is_empty_value(input) {
            Err(failure(
                "required",
                "{field} cannot be blank",
                self.message.as_deref(),
            ))
        } else {
            Ok(())
        }
    }
}

impl ElementRule for Required {
    fn kind(&self) -> &str {
        "required"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_empty_values() {
        let rule = Required::new();
        for value in [json!(null), json!(""), json!([]), json!({})] {
            assert_eq!(rule.validate(&value).unwrap_err().code, "required", "{value}");
        }
    }

    #[test]
    fn accepts_falsy_scalars() {
        let rule = Required::new();
        assert!(rule.validate(&json!(0)).is_ok());
        assert!(rule.validate(&json!(false)).is_ok());
        assert!(rule.validate(&json!(" ")).is_ok());
    }
}
