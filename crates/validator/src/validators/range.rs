//! The `in` element rule: membership in a fixed list of values.

use serde::Deserialize;
use serde_json::Value;

use crate::error::RuleError;
use crate::foundation::{Validate, ValidationError};
use crate::rule::{ElementRule, RuleOptions};
use crate::validators::options::{failure, parse_options};

/// Checks that an element equals one of `range` (or none of it, with `not`).
///
/// Comparison is JSON equality: `1` and `"1"` are different values.
///
/// # Examples
///
/// ```rust
/// use sieve_validator::foundation::Validate;
/// use sieve_validator::validators::In;
/// use serde_json::json;
///
/// let rule = In::new([json!("red"), json!("green")]);
/// assert!(rule.validate(&json!("red")).is_ok());
/// assert!(rule.validate(&json!("blue")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct In {
    /// Allowed (or, with `not`, forbidden) values.
    pub range: Vec<Value>,
    /// Invert the check.
    #[serde(default)]
    pub not: bool,
    /// Replaces the message template of the rule.
    #[serde(default)]
    pub message: Option<String>,
}

impl In {
    /// Creates a rule accepting only the given values.
    pub fn new(range: impl IntoIterator<Item = Value>) -> Self {
        Self {
            range: range.into_iter().collect(),
            not: false,
            message: None,
        }
    }

    /// Builds the rule from declaration options. `range` is required.
    pub fn from_options(options: &RuleOptions) -> Result<Self, RuleError> {
        parse_options("in", options)
    }

    /// Inverts the check: the listed values are rejected.
    #[must_use = "builder methods must be chained or built"]
    pub fn not(mut self) -> Self {
        self.not = true;
        self
    }
}

impl Validate for In {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        if self.range.contains(input) == self.not {
            Err(failure("in", "{field} is invalid", self.message.as_deref()))
        } else {
            Ok(())
        }
    }
}

impl ElementRule for In {
    fn kind(&self) -> &str {
        "in"
    }
}
