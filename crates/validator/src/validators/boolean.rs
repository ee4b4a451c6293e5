//! The `boolean` element rule.

use serde::Deserialize;
use serde_json::Value;

use crate::error::RuleError;
use crate::foundation::{Validate, ValidationError};
use crate::rule::{ElementRule, RuleOptions};
use crate::validators::options::{failure, parse_options};

/// Checks that an element is a boolean.
///
/// Unless `strict`, `0`, `1`, `"0"` and `"1"` are accepted as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Boolean {
    /// Only accept JSON `true` / `false`.
    #[serde(default)]
    pub strict: bool,
    /// Replaces the message template of the rule.
    #[serde(default)]
    pub message: Option<String>,
}

impl Boolean {
    /// Creates a non-strict boolean rule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the rule from declaration options.
    pub fn from_options(options: &RuleOptions) -> Result<Self, RuleError> {
        parse_options("boolean", options)
    }

    /// Only accept JSON `true` / `false`.
    #[must_use = "builder methods must be chained or built"]
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    fn accepts(&self, input: &Value) -> bool {
        match input {
            Value::Bool(_) => true,
            _ if self.strict => false,
            Value::Number(n) => matches!(n.as_u64(), Some(0 | 1)),
            Value::String(s) => s == "0" || s == "1",
            _ => false,
        }
    }
}

impl Validate for Boolean {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        if self.accepts(input) {
            Ok(())
        } else {
            Err(failure(
                "boolean",
                "{field} must be either true or false",
                self.message.as_deref(),
            ))
        }
    }
}

impl ElementRule for Boolean {
    fn kind(&self) -> &str {
        "boolean"
    }
}
