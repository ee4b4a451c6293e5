//! The `match` element rule: regular expression check on strings.

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::error::RuleError;
use crate::foundation::{Validate, ValidationError};
use crate::rule::{ElementRule, RuleOptions};
use crate::validators::options::{failure, parse_options};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MatchOptions {
    pattern: String,
    #[serde(default)]
    not: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Checks that an element is a string matching `pattern` (or, with `not`,
/// not matching it). Non-string elements always fail.
#[derive(Debug, Clone)]
pub struct Match {
    regex: Regex,
    not: bool,
    message: Option<String>,
}

impl Match {
    /// Compiles `pattern` into a rule.
    pub fn new(pattern: &str) -> Result<Self, RuleError> {
        let regex = Regex::new(pattern).map_err(|e| RuleError::invalid_options("match", e))?;
        Ok(Self {
            regex,
            not: false,
            message: None,
        })
    }

    /// Builds the rule from declaration options. `pattern` is required.
    pub fn from_options(options: &RuleOptions) -> Result<Self, RuleError> {
        let options: MatchOptions = parse_options("match", options)?;
        let mut rule = Self::new(&options.pattern)?;
        rule.not = options.not;
        rule.message = options.message;
        Ok(rule)
    }

    /// Inverts the check.
    #[must_use = "builder methods must be chained or built"]
    pub fn not(mut self) -> Self {
        self.not = true;
        self
    }

    /// The compiled pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl Validate for Match {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        let matched = input.as_str().map(|s| self.regex.is_match(s));
        match matched {
            Some(is_match) if is_match != self.not => Ok(()),
            _ => Err(failure("match", "{field} is invalid", self.message.as_deref())
                .with_param("pattern", self.regex.as_str().to_owned())),
        }
    }
}

impl ElementRule for Match {
    fn kind(&self) -> &str {
        "match"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn matches_strings() {
        let rule = Match::new(r"^[a-z]+$").unwrap();
        assert!(rule.validate(&json!("abc")).is_ok());
        let err = rule.validate(&json!("ABC")).unwrap_err();
        assert_eq!(err.code, "match");
        assert_eq!(err.param("pattern"), Some("^[a-z]+$"));
    }

    #[test]
    fn non_strings_fail_even_when_inverted() {
        assert!(Match::new("x").unwrap().validate(&json!(1)).is_err());
        assert!(Match::new("x").unwrap().not().validate(&json!(1)).is_err());
    }

    #[test]
    fn not_inverts() {
        let rule = Match::new("admin").unwrap().not();
        assert!(rule.validate(&json!("alice")).is_ok());
        assert!(rule.validate(&json!("superadmin")).is_err());
    }

    #[test]
    fn bad_pattern_is_invalid_options() {
        let options = json!({"pattern": "("}).as_object().cloned().unwrap();
        let err = Match::from_options(&options).unwrap_err();
        assert!(matches!(err, RuleError::InvalidOptions { ref kind, .. } if kind == "match"));
    }
}
