//! Filtering element rules.
//!
//! A filter never fails a check: it rewrites each element of the field it is
//! applied to. Built-ins (`trim`, `lowercase`, `uppercase`) transform strings
//! and leave every other value as is.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::error::RuleError;
use crate::foundation::{Validate, ValidationError};
use crate::rule::{ElementRule, RuleMode, RuleOptions};
use crate::validators::options::parse_options;

type FilterFn = dyn Fn(&Value) -> Result<Value, RuleError> + Send + Sync;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FilterOptions {
    #[serde(default)]
    skip_on_array: bool,
}

/// An element rule backed by a transformation closure.
///
/// # Examples
///
/// ```rust
/// use sieve_validator::rule::{ElementRule, RuleMode};
/// use sieve_validator::validators::FilterRule;
/// use serde_json::json;
///
/// let double = FilterRule::new("double", |v| json!(v.as_i64().unwrap_or(0) * 2)).skip_on_array(true);
/// assert_eq!(double.mode(), RuleMode::Filter { skip_nested: true });
/// assert_eq!(double.filter(&json!(4)).unwrap(), json!(8));
/// ```
#[derive(Clone)]
pub struct FilterRule {
    kind: String,
    filter: Arc<FilterFn>,
    skip_on_array: bool,
}

impl FilterRule {
    /// Creates an infallible filter.
    pub fn new<F>(kind: impl Into<String>, filter: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self::try_new(kind, move |value| Ok(filter(value)))
    }

    /// Creates a filter that may fail. Its errors abort the field rewrite and
    /// reach the caller unchanged.
    pub fn try_new<F>(kind: impl Into<String>, filter: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, RuleError> + Send + Sync + 'static,
    {
        Self {
            kind: kind.into(),
            filter: Arc::new(filter),
            skip_on_array: false,
        }
    }

    /// Leave elements that are themselves collections untouched.
    #[must_use = "builder methods must be chained or built"]
    pub fn skip_on_array(mut self, skip: bool) -> Self {
        self.skip_on_array = skip;
        self
    }

    /// Applies declaration options (`skip_on_array`).
    pub fn configure(self, options: &RuleOptions) -> Result<Self, RuleError> {
        let options: FilterOptions = parse_options(&self.kind, options)?;
        Ok(self.skip_on_array(options.skip_on_array))
    }
}

impl fmt::Debug for FilterRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterRule")
            .field("kind", &self.kind)
            .field("skip_on_array", &self.skip_on_array)
            .finish()
    }
}

impl Validate for FilterRule {
    type Input = Value;

    fn validate(&self, _input: &Value) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl ElementRule for FilterRule {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn mode(&self) -> RuleMode {
        RuleMode::Filter {
            skip_nested: self.skip_on_array,
        }
    }

    fn filter(&self, value: &Value) -> Result<Value, RuleError> {
        (self.filter)(value)
    }
}

fn map_string(value: &Value, f: impl Fn(&str) -> String) -> Value {
    match value {
        Value::String(s) => Value::String(f(s)),
        other => other.clone(),
    }
}

/// Strips leading and trailing whitespace from strings.
#[must_use]
pub fn trim() -> FilterRule {
    FilterRule::new("trim", |value| map_string(value, |s| s.trim().to_owned()))
}

/// Lowercases strings.
#[must_use]
pub fn lowercase() -> FilterRule {
    FilterRule::new("lowercase", |value| map_string(value, str::to_lowercase))
}

/// Uppercases strings.
#[must_use]
pub fn uppercase() -> FilterRule {
    FilterRule::new("uppercase", |value| map_string(value, str::to_uppercase))
}
