//! Validation failure type.
//!
//! A [`ValidationError`] is the expected, recoverable result of a failed
//! check. Its `message` is a template (for example `"{field} must be an
//! integer"`) that the host formats; `params` carries the values for the
//! rule-specific placeholders.
//!
//! String fields use `Cow<'static, str>` so the built-in codes and templates
//! never allocate.

use std::borrow::Cow;
use std::fmt;

use crate::foundation::template::render_template;

/// A structured validation failure: code, message template, field and params.
///
/// # Examples
///
/// ```rust
/// use sieve_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min", "{field} must be no less than {min}")
///     .with_field("age")
///     .with_param("min", "18");
///
/// assert_eq!(error.param("min"), Some("18"));
/// assert_eq!(error.render(), "age must be no less than 18");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling and i18n.
    ///
    /// Examples: "integer", "not_array", "required"
    pub code: Cow<'static, str>,

    /// Message template. Placeholders use `{name}` syntax.
    pub message: Cow<'static, str>,

    /// The model field the failure is attached to, if known.
    pub field: Option<Cow<'static, str>>,

    /// Template parameters, in insertion order.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message template.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field this error is attached to.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a template parameter. An existing parameter with the same key is
    /// replaced in place.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        let key = key.into();
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.params.push((key, value)),
        }
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Renders the message template with the error's params.
    ///
    /// `{field}` resolves to the attached field unless a `field` param
    /// overrides it. Unknown placeholders are left untouched.
    #[must_use]
    pub fn render(&self) -> String {
        let mut params: Vec<(&str, &str)> = self
            .params
            .iter()
            .map(|(k, v)| (k.as_ref(), v.as_ref()))
            .collect();
        if let Some(field) = &self.field {
            if self.param("field").is_none() {
                params.push(("field", field.as_ref()));
            }
        }
        render_template(&self.message, &params)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "[{field}] {}: {}", self.code, self.render()),
            None => write!(f, "{}: {}", self.code, self.render()),
        }
    }
}

impl std::error::Error for ValidationError {}
