//! Message selection for [`EachRule`](crate::EachRule) failures.

use std::borrow::Cow;

use crate::foundation::ValidationError;

/// Default message when element rule messages are surfaced: the only failure
/// the wrapper reports itself is a value that is not a collection.
pub const NOT_ARRAY_MESSAGE: &str = "{field} should be an array";

/// Default message when the wrapper reports every failure itself.
pub const INVALID_MESSAGE: &str = "{field} is invalid";

/// Decides which message a failure carries.
///
/// With `prefer_sub_rule_message` the element rule's own failure is passed
/// through untouched. Without it, the wrapper's message replaces every
/// element failure. The caller attaches the field.
///
/// # Examples
///
/// ```rust
/// use sieve_validator::combinators::MessagePolicy;
/// use sieve_validator::foundation::ValidationError;
///
/// let policy = MessagePolicy::new(false, None);
/// assert_eq!(policy.message(), "{field} is invalid");
///
/// let sub = ValidationError::new("integer", "{field} must be an integer");
/// let error = policy.element_failure(sub).with_field("ids");
/// assert_eq!(error.code, "each_invalid");
/// assert_eq!(error.render(), "ids is invalid");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagePolicy {
    prefer_sub_rule_message: bool,
    message: Cow<'static, str>,
}

impl MessagePolicy {
    /// Creates a policy. Without an explicit `message` the default depends on
    /// `prefer_sub_rule_message`.
    pub fn new(prefer_sub_rule_message: bool, message: Option<Cow<'static, str>>) -> Self {
        let message = message.unwrap_or(Cow::Borrowed(if prefer_sub_rule_message {
            NOT_ARRAY_MESSAGE
        } else {
            INVALID_MESSAGE
        }));
        Self {
            prefer_sub_rule_message,
            message,
        }
    }

    /// Whether element rule failures are surfaced as is.
    #[must_use]
    pub fn prefer_sub_rule_message(&self) -> bool {
        self.prefer_sub_rule_message
    }

    /// The wrapper's own message template.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Failure for a field value that is not a collection.
    #[must_use]
    pub fn not_collection(&self) -> ValidationError {
        ValidationError::new("not_array", self.message.clone())
    }

    /// Failure for an element the element rule rejected.
    #[must_use]
    pub fn element_failure(&self, error: ValidationError) -> ValidationError {
        if self.prefer_sub_rule_message {
            error
        } else {
            ValidationError::new("each_invalid", self.message.clone())
        }
    }
}

impl Default for MessagePolicy {
    fn default() -> Self {
        Self::new(true, None)
    }
}
