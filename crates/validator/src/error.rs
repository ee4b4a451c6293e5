//! Rule configuration errors.
//!
//! These are the fatal errors of the crate: a rule declaration that cannot be
//! turned into an element rule, or a filter that fails while transforming a
//! value. Ordinary validation failures are never reported through this type,
//! they come back as [`Outcome::Invalid`](crate::Outcome::Invalid).

/// Errors raised while resolving or applying an element rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RuleError {
    /// The rule declaration does not start with a validator type identifier.
    #[error("rule must be an array specifying validator type")]
    MissingType,

    /// No constructor is registered for the requested type identifier.
    #[error("unknown validator type: {kind}")]
    UnknownKind {
        /// The type identifier that was looked up.
        kind: String,
    },

    /// The options given to a rule constructor were rejected.
    #[error("invalid options for '{kind}' rule: {reason}")]
    InvalidOptions {
        /// The rule type being constructed.
        kind: String,
        /// What was wrong with the options.
        reason: String,
    },

    /// An `EachRule` configuration document could not be read.
    #[error("invalid each rule configuration: {0}")]
    InvalidConfig(String),

    /// A filter rule failed to transform an element.
    #[error("'{kind}' filter failed: {reason}")]
    Filter {
        /// The filter rule that failed.
        kind: String,
        /// Failure reported by the filter.
        reason: String,
    },
}

impl RuleError {
    /// Creates an [`InvalidOptions`](Self::InvalidOptions) error.
    pub fn invalid_options(kind: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidOptions {
            kind: kind.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates a [`Filter`](Self::Filter) error.
    pub fn filter(kind: impl Into<String>, reason: impl ToString) -> Self {
        Self::Filter {
            kind: kind.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether the error comes from rule configuration rather than from
    /// applying a resolved rule.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::Filter { .. })
    }
}
