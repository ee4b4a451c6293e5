//! Element rules and rule declarations.
//!
//! An [`ElementRule`] is the sub-validator an [`EachRule`](crate::EachRule)
//! applies to every element of a collection. It either *checks* an element
//! (through [`Validate`]) or *filters* it into a new value, as announced by
//! its [`RuleMode`].
//!
//! A [`RuleDescription`] says where the element rule comes from: an instance
//! built by the caller, or a declaration such as `["integer", {"min": 0}]`
//! that a [`RuleFactory`](crate::registry::RuleFactory) turns into one.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::RuleError;
use crate::foundation::Validate;

/// Named options handed to a rule constructor.
pub type RuleOptions = Map<String, Value>;

// ============================================================================
// RULE MODE
// ============================================================================

/// How an element rule is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleMode {
    /// Each element is checked; the first failure is reported.
    #[default]
    Check,
    /// Each element is replaced by [`ElementRule::filter`]'s output.
    Filter {
        /// Leave elements that are themselves collections untouched.
        skip_nested: bool,
    },
}

impl RuleMode {
    /// Whether this is a filtering mode.
    #[must_use]
    pub fn is_filter(self) -> bool {
        matches!(self, Self::Filter { .. })
    }
}

// ============================================================================
// ELEMENT RULE
// ============================================================================

/// A rule applied to a single collection element.
///
/// Checking rules only implement [`Validate`]. Filtering rules return
/// [`RuleMode::Filter`] from [`mode`](Self::mode) and override
/// [`filter`](Self::filter).
///
/// # Examples
///
/// ```rust
/// use sieve_validator::foundation::{Validate, ValidationError};
/// use sieve_validator::rule::ElementRule;
/// use serde_json::Value;
///
/// #[derive(Debug)]
/// struct Even;
///
/// impl Validate for Even {
///     type Input = Value;
///
///     fn validate(&self, input: &Value) -> Result<(), ValidationError> {
///         match input.as_i64() {
///             Some(n) if n % 2 == 0 => Ok(()),
///             _ => Err(ValidationError::new("even", "{field} must be even")),
///         }
///     }
/// }
///
/// impl ElementRule for Even {
///     fn kind(&self) -> &str {
///         "even"
///     }
/// }
/// ```
pub trait ElementRule: Validate<Input = Value> + Send + Sync + fmt::Debug {
    /// The type identifier this rule was built from, used in logs and errors.
    fn kind(&self) -> &str;

    /// How the rule is applied. Defaults to [`RuleMode::Check`].
    fn mode(&self) -> RuleMode {
        RuleMode::Check
    }

    /// Transforms one element. Only called for [`RuleMode::Filter`] rules.
    fn filter(&self, value: &Value) -> Result<Value, RuleError> {
        Ok(value.clone())
    }
}

// ============================================================================
// RULE CONTEXT
// ============================================================================

/// Context a rule is constructed in: the fields of the anonymous model the
/// element rule is bound to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleContext {
    fields: Vec<String>,
}

impl RuleContext {
    /// Creates a context bound to the given field names.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// The target field names.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

// ============================================================================
// RULE DESCRIPTION
// ============================================================================

/// Where an element rule comes from.
#[derive(Clone)]
pub enum RuleDescription {
    /// An already-built rule, adopted as is.
    Instance(Arc<dyn ElementRule>),
    /// A raw declaration: `[kind, {options}, ...]`.
    ///
    /// Kept unparsed until resolution, so a malformed declaration surfaces
    /// on first use.
    Declared(Value),
}

impl RuleDescription {
    /// Wraps a rule instance.
    pub fn instance(rule: impl ElementRule + 'static) -> Self {
        Self::Instance(Arc::new(rule))
    }

    /// Declares a rule by type identifier with no options.
    pub fn kind(kind: impl Into<String>) -> Self {
        Self::Declared(Value::Array(vec![Value::String(kind.into())]))
    }

    /// Declares a rule by type identifier and an options object.
    pub fn with_options(kind: impl Into<String>, options: RuleOptions) -> Self {
        Self::Declared(Value::Array(vec![
            Value::String(kind.into()),
            Value::Object(options),
        ]))
    }

    /// Splits a declaration into its type identifier and merged options.
    ///
    /// Later option objects override keys from earlier ones.
    pub fn parse_declaration(declaration: &Value) -> Result<(&str, RuleOptions), RuleError> {
        let entries = match declaration {
            Value::Array(entries) => entries,
            _ => return Err(RuleError::MissingType),
        };
        let (kind, rest) = match entries.split_first() {
            Some((Value::String(kind), rest)) if !kind.is_empty() => (kind.as_str(), rest),
            _ => return Err(RuleError::MissingType),
        };

        let mut options = RuleOptions::new();
        for (position, entry) in rest.iter().enumerate() {
            match entry {
                Value::Object(map) => {
                    options.extend(map.iter().map(|(k, v)| (k.clone(), v.clone())));
                }
                other => {
                    return Err(RuleError::invalid_options(
                        kind,
                        format!(
                            "entry {} must be an options object, got {}",
                            position + 1,
                            crate::json::json_type_name(other)
                        ),
                    ));
                }
            }
        }
        Ok((kind, options))
    }
}

impl fmt::Debug for RuleDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instance(rule) => f.debug_tuple("Instance").field(rule).finish(),
            Self::Declared(value) => f.debug_tuple("Declared").field(value).finish(),
        }
    }
}

impl From<Value> for RuleDescription {
    fn from(value: Value) -> Self {
        Self::Declared(value)
    }
}

impl From<Arc<dyn ElementRule>> for RuleDescription {
    fn from(rule: Arc<dyn ElementRule>) -> Self {
        Self::Instance(rule)
    }
}

impl<'de> Deserialize<'de> for RuleDescription {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::Declared)
    }
}
