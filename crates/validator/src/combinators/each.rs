//! EACH rule - applies an element rule to every element of a collection field

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::combinators::lazy::Lazy;
use crate::combinators::message::MessagePolicy;
use crate::error::RuleError;
use crate::foundation::ValidationError;
use crate::json::{elements, is_collection, is_empty_value, map_elements};
use crate::model::Model;
use crate::registry::{RuleFactory, RuleRegistry};
use crate::rule::{ElementRule, RuleContext, RuleDescription, RuleMode};

/// A missing field reads as null.
static NULL: Value = Value::Null;

// ============================================================================
// OUTCOME
// ============================================================================

/// Result of checking one value or field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    /// Every element passed, or the field was rewritten by a filter.
    Valid,
    /// The single failure reported for the field.
    Invalid(ValidationError),
}

impl Outcome {
    /// Whether no failure was reported.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The reported failure, if any.
    #[must_use]
    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(error) => Some(error),
        }
    }

    /// Consumes the outcome, returning the failure if any.
    #[must_use]
    pub fn into_error(self) -> Option<ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(error) => Some(error),
        }
    }

    /// Converts into the `Result` shape used by [`Validate`](crate::foundation::Validate).
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(error) => Err(error),
        }
    }
}

impl From<Result<(), ValidationError>> for Outcome {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(error) => Self::Invalid(error),
        }
    }
}

// ============================================================================
// EACH RULE
// ============================================================================

/// Validates every element of an array (or object) valued field with a
/// nested element rule.
///
/// The element rule is described up front and built on first use, then
/// reused for the lifetime of the `EachRule`. A filtering element rule
/// rewrites the field in place instead of checking it.
///
/// # Examples
///
/// ```rust
/// use sieve_validator::{EachRule, Outcome};
/// use sieve_validator::model::Record;
/// use serde_json::json;
///
/// let rule = EachRule::builder(json!(["integer", {"min": 0}])).field("ids").build();
///
/// let mut record = Record::new().with_field("ids", json!([1, 2, 3]));
/// assert_eq!(rule.validate_field(&mut record, "ids").unwrap(), Outcome::Valid);
///
/// let mut record = Record::new().with_field("ids", json!([1, "x", 3]));
/// let error = rule.validate_field(&mut record, "ids").unwrap().into_error().unwrap();
/// assert_eq!(error.render(), "ids must be an integer");
/// ```
pub struct EachRule {
    description: RuleDescription,
    fields: Vec<String>,
    factory: Arc<dyn RuleFactory>,
    policy: MessagePolicy,
    skip_on_empty: bool,
    resolved: Lazy<Arc<dyn ElementRule>>,
}

impl EachRule {
    /// Starts building a rule around an element rule description.
    pub fn builder(rule: impl Into<RuleDescription>) -> EachRuleBuilder {
        EachRuleBuilder::new(rule.into())
    }

    /// A rule with default settings and no target fields.
    pub fn new(rule: impl Into<RuleDescription>) -> Self {
        Self::builder(rule).build()
    }

    /// The element rule description.
    #[must_use]
    pub fn description(&self) -> &RuleDescription {
        &self.description
    }

    /// Target field names.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The message selection policy.
    #[must_use]
    pub fn policy(&self) -> &MessagePolicy {
        &self.policy
    }

    /// Whether empty values are accepted without inspection.
    #[must_use]
    pub fn skip_on_empty(&self) -> bool {
        self.skip_on_empty
    }

    /// Whether the element rule has been built.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved.is_initialized()
    }

    /// Returns the element rule, building it on first call.
    ///
    /// Instances are adopted as is. Declarations go through the rule
    /// factory with this rule's fields as context. A failed build is not
    /// remembered: the next call tries again.
    pub fn resolve(&self) -> Result<&Arc<dyn ElementRule>, RuleError> {
        self.resolved.get_or_try_init(|| {
            let result = self.build_element_rule();
            match &result {
                Ok(rule) => {
                    tracing::debug!(rule_kind = %rule.kind(), fields = ?self.fields, "resolved element rule");
                }
                Err(error) => {
                    tracing::warn!(%error, fields = ?self.fields, "failed to resolve element rule");
                }
            }
            result
        })
    }

    fn build_element_rule(&self) -> Result<Arc<dyn ElementRule>, RuleError> {
        match &self.description {
            RuleDescription::Instance(rule) => Ok(Arc::clone(rule)),
            RuleDescription::Declared(declaration) => {
                let (kind, options) = RuleDescription::parse_declaration(declaration)?;
                let context = RuleContext::new(self.fields.iter().cloned());
                self.factory.create(kind, &context, &options)
            }
        }
    }

    /// Checks every element of a standalone value.
    ///
    /// Filtering rules are not applied here: there is no field to write
    /// back to, so their elements pass.
    pub fn validate_value(&self, value: &Value) -> Result<Outcome, RuleError> {
        if self.skip_on_empty && is_empty_value(value) {
            return Ok(Outcome::Valid);
        }
        let rule = self.resolve()?;
        Ok(self.check_elements(rule.as_ref(), value).into())
    }

    /// Validates one field of `model`.
    ///
    /// A filtering element rule replaces a collection field with its
    /// filtered copy and never fails. Anything else is checked element by
    /// element and the first failure is returned, tagged with `field`.
    pub fn validate_field<M>(&self, model: &mut M, field: &str) -> Result<Outcome, RuleError>
    where
        M: Model + ?Sized,
    {
        let value = model.field(field).unwrap_or(&NULL);
        if self.skip_on_empty && is_empty_value(value) {
            return Ok(Outcome::Valid);
        }

        let rule = self.resolve()?;
        if let RuleMode::Filter { skip_nested } = rule.mode() {
            let filtered = map_elements(value, |element| {
                if skip_nested && is_collection(element) {
                    Ok(element.clone())
                } else {
                    rule.filter(element)
                }
            })?;
            if let Some(filtered) = filtered {
                tracing::trace!(rule_kind = %rule.kind(), field, "filtered field elements");
                model.set_field(field, filtered);
                return Ok(Outcome::Valid);
            }
        }

        match self.check_elements(rule.as_ref(), value) {
            Ok(()) => Ok(Outcome::Valid),
            Err(error) => Ok(Outcome::Invalid(error.with_field(field.to_owned()))),
        }
    }

    /// Validates every target field, recording failures on the model.
    ///
    /// Returns `true` when no failure was recorded by this call.
    pub fn validate_model<M>(&self, model: &mut M) -> Result<bool, RuleError>
    where
        M: Model + ?Sized,
    {
        let mut valid = true;
        for field in &self.fields {
            if let Outcome::Invalid(error) = self.validate_field(model, field)? {
                model.add_error(error);
                valid = false;
            }
        }
        Ok(valid)
    }

    fn check_elements(&self, rule: &dyn ElementRule, value: &Value) -> Result<(), ValidationError> {
        let Some(elements) = elements(value) else {
            return Err(self.policy.not_collection());
        };

        for (index, element) in elements.enumerate() {
            if let Err(error) = rule.validate(element) {
                tracing::trace!(rule_kind = %rule.kind(), index, code = %error.code, "element failed");
                return Err(self.policy.element_failure(error));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for EachRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EachRule")
            .field("description", &self.description)
            .field("fields", &self.fields)
            .field("policy", &self.policy)
            .field("skip_on_empty", &self.skip_on_empty)
            .field("resolved", &self.is_resolved())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`EachRule`].
#[must_use = "builder methods must be chained or built"]
pub struct EachRuleBuilder {
    description: RuleDescription,
    fields: Vec<String>,
    factory: Option<Arc<dyn RuleFactory>>,
    prefer_sub_rule_message: bool,
    message: Option<Cow<'static, str>>,
    skip_on_empty: bool,
}

impl EachRuleBuilder {
    fn new(description: RuleDescription) -> Self {
        Self {
            description,
            fields: Vec::new(),
            factory: None,
            prefer_sub_rule_message: true,
            message: None,
            skip_on_empty: false,
        }
    }

    /// Adds a target field.
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Adds several target fields.
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Resolves declarations through `factory` instead of the global registry.
    pub fn factory(mut self, factory: Arc<dyn RuleFactory>) -> Self {
        self.factory = Some(factory);
        self
    }

    /// Whether element rule failures keep their own message. Defaults to `true`.
    pub fn prefer_sub_rule_message(mut self, prefer: bool) -> Self {
        self.prefer_sub_rule_message = prefer;
        self
    }

    /// Replaces the rule's own message template.
    pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Accept null and empty values without building or running the element rule.
    pub fn skip_on_empty(mut self, skip: bool) -> Self {
        self.skip_on_empty = skip;
        self
    }

    /// Finishes the rule. The message default is settled here.
    #[must_use]
    pub fn build(self) -> EachRule {
        let factory = self
            .factory
            .unwrap_or_else(|| RuleRegistry::global() as Arc<dyn RuleFactory>);
        EachRule {
            description: self.description,
            fields: self.fields,
            factory,
            policy: MessagePolicy::new(self.prefer_sub_rule_message, self.message),
            skip_on_empty: self.skip_on_empty,
            resolved: Lazy::new(),
        }
    }
}

impl fmt::Debug for EachRuleBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EachRuleBuilder")
            .field("description", &self.description)
            .field("fields", &self.fields)
            .field("prefer_sub_rule_message", &self.prefer_sub_rule_message)
            .field("message", &self.message)
            .field("skip_on_empty", &self.skip_on_empty)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================
