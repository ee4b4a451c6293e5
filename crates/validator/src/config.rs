//! Declarative configuration for an [`EachRule`].
//!
//! ```rust
//! use sieve_validator::EachRule;
//! use sieve_validator::config::EachRuleConfig;
//! use serde_json::json;
//!
//! let config = EachRuleConfig::from_value(json!({
//!     "rule": ["string", {"max": 10}],
//!     "fields": ["tags"],
//!     "prefer_sub_rule_message": false,
//! }))
//! .unwrap();
//!
//! let rule = EachRule::from_config(config);
//! assert_eq!(rule.policy().message(), "{field} is invalid");
//! ```

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::combinators::EachRule;
use crate::error::RuleError;
use crate::registry::RuleFactory;
use crate::rule::RuleDescription;

const fn default_true() -> bool {
    true
}

/// Serialized form of an [`EachRule`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EachRuleConfig {
    /// Element rule declaration, e.g. `["integer", {"min": 0}]`.
    ///
    /// Kept raw; a malformed declaration is reported on first use.
    pub rule: RuleDescription,

    /// Target field names.
    #[serde(default)]
    pub fields: Vec<String>,

    /// Surface element rule messages as is. Defaults to `true`.
    #[serde(default = "default_true")]
    pub prefer_sub_rule_message: bool,

    /// Own message template.
    #[serde(default)]
    pub message: Option<String>,

    /// Accept empty values without inspection.
    #[serde(default)]
    pub skip_on_empty: bool,
}

impl EachRuleConfig {
    /// Deserializes a config from JSON.
    pub fn from_value(value: Value) -> Result<Self, RuleError> {
        serde_json::from_value(value).map_err(|e| RuleError::InvalidConfig(e.to_string()))
    }
}

impl EachRule {
    /// Builds a rule from its config, resolving through the global registry.
    pub fn from_config(config: EachRuleConfig) -> Self {
        Self::configured(config, None)
    }

    /// Builds a rule from its config, resolving through `factory`.
    pub fn from_config_with(config: EachRuleConfig, factory: Arc<dyn RuleFactory>) -> Self {
        Self::configured(config, Some(factory))
    }

    fn configured(config: EachRuleConfig, factory: Option<Arc<dyn RuleFactory>>) -> Self {
        let mut builder = Self::builder(config.rule)
            .fields(config.fields)
            .prefer_sub_rule_message(config.prefer_sub_rule_message)
            .skip_on_empty(config.skip_on_empty);
        if let Some(message) = config.message {
            builder = builder.message(message);
        }
        if let Some(factory) = factory {
            builder = builder.factory(factory);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults() {
        let config = EachRuleConfig::from_value(json!({"rule": ["integer"]})).unwrap();
        assert!(config.fields.is_empty());
        assert!(config.prefer_sub_rule_message);
        assert!(config.message.is_none());
        assert!(!config.skip_on_empty);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = EachRuleConfig::from_value(json!({"rule": ["integer"], "strict": true})).unwrap_err();
        assert!(matches!(err, RuleError::InvalidConfig(_)));
    }

    #[test]
    fn rule_is_required() {
        let err = EachRuleConfig::from_value(json!({"fields": ["a"]})).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn explicit_message_is_kept() {
        let config = EachRuleConfig::from_value(json!({
            "rule": ["integer"],
            "message": "{field} must list integers",
        }))
        .unwrap();
        let rule = EachRule::from_config(config);
        assert_eq!(rule.policy().message(), "{field} must list integers");
    }
}
