//! Prelude module for convenient imports.
//!
//! Provides a single `use sieve_validator::prelude::*;` import that brings
//! in the rule types, the model, and the traits needed to call them.
//!
//! # Examples
//!
//! ```rust
//! use sieve_validator::prelude::*;
//! use serde_json::json;
//!
//! let rule = EachRule::new(RuleDescription::instance(Text::new().max(3)));
//! assert!(rule.validate_value(&json!(["ab", "cd"])).unwrap().is_valid());
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{AsValidatable, Validate, ValidationError, render_template};

// ============================================================================
// RULES: Element rules, descriptions and their factory
// ============================================================================

pub use crate::error::RuleError;
pub use crate::registry::{RuleFactory, RuleRegistry};
pub use crate::rule::{ElementRule, RuleContext, RuleDescription, RuleMode, RuleOptions};

pub use crate::validators::{
    Boolean, FilterRule, In, Integer, Match, Number, Required, Text, lowercase, trim, uppercase,
};

// ============================================================================
// EACH RULE: The collection combinator and its configuration
// ============================================================================

pub use crate::combinators::{EachRule, EachRuleBuilder, MessagePolicy, Outcome};
pub use crate::config::EachRuleConfig;
pub use crate::model::{Model, Record};
