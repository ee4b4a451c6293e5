//! # sieve-validator
//!
//! Per-element validation of collection fields, driven by declarative rules.
//!
//! ## Quick Start
//!
//! ```rust
//! use sieve_validator::prelude::*;
//! use serde_json::json;
//!
//! // Every element of `ages` must be an integer of at least 18.
//! let rule = EachRule::builder(json!(["integer", {"min": 18}])).field("ages").build();
//!
//! let mut record = Record::new().with_field("ages", json!([21, 17, 40]));
//! let error = rule.validate_field(&mut record, "ages").unwrap().into_error().unwrap();
//! assert_eq!(error.render(), "ages must be no less than 18");
//! ```
//!
//! ## Element Rules
//!
//! An [`EachRule`] wraps one element rule, given either as an instance
//! ([`RuleDescription::Instance`](rule::RuleDescription::Instance)) or as a
//! declaration such as `["string", {"max": 20}]` that is resolved through a
//! [`RuleFactory`](registry::RuleFactory) on first use and kept afterwards.
//!
//! Filtering rules (`trim`, `lowercase`, `uppercase` or any
//! [`FilterRule`](validators::FilterRule)) rewrite the field in place instead
//! of checking it.
//!
//! ## Errors
//!
//! Validation failures come back as [`Outcome::Invalid`]. A [`RuleError`] is
//! returned only when the rule itself is broken: a malformed declaration, an
//! unknown validator type, rejected options, or a failing filter.

// ValidationError is returned by value from every check; boxing it would add
// an allocation to every failure.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod config;
pub mod error;
pub mod foundation;
pub mod json;
pub mod model;
pub mod prelude;
pub mod registry;
pub mod rule;
pub mod validators;

pub use combinators::{EachRule, EachRuleBuilder, Outcome};
pub use error::RuleError;
