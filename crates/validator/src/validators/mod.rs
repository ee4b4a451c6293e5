//! Built-in element rules
//!
//! Every rule here is a `Validate<Input = serde_json::Value>` implementation
//! that can be used directly as an [`ElementRule`](crate::rule::ElementRule)
//! or resolved by type identifier through a
//! [`RuleRegistry`](crate::registry::RuleRegistry).
//!
//! # Kinds
//!
//! - **Checking**: `integer`, `number`, `string`, `boolean`, `required`,
//!   `in`, `match`
//! - **Filtering**: `trim`, `lowercase`, `uppercase`
//!
//! Each checking rule accepts a `message` option that replaces its message
//! templates. Unknown options are rejected.

pub mod boolean;
pub mod filter;
pub mod integer;
pub mod nullable;
pub mod options;
pub mod pattern;
pub mod range;
pub mod text;

pub use boolean::Boolean;
pub use filter::{FilterRule, lowercase, trim, uppercase};
pub use integer::{Integer, Number};
pub use nullable::Required;
pub use pattern::Match;
pub use range::In;
pub use text::Text;

use std::sync::Arc;

use crate::registry::RuleRegistry;
use crate::rule::ElementRule;

/// Registers every built-in rule on `registry`.
pub fn register_builtins(registry: &RuleRegistry) {
    registry.register("integer", |_, options| {
        Ok(Arc::new(Integer::from_options(options)?) as Arc<dyn ElementRule>)
    });
    registry.register("number", |_, options| {
        Ok(Arc::new(Number::from_options(options)?) as Arc<dyn ElementRule>)
    });
    registry.register("string", |_, options| {
        Ok(Arc::new(Text::from_options(options)?) as Arc<dyn ElementRule>)
    });
    registry.register("boolean", |_, options| {
        Ok(Arc::new(Boolean::from_options(options)?) as Arc<dyn ElementRule>)
    });
    registry.register("required", |_, options| {
        Ok(Arc::new(Required::from_options(options)?) as Arc<dyn ElementRule>)
    });
    registry.register("in", |_, options| {
        Ok(Arc::new(In::from_options(options)?) as Arc<dyn ElementRule>)
    });
    registry.register("match", |_, options| {
        Ok(Arc::new(Match::from_options(options)?) as Arc<dyn ElementRule>)
    });

    registry.register("trim", |_, options| {
        Ok(Arc::new(trim().configure(options)?) as Arc<dyn ElementRule>)
    });
    registry.register("lowercase", |_, options| {
        Ok(Arc::new(lowercase().configure(options)?) as Arc<dyn ElementRule>)
    });
    registry.register("uppercase", |_, options| {
        Ok(Arc::new(uppercase().configure(options)?) as Arc<dyn ElementRule>)
    });
}
