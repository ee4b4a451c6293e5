//! Rule combinators
//!
//! Building blocks an [`EachRule`] is assembled from:
//!
//! - **Each**: [`EachRule`], [`EachRuleBuilder`], [`Outcome`]
//! - **Messages**: [`MessagePolicy`]
//! - **Lazy**: [`Lazy`], the resolve-once slot holding the element rule

pub mod each;
pub mod lazy;
pub mod message;

pub use each::{EachRule, EachRuleBuilder, Outcome};
pub use lazy::Lazy;
pub use message::{INVALID_MESSAGE, MessagePolicy, NOT_ARRAY_MESSAGE};
