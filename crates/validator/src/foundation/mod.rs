//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`AsValidatable`]
//! - **Errors**: [`ValidationError`]
//! - **Templates**: [`render_template`]
//!
//! Everything else in the crate is built from these: element rules are
//! `Validate<Input = serde_json::Value>` implementations, and every failure
//! they report is a `ValidationError` whose message is a `{placeholder}`
//! template the host formats.

pub mod error;
pub mod template;
pub mod traits;
pub mod validatable;

pub use error::ValidationError;
pub use template::render_template;
pub use traits::Validate;
pub use validatable::AsValidatable;

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
