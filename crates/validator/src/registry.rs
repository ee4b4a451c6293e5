//! Rule registry: type identifier → element rule constructor.
//!
//! [`RuleFactory`] is the seam an [`EachRule`](crate::EachRule) resolves
//! declarations through. [`RuleRegistry`] is the stock implementation: a
//! concurrent map of constructors, pre-populated with the built-in rules by
//! [`RuleRegistry::with_builtins`].

use std::fmt;
use std::sync::{Arc, LazyLock};

use dashmap::DashMap;

use crate::error::RuleError;
use crate::rule::{ElementRule, RuleContext, RuleOptions};

/// Builds element rules from a type identifier and options.
pub trait RuleFactory: Send + Sync {
    /// Creates the element rule for `kind`.
    ///
    /// Fails with [`RuleError::UnknownKind`] for an unregistered identifier
    /// and [`RuleError::InvalidOptions`] when the options are rejected.
    fn create(
        &self,
        kind: &str,
        context: &RuleContext,
        options: &RuleOptions,
    ) -> Result<Arc<dyn ElementRule>, RuleError>;
}

/// Constructor stored in a [`RuleRegistry`].
pub type RuleConstructor = Arc<
    dyn Fn(&RuleContext, &RuleOptions) -> Result<Arc<dyn ElementRule>, RuleError> + Send + Sync,
>;

/// Thread-safe registry of rule constructors.
///
/// # Examples
///
/// ```rust
/// use sieve_validator::registry::{RuleFactory, RuleRegistry};
/// use sieve_validator::rule::{RuleContext, RuleOptions};
///
/// let registry = RuleRegistry::with_builtins();
/// let rule = registry
///     .create("integer", &RuleContext::new(["ids"]), &RuleOptions::new())
///     .unwrap();
/// assert_eq!(rule.kind(), "integer");
/// assert!(registry.create("nope", &RuleContext::default(), &RuleOptions::new()).is_err());
/// ```
pub struct RuleRegistry {
    constructors: DashMap<String, RuleConstructor>,
}

static GLOBAL: LazyLock<Arc<RuleRegistry>> = LazyLock::new(|| Arc::new(RuleRegistry::with_builtins()));

impl RuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            constructors: DashMap::new(),
        }
    }

    /// Creates a registry holding every built-in rule.
    #[must_use]
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        crate::validators::register_builtins(&registry);
        registry
    }

    /// The process-wide registry of built-in rules.
    ///
    /// Used by [`EachRule`](crate::EachRule) when no factory is given.
    /// Kinds registered here are visible to every rule that resolves later.
    #[must_use]
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL)
    }

    /// Registers a constructor for `kind`, replacing any previous one.
    pub fn register<F>(&self, kind: impl Into<String>, constructor: F)
    where
        F: Fn(&RuleContext, &RuleOptions) -> Result<Arc<dyn ElementRule>, RuleError>
            + Send
            + Sync
            + 'static,
    {
        let kind = kind.into();
        tracing::debug!(rule_kind = %kind, "registered element rule");
        self.constructors.insert(kind, Arc::new(constructor));
    }

    /// Registers a fixed rule instance under `kind`. Every resolution shares
    /// the same instance and ignores options.
    pub fn register_rule(&self, kind: impl Into<String>, rule: Arc<dyn ElementRule>) {
        self.register(kind, move |_, _| Ok(Arc::clone(&rule)));
    }

    /// Whether a constructor is registered for `kind`.
    #[must_use]
    pub fn contains(&self, kind: &str) -> bool {
        self.constructors.contains_key(kind)
    }

    /// Removes the constructor for `kind`, returning it if present.
    pub fn remove(&self, kind: &str) -> Option<RuleConstructor> {
        self.constructors.remove(kind).map(|(_, v)| v)
    }

    /// Number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// Registered kinds, sorted.
    #[must_use]
    pub fn kinds(&self) -> Vec<String> {
        let mut kinds: Vec<String> = self
            .constructors
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        kinds.sort_unstable();
        kinds
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleFactory for RuleRegistry {
    fn create(
        &self,
        kind: &str,
        context: &RuleContext,
        options: &RuleOptions,
    ) -> Result<Arc<dyn ElementRule>, RuleError> {
        // Clone out of the map so the shard lock is not held while the
        // constructor runs.
        let constructor = self
            .constructors
            .get(kind)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| RuleError::UnknownKind {
                kind: kind.to_owned(),
            })?;
        constructor(context, options)
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("count", &self.constructors.len())
            .field("kinds", &self.kinds())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::FilterRule;
    use serde_json::json;

    #[test]
    fn empty_registry() {
        let registry = RuleRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn builtins_are_registered() {
        let registry = RuleRegistry::with_builtins();
        for kind in ["integer", "number", "string", "boolean", "required", "in", "match"] {
            assert!(registry.contains(kind), "{kind}");
        }
        for kind in ["trim", "lowercase", "uppercase"] {
            assert!(registry.contains(kind), "{kind}");
        }
    }

    #[test]
    fn unknown_kind() {
        let registry = RuleRegistry::new();
        let err = registry
            .create("integer", &RuleContext::default(), &RuleOptions::new())
            .unwrap_err();
        assert_eq!(
            err,
            RuleError::UnknownKind {
                kind: "integer".into()
            }
        );
    }

    #[test]
    fn register_rule_shares_instance() {
        let registry = RuleRegistry::new();
        let rule: Arc<dyn ElementRule> = Arc::new(FilterRule::new("negate", |v| {
            json!(-v.as_i64().unwrap_or_default())
        }));
        registry.register_rule("negate", Arc::clone(&rule));

        let a = registry
            .create("negate", &RuleContext::default(), &RuleOptions::new())
            .unwrap();
        let b = registry
            .create("negate", &RuleContext::default(), &RuleOptions::new())
            .unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(Arc::ptr_eq(&a, &rule));
    }

    #[test]
    fn register_overwrites_and_remove() {
        let registry = RuleRegistry::new();
        registry.register("x", |_, _| Err(RuleError::MissingType));
        registry.register("x", |_, _| Err(RuleError::InvalidConfig("second".into())));
        assert_eq!(registry.len(), 1);

        let err = registry
            .create("x", &RuleContext::default(), &RuleOptions::new())
            .unwrap_err();
        assert_eq!(err, RuleError::InvalidConfig("second".into()));

        assert!(registry.remove("x").is_some());
        assert!(!registry.contains("x"));
    }

    #[test]
    fn kinds_are_sorted() {
        let registry = RuleRegistry::new();
        registry.register("b", |_, _| Err(RuleError::MissingType));
        registry.register("a", |_, _| Err(RuleError::MissingType));
        assert_eq!(registry.kinds(), ["a", "b"]);
    }

    #[test]
    fn global_is_shared() {
        assert!(Arc::ptr_eq(&RuleRegistry::global(), &RuleRegistry::global()));
        assert!(RuleRegistry::global().contains("integer"));
    }
}
