//! Typed option parsing shared by the built-in rules.

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::RuleError;
use crate::foundation::ValidationError;
use crate::rule::RuleOptions;

/// Deserializes a rule's options into its typed option struct.
///
/// Option structs use `deny_unknown_fields`, so a misspelt option is an
/// [`RuleError::InvalidOptions`] rather than silently ignored.
pub fn parse_options<T>(kind: &str, options: &RuleOptions) -> Result<T, RuleError>
where
    T: DeserializeOwned,
{
    serde_json::from_value(Value::Object(options.clone()))
        .map_err(|e| RuleError::invalid_options(kind, e))
}

/// Builds a rule failure, honouring a `message` override.
pub(crate) fn failure(
    code: &'static str,
    default: &'static str,
    message: Option<&str>,
) -> ValidationError {
    let message: Cow<'static, str> = match message {
        Some(custom) => Cow::Owned(custom.to_owned()),
        None => Cow::Borrowed(default),
    };
    ValidationError::new(code, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Opts {
        #[serde(default)]
        min: Option<i64>,
    }

    fn options(value: Value) -> RuleOptions {
        match value {
            Value::Object(map) => map,
            _ => RuleOptions::new(),
        }
    }

    #[test]
    fn parses_known_options() {
        let opts: Opts = parse_options("integer", &options(json!({"min": 3}))).unwrap();
        assert_eq!(opts.min, Some(3));
    }

    #[test]
    fn rejects_unknown_options() {
        let err = parse_options::<Opts>("integer", &options(json!({"minimum": 3}))).unwrap_err();
        assert!(matches!(err, RuleError::InvalidOptions { ref kind, .. } if kind == "integer"));
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(parse_options::<Opts>("integer", &options(json!({"min": "three"}))).is_err());
    }

    #[test]
    fn failure_prefers_override() {
        assert_eq!(failure("integer", "{field} must be an integer", None).message, "{field} must be an integer");
        assert_eq!(failure("integer", "default", Some("custom")).message, "custom");
    }
}
