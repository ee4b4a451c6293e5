//! `{placeholder}` substitution for message templates.

/// Replaces every `{name}` in `template` with the matching parameter value.
///
/// Placeholders without a matching parameter, and unbalanced braces, are
/// copied through verbatim.
///
/// # Examples
///
/// ```rust
/// use sieve_validator::foundation::render_template;
///
/// let text = render_template("{field} must be no less than {min}", &[("field", "age"), ("min", "18")]);
/// assert_eq!(text, "age must be no less than 18");
/// ```
#[must_use]
pub fn render_template(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        match params.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_known_params() {
        assert_eq!(
            render_template("{field} is invalid", &[("field", "tags")]),
            "tags is invalid"
        );
    }

    #[test]
    fn keeps_unknown_placeholders() {
        assert_eq!(
            render_template("{field} must be {what}", &[("field", "x")]),
            "x must be {what}"
        );
    }

    #[test]
    fn unbalanced_brace_is_copied() {
        assert_eq!(render_template("oops {field", &[("field", "x")]), "oops {field");
    }

    #[test]
    fn no_placeholders() {
        assert_eq!(render_template("plain", &[]), "plain");
    }
}
