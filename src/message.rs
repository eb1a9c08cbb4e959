//! Assertion message formatting
//!
//! Templates carry positional placeholders: `{a}` for the subject, `{e}`
//! and `{e2}` for the first and second expected-value arguments, and
//! `{t}` for a type name taken from the second argument. Only the first
//! occurrence of each placeholder is substituted; a template without
//! placeholders passes through untouched.

use crate::value::Value;

/// Render `template` against the call arguments.
pub(crate) fn render(template: &str, args: &[Value]) -> String {
    let arg = |i: usize| args.get(i).unwrap_or(&Value::Undefined);
    let mut out = template.to_string();
    for (placeholder, value) in [("{a}", arg(0)), ("{e}", arg(1)), ("{e2}", arg(2))] {
        if out.contains(placeholder) {
            out = out.replacen(placeholder, &render_value(value), 1);
        }
    }
    if out.contains("{t}") {
        out = out.replacen("{t}", &render_type(arg(1)), 1);
    }
    out
}

/// One argument, rendered for a message: strings are quoted and escaped,
/// scalars and patterns print their default form, and everything else
/// prints its type name so messages read "to be Number" rather than
/// dumping a structure.
fn render_value(value: &Value) -> String {
    match value {
        Value::Str(s) => format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\"")),
        Value::Undefined
        | Value::Null
        | Value::Bool(_)
        | Value::Number(_)
        | Value::Regex(_) => value.to_string(),
        Value::Type(t) => t.name().to_string(),
        other => other.type_name().name().to_string(),
    }
}

/// The `{t}` rendering: the *name* of the argument when it carries one,
/// else its raw default form, unquoted.
fn render_type(value: &Value) -> String {
    match value {
        Value::Type(t) => t.name().to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::TypeName;

    #[test]
    fn strings_are_quoted_and_escaped() {
        let msg = render("expected {a} to be empty string", &[Value::from("a\"b\\c")]);
        assert_eq!(msg, "expected \"a\\\"b\\\\c\" to be empty string");
    }

    #[test]
    fn structures_render_as_type_names() {
        assert_eq!(
            render("{a}", &[Value::Array(vec![])]),
            "Array"
        );
        assert_eq!(
            render("{a}", &[Value::object([("k", Value::Null)])]),
            "Object"
        );
        assert_eq!(render("{a}", &[Value::function(|_| Ok(Value::Null))]), "Function");
    }

    #[test]
    fn scalars_render_their_default_form() {
        assert_eq!(render("{a}", &[Value::from(4)]), "4");
        assert_eq!(render("{a}", &[Value::from(4.5)]), "4.5");
        assert_eq!(render("{a}", &[Value::Bool(true)]), "true");
        assert_eq!(render("{a}", &[Value::Null]), "null");
        assert_eq!(render("{a}", &[Value::regex("x+").unwrap()]), "/x+/");
    }

    #[test]
    fn expected_placeholders_use_later_arguments() {
        let msg = render(
            "expected {a} to be between {e} and {e2}",
            &[Value::from(5), Value::from(10), Value::from(1)],
        );
        assert_eq!(msg, "expected 5 to be between 10 and 1");
    }

    #[test]
    fn type_placeholder_names_the_second_argument() {
        let msg = render(
            "expected {a} to be {t}",
            &[Value::from(1), Value::Type(TypeName::Number)],
        );
        assert_eq!(msg, "expected 1 to be Number");
        // no name on the argument: raw, unquoted form
        let msg = render("expected {a} to be {t}", &[Value::from(1), Value::from("Thing")]);
        assert_eq!(msg, "expected 1 to be Thing");
    }

    #[test]
    fn missing_arguments_render_as_undefined() {
        assert_eq!(render("{a} and {e}", &[]), "undefined and undefined");
    }

    #[test]
    fn template_without_placeholders_is_unchanged() {
        assert_eq!(render("assert failed", &[Value::from(1)]), "assert failed");
    }

    #[test]
    fn only_first_occurrence_is_substituted() {
        assert_eq!(render("{a} {a}", &[Value::from(1)]), "1 {a}");
    }
}
