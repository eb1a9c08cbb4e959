//! String leaf predicates

use crate::value::Value;
use regex::Regex;

/// `data` is a string.
pub(crate) fn string(data: &Value) -> bool {
    matches!(data, Value::Str(_))
}

/// `data` is the empty string.
pub(crate) fn empty_string(data: &Value) -> bool {
    matches!(data, Value::Str(s) if s.is_empty())
}

/// `data` is a non-empty string.
pub(crate) fn non_empty_string(data: &Value) -> bool {
    matches!(data, Value::Str(s) if !s.is_empty())
}

/// `data` is a string matching `pattern`. String patterns compile on the
/// fly; a pattern that fails to compile is a mismatch, not a fault.
pub(crate) fn matches(data: &Value, pattern: &Value) -> bool {
    let Value::Str(subject) = data else {
        return false;
    };
    match pattern {
        Value::Regex(re) => re.is_match(subject),
        Value::Str(src) => Regex::new(src).map(|re| re.is_match(subject)).unwrap_or(false),
        _ => false,
    }
}
