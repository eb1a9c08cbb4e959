//! Collection leaf predicates
//!
//! Shape tests for arrays, array-likes, iterables and plain objects, plus
//! the membership family (`contains`, `in`, `containsKey`, `keyIn`) and
//! `hasLength`.
//!
//! `containsKey` is deliberately asymmetric: map keys compare by
//! equality, but for every other iterable the key must coerce to a
//! finite number before the indexed lookup is attempted.

use crate::value::{coerce_number, Value};

/// `data` is an array.
pub(crate) fn array(data: &Value) -> bool {
    matches!(data, Value::Array(_))
}

/// `data` is an empty array.
pub(crate) fn empty_array(data: &Value) -> bool {
    matches!(data, Value::Array(items) if items.is_empty())
}

/// `data` is a non-empty array.
pub(crate) fn non_empty_array(data: &Value) -> bool {
    matches!(data, Value::Array(items) if !items.is_empty())
}

/// `data` has a length: an array or a string.
pub(crate) fn array_like(data: &Value) -> bool {
    matches!(data, Value::Array(_) | Value::Str(_))
}

/// `data` supports native iteration: an array, string, set or map.
pub(crate) fn iterable(data: &Value) -> bool {
    matches!(
        data,
        Value::Array(_) | Value::Str(_) | Value::Set(_) | Value::Map(_)
    )
}

/// `data` is a plain object.
pub(crate) fn object(data: &Value) -> bool {
    matches!(data, Value::Object(_))
}

/// `data` is an empty plain object.
pub(crate) fn empty_object(data: &Value) -> bool {
    matches!(data, Value::Object(props) if props.is_empty())
}

/// `data` is a plain object with at least one property.
pub(crate) fn non_empty_object(data: &Value) -> bool {
    matches!(data, Value::Object(props) if !props.is_empty())
}

/// `data` contains `value`: set membership, substring for strings,
/// element equality for arrays, value equality for maps and objects.
/// A non-string needle against a string subject is stringified first,
/// so `"a1b"` contains `1`.
pub(crate) fn contains(data: &Value, value: &Value) -> bool {
    match data {
        Value::Set(items) => items.contains(value),
        Value::Str(s) => s.contains(&value.to_string()),
        Value::Array(items) => items.contains(value),
        Value::Map(entries) => entries.iter().any(|(_, v)| v == value),
        Value::Object(props) => props.values().any(|v| v == value),
        _ => false,
    }
}

/// `value` is in `data`: [`contains`] with the arguments flipped.
pub(crate) fn is_in(value: &Value, data: &Value) -> bool {
    contains(data, value)
}

/// `data` contains key `key`.
///
/// Maps compare keys by equality. Any other iterable requires a
/// numerically-coercible key; the lookup then succeeds only when the
/// value at that key is truthy.
pub(crate) fn contains_key(data: &Value, key: &Value) -> bool {
    if !data.is_assigned() {
        return false;
    }
    if let Value::Map(entries) = data {
        return entries.iter().any(|(k, _)| k == key);
    }
    if iterable(data) && !coerce_number(key).is_finite() {
        return false;
    }
    property(data, key).is_some_and(|v| v.is_truthy())
}

/// `key` is a key in `data`: [`contains_key`] flipped.
pub(crate) fn key_in(key: &Value, data: &Value) -> bool {
    contains_key(data, key)
}

/// `data` has a length equal to `length`. Values without a length only
/// match an undefined expectation.
pub(crate) fn has_length(data: &Value, length: &Value) -> bool {
    if !data.is_assigned() {
        return false;
    }
    match data.length() {
        Some(n) => matches!(length, Value::Number(m) if *m == n as f64),
        None => matches!(length, Value::Undefined),
    }
}

/// Indexed or keyed property lookup, mirroring dynamic `data[key]`
/// access: objects stringify the key, arrays and strings index by
/// integral position.
fn property(data: &Value, key: &Value) -> Option<Value> {
    match data {
        Value::Object(props) => props.get(&key.to_string()).cloned(),
        Value::Array(items) => index(key).and_then(|i| items.get(i).cloned()),
        Value::Str(s) => index(key)
            .and_then(|i| s.chars().nth(i))
            .map(|c| Value::Str(c.to_string())),
        _ => None,
    }
}

fn index(key: &Value) -> Option<usize> {
    let n = coerce_number(key);
    if n.fract() == 0.0 && n >= 0.0 && n.is_finite() {
        Some(n as usize)
    } else {
        None
    }
}
