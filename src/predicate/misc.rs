//! Identity, type and behavioural leaf predicates

use crate::value::Value;

/// Strict equality between two values.
pub(crate) fn equal(lhs: &Value, rhs: &Value) -> bool {
    lhs == rhs
}

/// `data` is undefined.
pub(crate) fn undefined(data: &Value) -> bool {
    matches!(data, Value::Undefined)
}

/// `data` is null.
pub(crate) fn null(data: &Value) -> bool {
    matches!(data, Value::Null)
}

/// `data` is neither undefined nor null.
pub(crate) fn assigned(data: &Value) -> bool {
    data.is_assigned()
}

/// `data` is a primitive: an absence state, boolean, number or string.
/// `NaN` and the infinities are numbers for this purpose.
pub(crate) fn primitive(data: &Value) -> bool {
    matches!(
        data,
        Value::Undefined | Value::Null | Value::Bool(_) | Value::Number(_) | Value::Str(_)
    )
}

/// `data` is a boolean.
pub(crate) fn boolean(data: &Value) -> bool {
    matches!(data, Value::Bool(_))
}

/// `data` is a date. Dates in the value model are valid by construction,
/// so there is no invalid-date state to reject.
pub(crate) fn date(data: &Value) -> bool {
    matches!(data, Value::Date(_))
}

/// `data` is callable.
pub(crate) fn function(data: &Value) -> bool {
    matches!(data, Value::Function(_))
}

/// `data` is a callable whose zero-argument invocation fails.
pub(crate) fn throws(data: &Value) -> bool {
    match data {
        Value::Function(f) => f(&[]).is_err(),
        _ => false,
    }
}

/// `data` is promise-like: an assigned value whose `then` property is
/// callable.
pub(crate) fn thenable(data: &Value) -> bool {
    match data {
        Value::Object(props) => matches!(props.get("then"), Some(Value::Function(_))),
        _ => false,
    }
}

/// `data` is an instance of the referenced type.
pub(crate) fn instance_strict(data: &Value, prototype: &Value) -> bool {
    match prototype {
        Value::Type(t) => data.type_name() == *t,
        _ => false,
    }
}

/// Like [`instance_strict`], with a tolerant constructor-name fallback.
/// In this value model the constructor name and the type name coincide,
/// so the fallback collapses to the strict check; the branch is kept
/// explicit and tested.
pub(crate) fn instance(data: &Value, prototype: &Value) -> bool {
    if instance_strict(data, prototype) {
        return true;
    }
    match prototype {
        Value::Type(t) => data.type_name().name() == t.name(),
        _ => false,
    }
}

/// `data` quacks like `archetype`: every property of the archetype must
/// exist on the subject with the same type class, recursing into
/// object-valued properties.
pub(crate) fn like(data: &Value, archetype: &Value) -> bool {
    match archetype {
        Value::Object(props) => props.iter().all(|(name, expected)| {
            let Some(actual) = own_property(data, name) else {
                return false;
            };
            if actual.typeof_class() != expected.typeof_class() {
                return false;
            }
            if matches!(actual, Value::Object(_)) && !like(actual, expected) {
                return false;
            }
            true
        }),
        Value::Array(items) => items.iter().enumerate().all(|(i, expected)| {
            let key = i.to_string();
            match own_property(data, &key) {
                Some(actual) => actual.typeof_class() == expected.typeof_class(),
                None => false,
            }
        }),
        _ => true,
    }
}

fn own_property<'a>(data: &'a Value, name: &str) -> Option<&'a Value> {
    match data {
        Value::Object(props) => props.get(name),
        Value::Array(items) => name.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::TypeName;

    #[test]
    fn test_absence_states() {
        assert!(undefined(&Value::Undefined));
        assert!(!undefined(&Value::Null));
        assert!(null(&Value::Null));
        assert!(!null(&Value::Undefined));
        assert!(assigned(&Value::Bool(false)));
        assert!(!assigned(&Value::Null));
    }

    #[test]
    fn test_primitive() {
        assert!(primitive(&Value::Undefined));
        assert!(primitive(&Value::Number(f64::NAN)));
        assert!(primitive(&Value::from("x")));
        assert!(!primitive(&Value::Array(vec![])));
        assert!(!primitive(&Value::function(|_| Ok(Value::Null))));
    }

    #[test]
    fn test_throws() {
        let bomb = Value::function(|_| Err("boom".to_string()));
        let calm = Value::function(|_| Ok(Value::Null));
        assert!(throws(&bomb));
        assert!(!throws(&calm));
        assert!(!throws(&Value::from("not callable")));
    }

    #[test]
    fn test_thenable() {
        let promise_ish = Value::object([("then", Value::function(|_| Ok(Value::Null)))]);
        let plain = Value::object([("then", Value::from(1))]);
        assert!(thenable(&promise_ish));
        assert!(!thenable(&plain));
        assert!(!thenable(&Value::Null));
    }

    #[test]
    fn test_instance() {
        let arr = Value::Array(vec![]);
        assert!(instance_strict(&arr, &Value::Type(TypeName::Array)));
        assert!(!instance_strict(&arr, &Value::Type(TypeName::Object)));
        // a non-type prototype is a mismatch, not a fault
        assert!(!instance_strict(&arr, &Value::from("Array")));
        assert!(instance(&arr, &Value::Type(TypeName::Array)));
        assert!(!instance(&arr, &Value::Type(TypeName::Date)));
    }

    #[test]
    fn test_like() {
        let archetype = Value::object([
            ("name", Value::from("")),
            ("meta", Value::object([("count", Value::from(0))])),
        ]);
        let good = Value::object([
            ("name", Value::from("x")),
            ("meta", Value::object([("count", Value::from(7))])),
            ("extra", Value::Bool(true)),
        ]);
        let bad_type = Value::object([
            ("name", Value::from(1)),
            ("meta", Value::object([("count", Value::from(7))])),
        ]);
        let missing_nested = Value::object([
            ("name", Value::from("x")),
            ("meta", Value::object(Vec::<(String, Value)>::new())),
        ]);
        assert!(like(&good, &archetype));
        assert!(!like(&bad_type, &archetype));
        assert!(!like(&missing_nested, &archetype));
    }

    #[test]
    fn test_like_array_archetype() {
        let archetype = Value::Array(vec![Value::from(0), Value::from("")]);
        let good = Value::Array(vec![Value::from(1), Value::from("a"), Value::Null]);
        let short = Value::Array(vec![Value::from(1)]);
        assert!(like(&good, &archetype));
        assert!(!like(&short, &archetype));
    }
}
