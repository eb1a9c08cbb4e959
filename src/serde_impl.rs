//! Serde integration (behind the `serde` feature)
//!
//! JSON is the usual ingress for dynamically-typed data, so the feature
//! provides a lossless conversion from `serde_json::Value` into
//! [`Value`], a fallible conversion back (dates, patterns, functions and
//! type references have no JSON form), and a `Serialize` impl that uses
//! the same JSON mapping.

use crate::value::Value;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(props) => Value::Object(
                props.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
        }
    }
}

/// A value with no JSON representation was encountered during
/// conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotJson {
    /// The offending value's type name.
    pub type_name: &'static str,
}

impl std::fmt::Display for NotJson {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "value of type {} has no JSON form", self.type_name)
    }
}

impl std::error::Error for NotJson {}

impl TryFrom<&Value> for serde_json::Value {
    type Error = NotJson;

    fn try_from(value: &Value) -> Result<serde_json::Value, NotJson> {
        match value {
            Value::Undefined | Value::Null => Ok(serde_json::Value::Null),
            Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            Value::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .ok_or(NotJson { type_name: "Number" }),
            Value::Str(s) => Ok(serde_json::Value::String(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(serde_json::Value::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(serde_json::Value::Array),
            Value::Object(props) => props
                .iter()
                .map(|(k, v)| serde_json::Value::try_from(v).map(|v| (k.clone(), v)))
                .collect::<Result<serde_json::Map<_, _>, _>>()
                .map(serde_json::Value::Object),
            other => Err(NotJson { type_name: other.type_name().name() }),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Regex(r) => serializer.serialize_str(r.as_str()),
            Value::Date(d) => serializer.serialize_str(&d.to_string()),
            Value::Array(items) | Value::Set(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(props) => {
                let mut m = serializer.serialize_map(Some(props.len()))?;
                for (k, v) in props {
                    m.serialize_entry(k, v)?;
                }
                m.end()
            }
            Value::Map(entries) => {
                let mut seq = serializer.serialize_seq(Some(entries.len()))?;
                for (k, v) in entries {
                    seq.serialize_element(&(k, v))?;
                }
                seq.end()
            }
            Value::Function(_) => serializer.serialize_str("function"),
            Value::Type(t) => serializer.serialize_str(t.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_converts_losslessly_into_values() {
        let v = Value::from(json!({"a": 1, "b": ["x", null, true]}));
        assert_eq!(
            v,
            Value::object([
                ("a", Value::from(1)),
                (
                    "b",
                    Value::Array(vec![Value::from("x"), Value::Null, Value::Bool(true)])
                ),
            ])
        );
    }

    #[test]
    fn json_values_round_trip() {
        // Fractional numbers only: integral JSON numbers come back as
        // floats after passing through the f64 representation.
        let json = json!({"n": 4.5, "s": "x", "xs": [1.5, 2.5]});
        let value = Value::from(json.clone());
        assert_eq!(serde_json::Value::try_from(&value), Ok(json));
    }

    #[test]
    fn non_json_values_are_rejected() {
        let f = Value::function(|_| Ok(Value::Null));
        assert_eq!(
            serde_json::Value::try_from(&f),
            Err(NotJson { type_name: "Function" })
        );
        assert_eq!(
            serde_json::Value::try_from(&Value::Number(f64::NAN)),
            Err(NotJson { type_name: "Number" })
        );
    }
}
