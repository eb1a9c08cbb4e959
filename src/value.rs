//! The dynamic value model predicates are evaluated against
//!
//! Every predicate in this crate inspects a [`Value`]: a dynamically-typed
//! runtime value with two distinct absence states (`Undefined` and `Null`),
//! the usual scalars, pattern and date values, and the four collection
//! shapes (arrays, plain objects, maps and sets).
//!
//! Equality between values is *strict* in the tradition of dynamic
//! checking libraries: `NaN` never equals itself, patterns compare by
//! source, functions compare by identity, and composites compare
//! structurally.
//!
//! # Example
//!
//! ```rust
//! use vouch::Value;
//!
//! let v = Value::from(4);
//! assert!(v.is_assigned());
//! assert!(v.is_truthy());
//! assert_eq!(v, Value::Number(4.0));
//! ```

use chrono::NaiveDateTime;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A callable value. Invoking it may produce a value or fail; a failed
/// call is what the `throws` predicate detects.
pub type NativeFn = Arc<dyn Fn(&[Value]) -> Result<Value, String> + Send + Sync>;

/// Names for the value kinds, used as type references by the `instance`
/// predicates, by the `{t}` message placeholder, and as error-kind
/// selectors in assertion overrides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeName {
    /// The undefined absence state.
    Undefined,
    /// The null absence state.
    Null,
    /// Boolean values.
    Boolean,
    /// Numeric values.
    Number,
    /// String values.
    String,
    /// Pattern values.
    RegExp,
    /// Date values.
    Date,
    /// Arrays.
    Array,
    /// Plain objects.
    Object,
    /// Key-value maps.
    Map,
    /// Sets.
    Set,
    /// Callable values.
    Function,
}

impl TypeName {
    /// The display name of the type, as it appears in assertion messages.
    pub fn name(self) -> &'static str {
        match self {
            TypeName::Undefined => "Undefined",
            TypeName::Null => "Null",
            TypeName::Boolean => "Boolean",
            TypeName::Number => "Number",
            TypeName::String => "String",
            TypeName::RegExp => "RegExp",
            TypeName::Date => "Date",
            TypeName::Array => "Array",
            TypeName::Object => "Object",
            TypeName::Map => "Map",
            TypeName::Set => "Set",
            TypeName::Function => "Function",
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamically-typed runtime value.
#[derive(Clone)]
pub enum Value {
    /// The undefined absence state (also what a predicate sees for a
    /// missing argument position).
    Undefined,
    /// The null absence state.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number. Integers, floats, `NaN` and the infinities all live here.
    Number(f64),
    /// A string.
    Str(String),
    /// A compiled pattern.
    Regex(Regex),
    /// A date.
    Date(NaiveDateTime),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// A plain object: string keys to values, iterated in key order.
    Object(BTreeMap<String, Value>),
    /// A key-value map with arbitrary keys, in insertion order.
    Map(Vec<(Value, Value)>),
    /// A set of values, in insertion order.
    Set(Vec<Value>),
    /// A callable value.
    Function(NativeFn),
    /// A reference to one of the value kinds.
    Type(TypeName),
}

impl Value {
    /// Build a string value.
    pub fn string(s: impl Into<String>) -> Value {
        Value::Str(s.into())
    }

    /// Compile `pattern` into a pattern value.
    pub fn regex(pattern: &str) -> Result<Value, regex::Error> {
        Ok(Value::Regex(Regex::new(pattern)?))
    }

    /// Wrap a callable into a function value.
    pub fn function<F>(f: F) -> Value
    where
        F: Fn(&[Value]) -> Result<Value, String> + Send + Sync + 'static,
    {
        Value::Function(Arc::new(f))
    }

    /// Build a plain object from key-value pairs.
    pub fn object<K, I>(pairs: I) -> Value
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// True unless the value is `Undefined` or `Null`.
    #[inline]
    pub fn is_assigned(&self) -> bool {
        !matches!(self, Value::Undefined | Value::Null)
    }

    /// Truthiness: everything is truthy except `Undefined`, `Null`,
    /// `false`, zero, `NaN` and the empty string.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Str(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// The kind of this value.
    pub fn type_name(&self) -> TypeName {
        match self {
            Value::Undefined => TypeName::Undefined,
            Value::Null => TypeName::Null,
            Value::Bool(_) => TypeName::Boolean,
            Value::Number(_) => TypeName::Number,
            Value::Str(_) => TypeName::String,
            Value::Regex(_) => TypeName::RegExp,
            Value::Date(_) => TypeName::Date,
            Value::Array(_) => TypeName::Array,
            Value::Object(_) => TypeName::Object,
            Value::Map(_) => TypeName::Map,
            Value::Set(_) => TypeName::Set,
            Value::Function(_) => TypeName::Function,
            Value::Type(_) => TypeName::Function,
        }
    }

    /// The coarse `typeof`-style class, used by the `like` predicate when
    /// comparing property types.
    pub(crate) fn typeof_class(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Function(_) | Value::Type(_) => "function",
            _ => "object",
        }
    }

    /// Length of the value, for the values that have one (strings count
    /// characters, arrays count elements).
    pub(crate) fn length(&self) -> Option<usize> {
        match self {
            Value::Str(s) => Some(s.chars().count()),
            Value::Array(items) => Some(items.len()),
            _ => None,
        }
    }
}

/// Numeric coercion: `Null` is zero, booleans are zero or one, numeric
/// strings parse, everything else is `NaN`.
pub(crate) fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => *n,
        Value::Str(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse().unwrap_or(f64::NAN)
            }
        }
        _ => f64::NAN,
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            // f64 equality: NaN != NaN, -0 == 0.
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Regex(a), Value::Regex(b)) => a.as_str() == b.as_str(),
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Arc::ptr_eq(a, b),
            (Value::Type(a), Value::Type(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("Undefined"),
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Regex(r) => f.debug_tuple("Regex").field(&r.as_str()).finish(),
            Value::Date(d) => f.debug_tuple("Date").field(d).finish(),
            Value::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Value::Object(props) => f.debug_tuple("Object").field(props).finish(),
            Value::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Value::Set(items) => f.debug_tuple("Set").field(items).finish(),
            Value::Function(_) => f.write_str("Function"),
            Value::Type(t) => f.debug_tuple("Type").field(t).finish(),
        }
    }
}

impl fmt::Display for Value {
    /// The default string form of a value, used by the message formatter
    /// for everything that isn't quoted or rendered as a type name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Str(s) => f.write_str(s),
            Value::Regex(r) => write!(f, "/{}/", r.as_str()),
            Value::Date(d) => write!(f, "{d}"),
            Value::Array(items) => {
                let mut first = true;
                for item in items {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Value::Object(_) => f.write_str("[object Object]"),
            Value::Map(_) => f.write_str("[object Map]"),
            Value::Set(_) => f.write_str("[object Set]"),
            Value::Function(_) => f.write_str("function"),
            Value::Type(t) => f.write_str(t.name()),
        }
    }
}

/// Numbers print without a trailing `.0` when integral, and the
/// non-finite values by name.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if n.fract() == 0.0 && n.abs() < 9.007_199_254_740_992e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Value {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Value {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Value {
        Value::Array(items)
    }
}

impl From<TypeName> for Value {
    fn from(t: TypeName) -> Value {
        Value::Type(t)
    }
}
