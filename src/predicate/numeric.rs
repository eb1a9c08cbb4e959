//! Numeric leaf predicates
//!
//! A value is a "number" here when it is a finite [`Value::Number`]; `NaN`
//! and the infinities only satisfy the predicates that name them. The
//! comparison predicates coerce their bound arguments numerically, so a
//! bound that does not coerce (`NaN`) fails every comparison.

use crate::value::{coerce_number, Value};

fn num(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => Some(*n),
        _ => None,
    }
}

/// `data` is exactly zero.
pub(crate) fn zero(data: &Value) -> bool {
    matches!(data, Value::Number(n) if *n == 0.0)
}

/// `data` is exactly one.
pub(crate) fn one(data: &Value) -> bool {
    matches!(data, Value::Number(n) if *n == 1.0)
}

/// `data` is positive or negative infinity.
pub(crate) fn infinity(data: &Value) -> bool {
    matches!(data, Value::Number(n) if n.is_infinite())
}

/// `data` is a finite number.
pub(crate) fn number(data: &Value) -> bool {
    matches!(data, Value::Number(n) if n.is_finite())
}

/// `data` is a number with no fractional part.
pub(crate) fn integer(data: &Value) -> bool {
    matches!(data, Value::Number(n) if *n % 1.0 == 0.0)
}

/// `data` is a finite non-integer number.
pub(crate) fn float(data: &Value) -> bool {
    matches!(data, Value::Number(n) if n.is_finite() && *n % 1.0 != 0.0)
}

/// `data` is an even number.
pub(crate) fn even(data: &Value) -> bool {
    matches!(data, Value::Number(n) if *n % 2.0 == 0.0)
}

/// `data` is an odd integer.
pub(crate) fn odd(data: &Value) -> bool {
    integer(data) && matches!(data, Value::Number(n) if *n % 2.0 != 0.0)
}

/// `lhs` is a number greater than `rhs`.
pub(crate) fn greater(lhs: &Value, rhs: &Value) -> bool {
    number(lhs) && num(lhs).is_some_and(|a| a > coerce_number(rhs))
}

/// `lhs` is a number less than `rhs`.
pub(crate) fn less(lhs: &Value, rhs: &Value) -> bool {
    number(lhs) && num(lhs).is_some_and(|a| a < coerce_number(rhs))
}

/// `data` lies strictly between `x` and `y`, whichever order the bounds
/// are given in.
pub(crate) fn between(data: &Value, x: &Value, y: &Value) -> bool {
    let (cx, cy) = (coerce_number(x), coerce_number(y));
    if cx < cy {
        greater(data, x) && num(data).is_some_and(|n| n < cy)
    } else {
        less(data, x) && num(data).is_some_and(|n| n > cy)
    }
}

/// `lhs` is a number greater than or equal to `rhs`.
pub(crate) fn greater_or_equal(lhs: &Value, rhs: &Value) -> bool {
    number(lhs) && num(lhs).is_some_and(|a| a >= coerce_number(rhs))
}

/// `lhs` is a number less than or equal to `rhs`.
pub(crate) fn less_or_equal(lhs: &Value, rhs: &Value) -> bool {
    number(lhs) && num(lhs).is_some_and(|a| a <= coerce_number(rhs))
}

/// `data` lies in the inclusive range `x..y`, whichever order the bounds
/// are given in.
pub(crate) fn in_range(data: &Value, x: &Value, y: &Value) -> bool {
    let (cx, cy) = (coerce_number(x), coerce_number(y));
    if cx < cy {
        greater_or_equal(data, x) && num(data).is_some_and(|n| n <= cy)
    } else {
        less_or_equal(data, x) && num(data).is_some_and(|n| n >= cy)
    }
}

/// `data` is a positive number.
pub(crate) fn positive(data: &Value) -> bool {
    greater(data, &Value::Number(0.0))
}

/// `data` is a negative number.
pub(crate) fn negative(data: &Value) -> bool {
    less(data, &Value::Number(0.0))
}
