//! Aggregate helpers: `map`, `all`, `any`
//!
//! [`map`] applies a structured [`Spec`] of predicates over a structured
//! value and returns a same-shape structure of booleans; [`all`] and
//! [`any`] reduce such a structure. Specs nest: an object spec's entries
//! may themselves be object or sequence specs, mirroring nested data.
//!
//! # Example
//!
//! ```rust
//! use vouch::{aggregate::{all, map, Spec}, registry, Value};
//!
//! let ns = registry();
//! let spec = Spec::fields([
//!     ("a", Spec::test(ns.predicates().get("integer").unwrap().clone())),
//!     ("b", Spec::test(ns.predicates().get("string").unwrap().clone())),
//! ]);
//! let data = Value::object([("a", Value::from(1)), ("b", Value::from("x"))]);
//! let outcome = map(&data, &spec);
//! assert_eq!(all(&outcome), Ok(true));
//! ```

use crate::error::SpecError;
use crate::predicate::{Kind, Predicate};
use crate::value::Value;
use std::collections::BTreeMap;

/// A structured arrangement of predicates to apply over structured data.
#[derive(Clone, Debug)]
pub enum Spec {
    /// A single test. At top level it fans out over every element or
    /// property of the data; inside a structured spec it applies to the
    /// correspondingly named entry.
    Test(Predicate),
    /// Named tests for object properties, possibly nested.
    Fields(BTreeMap<String, Spec>),
    /// Positional tests for array elements, possibly nested.
    Seq(Vec<Spec>),
}

impl Spec {
    /// A single-predicate spec.
    pub fn test(predicate: Predicate) -> Spec {
        Spec::Test(predicate)
    }

    /// An object-shaped spec from key-spec pairs.
    pub fn fields<K, I>(pairs: I) -> Spec
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Spec)>,
    {
        Spec::Fields(pairs.into_iter().map(|(k, s)| (k.into(), s)).collect())
    }

    /// An array-shaped spec from positional entries.
    pub fn seq<I: IntoIterator<Item = Spec>>(entries: I) -> Spec {
        Spec::Seq(entries.into_iter().collect())
    }
}

impl From<Predicate> for Spec {
    fn from(predicate: Predicate) -> Spec {
        Spec::Test(predicate)
    }
}

/// The same-shape boolean structure produced by [`map`].
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// One test's result.
    Bool(bool),
    /// Results for an object-shaped spec.
    Fields(BTreeMap<String, Outcome>),
    /// Results for an array-shaped spec.
    Seq(Vec<Outcome>),
}

/// Apply `spec` over `data`, producing a same-shape structure of results.
///
/// A bare [`Spec::Test`] fans out over array elements or object property
/// values (scalar data is tested directly). Structured specs match
/// entries by key or index; data entries with no spec counterpart are
/// ignored. When the data container is absent, a test entry passes
/// exactly when its predicate is [`Kind::Nullable`]-derived, so nullable
/// specs tolerate missing substructure instead of erroring on it.
pub fn map(data: &Value, spec: &Spec) -> Outcome {
    match spec {
        Spec::Test(p) => match data {
            Value::Array(items) => {
                Outcome::Seq(items.iter().map(|v| Outcome::Bool(p.check_one(v))).collect())
            }
            Value::Object(props) => Outcome::Fields(
                props
                    .iter()
                    .map(|(k, v)| (k.clone(), Outcome::Bool(p.check_one(v))))
                    .collect(),
            ),
            other => Outcome::Bool(p.check_one(other)),
        },
        Spec::Fields(fields) => Outcome::Fields(
            fields
                .iter()
                .map(|(key, sub)| {
                    let entry = match data {
                        Value::Object(props) => props.get(key),
                        _ => None,
                    };
                    (key.clone(), apply_entry(data, entry, sub))
                })
                .collect(),
        ),
        Spec::Seq(entries) => Outcome::Seq(
            entries
                .iter()
                .enumerate()
                .map(|(i, sub)| {
                    let entry = match data {
                        Value::Array(items) => items.get(i),
                        _ => None,
                    };
                    apply_entry(data, entry, sub)
                })
                .collect(),
        ),
    }
}

fn apply_entry(container: &Value, entry: Option<&Value>, sub: &Spec) -> Outcome {
    match sub {
        Spec::Test(p) => {
            if !container.is_assigned() {
                Outcome::Bool(p.kind() == Kind::Nullable)
            } else {
                Outcome::Bool(p.check_one(entry.unwrap_or(&Value::Undefined)))
            }
        }
        nested => map(entry.unwrap_or(&Value::Undefined), nested),
    }
}

/// Reduce a result structure by logical AND, descending into nested
/// results. A bare boolean is a malformed input.
pub fn all(outcome: &Outcome) -> Result<bool, SpecError> {
    match outcome {
        Outcome::Bool(_) => Err(SpecError::ScalarResult),
        _ => Ok(reduce(outcome, true)),
    }
}

/// Reduce a result structure by logical OR, descending into nested
/// results. A bare boolean is a malformed input.
pub fn any(outcome: &Outcome) -> Result<bool, SpecError> {
    match outcome {
        Outcome::Bool(_) => Err(SpecError::ScalarResult),
        _ => Ok(reduce(outcome, false)),
    }
}

/// `conjunctive` selects AND (true) or OR (false); both short-circuit.
fn reduce(outcome: &Outcome, conjunctive: bool) -> bool {
    match outcome {
        Outcome::Bool(b) => *b,
        Outcome::Seq(items) => {
            if conjunctive {
                items.iter().all(|o| reduce(o, conjunctive))
            } else {
                items.iter().any(|o| reduce(o, conjunctive))
            }
        }
        Outcome::Fields(fields) => {
            if conjunctive {
                fields.values().all(|o| reduce(o, conjunctive))
            } else {
                fields.values().any(|o| reduce(o, conjunctive))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    fn pred(name: &str) -> Predicate {
        registry().predicates().get(name).unwrap().clone()
    }

    fn maybe_pred(name: &str) -> Predicate {
        registry().maybe().get(name).unwrap().clone()
    }

    #[test]
    fn single_test_fans_out_over_arrays() {
        let data = Value::Array(vec![Value::from(1), Value::from("x")]);
        let outcome = map(&data, &Spec::test(pred("integer")));
        assert_eq!(
            outcome,
            Outcome::Seq(vec![Outcome::Bool(true), Outcome::Bool(false)])
        );
    }

    #[test]
    fn single_test_fans_out_over_objects() {
        let data = Value::object([("a", Value::from(1)), ("b", Value::from("x"))]);
        let outcome = map(&data, &Spec::test(pred("integer")));
        let Outcome::Fields(fields) = outcome else {
            panic!("expected object-shaped outcome");
        };
        assert_eq!(fields["a"], Outcome::Bool(true));
        assert_eq!(fields["b"], Outcome::Bool(false));
    }

    #[test]
    fn single_test_on_scalar_data_tests_the_value() {
        assert_eq!(
            map(&Value::from(4), &Spec::test(pred("integer"))),
            Outcome::Bool(true)
        );
    }

    #[test]
    fn field_spec_matches_by_name_and_ignores_extras() {
        let spec = Spec::fields([
            ("a", Spec::test(pred("integer"))),
            ("b", Spec::test(pred("string"))),
        ]);
        let data = Value::object([
            ("a", Value::from(1)),
            ("b", Value::from("x")),
            ("ignored", Value::Null),
        ]);
        let outcome = map(&data, &spec);
        assert_eq!(all(&outcome), Ok(true));
    }

    #[test]
    fn nested_specs_recurse() {
        let spec = Spec::fields([(
            "outer",
            Spec::fields([("inner", Spec::test(pred("integer")))]),
        )]);
        let good = Value::object([("outer", Value::object([("inner", Value::from(1))]))]);
        let bad = Value::object([("outer", Value::object([("inner", Value::from("x"))]))]);
        assert_eq!(all(&map(&good, &spec)), Ok(true));
        assert_eq!(all(&map(&bad, &spec)), Ok(false));
    }

    #[test]
    fn absent_container_respects_nullable_provenance() {
        let strict = Spec::fields([("a", Spec::test(pred("integer")))]);
        let tolerant = Spec::fields([("a", Spec::test(maybe_pred("integer")))]);
        assert_eq!(all(&map(&Value::Undefined, &strict)), Ok(false));
        assert_eq!(all(&map(&Value::Undefined, &tolerant)), Ok(true));
        // the same holds through a nested level
        let nested = Spec::fields([("x", tolerant)]);
        assert_eq!(all(&map(&Value::object([("y", Value::Null)]), &nested)), Ok(true));
    }

    #[test]
    fn missing_field_is_tested_as_undefined() {
        let spec = Spec::fields([("a", Spec::test(pred("integer")))]);
        let data = Value::object([("b", Value::from(1))]);
        assert_eq!(all(&map(&data, &spec)), Ok(false));
    }

    #[test]
    fn seq_spec_matches_by_index() {
        let spec = Spec::seq([Spec::test(pred("integer")), Spec::test(pred("string"))]);
        let data = Value::Array(vec![Value::from(1), Value::from("x")]);
        assert_eq!(all(&map(&data, &spec)), Ok(true));
        let short = Value::Array(vec![Value::from(1)]);
        assert_eq!(all(&map(&short, &spec)), Ok(false));
    }

    #[test]
    fn all_and_any_reduce_and_reject_scalars() {
        let mixed = Outcome::Seq(vec![Outcome::Bool(true), Outcome::Bool(false)]);
        assert_eq!(all(&mixed), Ok(false));
        assert_eq!(any(&mixed), Ok(true));
        assert_eq!(all(&Outcome::Bool(true)), Err(SpecError::ScalarResult));
        assert_eq!(any(&Outcome::Bool(true)), Err(SpecError::ScalarResult));
    }

    #[test]
    fn empty_structures_reduce_vacuously() {
        let empty = Outcome::Seq(vec![]);
        assert_eq!(all(&empty), Ok(true));
        assert_eq!(any(&empty), Ok(false));
    }
}
