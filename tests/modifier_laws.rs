//! Property-based tests for the modifier laws

use proptest::prelude::*;
use vouch::{modifier, registry, Shape, Value};

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<f64>().prop_map(Value::Number),
        "[a-z]{0,8}".prop_map(Value::from),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,3}", inner, 0..4).prop_map(Value::Object),
        ]
    })
}

const UNARY_LEAVES: &[&str] = &[
    "integer",
    "number",
    "string",
    "nonEmptyString",
    "boolean",
    "array",
    "object",
    "assigned",
    "primitive",
    "positive",
    "even",
];

proptest! {
    #[test]
    fn prop_negation_inverts(v in value()) {
        let ns = registry();
        for name in UNARY_LEAVES {
            let plain = ns.predicates().get(name).unwrap();
            let negated = ns.not().get(name).unwrap();
            prop_assert_eq!(negated.check_one(&v), !plain.check_one(&v));
        }
    }

    #[test]
    fn prop_double_negation_is_identity(v in value()) {
        let ns = registry();
        for name in UNARY_LEAVES {
            let plain = ns.predicates().get(name).unwrap();
            let round_trip = modifier::negate(&modifier::negate(plain));
            prop_assert_eq!(round_trip.check_one(&v), plain.check_one(&v));
        }
    }

    #[test]
    fn prop_nullable_defers_on_assigned_subjects(v in value()) {
        let ns = registry();
        for name in UNARY_LEAVES {
            let plain = ns.predicates().get(name).unwrap();
            let tolerant = ns.maybe().get(name).unwrap();
            let expected = if v.is_assigned() { plain.check_one(&v) } else { true };
            prop_assert_eq!(tolerant.check_one(&v), expected);
        }
    }

    #[test]
    fn prop_element_wise_is_conjunction(items in prop::collection::vec(scalar(), 0..8)) {
        let ns = registry();
        for name in UNARY_LEAVES {
            let plain = ns.predicates().get(name).unwrap();
            let of = ns.of("array", name).unwrap();
            let expected = items.iter().all(|v| plain.check_one(v));
            let collection = Value::Array(items.clone());
            prop_assert_eq!(of.check_one(&collection), expected);
        }
    }

    #[test]
    fn prop_assert_passes_through_exactly_when_true(v in value()) {
        let ns = registry();
        for name in UNARY_LEAVES {
            let plain = ns.predicates().get(name).unwrap();
            let asserting = ns.assert().get(name).unwrap();
            match asserting.check(std::slice::from_ref(&v)) {
                Ok(passed) => {
                    prop_assert!(plain.check_one(&v));
                    // strict equality rejects NaN == NaN, so compare the
                    // debug rendering instead
                    prop_assert_eq!(format!("{passed:?}"), format!("{v:?}"));
                }
                Err(err) => {
                    prop_assert!(!plain.check_one(&v));
                    prop_assert!(!err.message.is_empty());
                }
            }
        }
    }

    #[test]
    fn prop_maybe_of_never_fails_on_absent_elements(
        items in prop::collection::vec(prop_oneof![Just(Value::Null), (0i32..100).prop_map(Value::from)], 0..8)
    ) {
        let ns = registry();
        let tolerant = ns.maybe().get("array.of.integer").unwrap();
        prop_assert!(tolerant.check_one(&Value::Array(items.clone())));
    }

    #[test]
    fn prop_collection_of_composes_with_negate(items in prop::collection::vec(scalar(), 0..6)) {
        let integer = registry().predicates().get("integer").unwrap();
        let of = modifier::collection_of(Shape::Array, integer);
        let negated = modifier::negate(&of);
        let collection = Value::Array(items);
        prop_assert_eq!(negated.check_one(&collection), !of.check_one(&collection));
    }
}

#[test]
fn nan_subjects_obey_the_negation_law_too() {
    let ns = registry();
    let nan = Value::Number(f64::NAN);
    assert!(!ns.predicates().get("number").unwrap().check_one(&nan));
    assert!(ns.not().get("number").unwrap().check_one(&nan));
    assert!(ns.predicates().get("primitive").unwrap().check_one(&nan));
}
