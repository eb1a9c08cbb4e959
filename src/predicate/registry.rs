//! The leaf predicate table
//!
//! One row per leaf: registry key, message-template suffix, collection
//! shape for the shape predicates, and the test function. The namespace
//! builder derives every modified variant from this table alone, so
//! adding a row is all it takes to get the full closure of `not`,
//! `maybe`, `assert` and `.of` forms.

use super::{collection, misc, numeric, string, LeafFn, Shape};

pub(crate) struct LeafDef {
    /// Registry key. Keys are camelCase lookup names, not identifiers.
    pub name: &'static str,
    /// Completion of the phrase "expected {a} to ...".
    pub suffix: &'static str,
    /// Set for the four collection-shape predicates.
    pub shape: Option<Shape>,
    pub func: LeafFn,
}

fn leaf(name: &'static str, suffix: &'static str, func: LeafFn) -> LeafDef {
    LeafDef {
        name,
        suffix,
        shape: None,
        func,
    }
}

fn shaped(name: &'static str, suffix: &'static str, shape: Shape, func: LeafFn) -> LeafDef {
    LeafDef {
        name,
        suffix,
        shape: Some(shape),
        func,
    }
}

pub(crate) fn leaves() -> Vec<LeafDef> {
    use LeafFn::{One, Three, Two};
    vec![
        leaf("equal", "equal {e}", Two(misc::equal)),
        leaf("undefined", "be undefined", One(misc::undefined)),
        leaf("null", "be null", One(misc::null)),
        leaf("assigned", "be assigned", One(misc::assigned)),
        leaf("primitive", "be primitive type", One(misc::primitive)),
        leaf("contains", "contain {e}", Two(collection::contains)),
        leaf("in", "be in {e}", Two(collection::is_in)),
        leaf("containsKey", "contain key {e}", Two(collection::contains_key)),
        leaf("keyIn", "be key in {e}", Two(collection::key_in)),
        leaf("zero", "be 0", One(numeric::zero)),
        leaf("one", "be 1", One(numeric::one)),
        leaf("infinity", "be infinity", One(numeric::infinity)),
        leaf("number", "be Number", One(numeric::number)),
        leaf("integer", "be integer", One(numeric::integer)),
        leaf("float", "be non-integer number", One(numeric::float)),
        leaf("even", "be even number", One(numeric::even)),
        leaf("odd", "be odd number", One(numeric::odd)),
        leaf("greater", "be greater than {e}", Two(numeric::greater)),
        leaf("less", "be less than {e}", Two(numeric::less)),
        leaf("between", "be between {e} and {e2}", Three(numeric::between)),
        leaf(
            "greaterOrEqual",
            "be greater than or equal to {e}",
            Two(numeric::greater_or_equal),
        ),
        leaf(
            "lessOrEqual",
            "be less than or equal to {e}",
            Two(numeric::less_or_equal),
        ),
        leaf("inRange", "be in the range {e} to {e2}", Three(numeric::in_range)),
        leaf("positive", "be positive number", One(numeric::positive)),
        leaf("negative", "be negative number", One(numeric::negative)),
        leaf("string", "be String", One(string::string)),
        leaf("emptyString", "be empty string", One(string::empty_string)),
        leaf("nonEmptyString", "be non-empty string", One(string::non_empty_string)),
        leaf("match", "match {e}", Two(string::matches)),
        leaf("boolean", "be Boolean", One(misc::boolean)),
        shaped("object", "be Object", Shape::Object, One(collection::object)),
        leaf("emptyObject", "be empty object", One(collection::empty_object)),
        leaf("nonEmptyObject", "be non-empty object", One(collection::non_empty_object)),
        leaf("instanceStrict", "be instanceof {t}", Two(misc::instance_strict)),
        leaf("thenable", "be promise-like", One(misc::thenable)),
        leaf("instance", "be {t}", Two(misc::instance)),
        leaf("like", "be like {e}", Two(misc::like)),
        shaped("array", "be Array", Shape::Array, One(collection::array)),
        leaf("emptyArray", "be empty array", One(collection::empty_array)),
        leaf("nonEmptyArray", "be non-empty array", One(collection::non_empty_array)),
        shaped(
            "arrayLike",
            "be array-like",
            Shape::ArrayLike,
            One(collection::array_like),
        ),
        shaped(
            "iterable",
            "be iterable",
            Shape::Iterable,
            One(collection::iterable),
        ),
        leaf("date", "be valid Date", One(misc::date)),
        leaf("function", "be Function", One(misc::function)),
        leaf("hasLength", "have length {e}", Two(collection::has_length)),
        leaf("throws", "throw", One(misc::throws)),
    ]
}

/// The default assertion message for a leaf.
pub(crate) fn template(suffix: &str) -> String {
    format!("assert failed: expected {{a}} to {suffix}")
}
