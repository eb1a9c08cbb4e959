//! Named predicates over dynamic values
//!
//! A [`Predicate`] is a total boolean test: it carries a name, an explicit
//! arity (the number of argument positions it reads, recorded at
//! construction rather than inferred), a [`Kind`] tag describing which
//! modifiers produced it, a message template for the asserting layer, and
//! the test function itself. Predicates never panic and never raise; the
//! only raising layer in the crate is [`crate::Assertion`].
//!
//! Leaf predicates live in the private submodules and are registered by
//! name in the leaf table; the modifiers in [`modifier`] derive new
//! predicates from existing ones.
//!
//! # Example
//!
//! ```rust
//! use vouch::{registry, Value};
//!
//! let integer = registry().predicates().get("integer").unwrap();
//! assert!(integer.check(&[Value::from(4)]));
//! assert!(!integer.check(&[Value::from(4.5)]));
//! ```

pub mod modifier;
pub(crate) mod registry;

mod collection;
mod misc;
mod numeric;
mod string;

use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// The boxed test function at the heart of every predicate.
///
/// Missing argument positions are seen as [`Value::Undefined`].
pub type PredicateFn = Arc<dyn Fn(&[Value]) -> bool + Send + Sync>;

/// Which modifiers produced a predicate.
///
/// The tag is carried through composition so that later wrapping can
/// branch on provenance: the element-wise modifier skips absent elements
/// exactly when its element predicate is `Nullable`, and the aggregate
/// helpers treat a `Nullable` test on an absent container as passing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// A leaf predicate, unmodified.
    Plain,
    /// Derived by [`modifier::negate`].
    Negated,
    /// Derived by [`modifier::nullable`].
    Nullable,
    /// Derived by [`modifier::collection_of`].
    CollectionWrapped,
}

/// The four collection shapes eligible for element-wise application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Arrays only.
    Array,
    /// Values with a length: arrays and strings.
    ArrayLike,
    /// Values with native iteration: arrays, strings, sets and maps.
    Iterable,
    /// Plain objects, iterated over their own values in key order.
    Object,
}

impl Shape {
    /// The registry key of the shape's leaf predicate.
    pub fn key(self) -> &'static str {
        match self {
            Shape::Array => "array",
            Shape::ArrayLike => "arrayLike",
            Shape::Iterable => "iterable",
            Shape::Object => "object",
        }
    }

    /// Shape check, identical to the corresponding leaf predicate.
    pub(crate) fn matches(self, value: &Value) -> bool {
        match self {
            Shape::Array => matches!(value, Value::Array(_)),
            Shape::ArrayLike => matches!(value, Value::Array(_) | Value::Str(_)),
            Shape::Iterable => matches!(
                value,
                Value::Array(_) | Value::Str(_) | Value::Set(_) | Value::Map(_)
            ),
            Shape::Object => matches!(value, Value::Object(_)),
        }
    }

    /// Coerce a matching collection into an ordered element sequence.
    ///
    /// Strings yield one-character strings, objects yield their own
    /// values in key order, and maps yield entries as two-element arrays.
    /// Returns `None` when the value fails the shape check.
    pub(crate) fn coerce(self, value: &Value) -> Option<Vec<Value>> {
        if !self.matches(value) {
            return None;
        }
        Some(match value {
            Value::Array(items) => items.clone(),
            Value::Str(s) => s.chars().map(|c| Value::Str(c.to_string())).collect(),
            Value::Set(items) => items.clone(),
            Value::Map(entries) => entries
                .iter()
                .map(|(k, v)| Value::Array(vec![k.clone(), v.clone()]))
                .collect(),
            Value::Object(props) => props.values().cloned().collect(),
            // matches() rules everything else out
            _ => return None,
        })
    }
}

/// A leaf test function with its argument positions spelled out.
///
/// Arity follows from the variant, so the registry cannot disagree with
/// the function it registers.
#[derive(Clone, Copy)]
pub(crate) enum LeafFn {
    /// Unary test.
    One(fn(&Value) -> bool),
    /// Binary test.
    Two(fn(&Value, &Value) -> bool),
    /// Ternary test.
    Three(fn(&Value, &Value, &Value) -> bool),
}

impl LeafFn {
    fn arity(self) -> usize {
        match self {
            LeafFn::One(_) => 1,
            LeafFn::Two(_) => 2,
            LeafFn::Three(_) => 3,
        }
    }
}

/// A named, total, boolean-valued test over dynamic values.
#[derive(Clone)]
pub struct Predicate {
    name: String,
    arity: usize,
    kind: Kind,
    shape: Option<Shape>,
    template: String,
    run: PredicateFn,
}

impl Predicate {
    /// Build a leaf predicate from its registry entry.
    pub(crate) fn leaf(
        name: &str,
        shape: Option<Shape>,
        template: String,
        func: LeafFn,
    ) -> Predicate {
        let run: PredicateFn = Arc::new(move |args: &[Value]| {
            let arg = |i: usize| args.get(i).unwrap_or(&Value::Undefined);
            match func {
                LeafFn::One(f) => f(arg(0)),
                LeafFn::Two(f) => f(arg(0), arg(1)),
                LeafFn::Three(f) => f(arg(0), arg(1), arg(2)),
            }
        });
        Predicate {
            name: name.to_string(),
            arity: func.arity(),
            kind: Kind::Plain,
            shape,
            template,
            run,
        }
    }

    /// Build a modifier-derived predicate.
    pub(crate) fn derived(
        name: String,
        arity: usize,
        kind: Kind,
        shape: Option<Shape>,
        template: String,
        run: PredicateFn,
    ) -> Predicate {
        Predicate {
            name,
            arity,
            kind,
            shape,
            template,
            run,
        }
    }

    /// The predicate's name, e.g. `"integer"` or `"maybe integer"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How many argument positions the predicate reads. Trailing override
    /// arguments to the asserting layer start at this index.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Which modifiers produced this predicate.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The collection shape, for collection-capable predicates.
    pub fn shape(&self) -> Option<Shape> {
        self.shape
    }

    /// The default assertion message template.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Evaluate the predicate. Total: every input maps to a boolean.
    #[inline]
    pub fn check(&self, args: &[Value]) -> bool {
        (self.run)(args)
    }

    /// Evaluate the predicate on a single subject value.
    #[inline]
    pub fn check_one(&self, value: &Value) -> bool {
        self.check(std::slice::from_ref(value))
    }

    pub(crate) fn run(&self) -> &PredicateFn {
        &self.run
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("kind", &self.kind)
            .field("shape", &self.shape)
            .finish()
    }
}
