//! Predicate modifiers
//!
//! The three non-raising modifiers: [`negate`], [`nullable`] and
//! [`collection_of`]. Each is a pure `Predicate -> Predicate`
//! transformation that copies the wrapped predicate's arity, treats
//! argument 0 as the subject, and forwards the remaining arguments
//! unchanged. The raising fourth modifier lives in [`crate::Assertion`].
//!
//! # Example
//!
//! ```rust
//! use vouch::{modifier, registry, Shape, Value};
//!
//! let integer = registry().predicates().get("integer").unwrap();
//! let not_integer = modifier::negate(integer);
//! assert!(not_integer.check(&[Value::from(4.5)]));
//!
//! let integers = modifier::collection_of(Shape::Array, integer);
//! assert!(integers.check(&[Value::Array(vec![Value::from(1), Value::from(2)])]));
//! ```

use super::{Kind, Predicate, PredicateFn, Shape};
use crate::value::Value;
use std::sync::Arc;

/// Rewrite the template's verb phrase, e.g. "to be 0" -> "to not be 0".
fn rewrite_template(template: &str, word: &str) -> String {
    template.replacen(" to ", &format!(" to {word} "), 1)
}

/// Boolean inversion of `predicate`. Arity and shape are copied; the
/// message template gains a "not".
pub fn negate(predicate: &Predicate) -> Predicate {
    let inner = predicate.run().clone();
    let run: PredicateFn = Arc::new(move |args: &[Value]| !inner(args));
    Predicate::derived(
        format!("not {}", predicate.name()),
        predicate.arity(),
        Kind::Negated,
        predicate.shape(),
        rewrite_template(predicate.template(), "not"),
        run,
    )
}

/// Absent-tolerant form of `predicate`: an undefined or null subject
/// passes unconditionally, anything else defers to the wrapped test.
///
/// The result is tagged [`Kind::Nullable`]; [`collection_of`] uses that
/// tag to skip absent elements, and the aggregate helpers use it for
/// absent containers.
pub fn nullable(predicate: &Predicate) -> Predicate {
    let inner = predicate.run().clone();
    let run: PredicateFn = Arc::new(move |args: &[Value]| {
        match args.first() {
            Some(subject) if subject.is_assigned() => inner(args),
            // missing subject counts as undefined
            _ => true,
        }
    });
    Predicate::derived(
        format!("maybe {}", predicate.name()),
        predicate.arity(),
        Kind::Nullable,
        predicate.shape(),
        rewrite_template(predicate.template(), "maybe"),
        run,
    )
}

/// Element-wise application: the derived predicate accepts a collection
/// of the given `shape` and applies `element` to every member,
/// forwarding any trailing arguments to each call.
///
/// A value failing the shape check fails outright. Elements are tested
/// in order with a short circuit on the first failure, so an empty
/// collection passes vacuously. When `element` is
/// [`Kind::Nullable`]-tagged, absent elements are skipped rather than
/// tested. Absent-collection tolerance is not built in here; the maybe
/// namespace gets it by composing [`nullable`] around the result.
pub fn collection_of(shape: Shape, element: &Predicate) -> Predicate {
    let inner = element.run().clone();
    let skip_absent = element.kind() == Kind::Nullable;
    let run: PredicateFn = Arc::new(move |args: &[Value]| {
        let subject = args.first().unwrap_or(&Value::Undefined);
        let Some(items) = shape.coerce(subject) else {
            return false;
        };
        let rest = args.get(1..).unwrap_or(&[]);
        items.iter().all(|item| {
            if skip_absent && !item.is_assigned() {
                return true;
            }
            let mut call = Vec::with_capacity(rest.len() + 1);
            call.push(item.clone());
            call.extend_from_slice(rest);
            inner(&call)
        })
    });
    Predicate::derived(
        format!("{}.of.{}", shape.key(), element.name()),
        element.arity(),
        Kind::CollectionWrapped,
        None,
        element.template().to_string(),
        run,
    )
}
