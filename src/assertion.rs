//! The asserting modifier
//!
//! [`Assertion`] wraps any predicate so that a false result becomes an
//! [`AssertionError`] and a true result returns the validated subject,
//! letting assertions chain as validating identity functions. This is the
//! only raising layer in the crate; every other modifier is total.
//!
//! Trailing overrides are located by the wrapped predicate's explicit
//! arity `n`: an argument at position `n` that is a non-empty string
//! replaces the default message (and is used verbatim, without
//! placeholder substitution), and an argument at `n + 1` that is a type
//! reference selects the error kind.
//!
//! # Example
//!
//! ```rust
//! use vouch::{registry, Value};
//!
//! let assert_integer = registry().assert().get("integer").unwrap();
//! assert_eq!(assert_integer.check(&[Value::from(4)]), Ok(Value::from(4)));
//! let err = assert_integer.check(&[Value::from(4.5)]).unwrap_err();
//! assert_eq!(err.message, "assert failed: expected 4.5 to be integer");
//! ```

use crate::error::{AssertionError, FailureKind};
use crate::message;
use crate::predicate::Predicate;
use crate::value::Value;

/// A predicate wrapped with raise-on-failure semantics.
#[derive(Clone, Debug)]
pub struct Assertion {
    predicate: Predicate,
}

impl Assertion {
    /// Wrap `predicate`. The predicate's own template becomes the default
    /// failure message.
    pub fn new(predicate: Predicate) -> Assertion {
        Assertion { predicate }
    }

    /// The wrapped predicate.
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Evaluate the assertion, extracting any trailing overrides from
    /// `args` by arity.
    ///
    /// Returns the subject on success so assertions can be chained as
    /// validating pass-throughs.
    pub fn check(&self, args: &[Value]) -> Result<Value, AssertionError> {
        let n = self.predicate.arity();
        let message = match args.get(n) {
            Some(Value::Str(s)) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        };
        let kind = match args.get(n + 1) {
            Some(Value::Type(t)) => Some(FailureKind::Named(t.name().to_string())),
            _ => None,
        };
        self.evaluate(args, message, kind)
    }

    /// Evaluate the assertion with programmatic overrides instead of
    /// trailing arguments.
    pub fn check_with(
        &self,
        args: &[Value],
        message: Option<&str>,
        kind: Option<FailureKind>,
    ) -> Result<Value, AssertionError> {
        self.evaluate(args, message, kind)
    }

    fn evaluate(
        &self,
        args: &[Value],
        message: Option<&str>,
        kind: Option<FailureKind>,
    ) -> Result<Value, AssertionError> {
        let n = self.predicate.arity();
        let real = &args[..args.len().min(n)];
        if self.predicate.check(real) {
            return Ok(args.first().cloned().unwrap_or(Value::Undefined));
        }
        let rendered = match message {
            Some(text) => text.to_string(),
            None => message::render(self.predicate.template(), real),
        };
        tracing::trace!(predicate = self.predicate.name(), "assertion failed");
        Err(AssertionError::new(
            rendered,
            kind.unwrap_or(FailureKind::TypeMismatch),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::modifier::negate;
    use crate::registry;
    use crate::value::TypeName;

    fn assertion(name: &str) -> Assertion {
        Assertion::new(registry().predicates().get(name).unwrap().clone())
    }

    #[test]
    fn pass_through_returns_the_subject() {
        let a = assertion("nonEmptyString");
        assert_eq!(a.check(&[Value::from("x")]), Ok(Value::from("x")));
    }

    #[test]
    fn failure_renders_the_default_template() {
        let a = assertion("nonEmptyString");
        let err = a.check(&[Value::from("")]).unwrap_err();
        assert_eq!(
            err.message,
            "assert failed: expected \"\" to be non-empty string"
        );
        assert_eq!(err.kind, FailureKind::TypeMismatch);
    }

    #[test]
    fn trailing_message_override_is_used_verbatim() {
        let a = assertion("integer");
        let err = a
            .check(&[Value::from(4.5), Value::from("wanted {a} whole")])
            .unwrap_err();
        assert_eq!(err.message, "wanted {a} whole");
    }

    #[test]
    fn empty_override_string_falls_back_to_the_template() {
        let a = assertion("integer");
        let err = a.check(&[Value::from(4.5), Value::from("")]).unwrap_err();
        assert_eq!(err.message, "assert failed: expected 4.5 to be integer");
    }

    #[test]
    fn trailing_type_selects_the_error_kind() {
        let a = assertion("greater");
        let err = a
            .check(&[
                Value::from(1),
                Value::from(5),
                Value::from("1 is too small"),
                Value::Type(TypeName::Number),
            ])
            .unwrap_err();
        assert_eq!(err.message, "1 is too small");
        assert_eq!(err.kind, FailureKind::Named("Number".to_string()));
    }

    #[test]
    fn programmatic_overrides() {
        let a = assertion("integer");
        let err = a
            .check_with(
                &[Value::from(4.5)],
                Some("nope"),
                Some(FailureKind::Named("RangeError".to_string())),
            )
            .unwrap_err();
        assert_eq!(err.message, "nope");
        assert_eq!(err.kind.name(), "RangeError");
    }

    #[test]
    fn overrides_are_located_by_arity_not_position() {
        // between has arity 3, so the override sits at index 3
        let a = assertion("between");
        let err = a
            .check(&[
                Value::from(5),
                Value::from(1),
                Value::from(2),
                Value::from("out of bounds"),
            ])
            .unwrap_err();
        assert_eq!(err.message, "out of bounds");
    }

    #[test]
    fn negated_assertions_render_the_negated_template() {
        let zero = registry().predicates().get("zero").unwrap();
        let a = Assertion::new(negate(zero));
        let err = a.check(&[Value::from(0)]).unwrap_err();
        assert_eq!(err.message, "assert failed: expected 0 to not be 0");
    }

    #[test]
    fn missing_subject_passes_through_as_undefined() {
        let a = assertion("undefined");
        assert_eq!(a.check(&[]), Ok(Value::Undefined));
    }
}
