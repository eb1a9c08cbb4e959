//! Error types
//!
//! Two failures can surface from this crate. [`AssertionError`] is the
//! asserting namespace's raise path: a rendered message plus a
//! [`FailureKind`] selector. [`SpecError`] is the aggregate helpers'
//! rejection of a structurally invalid result. Plain predicate falsehood
//! is never an error; it is an ordinary boolean result.

use std::fmt;
use thiserror::Error;

/// The error-kind selector carried by an [`AssertionError`].
///
/// Defaults to a generic type-mismatch kind; callers may select another
/// kind per call, either programmatically or by passing a type reference
/// after the override message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// The default kind.
    TypeMismatch,
    /// A caller-selected kind, carried by name.
    Named(String),
}

impl FailureKind {
    /// The kind's display name.
    pub fn name(&self) -> &str {
        match self {
            FailureKind::TypeMismatch => "TypeError",
            FailureKind::Named(name) => name,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Default for FailureKind {
    fn default() -> Self {
        FailureKind::TypeMismatch
    }
}

/// An assertion failed: the wrapped predicate evaluated false.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssertionError {
    /// The rendered failure message.
    pub message: String,
    /// The resolved error kind.
    pub kind: FailureKind,
}

impl AssertionError {
    pub(crate) fn new(message: String, kind: FailureKind) -> Self {
        AssertionError { message, kind }
    }
}

/// The aggregate helpers received a structurally invalid input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SpecError {
    /// `all`/`any` expect an array- or object-shaped result structure,
    /// not a bare boolean.
    #[error("malformed spec: expected an array or object of results")]
    ScalarResult,
}
