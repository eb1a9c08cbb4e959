//! # Vouch
//!
//! Runtime value inspection and assertion.
//!
//! Vouch keeps a registry of named predicates over dynamically-typed
//! [`Value`]s ("is this an integer / non-empty string / array / ...") and
//! mechanically derives every modified variant of them: negated (`not`),
//! absent-tolerant (`maybe`), raising (`assert`, including `assert.not`
//! and `assert.maybe`), and element-wise over collections (`C.of.X`).
//! One leaf table in, four closed namespaces out; no per-predicate
//! wiring.
//!
//! ## Quick Example
//!
//! ```rust
//! use vouch::{registry, Value};
//!
//! let ns = registry();
//!
//! // Plain predicates return booleans.
//! assert!(ns.predicates().get("integer").unwrap().check_one(&Value::from(4)));
//! assert!(ns.not().get("integer").unwrap().check_one(&Value::from(4.5)));
//! assert!(ns.maybe().get("integer").unwrap().check_one(&Value::Null));
//!
//! // Element-wise variants exist for every collection shape.
//! let xs = Value::Array(vec![Value::from(1), Value::from(2)]);
//! assert!(ns.predicates().get("array.of.integer").unwrap().check_one(&xs));
//!
//! // Only the asserting namespace raises; on success it returns the
//! // validated subject.
//! let validated = ns.assert().get("nonEmptyString").unwrap()
//!     .check(&[Value::from("hello")])
//!     .expect("valid");
//! assert_eq!(validated, Value::from("hello"));
//! ```
//!
//! ## Structured validation
//!
//! The aggregate helpers apply a shaped spec of predicates over shaped
//! data; see [`aggregate`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod aggregate;
pub mod assertion;
pub mod error;
pub mod namespace;
pub mod predicate;
pub mod value;

mod message;
#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use assertion::Assertion;
#[cfg(feature = "serde")]
pub use serde_impl::NotJson;
pub use error::{AssertionError, FailureKind, SpecError};
pub use namespace::{registry, AssertNamespace, AssertTier, Namespace, Namespaces};
pub use predicate::{modifier, Kind, Predicate, PredicateFn, Shape};
pub use value::{NativeFn, TypeName, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::aggregate::{all, any, map, Outcome, Spec};
    pub use crate::assertion::Assertion;
    pub use crate::error::{AssertionError, FailureKind, SpecError};
    pub use crate::namespace::{registry, Namespaces};
    pub use crate::predicate::{modifier, Kind, Predicate, Shape};
    pub use crate::value::{TypeName, Value};
}
