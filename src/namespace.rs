//! Namespace construction
//!
//! The builder runs once and wires every leaf predicate into four
//! parallel namespaces: plain, negated (`not`), absent-tolerant
//! (`maybe`), and asserting (`assert`, with `not` and `maybe`
//! sub-namespaces). For every collection-shape leaf `C` and every leaf
//! `X`, each namespace additionally carries the element-wise entry
//! `"C.of.X"`, so all eleven derived combinations of a predicate exist by
//! construction, with no per-predicate wiring.
//!
//! The tables are immutable once built; [`registry`] exposes a single
//! process-wide instance behind a `OnceLock`.
//!
//! # Example
//!
//! ```rust
//! use vouch::{registry, Value};
//!
//! let ns = registry();
//! let ints = Value::Array(vec![Value::from(1), Value::from(2)]);
//! assert!(ns.predicates().get("array.of.integer").unwrap().check_one(&ints));
//! assert!(ns.not().get("emptyArray").unwrap().check_one(&ints));
//! assert!(ns.maybe().get("integer").unwrap().check_one(&Value::Null));
//! assert!(ns.assert().get("nonEmptyArray").unwrap().check(&[ints]).is_ok());
//! ```

use crate::assertion::Assertion;
use crate::predicate::modifier::{collection_of, negate, nullable};
use crate::predicate::registry::{leaves, template};
use crate::predicate::{Predicate, Shape};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// An immutable mapping from predicate name to predicate.
///
/// Names are the leaf keys (`"integer"`) plus the dotted element-wise
/// keys (`"array.of.integer"`).
#[derive(Debug, Default)]
pub struct Namespace {
    entries: BTreeMap<String, Predicate>,
}

impl Namespace {
    /// Look up a predicate by name.
    pub fn get(&self, name: &str) -> Option<&Predicate> {
        self.entries.get(name)
    }

    /// Iterate over all registered names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the namespace is empty (it never is after building).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, key: &str, predicate: Predicate) {
        self.entries.insert(key.to_string(), predicate);
    }
}

/// An immutable mapping from predicate name to assertion.
#[derive(Debug, Default)]
pub struct AssertTier {
    entries: BTreeMap<String, Assertion>,
}

impl AssertTier {
    /// Look up an assertion by name.
    pub fn get(&self, name: &str) -> Option<&Assertion> {
        self.entries.get(name)
    }

    /// Iterate over all registered names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the tier is empty (it never is after building).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, key: &str, predicate: Predicate) {
        self.entries.insert(key.to_string(), Assertion::new(predicate));
    }
}

/// The asserting namespace: the base tier plus `not` and `maybe`
/// sub-namespaces.
#[derive(Debug, Default)]
pub struct AssertNamespace {
    base: AssertTier,
    not: AssertTier,
    maybe: AssertTier,
}

impl AssertNamespace {
    /// Look up a base assertion by name.
    pub fn get(&self, name: &str) -> Option<&Assertion> {
        self.base.get(name)
    }

    /// The `assert.not` sub-namespace.
    pub fn not(&self) -> &AssertTier {
        &self.not
    }

    /// The `assert.maybe` sub-namespace.
    pub fn maybe(&self) -> &AssertTier {
        &self.maybe
    }

    /// The base tier, for iteration.
    pub fn base(&self) -> &AssertTier {
        &self.base
    }
}

/// The four namespaces produced by one run of the builder.
#[derive(Debug, Default)]
pub struct Namespaces {
    predicates: Namespace,
    not: Namespace,
    maybe: Namespace,
    assert: AssertNamespace,
}

impl Namespaces {
    /// Build all namespaces from the leaf table. Runs the whole closure:
    /// leaves, modifier tiers, and every `C.of.X` combination.
    pub fn build() -> Namespaces {
        let defs = leaves();
        let mut ns = Namespaces::default();

        let built: Vec<Predicate> = defs
            .iter()
            .map(|d| Predicate::leaf(d.name, d.shape, template(d.suffix), d.func))
            .collect();

        for p in &built {
            ns.register(p.name().to_string(), p);
        }

        let shapes: Vec<(String, Shape)> = built
            .iter()
            .filter_map(|p| p.shape().map(|s| (p.name().to_string(), s)))
            .collect();
        for (collection_name, shape) in &shapes {
            for element in &built {
                let key = format!("{}.of.{}", collection_name, element.name());
                ns.register_of(key, *shape, element);
            }
        }

        tracing::debug!(
            leaves = built.len(),
            entries = ns.predicates.len(),
            "predicate namespaces built"
        );
        ns
    }

    /// Register the five non-`of` tiers of one predicate.
    fn register(&mut self, key: String, p: &Predicate) {
        self.predicates.insert(&key, p.clone());
        self.not.insert(&key, negate(p));
        self.maybe.insert(&key, nullable(p));
        self.assert.base.insert(&key, p.clone());
        self.assert.not.insert(&key, negate(p));
        self.assert.maybe.insert(&key, nullable(p));
    }

    /// Register the six element-wise tiers of one shape/element pair.
    fn register_of(&mut self, key: String, shape: Shape, element: &Predicate) {
        let plain = collection_of(shape, element);
        let tolerant = nullable(&collection_of(shape, &nullable(element)));
        self.predicates.insert(&key, plain.clone());
        self.not.insert(&key, negate(&plain));
        self.maybe.insert(&key, tolerant.clone());
        self.assert.base.insert(&key, plain.clone());
        self.assert.not.insert(&key, negate(&plain));
        self.assert.maybe.insert(&key, tolerant);
    }

    /// The plain predicates.
    pub fn predicates(&self) -> &Namespace {
        &self.predicates
    }

    /// The negated predicates.
    pub fn not(&self) -> &Namespace {
        &self.not
    }

    /// The absent-tolerant predicates.
    pub fn maybe(&self) -> &Namespace {
        &self.maybe
    }

    /// The asserting predicates, with their `not` and `maybe`
    /// sub-namespaces.
    pub fn assert(&self) -> &AssertNamespace {
        &self.assert
    }

    /// Convenience lookup for the element-wise entries:
    /// `of("array", "integer")` is `predicates()["array.of.integer"]`.
    pub fn of(&self, collection: &str, element: &str) -> Option<&Predicate> {
        self.predicates.get(&format!("{collection}.of.{element}"))
    }
}

static REGISTRY: OnceLock<Namespaces> = OnceLock::new();

/// The process-wide namespaces, built on first use and immutable
/// thereafter.
pub fn registry() -> &'static Namespaces {
    REGISTRY.get_or_init(Namespaces::build)
}
