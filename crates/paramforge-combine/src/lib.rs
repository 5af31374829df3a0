//! ParamForge Combine - The generation and deduplication engine
//!
//! This crate turns `(domains, rules)` into the minimal deduplicated set of
//! test-configuration instances:
//! - Cartesian-product enumeration over the candidate-value domains
//! - Don't-care filtering that physically strips irrelevant parameters
//! - A rule-aware instance ordering used by the deduplicating set
//! - The [`Combinator`] orchestrating a generation pass, set union and
//!   deterministic instance naming
//!
//! Generation is a pure synchronous transform: no I/O, no suspension
//! points, no internal backpressure. Work is bounded entirely by the
//! product of the domain cardinalities the caller supplies.

pub mod combinator;
pub mod ordering;
pub mod product;
pub mod relevance;
pub mod set;

pub use combinator::{instance_name, Combinator};
pub use ordering::InstanceOrdering;
pub use product::{cartesian_product, for_each_combination};
pub use relevance::{irrelevant_names, strip_irrelevant};
pub use set::InstanceSet;
