//! ParamForge Core - Core types for combinatorial test-configuration generation
//!
//! This crate provides the fundamental abstractions for ParamForge:
//! - `ParamValue`: a type-erased, totally ordered, printable candidate value
//! - `DomainTable`: named parameters and their candidate-value domains
//! - `RuleTable`: conditional-relevance ("don't-care") rules
//! - `Instance`: one concrete, possibly reduced, parameter assignment
//! - The error taxonomy shared by the whole workspace

pub mod domain;
pub mod error;
pub mod value;

pub use domain::{DomainTable, Instance, RuleTable};
pub use error::{CombineError, Result};
pub use value::{ParamValue, ValueKind};
