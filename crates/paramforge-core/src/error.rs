//! Error types for ParamForge

use thiserror::Error;

use crate::value::ValueKind;

/// Main error type for ParamForge operations.
///
/// All variants are configuration or caller errors: none are transient and
/// none are retried internally.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CombineError {
    /// A value was read back as an incompatible type.
    #[error("type mismatch: expected a {expected} value, got a {actual} value")]
    TypeMismatch {
        /// The kind the caller asked for.
        expected: ValueKind,
        /// The kind actually stored.
        actual: ValueKind,
    },

    /// A parameter name was queried that is missing or was dropped as
    /// irrelevant.
    #[error("parameter `{0}` does not exist for this instance")]
    NotFound(String),

    /// Two merged domain tables disagree on a shared parameter's declared
    /// value kind.
    #[error("conflicting domain type for parameter `{name}`: {left} vs {right}")]
    ConflictingDomainType {
        /// The shared parameter name.
        name: String,
        /// Declared kind on the left-hand table.
        left: ValueKind,
        /// Declared kind on the right-hand table.
        right: ValueKind,
    },
}

/// Result type alias for ParamForge operations
pub type Result<T> = std::result::Result<T, CombineError>;
