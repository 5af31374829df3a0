//! Type-erased candidate values with a total order across kinds.
//!
//! Domains mix heterogeneous candidate values (numbers, strings, flags), so
//! the engine needs one value type it can store, compare and print
//! uniformly. Same-kind comparisons delegate to the underlying type;
//! cross-kind comparisons fall back to a stable per-kind rank, so a strict
//! total order exists over any mixed collection and the value is usable as
//! an ordered-container key.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::CombineError;

/// The kind of value stored in a [`ParamValue`].
///
/// The derived `Ord` doubles as the cross-kind rank: comparing values of
/// different kinds orders them `Bool < Int < Float < Str`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    /// Boolean flag.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// String.
    Str,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Str => "string",
        };
        f.write_str(name)
    }
}

/// One immutable candidate value of a parameter.
///
/// Created once by the caller, shared read-only afterwards; all operations
/// have pure value semantics.
///
/// # Examples
///
/// ```
/// use paramforge_core::ParamValue;
///
/// let a = ParamValue::from(100i64);
/// let b = ParamValue::from("car");
///
/// // Same-kind comparisons delegate to the payload, cross-kind
/// // comparisons use the kind rank, so a total order always exists.
/// assert!(a < b);
/// assert_eq!(a.to_string(), "100");
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParamValue {
    /// Boolean flag.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    Str(Arc<str>),
}

impl ParamValue {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            ParamValue::Bool(_) => ValueKind::Bool,
            ParamValue::Int(_) => ValueKind::Int,
            ParamValue::Float(_) => ValueKind::Float,
            ParamValue::Str(_) => ValueKind::Str,
        }
    }

    /// Attempts to extract a bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Attempts to extract an i64 value.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ParamValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Attempts to extract an f64 value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Attempts to extract a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts a bool value, failing with `TypeMismatch` otherwise.
    pub fn try_bool(&self) -> Result<bool, CombineError> {
        self.as_bool().ok_or(CombineError::TypeMismatch {
            expected: ValueKind::Bool,
            actual: self.kind(),
        })
    }

    /// Extracts an i64 value, failing with `TypeMismatch` otherwise.
    pub fn try_i64(&self) -> Result<i64, CombineError> {
        self.as_i64().ok_or(CombineError::TypeMismatch {
            expected: ValueKind::Int,
            actual: self.kind(),
        })
    }

    /// Extracts an f64 value, failing with `TypeMismatch` otherwise.
    pub fn try_f64(&self) -> Result<f64, CombineError> {
        self.as_f64().ok_or(CombineError::TypeMismatch {
            expected: ValueKind::Float,
            actual: self.kind(),
        })
    }

    /// Extracts a string value, failing with `TypeMismatch` otherwise.
    pub fn try_str(&self) -> Result<&str, CombineError> {
        self.as_str().ok_or(CombineError::TypeMismatch {
            expected: ValueKind::Str,
            actual: self.kind(),
        })
    }
}

impl Ord for ParamValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (ParamValue::Bool(a), ParamValue::Bool(b)) => a.cmp(b),
            (ParamValue::Int(a), ParamValue::Int(b)) => a.cmp(b),
            // total_cmp keeps the order total even for NaN and signed zero
            (ParamValue::Float(a), ParamValue::Float(b)) => a.total_cmp(b),
            (ParamValue::Str(a), ParamValue::Str(b)) => a.cmp(b),
            _ => self.kind().cmp(&other.kind()),
        }
    }
}

impl PartialOrd for ParamValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ParamValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ParamValue {}

impl Hash for ParamValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            ParamValue::Bool(v) => v.hash(state),
            ParamValue::Int(v) => v.hash(state),
            // bit-pattern hashing matches the total_cmp-based equality
            ParamValue::Float(v) => v.to_bits().hash(state),
            ParamValue::Str(v) => v.hash(state),
        }
    }
}

impl fmt::Display for ParamValue {
    /// Renders the value for instance names and diagnostics: booleans and
    /// integers in their plain form, floats in scientific form, strings
    /// verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(v) => write!(f, "{}", v),
            ParamValue::Int(v) => write!(f, "{}", v),
            ParamValue::Float(v) => write!(f, "{:e}", v),
            ParamValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(v as i64)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(Arc::from(v))
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Str(Arc::from(v.as_str()))
    }
}
