//! Numeric element constraints for sparse containers
//!
//! This module defines the trait that constrains what types can be stored
//! as entries in sparse rows and matrices.

use core::fmt::{Debug, Display};
use core::ops::{Add, Mul, Neg, Sub};

/// Trait for types that can be stored as matrix elements
///
/// All element types must be:
/// - Copy: values are moved in and out of entries without allocation
/// - PartialEq: the exact-zero test in multiplication needs equality
/// - Display: rows and matrices render their values
/// - closed under `+`, `-`, `*` and negation
pub trait MatrixElement:
    Copy
    + PartialEq
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity, used for every implicit position
    fn zero() -> Self;

    /// Exact comparison against zero (no tolerance)
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Convert from f64 for generic construction
    fn from_f64(value: f64) -> Self;

    /// Convert to f64 for generic operations
    fn to_f64(self) -> f64;
}

impl MatrixElement for f32 {
    fn zero() -> Self {
        0.0
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl MatrixElement for f64 {
    fn zero() -> Self {
        0.0
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }
}
