//! 128-bit unsigned integer primitive
//!
//! This module defines the `U128` type, a 128-bit unsigned integer built
//! from two 64-bit limbs.
//!
//! `U128` mirrors the semantics of a native fixed-width unsigned integer:
//! arithmetic wraps modulo 2¹²⁸, shifts past the width yield zero, and
//! ordering is numeric. It is meant for targets without a native 128-bit
//! integer, or for code that needs a multiplication path independent of
//! compiler intrinsics.
//!
//! The representation is `(lo, hi)` and remains stable across all
//! operations and conversions.

mod conv;
mod core;
mod fmt;
mod hash;
mod ops;

pub use self::conv::TryFromU128Error;

/// Fixed-size 128-bit unsigned integer.
///
/// This type is re-exported as the primary 128-bit integer primitive.
pub use self::core::U128;
