//! Primitive types
//!
//! This module defines the fixed-size integer types provided by the crate.
//!
//! Primitives are simple, fixed-size, dependency-free building blocks that
//! provide well-defined semantics and predictable behavior. They mirror
//! native unsigned integers rather than full big-integer libraries.
//!
//! Current primitives include:
//! - `U128`: a 128-bit unsigned integer made of two 64-bit limbs

mod u128;

/// Fixed-size unsigned integer primitives.
pub use self::u128::{TryFromU128Error, U128};
