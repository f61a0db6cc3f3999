//! Word-level arithmetic primitives
//!
//! This module provides the 64-bit building blocks that `U128` is
//! assembled from:
//! - `add64`: `u64 + u64 → U128`, the carry landing in the high limb
//! - `mul64`: `u64 × u64 → U128`, the exact widened product
//!
//! `mul64` has three interchangeable substrates. Exactly one of them is
//! selected at compile time, following the target capabilities and the
//! crate features:
//!
//! - `intrinsic`
//!   `x86_64` builds with the `bmi2` target feature enabled use the
//!   `mulx` instruction through `_mulx_u64`.
//!
//! - `native`
//!   All other builds widen both operands to the compiler's `u128` and
//!   split the product into its two halves.
//!
//! - `portable`
//!   The `portable` feature forces the 32-bit split algorithm, which only
//!   ever multiplies and adds quantities fitting in 64 bits.
//!
//! All substrates produce bit-identical results on every input. The
//! portable and native routines are always compiled and exported so they
//! can be compared against each other.
//!
//! `mul64` is intentionally not a `const fn`: the intrinsic substrate
//! cannot be evaluated at compile time. Constant contexts can call
//! [`mul64_portable`] or [`mul64_native`] directly.

mod native;
mod portable;

#[cfg(all(
    target_arch = "x86_64",
    target_feature = "bmi2",
    not(feature = "portable")
))]
mod intrinsic;

pub use native::mul64_native;
pub use portable::mul64_portable;

#[cfg(all(
    target_arch = "x86_64",
    target_feature = "bmi2",
    not(feature = "portable")
))]
pub use intrinsic::mul64_intrinsic;

use crate::primitives::U128;

/// Adds two 64-bit words, returning the full 65-bit sum as a `U128`.
///
/// The high limb is `1` exactly when the low-limb addition wrapped.
#[inline(always)]
pub const fn add64(a: u64, b: u64) -> U128 {
    let lo = a.wrapping_add(b);
    let hi = (lo < a) as u64;

    U128::new(lo, hi)
}

/// Returns the exact 128-bit product of two 64-bit words.
///
/// Dispatches to the fastest substrate available for the build target.
#[cfg(all(
    target_arch = "x86_64",
    target_feature = "bmi2",
    not(feature = "portable")
))]
#[inline(always)]
pub fn mul64(a: u64, b: u64) -> U128 {
    mul64_intrinsic(a, b)
}

/// Returns the exact 128-bit product of two 64-bit words.
///
/// Dispatches to the fastest substrate available for the build target.
#[cfg(all(
    not(feature = "portable"),
    not(all(target_arch = "x86_64", target_feature = "bmi2"))
))]
#[inline(always)]
pub fn mul64(a: u64, b: u64) -> U128 {
    mul64_native(a, b)
}

/// Returns the exact 128-bit product of two 64-bit words.
///
/// The `portable` feature is enabled, so this always uses the 32-bit
/// split algorithm.
#[cfg(feature = "portable")]
#[inline(always)]
pub fn mul64(a: u64, b: u64) -> U128 {
    mul64_portable(a, b)
}

/// Returns the product that the portable algorithm is checked against.
///
/// This is the `mulx` instruction when it is compiled in. It never routes
/// through [`mul64_portable`], even when the `portable` feature is enabled.
#[cfg(all(
    target_arch = "x86_64",
    target_feature = "bmi2",
    not(feature = "portable")
))]
#[inline(always)]
pub fn mul64_reference(a: u64, b: u64) -> U128 {
    mul64_intrinsic(a, b)
}

/// Returns the product that the portable algorithm is checked against.
///
/// Without the `mulx` instruction this is the native `u128` product. It
/// never routes through [`mul64_portable`], even when the `portable`
/// feature is enabled.
#[cfg(not(all(
    target_arch = "x86_64",
    target_feature = "bmi2",
    not(feature = "portable")
)))]
#[inline(always)]
pub fn mul64_reference(a: u64, b: u64) -> U128 {
    mul64_native(a, b)
}

// The portable routine is a `const fn`, so its hardest carry path can be
// checked before any runtime code exists.
const _: () = {
    let p = mul64_portable(u64::MAX, u64::MAX);
    assert!(p.lo == 1 && p.hi == u64::MAX - 1, "portable multiply failed");
};
