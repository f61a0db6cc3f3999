//! Portable 64×64 → 128-bit multiplication
//!
//! This module implements the widening multiply using only 64-bit
//! arithmetic: no `u128`, no intrinsics. It is correct on any target with
//! wrapping 64-bit unsigned integers.
//!
//! Each operand is split into 32-bit halves, `a = a1:a0` and `b = b1:b0`,
//! and the four 32×32 partial products are recombined:
//!
//! ```text
//! a·b = (p11 << 64) + ((p01 + p10) << 32) + p00
//! ```
//!
//! The middle terms overlap bits `[32, 96)`, so their carries are
//! propagated explicitly through the accumulators `x` and `y`.

use crate::primitives::U128;

const MASK32: u64 = 0xFFFF_FFFF;

#[inline(always)]
const fn lo32(x: u64) -> u64 {
    x & MASK32
}

#[inline(always)]
const fn hi32(x: u64) -> u64 {
    x >> 32
}

/// Returns the exact 128-bit product of `a` and `b` using only 64-bit
/// arithmetic.
///
/// Usable in constant contexts.
///
/// # Algorithm
///
/// - `p00 = a0·b0`, `p01 = a0·b1`, `p10 = a1·b0`, `p11 = a1·b1`, each
///   fitting in 64 bits
/// - `x = hi32(p00) + lo32(p01) + lo32(p10)` contributes bits `[32, 64)`;
///   `hi32(x)` is its carry into the high word
/// - `y = hi32(p01) + hi32(p10) + lo32(p11) + hi32(x)` contributes bits
///   `[64, 96)` and is at most `3·(2³² − 1) + 2`
/// - low word: `lo32(p00) | (x << 32)`
/// - high word: `y + (hi32(p11) << 32)`
///
/// `y` is added rather than OR-ed because it may exceed 32 bits; those
/// extra bits are carries into the top quarter.
#[inline]
pub const fn mul64_portable(a: u64, b: u64) -> U128 {
    let p00 = lo32(a) * lo32(b);
    let p01 = lo32(a) * hi32(b);
    let p10 = hi32(a) * lo32(b);
    let p11 = hi32(a) * hi32(b);

    // Each term is below 2^32, so the sum fits easily.
    let x = hi32(p00) + lo32(p01) + lo32(p10);
    let y = hi32(p01) + hi32(p10) + lo32(p11) + hi32(x);

    U128::new(lo32(p00) | (x << 32), y + (hi32(p11) << 32))
}
