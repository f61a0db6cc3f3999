//! 64×64 → 128-bit multiplication through the compiler's `u128`.

use crate::primitives::U128;

/// Returns the exact 128-bit product of `a` and `b` by widening both
/// operands to `u128`.
///
/// Usable in constant contexts. Also serves as the oracle the portable
/// algorithm is tested against.
#[inline(always)]
pub const fn mul64_native(a: u64, b: u64) -> U128 {
    let prod = (a as u128) * (b as u128);

    U128::new(prod as u64, (prod >> 64) as u64)
}
