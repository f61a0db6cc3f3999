//! 64×64 → 128-bit multiplication through the `mulx` instruction
//!
//! Only compiled on `x86_64` targets built with the `bmi2` target feature
//! (for example `-C target-cpu=native` on any Haswell or later CPU).

use crate::primitives::U128;

use core::arch::x86_64::_mulx_u64;

/// Returns the exact 128-bit product of `a` and `b` using `mulx`.
///
/// The instruction returns the low word and writes the high word through
/// the out-parameter.
#[inline(always)]
#[allow(unused_unsafe)]
pub fn mul64_intrinsic(a: u64, b: u64) -> U128 {
    let mut hi = 0u64;

    // SAFETY: this module is only compiled when `bmi2` is enabled for the
    // whole build, so the instruction is always available.
    let lo = unsafe { _mulx_u64(a, b, &mut hi) };

    U128::new(lo, hi)
}
