//! Arithmetic and bitwise operators for `U128`
//!
//! This module implements the standard operator traits on top of the
//! `const fn` building blocks defined in `core`:
//! - addition (`+`, `+=`) with `U128` and `u64` operands, in both orders
//! - multiplication (`*`, `*=`) with `U128` and `u64` operands, in both
//!   orders
//! - bitwise `!`, `&`, `^`, `|` and their compound forms
//! - shifts (`<<`, `>>`) by a `u32` bit count, and their compound forms
//!
//! Addition and multiplication wrap modulo 2¹²⁸ without signalling
//! overflow, matching the behavior of native unsigned integers in release
//! builds.

use super::U128;

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Mul,
    MulAssign, Not, Shl, ShlAssign, Shr, ShrAssign,
};

/// Addition modulo 2¹²⁸.
impl Add for U128 {
    type Output = U128;

    #[inline]
    fn add(self, rhs: U128) -> Self::Output {
        self.wrapping_add(rhs)
    }
}

/// Addition of a 64-bit word modulo 2¹²⁸.
impl Add<u64> for U128 {
    type Output = U128;

    #[inline]
    fn add(self, rhs: u64) -> Self::Output {
        self.wrapping_add_u64(rhs)
    }
}

impl Add<U128> for u64 {
    type Output = U128;

    #[inline]
    fn add(self, rhs: U128) -> Self::Output {
        rhs.wrapping_add_u64(self)
    }
}

impl AddAssign for U128 {
    #[inline]
    fn add_assign(&mut self, rhs: U128) {
        *self = self.wrapping_add(rhs);
    }
}

impl AddAssign<u64> for U128 {
    #[inline]
    fn add_assign(&mut self, rhs: u64) {
        *self = self.wrapping_add_u64(rhs);
    }
}

/// Multiplication modulo 2¹²⁸.
///
/// The result is truncated to 128 bits.
impl Mul for U128 {
    type Output = U128;

    #[inline]
    fn mul(self, rhs: U128) -> Self::Output {
        self.wrapping_mul(rhs)
    }
}

/// Multiplication by a 64-bit word modulo 2¹²⁸.
impl Mul<u64> for U128 {
    type Output = U128;

    #[inline]
    fn mul(self, rhs: u64) -> Self::Output {
        self.wrapping_mul_u64(rhs)
    }
}

impl Mul<U128> for u64 {
    type Output = U128;

    #[inline]
    fn mul(self, rhs: U128) -> Self::Output {
        rhs.wrapping_mul_u64(self)
    }
}

impl MulAssign for U128 {
    #[inline]
    fn mul_assign(&mut self, rhs: U128) {
        *self = self.wrapping_mul(rhs);
    }
}

impl MulAssign<u64> for U128 {
    #[inline]
    fn mul_assign(&mut self, rhs: u64) {
        *self = self.wrapping_mul_u64(rhs);
    }
}

impl Not for U128 {
    type Output = U128;

    #[inline]
    fn not(self) -> Self::Output {
        self.bit_not()
    }
}

impl BitAnd for U128 {
    type Output = U128;

    #[inline]
    fn bitand(self, rhs: U128) -> Self::Output {
        self.bit_and(rhs)
    }
}

impl BitAndAssign for U128 {
    #[inline]
    fn bitand_assign(&mut self, rhs: U128) {
        *self = self.bit_and(rhs);
    }
}

impl BitXor for U128 {
    type Output = U128;

    #[inline]
    fn bitxor(self, rhs: U128) -> Self::Output {
        self.bit_xor(rhs)
    }
}

impl BitXorAssign for U128 {
    #[inline]
    fn bitxor_assign(&mut self, rhs: U128) {
        *self = self.bit_xor(rhs);
    }
}

impl BitOr for U128 {
    type Output = U128;

    #[inline]
    fn bitor(self, rhs: U128) -> Self::Output {
        self.bit_or(rhs)
    }
}

impl BitOrAssign for U128 {
    #[inline]
    fn bitor_assign(&mut self, rhs: U128) {
        *self = self.bit_or(rhs);
    }
}

/// Logical left shift (`<<`) by a bit count.
///
/// Shifts greater than or equal to 128 bits yield zero.
impl Shl<u32> for U128 {
    type Output = U128;

    #[inline]
    fn shl(self, nbits: u32) -> Self::Output {
        self.shl_bits(nbits)
    }
}

impl ShlAssign<u32> for U128 {
    #[inline]
    fn shl_assign(&mut self, nbits: u32) {
        *self = self.shl_bits(nbits);
    }
}

/// Logical right shift (`>>`) by a bit count.
///
/// Shifts greater than or equal to 128 bits yield zero.
impl Shr<u32> for U128 {
    type Output = U128;

    #[inline]
    fn shr(self, nbits: u32) -> Self::Output {
        self.shr_bits(nbits)
    }
}

impl ShrAssign<u32> for U128 {
    #[inline]
    fn shr_assign(&mut self, nbits: u32) {
        *self = self.shr_bits(nbits);
    }
}
