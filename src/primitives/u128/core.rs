//! 128-bit unsigned integer primitive
//!
//! This module defines a fixed-size 128-bit unsigned integer type (`U128`)
//! built from two 64-bit limbs.
//!
//! It behaves like a native unsigned integer operating modulo 2¹²⁸:
//! addition and multiplication wrap silently, shifts by 128 bits or more
//! yield zero, and ordering is numeric.
//!
//! Every operation except multiplication is available as a `const fn`
//! here, so values can be built and compared in constant contexts. The
//! operator traits in `ops` delegate to these functions. Multiplication
//! is runtime-only because `mul64` may dispatch to a hardware intrinsic.

use crate::arith::{add64, mul64};

use std::cmp::Ordering;

/// Fixed-size 128-bit unsigned integer.
///
/// The value is `hi·2⁶⁴ + lo`. The type is `Copy`, never allocates, and
/// every operation produces a new value or updates the limbs in place.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct U128 {
    /// Least significant 64 bits.
    pub lo: u64,

    /// Most significant 64 bits.
    pub hi: u64,
}

impl U128 {
    /// The value zero.
    pub const ZERO: Self = Self::new(0, 0);

    /// The value one.
    pub const ONE: Self = Self::new(1, 0);

    /// The maximum representable value (2¹²⁸ − 1).
    pub const MAX: Self = Self::new(u64::MAX, u64::MAX);

    /// Builds a value from its low and high limbs.
    #[inline(always)]
    pub const fn new(lo: u64, hi: u64) -> Self {
        Self { lo, hi }
    }

    /// Builds a value from a single 64-bit word. The high limb is zero.
    #[inline(always)]
    pub const fn from_u64(value: u64) -> Self {
        Self { lo: value, hi: 0 }
    }

    /// Returns the low limb.
    #[inline(always)]
    pub const fn lo(&self) -> u64 {
        self.lo
    }

    /// Returns the high limb.
    #[inline(always)]
    pub const fn hi(&self) -> u64 {
        self.hi
    }

    /// Shifts left by `nbits`, discarding bits moved past bit 127.
    ///
    /// Shifting by 0 returns the value unchanged and shifting by 128 or
    /// more returns zero. Any `nbits` is accepted.
    pub const fn shl_bits(self, nbits: u32) -> Self {
        if nbits == 0 {
            return self;
        }
        if nbits >= 128 {
            return Self::ZERO;
        }

        let (mut lo, mut hi, mut n) = (self.lo, self.hi, nbits);

        if n >= 64 {
            hi = lo;
            lo = 0;
            n -= 64;
        }
        if n > 0 {
            hi = (hi << n) | (lo >> (64 - n));
            lo <<= n;
        }

        Self { lo, hi }
    }

    /// Shifts right by `nbits`, discarding bits moved past bit 0.
    ///
    /// Shifting by 0 returns the value unchanged and shifting by 128 or
    /// more returns zero. Any `nbits` is accepted.
    pub const fn shr_bits(self, nbits: u32) -> Self {
        if nbits == 0 {
            return self;
        }
        if nbits >= 128 {
            return Self::ZERO;
        }

        let (mut lo, mut hi, mut n) = (self.lo, self.hi, nbits);

        if n >= 64 {
            lo = hi;
            hi = 0;
            n -= 64;
        }
        if n > 0 {
            lo = (lo >> n) | (hi << (64 - n));
            hi >>= n;
        }

        Self { lo, hi }
    }

    /// Bitwise NOT of both limbs.
    #[inline(always)]
    pub const fn bit_not(self) -> Self {
        Self::new(!self.lo, !self.hi)
    }

    /// Bitwise AND, limb by limb.
    #[inline(always)]
    pub const fn bit_and(self, rhs: Self) -> Self {
        Self::new(self.lo & rhs.lo, self.hi & rhs.hi)
    }

    /// Bitwise XOR, limb by limb.
    #[inline(always)]
    pub const fn bit_xor(self, rhs: Self) -> Self {
        Self::new(self.lo ^ rhs.lo, self.hi ^ rhs.hi)
    }

    /// Bitwise OR, limb by limb.
    #[inline(always)]
    pub const fn bit_or(self, rhs: Self) -> Self {
        Self::new(self.lo | rhs.lo, self.hi | rhs.hi)
    }

    /// Exact limb-wise equality, usable in constant contexts.
    #[inline(always)]
    pub const fn const_eq(&self, rhs: &Self) -> bool {
        self.lo == rhs.lo && self.hi == rhs.hi
    }

    /// Numeric less-than, usable in constant contexts.
    ///
    /// The high limb dominates; ties are broken by the low limb.
    #[inline(always)]
    pub const fn const_lt(&self, rhs: &Self) -> bool {
        self.hi < rhs.hi || (self.hi == rhs.hi && self.lo < rhs.lo)
    }

    /// Addition modulo 2¹²⁸.
    ///
    /// The carry out of the low limb is propagated into the high limb.
    /// A carry out of the high limb is dropped without any signal, the
    /// same way `u64` arithmetic wraps.
    #[inline]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        let lo = self.lo.wrapping_add(rhs.lo);
        let carry = (lo < rhs.lo) as u64;
        let hi = self.hi.wrapping_add(rhs.hi).wrapping_add(carry);

        Self { lo, hi }
    }

    /// Adds a 64-bit word modulo 2¹²⁸.
    #[inline]
    pub const fn wrapping_add_u64(self, rhs: u64) -> Self {
        let sum = add64(self.lo, rhs);

        Self::new(sum.lo, self.hi.wrapping_add(sum.hi))
    }

    /// Multiplies by a 64-bit word modulo 2¹²⁸.
    ///
    /// Computes `lo·w + ((hi·w) << 64)`. The high limb of `hi·w` lands at
    /// bit 128 or above and is discarded by the shift.
    #[inline]
    pub fn wrapping_mul_u64(self, rhs: u64) -> Self {
        let p_lo = mul64(self.lo, rhs);
        let p_hi = mul64(self.hi, rhs);

        p_lo.wrapping_add(p_hi.shl_bits(64))
    }

    /// Multiplies two values modulo 2¹²⁸.
    ///
    /// Only three of the four 64×64 partial products are computed: the
    /// `hi·hi` term starts at bit 128 and never contributes to the result.
    #[inline]
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        let mut res = mul64(self.lo, rhs.lo);
        res = res.wrapping_add(mul64(self.lo, rhs.hi).shl_bits(64));
        res = res.wrapping_add(mul64(self.hi, rhs.lo).shl_bits(64));

        res
    }

    /// Counts the number of leading zero bits in the integer.
    ///
    /// # Returns
    /// The number of leading zero bits in the range `0..=128`.
    pub const fn leading_zeros(&self) -> u32 {
        if self.hi == 0 {
            64 + self.lo.leading_zeros()
        } else {
            self.hi.leading_zeros()
        }
    }
}

impl PartialOrd for U128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for U128 {
    /// Numeric ordering: compares the high limbs first, then the low limbs.
    fn cmp(&self, other: &Self) -> Ordering {
        self.hi.cmp(&other.hi).then(self.lo.cmp(&other.lo))
    }
}

const _: () = assert!(
    U128::from_u64(1).shl_bits(64).const_eq(&U128::new(0, 1)),
    "shift failed"
);
