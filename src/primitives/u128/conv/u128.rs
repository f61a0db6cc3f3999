//! Conversions between `U128` and the compiler's native `u128`.
//!
//! Both directions are lossless.

use crate::primitives::U128;

impl From<u128> for U128 {
    fn from(value: u128) -> Self {
        U128::new(value as u64, (value >> 64) as u64)
    }
}

impl From<U128> for u128 {
    fn from(value: U128) -> Self {
        ((value.hi as u128) << 64) | value.lo as u128
    }
}
