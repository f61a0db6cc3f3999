//! Conversions between `U128` and 64-bit integer representations
//!
//! These conversions support interoperability with native word-sized
//! integers while preventing implicit truncation.

use super::TryFromU128Error;
use crate::primitives::U128;

/// Converts a `u64` into a `U128`.
///
/// The value becomes the low limb; the high limb is zero.
impl From<u64> for U128 {
    fn from(value: u64) -> Self {
        U128::from_u64(value)
    }
}

/// Attempts to convert a `U128` into a `u64`.
///
/// The conversion succeeds only if the high limb is zero.
impl TryFrom<U128> for u64 {
    type Error = TryFromU128Error;

    fn try_from(value: U128) -> Result<Self, Self::Error> {
        if value.hi != 0 {
            return Err(TryFromU128Error(()));
        }

        Ok(value.lo)
    }
}

/// Converts two 64-bit words into a `U128`.
///
/// The input array must be ordered `[hi, lo]`, most significant first.
impl From<[u64; 2]> for U128 {
    fn from(value: [u64; 2]) -> Self {
        U128::new(value[1], value[0])
    }
}

/// Splits a `U128` into two 64-bit words ordered `[hi, lo]`.
impl From<U128> for [u64; 2] {
    fn from(value: U128) -> Self {
        [value.hi, value.lo]
    }
}
