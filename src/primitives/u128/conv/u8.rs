//! Conversions between `U128` and byte representations
//!
//! Byte arrays are always interpreted in big-endian order, matching the
//! hexadecimal rendering of the value.

use crate::primitives::U128;

/// Converts a 16-byte big-endian array into a `U128`.
impl From<[u8; 16]> for U128 {
    fn from(value: [u8; 16]) -> Self {
        let mut hi = [0u8; 8];
        let mut lo = [0u8; 8];

        hi.copy_from_slice(&value[..8]);
        lo.copy_from_slice(&value[8..]);

        U128::new(u64::from_be_bytes(lo), u64::from_be_bytes(hi))
    }
}

/// Converts a `U128` into a 16-byte array in big-endian order.
impl From<U128> for [u8; 16] {
    fn from(value: U128) -> Self {
        let mut out = [0u8; 16];

        out[..8].copy_from_slice(&value.hi.to_be_bytes());
        out[8..].copy_from_slice(&value.lo.to_be_bytes());

        out
    }
}
