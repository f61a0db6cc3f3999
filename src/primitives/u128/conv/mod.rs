//! Integer conversion utilities
//!
//! This module groups explicit conversions between `U128` and native
//! representations:
//! - `u64` words (widening, and fallible narrowing)
//! - the compiler's `u128`
//! - big-endian byte and word arrays
//!
//! Narrowing conversions are fallible and never truncate silently.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

mod u128;
mod u64;
mod u8;

/// Error returned when a `U128` does not fit in a narrower integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryFromU128Error(pub(crate) ());

impl Display for TryFromU128Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("U128 value out of range for the target integer type")
    }
}

impl Error for TryFromU128Error {}
