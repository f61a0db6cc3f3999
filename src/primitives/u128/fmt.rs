//! Textual representations of `U128`
//!
//! Two forms are provided:
//! - `to_hex`: fixed-width, `0x`-prefixed, lowercase, always 34 characters
//! - `to_decimal`: a debugging aid that prints each limb in decimal
//!
//! `Display` uses the hexadecimal form.

use super::U128;

use std::fmt::{Display, Formatter, Result};

impl U128 {
    /// Formats the value in decimal.
    ///
    /// When the high limb is zero this is the ordinary decimal form of the
    /// low limb. Otherwise the high and low limbs are printed separately,
    /// joined by `_` (for example `1_0` for 2⁶⁴). This is not a positional
    /// decimal rendering of the full 128-bit number.
    pub fn to_decimal(&self) -> String {
        if self.hi == 0 {
            return self.lo.to_string();
        }

        format!("{}_{}", self.hi, self.lo)
    }

    /// Formats the value as `0x` followed by 32 lowercase hex digits.
    ///
    /// Both limbs are zero-padded to 16 digits, so the output is always
    /// 34 characters long.
    pub fn to_hex(&self) -> String {
        format!("0x{:016x}{:016x}", self.hi, self.lo)
    }
}

impl Display for U128 {
    /// Writes the fixed-width hexadecimal form.
    ///
    /// Example:
    /// `0x0000000000000000000000000000002a`
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "0x{:016x}{:016x}", self.hi, self.lo)
    }
}
