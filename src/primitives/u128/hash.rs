//! Hashing support for `U128`.

use super::U128;

use std::hash::{Hash, Hasher};

/// Golden-ratio mixing constant.
const MIX: u64 = 0x9e37_79b9;

impl U128 {
    /// Combines the two limb hashes into a single 64-bit value.
    ///
    /// Computes `h1 ^ (h2 + K + (h1 << 6) + (h1 >> 2))` with wrapping
    /// arithmetic, where `h1` and `h2` hash the low and high limbs and
    /// `K = 0x9e3779b9`. A 64-bit limb hashes to itself.
    ///
    /// Equal values always produce equal results.
    pub const fn hash_value(&self) -> u64 {
        let h1 = self.lo;
        let h2 = self.hi;

        h1 ^ h2
            .wrapping_add(MIX)
            .wrapping_add(h1 << 6)
            .wrapping_add(h1 >> 2)
    }
}

/// Feeds the mixed limb hash to the hasher, so `U128` can key a
/// `HashMap` or `HashSet`.
impl Hash for U128 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}
