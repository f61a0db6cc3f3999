use limb128::primitives::{TryFromU128Error, U128};

use proptest::prelude::*;

use std::collections::{HashMap, HashSet};

const MAX: u64 = u64::MAX;

fn native(v: U128) -> u128 {
    u128::from(v)
}

#[test]
fn u128_constants() {
    assert_eq!(U128::ZERO, U128::new(0, 0));
    assert_eq!(U128::ONE, U128::new(1, 0));
    assert_eq!(U128::MAX, U128::new(MAX, MAX));
    assert_eq!(U128::default(), U128::ZERO);
}

#[test]
fn u128_construction_from_word_clears_high_limb() {
    let v = U128::from(0xDEAD_BEEFu64);
    assert_eq!(v.lo(), 0xDEAD_BEEF);
    assert_eq!(v.hi(), 0);

    let mut w = U128::new(7, 9);
    assert_eq!(w.hi(), 9);

    w = U128::from(3u64);
    assert_eq!(w, U128::new(3, 0));

    const C: U128 = U128::from_u64(42);
    assert_eq!(C, U128::new(42, 0));
}

#[test]
fn u128_shift_left_by_64_moves_low_limb() {
    assert_eq!(U128::from(1u64) << 64, U128::new(0, 1));

    const SHIFTED: U128 = U128::ONE.shl_bits(64);
    assert!(SHIFTED.const_eq(&U128::new(0, 1)));
}

#[test]
fn u128_shift_by_zero_is_identity() {
    let v = U128::new(0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210);

    assert_eq!(v << 0, v);
    assert_eq!(v >> 0, v);
}

#[test]
fn u128_shift_saturates_at_width() {
    let v = U128::MAX;

    for n in [128u32, 129, 200, 1024, u32::MAX] {
        assert_eq!(v << n, U128::ZERO, "<< {n}");
        assert_eq!(v >> n, U128::ZERO, ">> {n}");
    }
}

#[test]
fn u128_shifts_carry_across_limbs() {
    let v = U128::new(0x8000_0000_0000_0001, 0);

    assert_eq!(v << 1, U128::new(2, 1));
    assert_eq!(U128::new(2, 1) >> 1, v);

    assert_eq!(U128::new(1, 0) << 127, U128::new(0, 0x8000_0000_0000_0000));
    assert_eq!(U128::new(0, 0x8000_0000_0000_0000) >> 127, U128::ONE);

    assert_eq!(U128::new(0xF0, 0) << 68, U128::new(0, 0xF00));
    assert_eq!(U128::new(0, 0xF00) >> 68, U128::new(0xF0, 0));
}

#[test]
fn u128_compound_shifts_mutate_in_place() {
    let mut v = U128::ONE;
    v <<= 100;
    assert_eq!(v, U128::new(0, 1 << 36));

    v >>= 99;
    assert_eq!(v, U128::new(2, 0));

    v <<= 128;
    assert_eq!(v, U128::ZERO);
}

#[test]
fn u128_bitwise_ops_are_limb_wise() {
    let a = U128::new(0xFF00_FF00_FF00_FF00, 0x0F0F_0F0F_0F0F_0F0F);
    let b = U128::new(0x0FF0_0FF0_0FF0_0FF0, 0xFFFF_0000_FFFF_0000);

    assert_eq!(!a, U128::new(0x00FF_00FF_00FF_00FF, 0xF0F0_F0F0_F0F0_F0F0));
    assert_eq!(a & b, U128::new(0x0F00_0F00_0F00_0F00, 0x0F0F_0000_0F0F_0000));
    assert_eq!(a | b, U128::new(0xFFF0_FFF0_FFF0_FFF0, 0xFFFF_0F0F_FFFF_0F0F));
    assert_eq!(a ^ b, U128::new(0xF0F0_F0F0_F0F0_F0F0, 0xF0F0_0F0F_F0F0_0F0F));

    let mut c = a;
    c &= b;
    assert_eq!(c, a & b);

    let mut c = a;
    c |= b;
    assert_eq!(c, a | b);

    let mut c = a;
    c ^= b;
    assert_eq!(c, a ^ b);
}

#[test]
fn u128_ordering_high_limb_dominates() {
    assert!(U128::new(0, 1) > U128::new(MAX, 0));
    assert!(U128::new(5, 2) < U128::new(4, 3));
    assert!(U128::new(4, 3) < U128::new(5, 3));
    assert!(U128::new(5, 3) >= U128::new(5, 3));
    assert!(U128::new(5, 3) <= U128::new(5, 3));
    assert_ne!(U128::new(1, 0), U128::new(0, 1));

    let mut values = vec![U128::new(MAX, 0), U128::new(0, 1), U128::ZERO, U128::MAX];
    values.sort();
    assert_eq!(
        values,
        vec![U128::ZERO, U128::new(MAX, 0), U128::new(0, 1), U128::MAX]
    );

    assert!(U128::new(MAX, 0).const_lt(&U128::new(0, 1)));
}

#[test]
fn u128_add_carry_propagates() {
    assert_eq!(U128::new(MAX, 0) + U128::new(1, 0), U128::new(0, 1));
    assert_eq!(U128::new(MAX, 0) + 1u64, U128::new(0, 1));
    assert_eq!(1u64 + U128::new(MAX, 0), U128::new(0, 1));
    assert_eq!(U128::new(MAX, 3) + U128::new(MAX, 4), U128::new(MAX - 1, 8));
}

#[test]
fn u128_add_wraps_at_width() {
    assert_eq!(U128::MAX + U128::ONE, U128::ZERO);
    assert_eq!(U128::MAX + 2u64, U128::ONE);

    let mut v = U128::MAX;
    v += U128::MAX;
    assert_eq!(v, U128::new(MAX - 1, MAX));

    let mut w = U128::new(MAX, MAX);
    w += 1u64;
    assert_eq!(w, U128::ZERO);
}

#[test]
fn u128_mul_by_word_truncates() {
    let v = U128::new(0, MAX);

    let product = v * 2u64;
    assert_eq!(product, U128::new(0, MAX - 1));
    assert_eq!(product, v * U128::from(2u64));
    assert_eq!(2u64 * v, product);
}

#[test]
fn u128_mul_word_path_matches_value_path() {
    let values = [
        U128::ZERO,
        U128::ONE,
        U128::MAX,
        U128::new(MAX, 0),
        U128::new(0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210),
    ];
    let words = [0u64, 1, 2, MAX, 0x1_0000_0001, 0xDEAD_BEEF_CAFE_BABE];

    for v in values {
        for w in words {
            assert_eq!(v * w, v * U128::from(w), "{v} * {w}");
        }
    }
}

#[test]
fn u128_mul_known_products() {
    let a = U128::from(MAX);
    assert_eq!(a * a, U128::new(1, MAX - 1));

    let v = U128::new(0xFEDC_BA98_7654_3210, 0x0123_4567_89AB_CDEF);
    assert_eq!(v * v, U128::new(0xDEEC_6CD7_A44A_4100, 0x4228_71B7_939F_74AC));

    assert_eq!(U128::MAX * U128::MAX, U128::ONE);
    assert_eq!(U128::new(0, 1) * U128::new(0, 1), U128::ZERO);
}

#[test]
fn u128_compound_mul() {
    let mut v = U128::new(3, 0);
    v *= 5u64;
    assert_eq!(v, U128::new(15, 0));

    v *= U128::new(0, 1);
    assert_eq!(v, U128::new(0, 15));
}

#[test]
fn u128_demo_values() {
    let a = U128::from(0xFFFF_FFFF_FFFF_FFFFu64);
    assert_eq!((a * a).to_hex(), "0xfffffffffffffffe0000000000000001");

    let c = (U128::from(1u64) << 100) + 42u64;
    assert_eq!(c.to_string(), "0x0000001000000000000000000000002a");
}

#[test]
fn u128_hex_format_is_fixed_width() {
    let hex = U128::new(42, 0).to_hex();

    assert_eq!(hex, "0x0000000000000000000000000000002a");
    assert_eq!(hex.len(), 34);
    assert_eq!(U128::MAX.to_hex().len(), 34);
    assert_eq!(format!("{}", U128::new(42, 0)), hex);
}

#[test]
fn u128_decimal_format() {
    assert_eq!(U128::ZERO.to_decimal(), "0");
    assert_eq!(U128::new(MAX, 0).to_decimal(), "18446744073709551615");
    assert_eq!(U128::new(0, 1).to_decimal(), "1_0");
    assert_eq!(U128::new(7, 12).to_decimal(), "12_7");
}

#[test]
fn u128_hash_consistent_with_eq() {
    let a = U128::new(0x1234, 0x5678);
    let b = U128::new(0x1234, 0x5678);

    assert_eq!(a.hash_value(), b.hash_value());
    assert_eq!(U128::new(0, 1).hash_value(), 0x9e37_79ba);

    let mut map = HashMap::new();
    map.insert(a, "a");
    assert_eq!(map.get(&b), Some(&"a"));
}

#[test]
fn u128_hash_spreads_distinct_values() {
    let mut hashes = HashSet::new();
    let mut count = 0;

    for hi in 0..64u64 {
        for lo in 0..64u64 {
            hashes.insert(U128::new(lo.wrapping_mul(0x9E37_79B9_7F4A_7C15), hi).hash_value());
            count += 1;
        }
    }

    // Allow a handful of collisions; a broken mix collapses far more.
    assert!(hashes.len() > count * 99 / 100);
}

#[test]
fn u128_leading_zeros() {
    assert_eq!(U128::ZERO.leading_zeros(), 128);
    assert_eq!(U128::ONE.leading_zeros(), 127);
    assert_eq!(U128::new(0, 1).leading_zeros(), 63);
    assert_eq!(U128::MAX.leading_zeros(), 0);
}

#[test]
fn u128_conversions() {
    let v = U128::new(0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210);

    let words: [u64; 2] = v.into();
    assert_eq!(words, [0xFEDC_BA98_7654_3210, 0x0123_4567_89AB_CDEF]);
    assert_eq!(U128::from(words), v);

    let bytes: [u8; 16] = v.into();
    assert_eq!(bytes[0], 0xFE);
    assert_eq!(bytes[15], 0xEF);
    assert_eq!(U128::from(bytes), v);

    assert_eq!(native(v), 0xFEDC_BA98_7654_3210_0123_4567_89AB_CDEF);
    assert_eq!(U128::from(native(v)), v);

    assert_eq!(u64::try_from(U128::from(99u64)), Ok(99));
    let err: TryFromU128Error = u64::try_from(U128::new(0, 1)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "U128 value out of range for the target integer type"
    );
}

proptest! {
    #[test]
    fn add_matches_native(a in any::<u128>(), b in any::<u128>()) {
        prop_assert_eq!(native(U128::from(a) + U128::from(b)), a.wrapping_add(b));
    }

    #[test]
    fn mul_matches_native(a in any::<u128>(), b in any::<u128>()) {
        prop_assert_eq!(native(U128::from(a) * U128::from(b)), a.wrapping_mul(b));
    }

    #[test]
    fn mul_by_word_matches_native(a in any::<u128>(), w in any::<u64>()) {
        prop_assert_eq!(native(U128::from(a) * w), a.wrapping_mul(w as u128));
        prop_assert_eq!(U128::from(a) * w, U128::from(a) * U128::from(w));
    }

    #[test]
    fn mul_commutes(a in any::<u128>(), b in any::<u128>()) {
        prop_assert_eq!(U128::from(a) * U128::from(b), U128::from(b) * U128::from(a));
    }

    #[test]
    fn shifts_match_native(a in any::<u128>(), n in 0u32..128) {
        prop_assert_eq!(native(U128::from(a) << n), a << n);
        prop_assert_eq!(native(U128::from(a) >> n), a >> n);
    }

    #[test]
    fn wide_shifts_zero(a in any::<u128>(), n in 128u32..=u32::MAX) {
        prop_assert_eq!(U128::from(a) << n, U128::ZERO);
        prop_assert_eq!(U128::from(a) >> n, U128::ZERO);
    }

    #[test]
    fn ordering_matches_native(a in any::<u128>(), b in any::<u128>()) {
        prop_assert_eq!(U128::from(a).cmp(&U128::from(b)), a.cmp(&b));
        prop_assert_eq!(U128::from(a) == U128::from(b), a == b);
    }

    #[test]
    fn equal_values_hash_equal(lo in any::<u64>(), hi in any::<u64>()) {
        prop_assert_eq!(U128::new(lo, hi).hash_value(), U128::new(lo, hi).hash_value());
    }
}
