//! Portable 128-bit unsigned integers built from 64-bit limbs
//!
//! This crate provides `U128`, an unsigned integer made of two 64-bit
//! limbs that behaves like a native fixed-width integer operating modulo
//! 2¹²⁸, together with the word-level primitives it is assembled from.
//!
//! The focus is on **clarity, predictability, and verifiability**: the
//! 64×64 → 128-bit multiply has a portable implementation that uses
//! only 64-bit arithmetic, and it can be checked against the hardware
//! instruction on every build that provides one.
//!
//! # Module overview
//!
//! - `primitives`
//!   The `U128` value type: construction, addition with carry, shifts,
//!   bitwise operations, ordering, hashing, formatting and conversions.
//!   Everything except multiplication is also available as a `const fn`.
//!
//! - `arith`
//!   Word-level building blocks: `add64` and the `mul64` widening
//!   multiply. `mul64` is backed by one of three substrates selected at
//!   compile time (the `mulx` instruction, the compiler's `u128`, or the
//!   portable 32-bit split algorithm), all of which agree bit for bit.
//!
//! - `verify` (feature `verify`)
//!   A self-test harness comparing the portable multiply with the
//!   reference substrate on random and boundary operands.
//!
//! # Overflow
//!
//! Addition and multiplication wrap silently modulo 2¹²⁸, exactly like
//! `u64` arithmetic wraps modulo 2⁶⁴. No overflow is ever signalled.
//! Widening 128×128 → 256-bit multiplication is not provided.
//!
//! # Features
//!
//! - `portable`: force `mul64` onto the portable algorithm
//! - `verify`: compile in the `verify` harness (pulls in `log` and `rand`)

pub mod arith;
pub mod primitives;

#[cfg(feature = "verify")]
pub mod verify;

pub use arith::{add64, mul64, mul64_portable};
pub use primitives::U128;
