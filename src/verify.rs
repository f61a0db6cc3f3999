//! Self-test harness for the portable multiplication
//!
//! Compiled only with the `verify` feature. It compares
//! [`mul64_portable`] against [`mul64_reference`] (the `mulx` instruction
//! when available, the native `u128` product otherwise) on:
//! - a configurable number of random 64-bit operand pairs
//! - a fixed battery of boundary cases exercising every carry path
//!
//! Each mismatch is logged at `error` level and collected. Any mismatch
//! means the portable algorithm is wrong; it is reported as an error and
//! must never be tolerated.

use crate::arith::{mul64_portable, mul64_reference};
use crate::primitives::U128;

use log::{debug, error, info};
use rand::Rng;

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Number of random operand pairs checked by default.
pub const DEFAULT_ITERATIONS: usize = 10_000;

/// Fixed operand pairs covering zero, one, the maximum word and the
/// patterns that exercise every carry path of the 32-bit split.
pub const BOUNDARY_CASES: [(u64, u64); 8] = [
    (0, 0),
    (1, 1),
    (1, u64::MAX),
    (u64::MAX, 1),
    (u64::MAX, u64::MAX),
    (0x1_0000_0001, 0x1_0000_0001),
    (0xFFFF_FFFF_FFFF_FFFE, 0xFFFF_FFFF_FFFF_FFFD),
    (0xFFFF_FFFF_FFFF_FFFD, 0xFFFF_FFFF_FFFF_FFFE),
];

/// A single operand pair on which a candidate and the reference disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub a: u64,
    pub b: u64,
    /// Product computed by the candidate under test.
    pub candidate: U128,
    /// Product computed by the reference substrate.
    pub reference: U128,
}

impl Display for Mismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{} * {}: got {{ {}, {} }}, expected {{ {}, {} }}",
            self.a,
            self.b,
            self.candidate.lo,
            self.candidate.hi,
            self.reference.lo,
            self.reference.hi
        )
    }
}

/// Summary of a successful verification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationReport {
    /// Total number of operand pairs checked.
    pub cases: usize,
}

/// Errors reported by the verification harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    /// At least one operand pair produced a different product.
    Mismatches {
        /// Total number of operand pairs checked.
        cases: usize,
        /// Every failing pair, in the order it was checked.
        mismatches: Vec<Mismatch>,
    },
}

impl VerificationError {
    /// Number of failing operand pairs.
    pub fn failures(&self) -> usize {
        match self {
            VerificationError::Mismatches { mismatches, .. } => mismatches.len(),
        }
    }
}

impl Display for VerificationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            VerificationError::Mismatches { cases, mismatches } => write!(
                f,
                "{} of {} products disagree with the reference multiply",
                mismatches.len(),
                cases
            ),
        }
    }
}

impl Error for VerificationError {}

/// Compares `candidate(a, b)` with the reference product.
pub fn check_with<F>(candidate: F, a: u64, b: u64) -> Result<(), Mismatch>
where
    F: Fn(u64, u64) -> U128,
{
    let got = candidate(a, b);
    let expected = mul64_reference(a, b);

    if got != expected {
        return Err(Mismatch {
            a,
            b,
            candidate: got,
            reference: expected,
        });
    }

    Ok(())
}

/// Compares the portable product of `a` and `b` with the reference.
pub fn check_product(a: u64, b: u64) -> Result<(), Mismatch> {
    check_with(mul64_portable, a, b)
}

/// Checks `candidate` on `iterations` random pairs drawn from `rng`, then
/// on every pair in [`BOUNDARY_CASES`].
///
/// # Errors
///
/// Returns [`VerificationError::Mismatches`] listing every failing pair.
pub fn verify_multiply_with<R, F>(
    rng: &mut R,
    iterations: usize,
    candidate: F,
) -> Result<VerificationReport, VerificationError>
where
    R: Rng + ?Sized,
    F: Fn(u64, u64) -> U128,
{
    let mut mismatches = Vec::new();

    for _ in 0..iterations {
        let a: u64 = rng.random();
        let b: u64 = rng.random();

        if let Err(m) = check_with(&candidate, a, b) {
            error!("mismatch on random pair: {m}");
            mismatches.push(m);
        }
    }

    for &(a, b) in BOUNDARY_CASES.iter() {
        match check_with(&candidate, a, b) {
            Ok(()) => {
                let p = mul64_reference(a, b);
                debug!("{a} * {b} = {{ {}, {} }} ok", p.lo, p.hi);
            }
            Err(m) => {
                error!("mismatch on boundary pair: {m}");
                mismatches.push(m);
            }
        }
    }

    let cases = iterations + BOUNDARY_CASES.len();
    info!("N failures = {} ({} cases)", mismatches.len(), cases);

    if !mismatches.is_empty() {
        return Err(VerificationError::Mismatches { cases, mismatches });
    }

    Ok(VerificationReport { cases })
}

/// Verifies [`mul64_portable`] using the supplied random source.
pub fn verify_portable_multiply_with<R>(
    rng: &mut R,
    iterations: usize,
) -> Result<VerificationReport, VerificationError>
where
    R: Rng + ?Sized,
{
    verify_multiply_with(rng, iterations, mul64_portable)
}

/// Verifies [`mul64_portable`] using the thread-local random generator.
pub fn verify_portable_multiply(
    iterations: usize,
) -> Result<VerificationReport, VerificationError> {
    verify_portable_multiply_with(&mut rand::rng(), iterations)
}
