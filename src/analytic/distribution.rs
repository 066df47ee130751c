/// Closed-form position distribution of the Hadamard walk.
///
/// After `t` steps from the origin with coin |0⟩ the walker sits at some
/// n ∈ [-t, t] with n ≡ t (mod 2). With l = (t - n) / 2 the amplitude
/// components are the alternating sums
///
///   S1 = Σ_{k=0}^{l-1} C(l-1, k)·C(t-l, k)·(-1)^(l-k-1)
///   S2 = Σ_{k=1}^{l}   C(l-1, k-1)·C(t-l, k)·(-1)^(l-k)
///
/// and P(n) = (S1² + S2²) / 2^t.  Both extremes n = ±t carry exactly
/// 1/2^t; the n = t site (l = 0) has empty sums and is set directly.
///
/// Sums are exact big integers; the division by 2^t happens only in the
/// final conversion of each entry to `f64`.
use super::binomial::binomial_row;
use crate::error::{Result, WalkError};
use num_bigint::{BigInt, BigUint};
use num_traits::ToPrimitive;
use std::fmt;
use tracing::debug;

/// Tolerance for the sum-to-one check.
pub const NORMALIZATION_TOLERANCE: f64 = 1e-9;

/// Probability table over the positions reachable after `steps` steps.
///
/// Entry `i` holds the probability of position n = steps - i, so index 0
/// is the right-most site n = +t and index 2t is n = -t.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    pub steps: usize,
    pub probabilities: Vec<f64>,
}

impl Distribution {
    /// Wrap an existing table. `probabilities.len()` must be 2·steps + 1.
    pub fn from_table(steps: usize, probabilities: Vec<f64>) -> Self {
        assert_eq!(probabilities.len(), 2 * steps + 1, "table does not match step count");
        Self { steps, probabilities }
    }

    /// Number of entries: 2t + 1
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    /// Always false; even t = 0 has one entry.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Shifted table index of position `n`: t - n
    #[inline(always)]
    pub fn index_of(&self, position: i64) -> usize {
        (self.steps as i64 - position) as usize
    }

    /// Position n stored at table index `index`.
    #[inline(always)]
    pub fn position_of(&self, index: usize) -> i64 {
        self.steps as i64 - index as i64
    }

    /// Probability of finding the walker at `position`; 0 off the lattice.
    pub fn probability(&self, position: i64) -> f64 {
        if position.unsigned_abs() as usize > self.steps {
            return 0.0;
        }
        self.probabilities[self.index_of(position)]
    }

    /// Σ P(n) over the whole table.
    pub fn total_probability(&self) -> f64 {
        self.probabilities.iter().sum()
    }

    /// Check the sum-to-one law. Returns the total on success.
    pub fn verify_normalized(&self) -> Result<f64> {
        let total = self.total_probability();
        if (total - 1.0).abs() > NORMALIZATION_TOLERANCE {
            return Err(WalkError::NotNormalized {
                total,
                tolerance: NORMALIZATION_TOLERANCE,
            });
        }
        Ok(total)
    }

    /// (position, probability) for every site with the parity of t,
    /// right-most first.
    pub fn reachable(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.probabilities
            .iter()
            .enumerate()
            .step_by(2)
            .map(move |(i, &p)| (self.position_of(i), p))
    }

    /// Expected position Σ n·P(n)
    pub fn mean(&self) -> f64 {
        self.reachable().map(|(n, p)| n as f64 * p).sum()
    }

    /// Variance Σ n²·P(n) - mean²
    pub fn variance(&self) -> f64 {
        let mean = self.mean();
        let second: f64 = self.reachable().map(|(n, p)| (n * n) as f64 * p).sum();
        second - mean * mean
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hadamard walk distribution (t={}):", self.steps)?;
        for (n, p) in self.reachable() {
            writeln!(f, "  n={n:>4}  P={p:.6}")?;
        }
        Ok(())
    }
}

/// ±term with sign (-1)^exponent
fn signed(term: BigUint, exponent: i64) -> BigInt {
    let term = BigInt::from(term);
    if exponent.rem_euclid(2) == 0 { term } else { -term }
}

/// (S1, S2) for a given step count and l = (t - n) / 2, with l ≥ 1.
///
/// Out-of-domain coefficients are zero, so each sum runs only while both
/// binomial rows still have entries. S2 re-indexed by j = k - 1 carries
/// the same sign (-1)^(l-j-1) as S1.
fn amplitude_sums(steps: i64, l: i64) -> (BigInt, BigInt) {
    let s1: BigInt = binomial_row(l - 1)
        .zip(binomial_row(steps - l))
        .enumerate()
        .map(|(k, (a, b))| signed(a * b, l - k as i64 - 1))
        .sum();
    let s2: BigInt = binomial_row(l - 1)
        .zip(binomial_row(steps - l).skip(1))
        .enumerate()
        .map(|(j, (a, b))| signed(a * b, l - j as i64 - 1))
        .sum();
    (s1, s2)
}

/// value / 2^exponent as the nearest `f64`.
///
/// Only the top 64 bits of `value` survive, and the power of two is
/// applied in two halves so neither factor overflows before the product
/// lands in range.
fn ratio_to_f64(value: &BigUint, exponent: u64) -> f64 {
    let shift = value.bits().saturating_sub(64);
    let mantissa = (value >> shift).to_u64().unwrap_or(u64::MAX) as f64;
    let e = shift as i64 - exponent as i64;
    let half = (e / 2) as i32;
    mantissa * 2f64.powi(half) * 2f64.powi(e as i32 - half)
}

/// Compute the closed-form distribution after `steps` steps.
pub fn hadamard_walk_distribution(steps: usize) -> Distribution {
    let t = steps as i64;
    let exponent = steps as u64;
    let mut probabilities = vec![0.0; 2 * steps + 1];

    for n in (-t..=t - 2).step_by(2) {
        let l = (t - n) / 2;
        let (s1, s2) = amplitude_sums(t, l);
        let (m1, m2) = (s1.magnitude(), s2.magnitude());
        probabilities[(t - n) as usize] = ratio_to_f64(&(m1 * m1 + m2 * m2), exponent);
    }

    // Extremes: n = -t by override, n = t because its sums are empty
    let edge = ratio_to_f64(&BigUint::from(1u32), exponent);
    probabilities[0] = edge;
    probabilities[2 * steps] = edge;

    let dist = Distribution { steps, probabilities };
    debug!(steps, total = dist.total_probability(), "closed-form distribution computed");
    dist
}
