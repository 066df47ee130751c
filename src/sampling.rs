/// Shot sampling from a position distribution.
///
/// Each shot is one measurement of the walker's position, drawn by
/// inverse-CDF lookup on the probability table. `Sampler::with_seed`
/// gives reproducible counts for tests and repeated runs.
use crate::analytic::Distribution;
use crate::error::{Result, WalkError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Shot counts in the same t - n index convention as `Distribution`.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub steps: usize,
    pub counts: Vec<u64>,
    pub shots: u64,
}

impl Histogram {
    /// Observed relative frequency per table index.
    pub fn frequencies(&self) -> Vec<f64> {
        self.counts
            .iter()
            .map(|&c| c as f64 / self.shots as f64)
            .collect()
    }
}

enum Source {
    Thread,
    Seeded(StdRng),
}

pub struct Sampler {
    source: Source,
}

impl Sampler {
    /// Non-deterministic sampler backed by the thread RNG.
    pub fn new() -> Self {
        Self { source: Source::Thread }
    }

    /// Deterministic sampler; equal seeds give equal histograms.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            source: Source::Seeded(StdRng::seed_from_u64(seed)),
        }
    }

    /// Uniform in [0, 1)
    fn sample_random(&mut self) -> f64 {
        match &mut self.source {
            Source::Thread => rand::thread_rng().gen::<f64>(),
            Source::Seeded(rng) => rng.gen::<f64>(),
        }
    }

    /// Draw one table index given the cumulative table `cdf`.
    /// An empty table yields index 0.
    fn sample_index(&mut self, cdf: &[f64]) -> usize {
        let r = self.sample_random() * cdf.last().copied().unwrap_or(1.0);
        // First index whose cumulative mass exceeds r
        cdf.partition_point(|&c| c <= r).min(cdf.len().saturating_sub(1))
    }

    /// Measure the walker's position `shots` times.
    pub fn sample_counts(&mut self, dist: &Distribution, shots: u64) -> Result<Histogram> {
        if shots == 0 {
            return Err(WalkError::NoShots);
        }

        let cdf = cumulative(&dist.probabilities);
        let mut counts = vec![0u64; dist.len()];
        for _ in 0..shots {
            counts[self.sample_index(&cdf)] += 1;
        }

        debug!(steps = dist.steps, shots, "sampled walker positions");
        Ok(Histogram {
            steps: dist.steps,
            counts,
            shots,
        })
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

fn cumulative(probabilities: &[f64]) -> Vec<f64> {
    probabilities
        .iter()
        .scan(0.0, |acc, &p| {
            *acc += p;
            Some(*acc)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytic::hadamard_walk_distribution;

    #[test]
    fn test_point_mass_always_hits() {
        let d = hadamard_walk_distribution(0);
        let h = Sampler::with_seed(7).sample_counts(&d, 100).unwrap();
        assert_eq!(h.counts, vec![100]);
    }

    #[test]
    fn test_zero_probability_sites_never_hit() {
        let d = hadamard_walk_distribution(6);
        let h = Sampler::with_seed(1).sample_counts(&d, 5_000).unwrap();
        for i in (1..d.len()).step_by(2) {
            assert_eq!(h.counts[i], 0, "odd-parity index {i} was sampled");
        }
        assert_eq!(h.counts.iter().sum::<u64>(), 5_000);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let d = hadamard_walk_distribution(10);
        let a = Sampler::with_seed(42).sample_counts(&d, 1_000).unwrap();
        let b = Sampler::with_seed(42).sample_counts(&d, 1_000).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_frequencies_converge() {
        let d = hadamard_walk_distribution(3);
        let h = Sampler::with_seed(3).sample_counts(&d, 200_000).unwrap();
        // P(n=1) = 5/8
        let f = h.frequencies();
        assert!((f[d.index_of(1)] - 0.625).abs() < 0.01);
    }

    #[test]
    fn test_no_shots_rejected() {
        let d = hadamard_walk_distribution(2);
        assert_eq!(Sampler::new().sample_counts(&d, 0), Err(WalkError::NoShots));
    }

    #[test]
    fn test_sample_index_edges() {
        let cdf = [0.25, 0.25, 0.75, 0.75, 1.0];
        let mut s = Sampler::with_seed(0);
        for _ in 0..1_000 {
            let i = s.sample_index(&cdf);
            assert!(i == 0 || i == 2 || i == 4, "sampled empty slot {i}");
        }
    }

    #[test]
    fn test_sample_index_empty_table() {
        assert_eq!(Sampler::with_seed(5).sample_index(&[]), 0);
    }
}
