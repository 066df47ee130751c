/// Simulated-vs-theory comparison of the walker's position distribution.
use crate::analytic::Distribution;
use crate::error::{Result, WalkError};
use crate::sampling::Histogram;

#[derive(Debug, Clone)]
pub struct ComparisonRow {
    pub position: i64,
    pub theory: f64,
    pub measured: f64,
}

impl ComparisonRow {
    pub fn deviation(&self) -> f64 {
        self.measured - self.theory
    }
}

#[derive(Debug, Clone)]
pub struct Comparison {
    pub steps: usize,
    pub shots: u64,
    /// One row per site with the parity of t, right-most first
    pub rows: Vec<ComparisonRow>,
    /// ½ Σ |measured - theory|
    pub total_variation: f64,
    pub max_abs_deviation: f64,
}

impl Comparison {
    pub fn between(theory: &Distribution, histogram: &Histogram) -> Result<Self> {
        if theory.len() != histogram.counts.len() {
            return Err(WalkError::LengthMismatch {
                theory: theory.len(),
                measured: histogram.counts.len(),
            });
        }

        let freqs = histogram.frequencies();
        let rows: Vec<ComparisonRow> = theory
            .reachable()
            .map(|(position, p)| ComparisonRow {
                position,
                theory: p,
                measured: freqs[theory.index_of(position)],
            })
            .collect();

        // Off-parity sites have zero theory mass; include any stray counts
        let total_variation = 0.5
            * theory
                .probabilities
                .iter()
                .zip(&freqs)
                .map(|(p, f)| (f - p).abs())
                .sum::<f64>();
        let max_abs_deviation = rows
            .iter()
            .map(|r| r.deviation().abs())
            .fold(0.0, f64::max);

        Ok(Self {
            steps: theory.steps,
            shots: histogram.shots,
            rows,
            total_variation,
            max_abs_deviation,
        })
    }

    /// Total variation stays below `threshold`.
    pub fn agrees_within(&self, threshold: f64) -> bool {
        self.total_variation <= threshold
    }

    /// Expected total variation of an exact sampler at this shot count:
    /// ½ Σ √(2·p(1-p) / (π·shots)), the mean of |binomial deviation|.
    pub fn sampling_noise(&self) -> f64 {
        let shots = self.shots as f64;
        0.5 * self
            .rows
            .iter()
            .map(|r| (2.0 * r.theory * (1.0 - r.theory) / (std::f64::consts::PI * shots)).sqrt())
            .sum::<f64>()
    }

    pub fn report(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("  Steps          : {}\n", self.steps));
        out.push_str(&format!("  Shots          : {}\n", self.shots));
        out.push_str(&format!("  Total variation: {:.6}\n", self.total_variation));
        out.push_str(&format!("  Max |Δ|        : {:.6}\n", self.max_abs_deviation));

        out.push_str("\n     n     theory   measured          Δ\n");
        for row in &self.rows {
            out.push_str(&format!(
                "  {:>4}   {:.6}   {:.6}  {:+.6}\n",
                row.position,
                row.theory,
                row.measured,
                row.deviation()
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytic::hadamard_walk_distribution;
    use crate::sampling::Sampler;

    #[test]
    fn test_exact_histogram_has_zero_distance() {
        let d = hadamard_walk_distribution(2);
        let h = Histogram { steps: 2, counts: vec![1, 0, 2, 0, 1], shots: 4 };
        let c = Comparison::between(&d, &h).unwrap();
        assert_eq!(c.rows.len(), 3);
        assert!(c.total_variation.abs() < 1e-12);
        assert!(c.max_abs_deviation.abs() < 1e-12);
    }

    #[test]
    fn test_skewed_histogram_distance() {
        let d = hadamard_walk_distribution(1);
        let h = Histogram { steps: 1, counts: vec![4, 0, 0], shots: 4 };
        let c = Comparison::between(&d, &h).unwrap();
        assert!((c.total_variation - 0.5).abs() < 1e-12);
        assert!((c.max_abs_deviation - 0.5).abs() < 1e-12);
        assert!(!c.agrees_within(0.1));
    }

    #[test]
    fn test_sampling_noise() {
        // Two sites at ½ each, 100 shots: √(0.5 / 100π)
        let d = hadamard_walk_distribution(1);
        let h = Histogram { steps: 1, counts: vec![50, 0, 50], shots: 100 };
        let c = Comparison::between(&d, &h).unwrap();
        assert!((c.sampling_noise() - (0.5 / (100.0 * std::f64::consts::PI)).sqrt()).abs() < 1e-12);

        let point = Histogram { steps: 0, counts: vec![10], shots: 10 };
        let c = Comparison::between(&hadamard_walk_distribution(0), &point).unwrap();
        assert_eq!(c.sampling_noise(), 0.0);
    }

    #[test]
    fn test_length_mismatch() {
        let d = hadamard_walk_distribution(2);
        let h = Histogram { steps: 1, counts: vec![1, 0, 1], shots: 2 };
        assert!(matches!(
            Comparison::between(&d, &h),
            Err(WalkError::LengthMismatch { theory: 5, measured: 3 })
        ));
    }

    #[test]
    fn test_sampled_run_agrees() {
        let d = hadamard_walk_distribution(20);
        let h = Sampler::with_seed(11).sample_counts(&d, 100_000).unwrap();
        let c = Comparison::between(&d, &h).unwrap();
        assert!(c.agrees_within(0.02), "tv={}", c.total_variation);
        assert!(c.agrees_within(5.0 * c.sampling_noise()));
        assert!(c.report().contains("Total variation"));
    }
}
