/// Coined quantum walk on a finite line.
///
/// The lattice holds 2·capacity + 1 sites, enough for the walker never to
/// reach an edge within `capacity` steps. Each site carries two complex
/// amplitudes, one per coin state. One step is
///
///   1. apply the coin at every site
///   2. move coin-0 amplitude one site towards +n, coin-1 towards -n
///
/// Starting at n = 0 with coin |0⟩ and the Hadamard coin, the position
/// distribution after t steps is the closed form of
/// `analytic::hadamard_walk_distribution`.
use super::coin::{apply_coin, hadamard, Matrix2x2};
use super::amplitude::Amplitude;
use crate::analytic::Distribution;
use crate::error::{Result, WalkError};

pub struct WalkState {
    /// Largest number of steps the lattice can hold
    pub capacity: usize,
    /// Steps taken so far
    pub steps: usize,
    /// Indexed by n + capacity; [coin 0, coin 1]
    pub amplitudes: Vec<[Amplitude; 2]>,
    coin: Matrix2x2,
}

impl WalkState {
    /// Walker at the origin with coin |0⟩ and the Hadamard coin.
    pub fn new(capacity: usize) -> Self {
        Self::with_initial_coin(capacity, [Amplitude::ONE, Amplitude::ZERO])
    }

    /// Walker at the origin with an arbitrary (normalized) coin state.
    pub fn with_initial_coin(capacity: usize, coin_state: [Amplitude; 2]) -> Self {
        let mut amplitudes = vec![[Amplitude::ZERO; 2]; 2 * capacity + 1];
        amplitudes[capacity] = coin_state;
        Self {
            capacity,
            steps: 0,
            amplitudes,
            coin: hadamard(),
        }
    }

    /// Number of lattice sites: 2·capacity + 1
    #[inline(always)]
    pub fn sites(&self) -> usize {
        self.amplitudes.len()
    }

    /// One coin-then-shift step.
    pub fn step(&mut self) -> Result<()> {
        if self.steps == self.capacity {
            return Err(WalkError::LatticeExhausted { capacity: self.capacity });
        }

        let mut next = vec![[Amplitude::ZERO; 2]; self.sites()];
        // Sites beyond ±steps hold no amplitude yet
        let lo = self.capacity - self.steps;
        let hi = self.capacity + self.steps;
        for site in lo..=hi {
            let [up, down] = apply_coin(&self.coin, self.amplitudes[site]);
            next[site + 1][0] += up;
            next[site - 1][1] += down;
        }

        self.amplitudes = next;
        self.steps += 1;
        Ok(())
    }

    /// Take `count` steps.
    pub fn run(&mut self, count: usize) -> Result<()> {
        for _ in 0..count {
            self.step()?;
        }
        Ok(())
    }

    /// P(n) = |a0(n)|² + |a1(n)|²
    pub fn probability(&self, position: i64) -> f64 {
        let idx = position + self.capacity as i64;
        if idx < 0 || idx as usize >= self.sites() {
            return 0.0;
        }
        let [a0, a1] = self.amplitudes[idx as usize];
        a0.norm_sq() + a1.norm_sq()
    }

    pub fn total_probability(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(|[a0, a1]| a0.norm_sq() + a1.norm_sq())
            .sum()
    }

    /// Current position distribution in the t - n table convention.
    pub fn distribution(&self) -> Distribution {
        let t = self.steps as i64;
        let table = (0..=2 * t).map(|i| self.probability(t - i)).collect();
        Distribution::from_table(self.steps, table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytic::hadamard_walk_distribution;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_initial_state() {
        let w = WalkState::new(3);
        assert_eq!(w.sites(), 7);
        assert!((w.probability(0) - 1.0).abs() < 1e-12);
        assert_eq!(w.distribution().probabilities, vec![1.0]);
    }

    #[test]
    fn test_first_step_splits_evenly() {
        let mut w = WalkState::new(1);
        w.step().unwrap();
        assert!((w.probability(1) - 0.5).abs() < 1e-12);
        assert!((w.probability(-1) - 0.5).abs() < 1e-12);
        assert_eq!(w.amplitudes[2][0], Amplitude::new(FRAC_1_SQRT_2, 0.0));
        assert_eq!(w.amplitudes[0][1], Amplitude::new(FRAC_1_SQRT_2, 0.0));
    }

    #[test]
    fn test_unitarity_preserved() {
        let mut w = WalkState::new(50);
        w.run(50).unwrap();
        assert!((w.total_probability() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_lattice_exhausted() {
        let mut w = WalkState::new(2);
        w.run(2).unwrap();
        assert_eq!(w.step(), Err(WalkError::LatticeExhausted { capacity: 2 }));
    }

    #[test]
    fn test_matches_closed_form() {
        for t in 0..=40 {
            let mut w = WalkState::new(t);
            w.run(t).unwrap();
            let simulated = w.distribution();
            let exact = hadamard_walk_distribution(t);
            for (i, (s, e)) in simulated.probabilities.iter().zip(&exact.probabilities).enumerate() {
                assert!((s - e).abs() < 1e-9, "t={t} index={i}: {s} vs {e}");
            }
        }
    }

    #[test]
    fn test_symmetric_coin_gives_symmetric_walk() {
        // (|0⟩ + i|1⟩)/√2 removes the drift
        let start = [Amplitude::new(FRAC_1_SQRT_2, 0.0), Amplitude::new(0.0, FRAC_1_SQRT_2)];
        let mut w = WalkState::with_initial_coin(20, start);
        w.run(20).unwrap();
        for n in 0..=20 {
            assert!((w.probability(n) - w.probability(-n)).abs() < 1e-12);
        }
    }
}
