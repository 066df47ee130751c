/// Error type shared by the calculator, the coined walk and the sampler.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WalkError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WalkError {
    /// Probability table failed the sum-to-one check
    #[error("probabilities sum to {total}, expected 1 within {tolerance:e}")]
    NotNormalized { total: f64, tolerance: f64 },

    /// Walker asked to step beyond the lattice it was built for
    #[error("lattice sized for {capacity} steps cannot take another step")]
    LatticeExhausted { capacity: usize },

    #[error("at least one shot is required")]
    NoShots,

    /// Theory and histogram cover different lattices
    #[error("table length mismatch: theory has {theory} entries, histogram has {measured}")]
    LengthMismatch { theory: usize, measured: usize },

    /// Sampled histogram strays too far from the closed form
    #[error("simulation deviates from theory: total variation {total_variation} > {threshold}")]
    SimulationMismatch { total_variation: f64, threshold: f64 },

    #[error("invalid value '{value}' for {key}")]
    InvalidConfig { key: String, value: String },
}
