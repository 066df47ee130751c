/// Analytic side of the walk: exact binomials and the closed-form table.
pub mod binomial;
pub mod distribution;

pub use binomial::{binomial, binomial_row};
pub use distribution::{hadamard_walk_distribution, Distribution, NORMALIZATION_TOLERANCE};
