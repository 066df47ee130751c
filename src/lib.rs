//! # hadamard-walk
//!
//! Closed-form position distribution of the one-dimensional Hadamard
//! quantum walk, with a coined-walk amplitude evolution and shot sampler
//! to check it against.
//!
//! ## Quick Start
//!
//! ```rust
//! use hadamard_walk::analytic::hadamard_walk_distribution;
//! use hadamard_walk::chart::BarChart;
//!
//! let dist = hadamard_walk_distribution(2);
//! assert_eq!(dist.probabilities, vec![0.25, 0.0, 0.5, 0.0, 0.25]);
//!
//! // Sum-to-one check
//! let total = dist.verify_normalized().unwrap();
//! println!("Σ P(n) = {total}");
//!
//! print!("{}", BarChart::new("Hadamard walk, t=2").render(&dist));
//! ```

pub mod analytic;
pub mod chart;
pub mod compare;
pub mod config;
pub mod core;
pub mod error;
pub mod sampling;

pub use analytic::{binomial, hadamard_walk_distribution, Distribution};
pub use error::{Result, WalkError};
