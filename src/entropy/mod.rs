//! Entropy estimation.
//!
//! Purely functional: everything here is computed from alphabet sizes
//! and draw counts, never from randomness. The estimator judges whether
//! an alphabet/length combination reaches a target number of bits and
//! derives the minimum length that would.

mod backend;
mod estimator;

pub use backend::NumericBackend;
pub use estimator::{EntropyError, EntropyEstimator, EntropyReport};
