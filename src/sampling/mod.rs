//! Uniform index sampling.
//!
//! Converts raw CSPRNG bytes into uniformly distributed integers below
//! an arbitrary bound, using rejection sampling so that no modulo bias
//! is introduced.

mod uniform;

pub use uniform::{SamplerError, UniformSampler};
