//! Rejection sampling over a secure byte source.
//!
//! A naive `random_value % bound` favors low residues whenever `bound`
//! does not evenly divide the candidate space. The sampler instead draws
//! the minimal number of bits that can represent `bound - 1`, masks to
//! exactly those bits, and redraws while the candidate is out of range.
//! Because the candidate space is at most double `bound`, each draw
//! succeeds with probability > 0.5 and the expected number of draws is
//! below 2.

use crate::source::{OsByteSource, SecureByteSource, SourceError};
use thiserror::Error;

/// Retry cap for the rejection loop.
///
/// The loop terminates with overwhelming probability long before this;
/// reaching the cap means the byte source is returning structurally
/// out-of-range values and must be treated as unavailable.
const MAX_REJECTIONS: u32 = 1000;

/// Errors raised during sampling.
#[derive(Debug, Clone, Error)]
pub enum SamplerError {
    /// A non-positive bound was requested.
    #[error("bound must be positive, got {bound}")]
    InvalidBound {
        /// The rejected bound.
        bound: u64,
    },

    /// An inclusive range with `max < min` was requested.
    #[error("invalid range: maximum {max} below minimum {min}")]
    InvalidRange {
        /// Lower end of the rejected range.
        min: u64,
        /// Upper end of the rejected range.
        max: u64,
    },

    /// The underlying byte source failed.
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Uniform integer sampler over a secure byte source.
///
/// Pure function of the bound: the sampler holds no state besides the
/// source itself, and every draw is independent.
pub struct UniformSampler<S: SecureByteSource> {
    source: S,
}

impl UniformSampler<OsByteSource> {
    /// Creates a sampler reading the operating system CSPRNG.
    ///
    /// This is the production constructor; other sources exist for
    /// testing the sampler itself.
    pub fn from_os_entropy() -> Self {
        Self::new(OsByteSource::new())
    }
}

impl<S: SecureByteSource> UniformSampler<S> {
    /// Creates a sampler over the given byte source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns a uniformly distributed integer in `[0, bound)`.
    ///
    /// `bound == 1` returns 0 without consuming randomness.
    /// `bound == 0` fails with [`SamplerError::InvalidBound`].
    pub fn rand_below(&mut self, bound: u64) -> Result<u64, SamplerError> {
        if bound == 0 {
            return Err(SamplerError::InvalidBound { bound });
        }
        if bound == 1 {
            return Ok(0);
        }

        // Minimal bit length of bound - 1; bound >= 2 so bits >= 1.
        let bits = 64 - (bound - 1).leading_zeros();
        let nbytes = bits.div_ceil(8) as usize;
        let mask = if bits == 64 {
            u64::MAX
        } else {
            (1u64 << bits) - 1
        };

        // Draw into the low bytes of a big-endian u64; the leading
        // bytes stay zero across iterations.
        let mut buf = [0u8; 8];
        for _ in 0..MAX_REJECTIONS {
            self.source.fill(&mut buf[8 - nbytes..])?;
            let candidate = u64::from_be_bytes(buf) & mask;
            if candidate < bound {
                return Ok(candidate);
            }
        }

        tracing::warn!(bound, "rejection sampling exhausted retry cap");
        Err(SourceError::Unavailable {
            reason: format!(
                "rejection sampling exceeded {MAX_REJECTIONS} attempts; byte source output is suspect"
            ),
        }
        .into())
    }

    /// Returns a uniformly distributed integer in `[min, max]`.
    ///
    /// Fails with [`SamplerError::InvalidRange`] if `max < min`.
    pub fn rand_between(&mut self, min: u64, max: u64) -> Result<u64, SamplerError> {
        if max < min {
            return Err(SamplerError::InvalidRange { min, max });
        }

        let span = max - min;
        if span == u64::MAX {
            // Full-width range: span + 1 would overflow, but every
            // 8-byte draw is already uniform over it.
            let mut buf = [0u8; 8];
            self.source.fill(&mut buf)?;
            return Ok(u64::from_be_bytes(buf));
        }

        Ok(min + self.rand_below(span + 1)?)
    }
}
