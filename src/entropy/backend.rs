//! Numeric backends for entropy summation.
//!
//! Shannon entropy over a large external wordlist reduces to summing
//! `-p * log2(p)` across thousands of probabilities. The reference
//! backend is the portable per-term sum; the chunked backend rearranges
//! the same sum into independent lanes so the compiler can keep several
//! accumulations in flight. The two paths must agree within 1e-9
//! relative tolerance: the backend choice is an optimization, never a
//! behavioral fork.

/// Width of the chunked accumulation.
const LANES: usize = 8;

/// Selects how entropy summations are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericBackend {
    /// Portable per-term summation. Always available, always correct.
    #[default]
    Reference,
    /// Lane-parallel summation in natural log, rescaled once at the
    /// end. Numerically equivalent to the reference within tolerance.
    Chunked,
}

impl NumericBackend {
    /// Computes `-sum(p * log2(p))` over the given probabilities.
    ///
    /// Zero probabilities contribute nothing, matching the convention
    /// `0 * log2(0) = 0`.
    pub(crate) fn entropy_sum(self, probabilities: &[f64]) -> f64 {
        match self {
            NumericBackend::Reference => reference_sum(probabilities),
            NumericBackend::Chunked => chunked_sum(probabilities),
        }
    }
}

fn reference_sum(probabilities: &[f64]) -> f64 {
    -probabilities
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| p * p.log2())
        .sum::<f64>()
}

fn chunked_sum(probabilities: &[f64]) -> f64 {
    let mut lanes = [0.0f64; LANES];
    let chunks = probabilities.chunks_exact(LANES);
    let remainder = chunks.remainder();

    for chunk in chunks {
        for (lane, &p) in lanes.iter_mut().zip(chunk) {
            if p > 0.0 {
                *lane += p * p.ln();
            }
        }
    }

    let mut total: f64 = lanes.iter().sum();
    for &p in remainder {
        if p > 0.0 {
            total += p * p.ln();
        }
    }

    -total / std::f64::consts::LN_2
}
