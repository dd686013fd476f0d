//! Secure random byte sources.
//!
//! This module defines the seam between the sampler and the platform
//! CSPRNG. The production source reads the operating system generator
//! directly; there is deliberately no userspace fallback, because a
//! silent downgrade to a non-cryptographic generator would be invisible
//! to callers.

mod os;

pub use os::OsByteSource;

use thiserror::Error;

/// Errors raised by a secure byte source.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// The platform generator could not be opened or read.
    #[error("secure random source unavailable: {reason}")]
    Unavailable {
        /// Description of the underlying platform failure.
        reason: String,
    },
}

/// A cryptographically secure source of random bytes.
///
/// Implementations must draw from a CSPRNG; a failing source must
/// surface [`SourceError::Unavailable`] rather than degrade. Retry
/// policy, if any, belongs to the caller.
pub trait SecureByteSource {
    /// Fills `dest` with uniformly random bytes.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), SourceError>;
}
