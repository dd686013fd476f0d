//! Operating system CSPRNG source.
//!
//! Backed by `rand_core::OsRng`, which reads the platform generator
//! (`getrandom(2)` on Linux, equivalent interfaces elsewhere). The OS
//! source is assumed safe for concurrent reads; that guarantee is the
//! platform's, not this crate's.

use super::{SecureByteSource, SourceError};
use rand_core::{OsRng, RngCore};

/// Byte source reading the operating system CSPRNG.
///
/// Stateless beyond the OS handle. A blocked read is allowed to block
/// indefinitely; an errored read surfaces [`SourceError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OsByteSource;

impl OsByteSource {
    /// Creates a new OS-backed source.
    pub fn new() -> Self {
        Self
    }
}

impl SecureByteSource for OsByteSource {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), SourceError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| SourceError::Unavailable {
                reason: e.to_string(),
            })
    }
}
