//! Sequence generation from alphabets.
//!
//! One generator call performs one uniform draw per requested position;
//! the output length always equals the requested count. Generated
//! symbols are never logged, only their counts.

use super::alphabet::{CharacterSet, WordList};
use super::sequence::{GeneratedSequence, Token};
use crate::sampling::{SamplerError, UniformSampler};
use crate::source::{OsByteSource, SecureByteSource};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised during generation.
#[derive(Debug, Clone, Error)]
pub enum GenerateError {
    /// Draws were requested from an alphabet with no symbols.
    #[error("alphabet is empty")]
    EmptyAlphabet,

    /// The underlying sampler failed.
    #[error(transparent)]
    Sampler(#[from] SamplerError),
}

/// Parameters for one passphrase generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PassphraseParams {
    /// Number of words to draw.
    pub words: usize,
    /// Number of numeric tokens to append.
    pub numbers: usize,
    /// Inclusive lower end of the numeric range.
    pub number_min: u64,
    /// Inclusive upper end of the numeric range.
    pub number_max: u64,
}

impl Default for PassphraseParams {
    fn default() -> Self {
        Self {
            words: 6, // For EFF Large Wordlist
            numbers: 0,
            number_min: 100_000,
            number_max: 999_999,
        }
    }
}

/// Draws passphrases and passwords from caller-supplied alphabets.
///
/// Holds no state besides the sampler; every call draws fresh and
/// validates its inputs even when the caller already has.
pub struct SequenceGenerator<S: SecureByteSource> {
    sampler: UniformSampler<S>,
}

impl SequenceGenerator<OsByteSource> {
    /// Creates a generator drawing from the operating system CSPRNG.
    pub fn from_os_entropy() -> Self {
        Self::new(OsByteSource::new())
    }
}

impl<S: SecureByteSource> SequenceGenerator<S> {
    /// Creates a generator over the given byte source.
    pub fn new(source: S) -> Self {
        Self {
            sampler: UniformSampler::new(source),
        }
    }

    /// Generates a passphrase: `params.words` words drawn from
    /// `wordlist`, followed by `params.numbers` integers drawn from the
    /// inclusive numeric range.
    ///
    /// Fails with [`GenerateError::EmptyAlphabet`] if the wordlist is
    /// empty while words are requested, and with
    /// [`SamplerError::InvalidRange`] if `number_max < number_min`. The
    /// range is checked before any draw so a malformed call consumes no
    /// randomness.
    pub fn generate_passphrase(
        &mut self,
        wordlist: &WordList,
        params: &PassphraseParams,
    ) -> Result<GeneratedSequence, GenerateError> {
        if params.number_max < params.number_min {
            return Err(SamplerError::InvalidRange {
                min: params.number_min,
                max: params.number_max,
            }
            .into());
        }
        if wordlist.is_empty() && params.words > 0 {
            return Err(GenerateError::EmptyAlphabet);
        }

        let mut tokens = Vec::with_capacity(params.words + params.numbers);

        for _ in 0..params.words {
            let index = self.sampler.rand_below(wordlist.len() as u64)? as usize;
            tokens.push(Token::Word(wordlist.symbol(index).clone()));
        }

        for _ in 0..params.numbers {
            let n = self
                .sampler
                .rand_between(params.number_min, params.number_max)?;
            tokens.push(Token::Number(n));
        }

        tracing::debug!(
            words = params.words,
            numbers = params.numbers,
            wordlist_size = wordlist.len(),
            "generated passphrase"
        );

        Ok(GeneratedSequence::new(tokens))
    }

    /// Generates a password of `length` characters drawn from `charset`.
    ///
    /// Fails with [`GenerateError::EmptyAlphabet`] if the character set
    /// is empty while characters are requested.
    pub fn generate_password(
        &mut self,
        charset: &CharacterSet,
        length: usize,
    ) -> Result<GeneratedSequence, GenerateError> {
        if charset.is_empty() && length > 0 {
            return Err(GenerateError::EmptyAlphabet);
        }

        let mut tokens = Vec::with_capacity(length);
        for _ in 0..length {
            let index = self.sampler.rand_below(charset.len() as u64)? as usize;
            tokens.push(Token::Char(*charset.symbol(index)));
        }

        tracing::debug!(
            length,
            charset_size = charset.len(),
            "generated password"
        );

        Ok(GeneratedSequence::new(tokens))
    }
}
