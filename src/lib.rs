//! Passphrase Generation Library
//!
//! Cryptographically secure passphrase and password generation with
//! entropy estimation. Selection is driven by rejection sampling over
//! the operating system CSPRNG, so draws are exactly uniform over the
//! alphabet with no modulo bias.
//!
//! # Architecture
//!
//! The system follows an explicit data flow:
//!
//! ```text
//! alphabet → generation → sampling → source (OS CSPRNG)
//!     ↓
//!  entropy (estimation, consumes no randomness)
//! ```
//!
//! # Design Principles
//!
//! - **No modulo bias**: indices come from minimal-bit-length rejection
//!   sampling, never from naive reduction
//! - **No fallback**: a failing OS source is an error, never a silent
//!   downgrade to a non-cryptographic generator
//! - **Estimation is pure**: entropy figures derive from sizes and
//!   counts alone, so a configuration can be judged before generating
//! - **Secrets stay out of logs**: sequences redact their `Debug`
//!   output and tracing records counts only
//!
//! # Example
//!
//! ```no_run
//! use passphrase_gen::{
//!     CharacterSet, EntropyEstimator, PassphraseParams, SequenceGenerator, WordList,
//! };
//!
//! let wordlist = WordList::from_words(["correct", "horse", "battery", "staple"]);
//! let mut generator = SequenceGenerator::from_os_entropy();
//!
//! let params = PassphraseParams::default();
//! let passphrase = generator.generate_passphrase(&wordlist, &params).unwrap();
//! println!("{}", passphrase.join(" "));
//!
//! let password = generator
//!     .generate_password(&CharacterSet::printable(), 16)
//!     .unwrap();
//! println!("{}", password.join(""));
//!
//! // Judge the configuration independently of any draw.
//! let estimator = EntropyEstimator::default();
//! let report = estimator.report(wordlist.len(), params.words, 77.0).unwrap();
//! if report.total_bits < 77.0 {
//!     eprintln!("passphrase is weaker than the target threshold");
//! }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod entropy;
pub mod generation;
pub mod sampling;
pub mod source;

// Re-export commonly used types at crate root
pub use config::{FileConfig, PasswordParams, SecurityConfig};
pub use entropy::{EntropyEstimator, EntropyReport, NumericBackend};
pub use generation::{
    Alphabet, CharacterSet, GeneratedSequence, PassphraseParams, SequenceGenerator, Token, WordList,
};
pub use sampling::UniformSampler;
pub use source::{OsByteSource, SecureByteSource};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
