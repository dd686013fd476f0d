//! Generation configuration.
//!
//! Settings that callers thread into generation and estimation calls.
//! The acceleration toggle selects the entropy backend as an explicit
//! value at construction time; there is no ambient global switch.

use crate::entropy::NumericBackend;
use crate::generation::PassphraseParams;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Security policy for generated sequences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Minimum total entropy a generated sequence should carry, in
    /// bits. Sequences below this are worth a warning, not an error.
    pub entropy_bits_min: f64,
    /// Use the chunked entropy backend instead of the reference path.
    pub accelerated_entropy: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            entropy_bits_min: 77.0,
            accelerated_entropy: false,
        }
    }
}

impl SecurityConfig {
    /// The entropy backend this policy selects.
    pub fn backend(&self) -> NumericBackend {
        if self.accelerated_entropy {
            NumericBackend::Chunked
        } else {
            NumericBackend::Reference
        }
    }
}

/// Password generation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordParams {
    /// Number of characters to draw.
    pub length: usize,
}

impl Default for PasswordParams {
    fn default() -> Self {
        Self { length: 12 }
    }
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub passphrase: PassphraseParams,
    #[serde(default)]
    pub password: PasswordParams,
    #[serde(default)]
    pub security: SecurityConfig,
}

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid numeric range: maximum {max} below minimum {min}")]
    InvalidNumberRange { min: u64, max: u64 },
    #[error("entropy threshold must be non-negative, got {bits}")]
    NegativeThreshold { bits: f64 },
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.passphrase.number_max < self.passphrase.number_min {
            return Err(ConfigError::InvalidNumberRange {
                min: self.passphrase.number_min,
                max: self.passphrase.number_max,
            });
        }
        if self.security.entropy_bits_min < 0.0 {
            return Err(ConfigError::NegativeThreshold {
                bits: self.security.entropy_bits_min,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.passphrase.words, 6);
        assert_eq!(config.password.length, 12);
        assert_eq!(config.security.entropy_bits_min, 77.0);
    }

    #[test]
    fn test_backend_selection() {
        let mut security = SecurityConfig::default();
        assert_eq!(security.backend(), NumericBackend::Reference);

        security.accelerated_entropy = true;
        assert_eq!(security.backend(), NumericBackend::Chunked);
    }

    #[test]
    fn test_inverted_range_invalid() {
        let mut config = FileConfig::default();
        config.passphrase.number_min = 10;
        config.passphrase.number_max = 9;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidNumberRange { .. })
        ));
    }

    #[test]
    fn test_negative_threshold_invalid() {
        let mut config = FileConfig::default();
        config.security.entropy_bits_min = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeThreshold { .. })
        ));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [passphrase]
            words = 8
            "#,
        )
        .unwrap();

        assert_eq!(config.passphrase.words, 8);
        assert_eq!(config.passphrase.numbers, 0);
        assert_eq!(config.password.length, 12);
        assert!(!config.security.accelerated_entropy);
    }

    #[test]
    fn test_full_toml_round_trip() {
        let original = FileConfig {
            passphrase: PassphraseParams {
                words: 7,
                numbers: 2,
                number_min: 0,
                number_max: 9999,
            },
            password: PasswordParams { length: 20 },
            security: SecurityConfig {
                entropy_bits_min: 128.0,
                accelerated_entropy: true,
            },
        };

        let rendered = toml::to_string(&original).unwrap();
        let parsed: FileConfig = toml::from_str(&rendered).unwrap();

        assert_eq!(parsed.passphrase.words, 7);
        assert_eq!(parsed.passphrase.number_max, 9999);
        assert_eq!(parsed.password.length, 20);
        assert!(parsed.security.accelerated_entropy);
    }
}
