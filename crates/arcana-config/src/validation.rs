// SPDX-FileCopyrightText: 2026 Arcana Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as non-blank secrets and a sane KDF cost floor.

use secrecy::SecretString;

use crate::diagnostic::ConfigError;
use crate::model::{ArcanaConfig, SecretsConfig};

/// Minimum accepted PBKDF2 iteration count. The production default is
/// 100000; anything below this floor offers no meaningful brute-force
/// resistance for an at-rest key store.
const MIN_KDF_ITERATIONS: u32 = 10_000;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &ArcanaConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.service.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "service.name must not be empty".to_string(),
        });
    }

    let level = config.service.log_level.as_str();
    if !matches!(level, "trace" | "debug" | "info" | "warn" | "error") {
        errors.push(ConfigError::Validation {
            message: format!(
                "service.log_level must be one of trace, debug, info, warn, error; got `{level}`"
            ),
        });
    }

    // A key that is set but blank is a misconfiguration, not an absent key.
    if let Some(key) = &config.secrets.encryption_key
        && key.trim().is_empty()
    {
        errors.push(ConfigError::Validation {
            message: "secrets.encryption_key must not be blank when set".to_string(),
        });
    }

    if config.secrets.kdf_iterations < MIN_KDF_ITERATIONS {
        errors.push(ConfigError::Validation {
            message: format!(
                "secrets.kdf_iterations must be at least {MIN_KDF_ITERATIONS}, got {}",
                config.secrets.kdf_iterations
            ),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Extract the encryption secret, failing fast when it is absent.
///
/// This is the startup check for production-like environments: there is no
/// hardcoded fallback secret, so a process that will encrypt or decrypt
/// stored API keys must refuse to start without one.
pub fn require_encryption_key(secrets: &SecretsConfig) -> Result<SecretString, ConfigError> {
    match &secrets.encryption_key {
        Some(key) if !key.trim().is_empty() => Ok(SecretString::from(key.clone())),
        _ => Err(ConfigError::MissingKey {
            key: "secrets.encryption_key".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn default_config_validates() {
        let config = ArcanaConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn blank_encryption_key_fails_validation() {
        let mut config = ArcanaConfig::default();
        config.secrets.encryption_key = Some("   ".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("encryption_key"))
        ));
    }

    #[test]
    fn low_kdf_iterations_fails_validation() {
        let mut config = ArcanaConfig::default();
        config.secrets.kdf_iterations = 500;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("kdf_iterations"))
        ));
    }

    #[test]
    fn bad_log_level_fails_validation() {
        let mut config = ArcanaConfig::default();
        config.service.log_level = "verbose".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("log_level"))
        ));
    }

    #[test]
    fn toml_deserialized_config_validates() {
        let config: ArcanaConfig = toml::from_str(
            r#"
[service]
name = "reader"
log_level = "warn"

[secrets]
kdf_iterations = 120000
"#,
        )
        .unwrap();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn require_encryption_key_missing() {
        let secrets = SecretsConfig::default();
        let err = require_encryption_key(&secrets).unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey { key } if key == "secrets.encryption_key"));
    }

    #[test]
    fn require_encryption_key_present() {
        let secrets = SecretsConfig {
            encryption_key: Some("correct horse battery staple".to_string()),
            ..Default::default()
        };
        let key = require_encryption_key(&secrets).unwrap();
        assert_eq!(key.expose_secret(), "correct horse battery staple");
    }
}
