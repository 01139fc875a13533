// SPDX-FileCopyrightText: 2026 Arcana Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Arcana tarot service.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Arcana configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values,
/// except that `secrets.encryption_key` must be supplied before the secret
/// codec can be constructed (there is deliberately no built-in fallback).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ArcanaConfig {
    /// Service identity and logging settings.
    #[serde(default)]
    pub service: ServiceConfig,

    /// Secret codec settings (encryption key, KDF cost).
    #[serde(default)]
    pub secrets: SecretsConfig,

    /// Card catalog settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Service identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Display name of the service.
    #[serde(default = "default_service_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_service_name() -> String {
    "arcana".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Secret codec configuration.
///
/// `encryption_key` is the single process-wide secret all stored API-key
/// blobs are derived from. Changing it invalidates every previously stored
/// blob; there is no migration path.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SecretsConfig {
    /// Process-wide encryption secret. `None` requires the
    /// `ARCANA_SECRETS_ENCRYPTION_KEY` environment variable; startup fails
    /// fast if neither is set.
    #[serde(default)]
    pub encryption_key: Option<String>,

    /// PBKDF2-HMAC-SHA256 iteration count (default: 100000).
    #[serde(default = "default_kdf_iterations")]
    pub kdf_iterations: u32,
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            encryption_key: None,
            kdf_iterations: default_kdf_iterations(),
        }
    }
}

fn default_kdf_iterations() -> u32 {
    100_000
}

/// Card catalog configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Warm every catalog partition at startup instead of on first access.
    #[serde(default = "default_preload")]
    pub preload: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            preload: default_preload(),
        }
    }
}

fn default_preload() -> bool {
    false
}
