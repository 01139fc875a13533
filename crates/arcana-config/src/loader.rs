// SPDX-FileCopyrightText: 2026 Arcana Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./arcana.toml` > `~/.config/arcana/arcana.toml` > `/etc/arcana/arcana.toml`
//! with environment variable overrides via `ARCANA_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::ArcanaConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/arcana/arcana.toml` (system-wide)
/// 3. `~/.config/arcana/arcana.toml` (user XDG config)
/// 4. `./arcana.toml` (local directory)
/// 5. `ARCANA_*` environment variables
pub fn load_config() -> Result<ArcanaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ArcanaConfig::default()))
        .merge(Toml::file("/etc/arcana/arcana.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("arcana/arcana.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("arcana.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<ArcanaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ArcanaConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ArcanaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ArcanaConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names. `ARCANA_SECRETS_ENCRYPTION_KEY` must map
/// to `secrets.encryption_key`, not `secrets.encryption.key`.
fn env_provider() -> Env {
    Env::prefixed("ARCANA_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: ARCANA_SECRETS_ENCRYPTION_KEY -> "secrets_encryption_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("service_", "service.", 1)
            .replacen("secrets_", "secrets.", 1)
            .replacen("catalog_", "catalog.", 1);
        mapped.into()
    })
}
