// SPDX-FileCopyrightText: 2026 Arcana Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Arcana tarot service core.

use thiserror::Error;

/// The primary error type used across the Arcana workspace.
///
/// `Encryption` and `Decryption` carry only a generic message: the codec
/// never leaks plaintext or key material through its errors.
#[derive(Debug, Error)]
pub enum ArcanaError {
    /// Configuration errors (invalid TOML, missing required keys, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Any failure while encrypting a secret.
    #[error("failed to encrypt secret: {0}")]
    Encryption(String),

    /// Any failure while decrypting a secret (malformed blob, tampering,
    /// wrong process secret). Terminal: retrying with the same inputs will
    /// fail identically.
    #[error("failed to decrypt secret: {0}")]
    Decryption(String),

    /// Card catalog errors (malformed bundled data, unknown suit).
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
