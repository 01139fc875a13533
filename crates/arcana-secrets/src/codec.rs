// SPDX-FileCopyrightText: 2026 Arcana Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! AES-256-GCM secret codec for at-rest API-key storage.
//!
//! Every call to [`SecretCodec::encrypt`] draws a fresh 64-byte salt and a
//! fresh 16-byte IV from the system CSPRNG, so encrypting the same plaintext
//! twice yields different blobs. The key is re-derived from the embedded
//! salt on decrypt via PBKDF2-HMAC-SHA256, so no key material is stored
//! alongside the blob.
//!
//! Blob layout (base64 of): `salt (64) || iv (16) || tag (16) || ciphertext`.
//! Anything shorter than the 96-byte header fails decryption deterministically.

use std::num::NonZeroU32;

use aes::Aes256;
use aes_gcm::AesGcm;
use aes_gcm::aead::generic_array::typenum::U16;
use aes_gcm::aead::{Aead, KeyInit, Nonce};
use arcana_config::model::SecretsConfig;
use arcana_config::validation::require_encryption_key;
use arcana_core::ArcanaError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use ring::rand::{SecureRandom, SystemRandom};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;
use zeroize::Zeroizing;

/// AES-256-GCM parameterized with the 16-byte IV the blob format mandates.
/// GCM handles non-96-bit IVs by GHASHing them down per the NIST spec.
type Aes256Gcm16 = AesGcm<Aes256, U16>;

/// Length of the random PBKDF2 salt embedded in each blob.
pub const SALT_LEN: usize = 64;
/// Length of the random GCM IV embedded in each blob.
pub const IV_LEN: usize = 16;
/// Length of the GCM authentication tag.
pub const TAG_LEN: usize = 16;
/// Fixed header: everything before the variable-length ciphertext.
pub const HEADER_LEN: usize = SALT_LEN + IV_LEN + TAG_LEN;

/// Derived AES key length (AES-256).
const KEY_LEN: usize = 32;

/// Production PBKDF2-HMAC-SHA256 iteration count. Deliberately slow (tens of
/// milliseconds) to resist brute force if the blob store leaks; do not call
/// the codec on a latency-critical path.
pub const DEFAULT_KDF_ITERATIONS: u32 = 100_000;

/// Authenticated codec for the process-wide encryption secret.
///
/// Stateless beyond the injected secret: each blob is self-contained.
/// Changing the secret invalidates every previously stored blob (documented
/// risk, no migration path).
pub struct SecretCodec {
    secret: SecretString,
    iterations: NonZeroU32,
}

impl std::fmt::Debug for SecretCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretCodec")
            .field("secret", &"[REDACTED]")
            .field("iterations", &self.iterations)
            .finish()
    }
}

impl SecretCodec {
    /// Create a codec with the production iteration count.
    pub fn new(secret: SecretString) -> Self {
        Self {
            secret,
            // 100_000 is non-zero.
            iterations: NonZeroU32::new(DEFAULT_KDF_ITERATIONS).unwrap_or(NonZeroU32::MIN),
        }
    }

    /// Create a codec with an explicit iteration count (tests, config override).
    pub fn with_iterations(secret: SecretString, iterations: NonZeroU32) -> Self {
        Self { secret, iterations }
    }

    /// Build a codec from validated configuration, failing fast when the
    /// encryption key is absent. This is the startup path.
    pub fn from_config(config: &SecretsConfig) -> Result<Self, ArcanaError> {
        let secret =
            require_encryption_key(config).map_err(|e| ArcanaError::Config(e.to_string()))?;
        let iterations = NonZeroU32::new(config.kdf_iterations).ok_or_else(|| {
            ArcanaError::Config("secrets.kdf_iterations must be non-zero".to_string())
        })?;
        debug!(iterations = iterations.get(), "secret codec initialized");
        Ok(Self::with_iterations(secret, iterations))
    }

    /// Derive the 32-byte AES key from the process secret and a blob's salt.
    ///
    /// Deterministic per salt, so decryption needs no external key storage.
    /// The returned key is wrapped in [`Zeroizing`] for automatic memory
    /// zeroing on drop.
    fn derive_key(&self, salt: &[u8]) -> Zeroizing<[u8; KEY_LEN]> {
        let mut key = Zeroizing::new([0u8; KEY_LEN]);
        ring::pbkdf2::derive(
            ring::pbkdf2::PBKDF2_HMAC_SHA256,
            self.iterations,
            salt,
            self.secret.expose_secret().as_bytes(),
            key.as_mut(),
        );
        key
    }

    /// Encrypt a plaintext secret into an opaque base64 blob.
    ///
    /// Returns `base64(salt || iv || tag || ciphertext)`. Errors are generic
    /// [`ArcanaError::Encryption`] values; plaintext never appears in them.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, ArcanaError> {
        let rng = SystemRandom::new();

        let mut salt = [0u8; SALT_LEN];
        rng.fill(&mut salt)
            .map_err(|_| ArcanaError::Encryption("failed to generate random salt".to_string()))?;
        let mut iv = [0u8; IV_LEN];
        rng.fill(&mut iv)
            .map_err(|_| ArcanaError::Encryption("failed to generate random IV".to_string()))?;

        let key = self.derive_key(&salt);
        let cipher = Aes256Gcm16::new_from_slice(key.as_ref()).map_err(|_| {
            ArcanaError::Encryption("failed to create AES-256-GCM key".to_string())
        })?;

        // aes-gcm appends the tag to the ciphertext; the blob format wants
        // the tag between the IV and the ciphertext.
        let sealed = cipher
            .encrypt(Nonce::<Aes256Gcm16>::from_slice(&iv), plaintext.as_bytes())
            .map_err(|_| ArcanaError::Encryption("AES-256-GCM encryption failed".to_string()))?;
        let tag_start = sealed.len() - TAG_LEN;

        let mut blob = Vec::with_capacity(HEADER_LEN + tag_start);
        blob.extend_from_slice(&salt);
        blob.extend_from_slice(&iv);
        blob.extend_from_slice(&sealed[tag_start..]);
        blob.extend_from_slice(&sealed[..tag_start]);

        Ok(BASE64.encode(blob))
    }

    /// Decrypt a blob produced by [`encrypt`](Self::encrypt).
    ///
    /// Tag verification is atomic: a tampered or truncated blob, or a blob
    /// sealed under a different process secret, fails whole with
    /// [`ArcanaError::Decryption`] and leaks no partial plaintext. Callers
    /// must treat the error as "credential unusable", not retry.
    pub fn decrypt(&self, blob: &str) -> Result<String, ArcanaError> {
        let bytes = BASE64
            .decode(blob)
            .map_err(|_| ArcanaError::Decryption("blob is not valid base64".to_string()))?;
        if bytes.len() < HEADER_LEN {
            return Err(ArcanaError::Decryption(format!(
                "blob too short: {} bytes, need at least {HEADER_LEN}",
                bytes.len()
            )));
        }

        let (salt, rest) = bytes.split_at(SALT_LEN);
        let (iv, rest) = rest.split_at(IV_LEN);
        let (tag, ciphertext) = rest.split_at(TAG_LEN);

        let key = self.derive_key(salt);
        let cipher = Aes256Gcm16::new_from_slice(key.as_ref()).map_err(|_| {
            ArcanaError::Decryption("failed to create AES-256-GCM key".to_string())
        })?;

        let mut sealed = Vec::with_capacity(ciphertext.len() + TAG_LEN);
        sealed.extend_from_slice(ciphertext);
        sealed.extend_from_slice(tag);

        let plaintext = cipher
            .decrypt(Nonce::<Aes256Gcm16>::from_slice(iv), sealed.as_slice())
            .map_err(|_| {
                ArcanaError::Decryption(
                    "authentication failed -- wrong key or corrupted blob".to_string(),
                )
            })?;

        String::from_utf8(plaintext)
            .map_err(|_| ArcanaError::Decryption("decrypted value is not valid UTF-8".to_string()))
    }
}
