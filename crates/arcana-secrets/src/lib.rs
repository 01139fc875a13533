// SPDX-FileCopyrightText: 2026 Arcana Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! At-rest protection for third-party AI provider API keys.
//!
//! Three independent pieces:
//! - [`SecretCodec`]: PBKDF2 + AES-256-GCM authenticated encryption, one
//!   self-contained base64 blob per secret.
//! - [`mask_api_key`]: irreversible display masking for admin screens.
//! - [`validate_api_key_format`]: syntactic per-provider key shape checks.
//!
//! The codec's only state is the injected process-wide secret; blobs are
//! decrypted exclusively at the point of outbound provider calls.

pub mod codec;
pub mod mask;
pub mod provider;

pub use codec::{DEFAULT_KDF_ITERATIONS, HEADER_LEN, IV_LEN, SALT_LEN, SecretCodec, TAG_LEN};
pub use mask::mask_api_key;
pub use provider::{ApiProvider, validate_api_key_format};
