// SPDX-FileCopyrightText: 2026 Arcana Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-provider API key format validation.
//!
//! Syntactic pre-checks only: a passing key merely looks like a key for
//! that provider. No network call is made and nothing is decoded; the
//! upstream provider remains the sole authority on actual validity.

use std::str::FromStr;

use strum::{Display, EnumString};

/// Minimum length accepted for keys of providers without a known format.
const FALLBACK_MIN_LEN: usize = 10;

/// The AI providers whose key shapes we recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ApiProvider {
    OpenAi,
    Gemini,
    Grok,
    OpenRouter,
    HuggingFace,
}

impl ApiProvider {
    /// Prefix + minimum-length rule for this provider's keys.
    pub fn key_matches(self, key: &str) -> bool {
        match self {
            ApiProvider::OpenAi => key.starts_with("sk-") && key.len() > 20,
            ApiProvider::Gemini => key.starts_with("AIza") && key.len() >= 30,
            ApiProvider::Grok => key.starts_with("xai-") && key.len() > 20,
            ApiProvider::OpenRouter => key.starts_with("sk-or-") && key.len() > 20,
            ApiProvider::HuggingFace => key.starts_with("hf_") && key.len() > 20,
        }
    }
}

/// Validate a candidate API key against a provider's known key shape.
///
/// Blank or whitespace-only keys are rejected immediately. Providers not in
/// [`ApiProvider`] fall back to a plain minimum-length rule so a new
/// provider can be wired up before its key format is catalogued here.
pub fn validate_api_key_format(provider: &str, key: &str) -> bool {
    if key.trim().is_empty() {
        return false;
    }
    match ApiProvider::from_str(provider) {
        Ok(known) => known.key_matches(key),
        Err(_) => key.len() >= FALLBACK_MIN_LEN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openai_key_boundary() {
        assert!(validate_api_key_format(
            "openai",
            &format!("sk-{}", "x".repeat(21))
        ));
        assert!(!validate_api_key_format("openai", "sk-short"));
        // Long enough but wrong prefix.
        assert!(!validate_api_key_format("openai", &"pk-".repeat(10)));
    }

    #[test]
    fn openrouter_requires_sk_or_prefix() {
        assert!(validate_api_key_format(
            "openrouter",
            "sk-or-v1-0123456789abcdef"
        ));
        // A plain OpenAI-style key is not an OpenRouter key.
        assert!(!validate_api_key_format(
            "openrouter",
            &format!("sk-{}", "x".repeat(21))
        ));
    }

    #[test]
    fn huggingface_requires_hf_prefix() {
        assert!(validate_api_key_format(
            "huggingface",
            "hf_abcdefghijklmnopqrstu"
        ));
        assert!(!validate_api_key_format("huggingface", "hf_short"));
    }

    #[test]
    fn gemini_requires_aiza_prefix_and_length() {
        assert!(validate_api_key_format(
            "gemini",
            "AIzaSyA1234567890abcdefghijklmnop"
        ));
        assert!(!validate_api_key_format("gemini", "AIzaShort"));
    }

    #[test]
    fn grok_requires_xai_prefix() {
        assert!(validate_api_key_format("grok", "xai-0123456789abcdefghij"));
        assert!(!validate_api_key_format("grok", "sk-0123456789abcdefghij"));
    }

    #[test]
    fn unknown_provider_uses_fallback_rule() {
        assert!(!validate_api_key_format("unknown-provider", ""));
        assert!(!validate_api_key_format("unknown-provider", "   "));
        assert!(!validate_api_key_format("unknown-provider", "short"));
        // Exactly 10 chars passes the fallback.
        assert!(validate_api_key_format("unknown-provider", "0123456789"));
    }

    #[test]
    fn blank_key_rejected_for_known_providers_too() {
        assert!(!validate_api_key_format("openai", ""));
        assert!(!validate_api_key_format("gemini", "  \t "));
    }

    #[test]
    fn provider_names_parse_lowercase() {
        assert_eq!(ApiProvider::from_str("openai").unwrap(), ApiProvider::OpenAi);
        assert_eq!(
            ApiProvider::from_str("openrouter").unwrap(),
            ApiProvider::OpenRouter
        );
        assert_eq!(
            ApiProvider::from_str("huggingface").unwrap(),
            ApiProvider::HuggingFace
        );
        assert!(ApiProvider::from_str("anthropic").is_err());
    }
}
