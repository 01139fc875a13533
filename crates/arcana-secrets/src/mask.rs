// SPDX-FileCopyrightText: 2026 Arcana Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Display-only masking for API keys.
//!
//! The masked form is computed on demand and never stored; it is not
//! reversible and must never be fed back into the codec.

/// Fully masked form for keys too short to partially reveal.
const FULL_MASK: &str = "********";

/// Mask an API key for display.
///
/// Keys of 10 characters or fewer are fully masked as `"********"`. Longer
/// keys keep their first 6 and last 4 characters with at least 8 asterisks
/// in between (`max(8, len - 10)`), so nothing from the middle of the key
/// ever reaches a screen or log line.
///
/// Pure and total: operates on characters, never panics on multi-byte input.
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 10 {
        return FULL_MASK.to_string();
    }

    let prefix: String = chars[..6].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    let padding = (chars.len() - 10).max(8);
    format!("{prefix}{}{suffix}", "*".repeat(padding))
}
