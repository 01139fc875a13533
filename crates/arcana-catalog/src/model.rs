// SPDX-FileCopyrightText: 2026 Arcana Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Card record schemas.
//!
//! Two generations of the same entity coexist: [`CardRecord`] is the current
//! schema with per-orientation fields; [`LegacyCardRecord`] is the flattened
//! shape older stored readings still use. The adapters in
//! [`crate::adapter`] map between them, lossily.

use arcana_core::{Arcana, Orientation, Suit};
use serde::{Deserialize, Serialize};

/// A pair of values keyed by card orientation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orientations<T> {
    pub upright: T,
    pub reversed: T,
}

impl<T> Orientations<T> {
    /// The value for one card orientation, so readers that already hold an
    /// [`Orientation`] for a drawn card need no match of their own.
    pub fn get(&self, orientation: Orientation) -> &T {
        match orientation {
            Orientation::Upright => &self.upright,
            Orientation::Reversed => &self.reversed,
        }
    }
}

/// Canonical card entity (current schema).
///
/// `id` is globally unique across the whole deck. `number` is the ordinal
/// within the arcana (0-21 for major) or the within-suit rank (1-14 for
/// minor). `suit` is `None` exactly when `arcana` is major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: String,
    pub number: u8,
    /// English card name.
    pub name: String,
    /// Korean card name.
    pub name_ko: String,
    pub arcana: Arcana,
    pub suit: Option<Suit>,
    pub numerology: u8,
    pub keywords: Orientations<Vec<String>>,
    pub meaning_short: Orientations<String>,
    pub meaning_detailed: Orientations<String>,
    pub love: Orientations<String>,
    pub career: Orientations<String>,
    pub health: Orientations<String>,
    pub advice: Orientations<String>,
}

/// Per-orientation text block in the legacy schema. Field names differ from
/// the current schema: `meaning` is the long text, `summary` the short one,
/// and `work` is what the current schema calls `career`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyMeaning {
    pub meaning: String,
    pub summary: String,
    pub love: String,
    pub work: String,
    pub health: String,
    pub advice: String,
}

/// Flattened card entity (legacy schema).
///
/// `keywords` is a single ordered list with no orientation tag. `suit`
/// doubles as the arcana marker: the string `"major"` is a pseudo-suit.
/// `card_type` distinguishes `major`, `pip`, and `court`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyCardRecord {
    pub id: String,
    pub name: String,
    pub name_ko: String,
    pub suit: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub number: u8,
    pub numerology: String,
    pub keywords: Vec<String>,
    pub upright: LegacyMeaning,
    pub reversed: LegacyMeaning,
}

/// Card counts derived from the loaded catalog partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TarotStats {
    pub total: usize,
    pub major_arcana: usize,
    pub minor_arcana: usize,
    pub suits: SuitCounts,
}

/// Per-suit card counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuitCounts {
    pub wands: usize,
    pub cups: usize,
    pub swords: usize,
    pub pentacles: usize,
}
