// SPDX-FileCopyrightText: 2026 Arcana Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lossy adapters between the current and legacy card schemas.
//!
//! These are not inverses of each other. `adapt_new_to_old` is a projection
//! that drops orientation tags from keywords; `adapt_old_to_new` is a
//! heuristic reconstruction. Round-tripping a legacy record through both
//! directions is not guaranteed to return the original, and the test suite
//! pins a fixture demonstrating that.
//!
//! Both functions are pure and total over schema-valid input. They do not
//! validate their input; a record missing required fields never reaches
//! here because the schema types enforce presence at deserialization time.

use arcana_core::{Arcana, Suit};

use crate::model::{CardRecord, LegacyCardRecord, LegacyMeaning, Orientations};

/// Pseudo-suit value the legacy schema uses to mark major-arcana cards.
const LEGACY_MAJOR_SUIT: &str = "major";

/// Project a current-schema card into the legacy flat shape.
///
/// Keywords are concatenated upright-first, which loses the orientation
/// tag. The `type` field is derived from the number: 10 and below is a
/// pip, above is a court card. That cutoff is a carried-over heuristic,
/// not validated tarot numbering; it is kept as-is so legacy consumers
/// see the same classification they always have.
pub fn adapt_new_to_old(card: &CardRecord) -> LegacyCardRecord {
    let card_type = match card.arcana {
        Arcana::Major => "major",
        Arcana::Minor if card.number <= 10 => "pip",
        Arcana::Minor => "court",
    };

    let mut keywords =
        Vec::with_capacity(card.keywords.upright.len() + card.keywords.reversed.len());
    keywords.extend(card.keywords.upright.iter().cloned());
    keywords.extend(card.keywords.reversed.iter().cloned());

    LegacyCardRecord {
        id: card.id.clone(),
        name: card.name.clone(),
        name_ko: card.name_ko.clone(),
        suit: card
            .suit
            .map(|s| s.to_string())
            .unwrap_or_else(|| LEGACY_MAJOR_SUIT.to_string()),
        card_type: card_type.to_string(),
        number: card.number,
        numerology: card.numerology.to_string(),
        keywords,
        upright: legacy_meaning(card, |o| &o.upright),
        reversed: legacy_meaning(card, |o| &o.reversed),
    }
}

fn legacy_meaning(card: &CardRecord, side: impl Fn(&Orientations<String>) -> &String) -> LegacyMeaning {
    LegacyMeaning {
        meaning: side(&card.meaning_detailed).clone(),
        summary: side(&card.meaning_short).clone(),
        love: side(&card.love).clone(),
        work: side(&card.career).clone(),
        health: side(&card.health).clone(),
        advice: side(&card.advice).clone(),
    }
}

/// Reconstruct a current-schema card from a legacy record.
///
/// The legacy keyword list carries no orientation tags, so this goes
/// through [`split_keywords_by_parity_heuristic`]. A numerology string
/// that does not parse as a number becomes 0 rather than an error; the
/// adapters have no failure path.
pub fn adapt_old_to_new(card: &LegacyCardRecord) -> CardRecord {
    let arcana = if card.suit == LEGACY_MAJOR_SUIT {
        Arcana::Major
    } else {
        Arcana::Minor
    };

    CardRecord {
        id: card.id.clone(),
        number: card.number,
        name: card.name.clone(),
        name_ko: card.name_ko.clone(),
        arcana,
        suit: card.suit.parse::<Suit>().ok(),
        numerology: card.numerology.parse().unwrap_or_default(),
        keywords: split_keywords_by_parity_heuristic(&card.keywords),
        meaning_short: pair(card, |m| &m.summary),
        meaning_detailed: pair(card, |m| &m.meaning),
        love: pair(card, |m| &m.love),
        career: pair(card, |m| &m.work),
        health: pair(card, |m| &m.health),
        advice: pair(card, |m| &m.advice),
    }
}

fn pair(card: &LegacyCardRecord, field: impl Fn(&LegacyMeaning) -> &String) -> Orientations<String> {
    Orientations {
        upright: field(&card.upright).clone(),
        reversed: field(&card.reversed).clone(),
    }
}

/// Split a flat keyword list into upright/reversed halves by index parity:
/// even indices upright, odd indices reversed.
///
/// This is a heuristic, not an inverse of the upright-then-reversed
/// concatenation done by [`adapt_new_to_old`]. It only reconstructs the
/// original orientation split when the flat list was built by strictly
/// interleaving the two sides, which the legacy schema never guaranteed.
/// Legacy data that does not follow that convention comes back silently
/// misattributed; callers must treat the result as best-effort.
pub fn split_keywords_by_parity_heuristic(keywords: &[String]) -> Orientations<Vec<String>> {
    let mut upright = Vec::with_capacity(keywords.len().div_ceil(2));
    let mut reversed = Vec::with_capacity(keywords.len() / 2);
    for (i, keyword) in keywords.iter().enumerate() {
        if i % 2 == 0 {
            upright.push(keyword.clone());
        } else {
            reversed.push(keyword.clone());
        }
    }
    Orientations { upright, reversed }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_new_card() -> CardRecord {
        let text = |up: &str, rev: &str| Orientations {
            upright: up.to_string(),
            reversed: rev.to_string(),
        };
        CardRecord {
            id: "swords-12".to_string(),
            number: 12,
            name: "Knight of Swords".to_string(),
            name_ko: "소드 기사".to_string(),
            arcana: Arcana::Minor,
            suit: Some(Suit::Swords),
            numerology: 12,
            keywords: Orientations {
                upright: vec!["pursuit".to_string(), "momentum".to_string()],
                reversed: vec!["impulsiveness".to_string()],
            },
            meaning_short: text("charge ahead", "reckless haste"),
            meaning_detailed: text("a swift decisive push", "speed without aim"),
            love: text("bold moves", "rash words"),
            career: text("rapid progress", "cutting corners"),
            health: text("restless energy", "burnout risk"),
            advice: text("act now", "slow down"),
        }
    }

    fn sample_legacy_card() -> LegacyCardRecord {
        let meaning = |tag: &str| LegacyMeaning {
            meaning: format!("{tag} meaning"),
            summary: format!("{tag} summary"),
            love: format!("{tag} love"),
            work: format!("{tag} work"),
            health: format!("{tag} health"),
            advice: format!("{tag} advice"),
        };
        LegacyCardRecord {
            id: "cups-03".to_string(),
            name: "Three of Cups".to_string(),
            name_ko: "컵 3".to_string(),
            suit: "cups".to_string(),
            card_type: "pip".to_string(),
            number: 3,
            numerology: "3".to_string(),
            keywords: vec![
                "celebration".to_string(),
                "friendship".to_string(),
                "community".to_string(),
            ],
            upright: meaning("upright"),
            reversed: meaning("reversed"),
        }
    }

    #[test]
    fn new_to_old_flattens_keywords_upright_first() {
        let legacy = adapt_new_to_old(&sample_new_card());
        assert_eq!(legacy.keywords, ["pursuit", "momentum", "impulsiveness"]);
    }

    #[test]
    fn new_to_old_classifies_pip_and_court_by_number() {
        let mut card = sample_new_card();
        let legacy = adapt_new_to_old(&card);
        assert_eq!(legacy.card_type, "court");

        card.number = 10;
        assert_eq!(adapt_new_to_old(&card).card_type, "pip");
        card.number = 11;
        assert_eq!(adapt_new_to_old(&card).card_type, "court");
    }

    #[test]
    fn new_to_old_maps_major_to_pseudo_suit() {
        let mut card = sample_new_card();
        card.arcana = Arcana::Major;
        card.suit = None;
        card.number = 0;

        let legacy = adapt_new_to_old(&card);
        assert_eq!(legacy.suit, "major");
        assert_eq!(legacy.card_type, "major");
    }

    #[test]
    fn new_to_old_renames_meaning_fields() {
        let legacy = adapt_new_to_old(&sample_new_card());
        assert_eq!(legacy.upright.meaning, "a swift decisive push");
        assert_eq!(legacy.upright.summary, "charge ahead");
        assert_eq!(legacy.upright.work, "rapid progress");
        assert_eq!(legacy.reversed.work, "cutting corners");
        assert_eq!(legacy.numerology, "12");
    }

    #[test]
    fn old_to_new_splits_keywords_by_parity() {
        let card = adapt_old_to_new(&sample_legacy_card());
        assert_eq!(card.keywords.upright, ["celebration", "community"]);
        assert_eq!(card.keywords.reversed, ["friendship"]);
    }

    #[test]
    fn old_to_new_recovers_arcana_and_suit() {
        let card = adapt_old_to_new(&sample_legacy_card());
        assert_eq!(card.arcana, Arcana::Minor);
        assert_eq!(card.suit, Some(Suit::Cups));
        assert_eq!(card.numerology, 3);

        let mut legacy = sample_legacy_card();
        legacy.suit = "major".to_string();
        let major = adapt_old_to_new(&legacy);
        assert_eq!(major.arcana, Arcana::Major);
        assert!(major.suit.is_none());
    }

    #[test]
    fn old_to_new_tolerates_unparseable_numerology() {
        let mut legacy = sample_legacy_card();
        legacy.numerology = "three".to_string();
        assert_eq!(adapt_old_to_new(&legacy).numerology, 0);
    }

    #[test]
    fn parity_split_handles_empty_and_single_lists() {
        let empty = split_keywords_by_parity_heuristic(&[]);
        assert!(empty.upright.is_empty());
        assert!(empty.reversed.is_empty());

        let one = split_keywords_by_parity_heuristic(&["only".to_string()]);
        assert_eq!(one.upright, ["only"]);
        assert!(one.reversed.is_empty());
    }

    /// A legacy record whose flat keyword list was built by plain
    /// concatenation, not interleaving, does not survive the round trip.
    /// The parity split misattributes the middle keyword and the
    /// re-flattened order comes back permuted.
    #[test]
    fn round_trip_through_both_adapters_is_not_identity() {
        let legacy = sample_legacy_card();
        let round_tripped = adapt_new_to_old(&adapt_old_to_new(&legacy));

        assert_ne!(round_tripped, legacy);
        assert_eq!(
            round_tripped.keywords,
            ["celebration", "community", "friendship"]
        );
        assert_ne!(round_tripped.keywords, legacy.keywords);
    }
}
