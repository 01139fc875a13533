// SPDX-FileCopyrightText: 2026 Arcana Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common domain vocabulary shared by the secret codec and card catalog.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// One of the two card groups in a tarot deck.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Arcana {
    /// The 22 fixed trump cards.
    Major,
    /// The 56 suited cards.
    Minor,
}

/// Minor-arcana suit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Suit {
    Wands,
    Cups,
    Swords,
    Pentacles,
}

impl Suit {
    /// All suits in the catalog's fixed iteration order.
    pub const ALL: [Suit; 4] = [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles];
}

/// Whether a drawn card is read upright or reversed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Orientation {
    Upright,
    Reversed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn suit_display_and_parse_round_trip() {
        for suit in Suit::ALL {
            let s = suit.to_string();
            assert_eq!(Suit::from_str(&s).unwrap(), suit);
        }
    }

    #[test]
    fn suit_order_is_wands_cups_swords_pentacles() {
        let names: Vec<String> = Suit::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["wands", "cups", "swords", "pentacles"]);
    }

    #[test]
    fn arcana_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Arcana::Major).unwrap(), "\"major\"");
        assert_eq!(serde_json::to_string(&Arcana::Minor).unwrap(), "\"minor\"");
    }

    #[test]
    fn orientation_parses_lowercase() {
        assert_eq!(
            Orientation::from_str("reversed").unwrap(),
            Orientation::Reversed
        );
    }
}
