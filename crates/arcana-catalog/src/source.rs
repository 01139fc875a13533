// SPDX-FileCopyrightText: 2026 Arcana Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Card data source seam.
//!
//! The catalog loads its partitions through [`CardSource`] so tests can
//! substitute counting or failing sources. The default [`BundledDeck`]
//! parses JSON compiled into the binary; no network or filesystem I/O.

use arcana_core::{ArcanaError, Suit};
use async_trait::async_trait;
use tracing::debug;

use crate::model::CardRecord;

/// Loads one catalog partition at a time.
///
/// Loads must be idempotent: the catalog may call them more than once after
/// a cache clear and expects identical content each time.
#[async_trait]
pub trait CardSource: Send + Sync {
    /// Load the 22 major-arcana records.
    async fn load_major(&self) -> Result<Vec<CardRecord>, ArcanaError>;

    /// Load the 14 records of one minor-arcana suit.
    async fn load_suit(&self, suit: Suit) -> Result<Vec<CardRecord>, ArcanaError>;
}

/// The deck content shipped with the application.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledDeck;

const MAJOR_JSON: &str = include_str!("../data/major.json");
const WANDS_JSON: &str = include_str!("../data/wands.json");
const CUPS_JSON: &str = include_str!("../data/cups.json");
const SWORDS_JSON: &str = include_str!("../data/swords.json");
const PENTACLES_JSON: &str = include_str!("../data/pentacles.json");

fn parse_partition(name: &str, json: &str) -> Result<Vec<CardRecord>, ArcanaError> {
    let cards: Vec<CardRecord> = serde_json::from_str(json)
        .map_err(|e| ArcanaError::Catalog(format!("malformed bundled data for {name}: {e}")))?;
    debug!(partition = name, cards = cards.len(), "card partition loaded");
    Ok(cards)
}

#[async_trait]
impl CardSource for BundledDeck {
    async fn load_major(&self) -> Result<Vec<CardRecord>, ArcanaError> {
        parse_partition("major", MAJOR_JSON)
    }

    async fn load_suit(&self, suit: Suit) -> Result<Vec<CardRecord>, ArcanaError> {
        let json = match suit {
            Suit::Wands => WANDS_JSON,
            Suit::Cups => CUPS_JSON,
            Suit::Swords => SWORDS_JSON,
            Suit::Pentacles => PENTACLES_JSON,
        };
        parse_partition(suit.to_string().as_str(), json)
    }
}
