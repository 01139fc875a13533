// SPDX-FileCopyrightText: 2026 Arcana Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The lazily loaded, cached card catalog.
//!
//! Each partition (major arcana, one cell per suit, and the combined deck)
//! sits behind a `tokio::sync::OnceCell`, so concurrent first callers share
//! a single in-flight load instead of duplicating work. Cached slices are
//! handed out as borrows; callers cannot mutate catalog state.

use arcana_config::model::CatalogConfig;
use arcana_core::{ArcanaError, Suit};
use tokio::sync::OnceCell;
use tracing::debug;

use crate::model::{CardRecord, SuitCounts, TarotStats};
use crate::source::{BundledDeck, CardSource};

/// Cache slot index for a suit, in the catalog's fixed suit order.
fn slot(suit: Suit) -> usize {
    match suit {
        Suit::Wands => 0,
        Suit::Cups => 1,
        Suit::Swords => 2,
        Suit::Pentacles => 3,
    }
}

/// A constructed catalog instance owning its own caches.
///
/// Multiple independent catalogs can coexist (one per test, for example);
/// there is no process-global state. Partitions load at most once per
/// instance until [`clear_cache`](Self::clear_cache).
pub struct TarotCatalog<S = BundledDeck> {
    source: S,
    major: OnceCell<Vec<CardRecord>>,
    suits: [OnceCell<Vec<CardRecord>>; 4],
    all: OnceCell<Vec<CardRecord>>,
}

impl TarotCatalog<BundledDeck> {
    /// Catalog over the deck content bundled with the application.
    pub fn bundled() -> Self {
        Self::new(BundledDeck)
    }

    /// Bundled catalog built from validated `[catalog]` configuration.
    /// This is the startup path: with `preload` set, every partition is
    /// warmed before the catalog is handed out.
    pub async fn from_config(config: &CatalogConfig) -> Result<Self, ArcanaError> {
        let catalog = Self::bundled();
        if config.preload {
            catalog.warm().await?;
        }
        Ok(catalog)
    }
}

impl Default for TarotCatalog<BundledDeck> {
    fn default() -> Self {
        Self::bundled()
    }
}

impl<S: CardSource> TarotCatalog<S> {
    /// Create an empty catalog over the given source. Nothing is loaded
    /// until the first accessor runs.
    pub fn new(source: S) -> Self {
        Self {
            source,
            major: OnceCell::new(),
            suits: std::array::from_fn(|_| OnceCell::new()),
            all: OnceCell::new(),
        }
    }

    /// The 22 major-arcana cards, loaded on first access.
    pub async fn major_arcana(&self) -> Result<&[CardRecord], ArcanaError> {
        let cards = self
            .major
            .get_or_try_init(|| self.source.load_major())
            .await?;
        Ok(cards.as_slice())
    }

    /// The 14 cards of one suit, loaded on first access per suit.
    pub async fn minor_arcana_by_suit(&self, suit: Suit) -> Result<&[CardRecord], ArcanaError> {
        let cards = self.suits[slot(suit)]
            .get_or_try_init(|| self.source.load_suit(suit))
            .await?;
        Ok(cards.as_slice())
    }

    /// All 56 minor-arcana cards, concatenated in fixed suit order
    /// (wands, cups, swords, pentacles). The four suit loads run
    /// concurrently; there is no ordering dependency between them.
    pub async fn all_minor_arcana(&self) -> Result<Vec<CardRecord>, ArcanaError> {
        let (wands, cups, swords, pentacles) = tokio::try_join!(
            self.minor_arcana_by_suit(Suit::Wands),
            self.minor_arcana_by_suit(Suit::Cups),
            self.minor_arcana_by_suit(Suit::Swords),
            self.minor_arcana_by_suit(Suit::Pentacles),
        )?;

        let mut all = Vec::with_capacity(wands.len() + cups.len() + swords.len() + pentacles.len());
        for part in [wands, cups, swords, pentacles] {
            all.extend_from_slice(part);
        }
        Ok(all)
    }

    /// The full deck, major arcana first, cached as one combined array.
    /// Once populated, [`find_card_by_id`](Self::find_card_by_id) scans
    /// this cache directly.
    pub async fn all_cards(&self) -> Result<&[CardRecord], ArcanaError> {
        let cards = self
            .all
            .get_or_try_init(|| async {
                let (major, minors) =
                    tokio::try_join!(self.major_arcana(), self.all_minor_arcana())?;
                let mut all = Vec::with_capacity(major.len() + minors.len());
                all.extend_from_slice(major);
                all.extend(minors);
                debug!(cards = all.len(), "combined deck cached");
                Ok(all)
            })
            .await?;
        Ok(cards.as_slice())
    }

    /// Look a card up by its globally unique id.
    ///
    /// A linear scan is deliberate: the deck tops out at 78 records, so an
    /// index buys nothing. When the combined cache is cold, partitions are
    /// loaded incrementally (major first, then each suit in fixed order)
    /// and the scan short-circuits on the first hit, leaving later
    /// partitions unloaded. Absence is `Ok(None)`, not an error.
    pub async fn find_card_by_id(&self, id: &str) -> Result<Option<&CardRecord>, ArcanaError> {
        if let Some(all) = self.all.get() {
            return Ok(all.iter().find(|c| c.id == id));
        }

        let major = self.major_arcana().await?;
        if let Some(card) = major.iter().find(|c| c.id == id) {
            return Ok(Some(card));
        }
        for suit in Suit::ALL {
            let cards = self.minor_arcana_by_suit(suit).await?;
            if let Some(card) = cards.iter().find(|c| c.id == id) {
                return Ok(Some(card));
            }
        }
        Ok(None)
    }

    /// Card counts per partition.
    ///
    /// Ensures every partition is loaded (concurrently), then reports the
    /// cached array lengths; there is no independent counting logic, so the
    /// stats always agree with what [`find_card_by_id`](Self::find_card_by_id)
    /// can find.
    pub async fn stats(&self) -> Result<TarotStats, ArcanaError> {
        let (major, wands, cups, swords, pentacles) = tokio::try_join!(
            self.major_arcana(),
            self.minor_arcana_by_suit(Suit::Wands),
            self.minor_arcana_by_suit(Suit::Cups),
            self.minor_arcana_by_suit(Suit::Swords),
            self.minor_arcana_by_suit(Suit::Pentacles),
        )?;

        let suits = SuitCounts {
            wands: wands.len(),
            cups: cups.len(),
            swords: swords.len(),
            pentacles: pentacles.len(),
        };
        let minor_arcana = suits.wands + suits.cups + suits.swords + suits.pentacles;
        Ok(TarotStats {
            total: major.len() + minor_arcana,
            major_arcana: major.len(),
            minor_arcana,
            suits,
        })
    }

    /// Warm every partition (and the combined cache) up front.
    pub async fn warm(&self) -> Result<(), ArcanaError> {
        self.all_cards().await.map(|_| ())
    }

    /// Reset all cache slots. Subsequent accessors hit the source again.
    /// Intended for tests and hot-reload paths, not the request path.
    pub fn clear_cache(&mut self) {
        self.major = OnceCell::new();
        self.suits = std::array::from_fn(|_| OnceCell::new());
        self.all = OnceCell::new();
        debug!("catalog caches cleared");
    }
}
