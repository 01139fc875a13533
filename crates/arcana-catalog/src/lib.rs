// SPDX-FileCopyrightText: 2026 Arcana Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tarot card catalog: lazily loaded, cached card data with adapters
//! between the current and legacy record schemas.
//!
//! The entry point is [`TarotCatalog`], usually constructed over the
//! bundled deck:
//!
//! ```no_run
//! # async fn demo() -> Result<(), arcana_core::ArcanaError> {
//! use arcana_catalog::TarotCatalog;
//!
//! let catalog = TarotCatalog::bundled();
//! let stats = catalog.stats().await?;
//! assert_eq!(stats.total, 78);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod catalog;
pub mod model;
pub mod source;

pub use adapter::{adapt_new_to_old, adapt_old_to_new, split_keywords_by_parity_heuristic};
pub use catalog::TarotCatalog;
pub use model::{CardRecord, LegacyCardRecord, LegacyMeaning, Orientations, SuitCounts, TarotStats};
pub use source::{BundledDeck, CardSource};
