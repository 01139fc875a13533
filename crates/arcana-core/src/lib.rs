// SPDX-FileCopyrightText: 2026 Arcana Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Arcana tarot service.
//!
//! Provides the shared error type and the domain vocabulary (arcana, suit,
//! orientation) used by the secret codec and the card catalog crates.

pub mod error;
pub mod types;

pub use error::ArcanaError;
pub use types::{Arcana, Orientation, Suit};
