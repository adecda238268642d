// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handrank poker hand evaluator.
//!
//! Classifies five cards poker hands into one of ten categories, from high
//! card to royal flush, with a tiebreaker sequence to order hands within the
//! same category, finds the best five cards hand out of more cards, and
//! resolves the winners at a table where players share community cards.
//!
//! To classify a hand use [HandValue::classify], hand values are ordered by
//! strength:
//!
//! ```
//! # use handrank_eval::*;
//! let cards = |s: &str| -> Vec<Card> {
//!     s.split_whitespace().map(|c| c.parse().unwrap()).collect()
//! };
//!
//! let wheel = HandValue::classify(&cards("5C 4D 3H 2S AC")).unwrap();
//! assert_eq!(wheel.rank(), HandRank::Straight);
//! assert_eq!(wheel.tiebreaker(), &[5]);
//!
//! let flush = HandValue::classify(&cards("9H 7H 5H 3H 2H")).unwrap();
//! assert!(flush > wheel);
//!
//! // The best hand out of 7 cards.
//! let best = HandValue::best(&cards("AH KH QH JH TH 9D 8S")).unwrap();
//! assert_eq!(best.rank(), HandRank::RoyalFlush);
//! ```
//!
//! and [resolve_table] to find the winners at a table, see [table] for
//! details. The **`parallel`** feature enables `par_resolve_table` that
//! evaluates the players hands from parallel tasks.
//!
//! The evaluator logs with the [log] crate and never installs a logger.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod combinations;
pub mod eval;
pub mod straight;
pub mod table;

mod error;
pub use error::{EvalError, Result};

pub use eval::{HAND_SIZE, HandRank, HandValue, compare};
pub use table::{Player, PlayerHand, rank_players, resolve_table};

#[cfg(feature = "parallel")]
pub use table::par_resolve_table;

// Reexport cards types.
pub use handrank_cards::{Card, CardError, Rank, Suit};
