// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handrank poker cards types.
//!
//! This crate defines the card types handed to the evaluator:
//!
//! ```
//! # use handrank_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.value(), 14);
//! assert_eq!(ah.to_string(), "AH");
//! ```
//!
//! Cards can also be created from a raw value in the range 2..=14, or parsed
//! from a two characters string with the rank first and the suit second:
//!
//! ```
//! # use handrank_cards::{Card, Rank, Suit};
//! let td: Card = "TD".parse().unwrap();
//! assert_eq!(td, Card::from_value(10, Suit::Diamonds).unwrap());
//!
//! // Values outside 2..=14 are rejected.
//! assert!(Card::from_value(1, Suit::Spades).is_err());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, CardError, Rank, Suit};
