// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator errors.
use handrank_cards::CardError;
use thiserror::Error;

/// Errors returned by the evaluator.
///
/// All errors are caused by invalid input and are detected before any
/// evaluation takes place, calling an operation again with the same input
/// returns the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A hand classification was given a number of cards other than five.
    #[error("a hand must have exactly 5 cards, got {0}")]
    HandSize(usize),
    /// A best hand search was given less than five cards.
    #[error("at least 5 cards are needed to make a hand, got {0}")]
    NotEnoughCards(usize),
    /// A table was resolved without players.
    #[error("no players at the table")]
    NoPlayers,
    /// A player doesn't have enough cards with the community cards.
    #[error("player at position {player} has {count} cards with the board, need at least 5")]
    PlayerCards {
        /// The player position in the players list.
        player: usize,
        /// The player cards plus the community cards.
        count: usize,
    },
    /// A card could not be created.
    #[error(transparent)]
    Card(#[from] CardError),
}

impl EvalError {
    /// Checks if this error was caused by invalid input.
    ///
    /// This is always true as the evaluator has no other failure modes.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            EvalError::HandSize(_)
            | EvalError::NotEnoughCards(_)
            | EvalError::NoPlayers
            | EvalError::PlayerCards { .. }
            | EvalError::Card(_) => true,
        }
    }
}

/// Evaluator result type.
pub type Result<T> = std::result::Result<T, EvalError>;
