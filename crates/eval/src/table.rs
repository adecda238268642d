// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown resolution for a table.
//!
//! Each player best hand is made of the player cards and the community cards,
//! the players with the strongest hand win. When more than one player has the
//! strongest hand they all win and split the pot.
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{
    Card,
    error::{EvalError, Result},
    eval::{HAND_SIZE, HandValue},
};

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "parallel")]
pub use parallel::par_resolve_table;

/// A player at showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player<Id> {
    /// The player identifier.
    pub id: Id,
    /// The player private cards.
    pub cards: Vec<Card>,
}

impl<Id> Player<Id> {
    /// Creates a new player with the given private cards.
    pub fn new(id: Id, cards: impl Into<Vec<Card>>) -> Self {
        Self {
            id,
            cards: cards.into(),
        }
    }
}

impl<Id: Clone> Player<Id> {
    /// Returns this player best hand using the given community cards.
    pub fn best_hand(&self, community: &[Card]) -> Result<PlayerHand<Id>> {
        let mut cards = Vec::with_capacity(self.cards.len() + community.len());
        cards.extend_from_slice(&self.cards);
        cards.extend_from_slice(community);

        let (value, hand) = HandValue::best_with_hand(&cards)?;
        Ok(PlayerHand {
            player: self.id.clone(),
            value,
            hand,
        })
    }
}

/// A player best hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerHand<Id> {
    /// The player identifier.
    pub player: Id,
    /// The player best hand value.
    pub value: HandValue,
    /// The cards that make the best hand.
    pub hand: [Card; HAND_SIZE],
}

/// Returns the players with the strongest hand.
///
/// The winners are returned in the same order they have in `players`, there
/// is always at least one winner. Returns an error if there are no players or
/// if a player cards together with the community cards are less than five.
///
/// ```
/// # use handrank_eval::*;
/// let cards = |s: &str| -> Vec<Card> {
///     s.split_whitespace().map(|c| c.parse().unwrap()).collect()
/// };
///
/// let players = [
///     Player::new("alice", cards("AH AD")),
///     Player::new("bob", cards("KH KD")),
/// ];
///
/// let winners = resolve_table(&players, &cards("2C 7D 9H JS 4C")).unwrap();
/// assert_eq!(winners.len(), 1);
/// assert_eq!(winners[0].player, "alice");
/// assert_eq!(winners[0].value.rank(), HandRank::OnePair);
/// ```
pub fn resolve_table<Id: Clone>(
    players: &[Player<Id>],
    community: &[Card],
) -> Result<Vec<PlayerHand<Id>>> {
    let ranked = rank_players(players, community)?;
    Ok(winners(ranked))
}

/// Returns all the players best hands from the strongest to the weakest.
///
/// Players with equal strength hands keep their relative order.
pub fn rank_players<Id: Clone>(
    players: &[Player<Id>],
    community: &[Card],
) -> Result<Vec<PlayerHand<Id>>> {
    validate(players, community)?;

    let mut ranked = players
        .iter()
        .map(|p| p.best_hand(community))
        .collect::<Result<Vec<_>>>()?;

    for (pos, hand) in ranked.iter().enumerate() {
        trace!("Player {pos} best hand {}", hand.value);
    }

    sort_hands(&mut ranked);
    Ok(ranked)
}

/// Checks players count and cards counts before evaluating any hand.
fn validate<Id>(players: &[Player<Id>], community: &[Card]) -> Result<()> {
    if players.is_empty() {
        return Err(EvalError::NoPlayers);
    }

    for (pos, player) in players.iter().enumerate() {
        let count = player.cards.len() + community.len();
        if count < HAND_SIZE {
            return Err(EvalError::PlayerCards { player: pos, count });
        }
    }

    Ok(())
}

/// Sorts hands from the strongest to the weakest, the sort is stable.
fn sort_hands<Id>(hands: &mut [PlayerHand<Id>]) {
    hands.sort_by(|a, b| b.value.cmp(&a.value));
}

/// Keeps the hands at the head of a sorted list with the same strength of the
/// first hand.
fn winners<Id>(mut ranked: Vec<PlayerHand<Id>>) -> Vec<PlayerHand<Id>> {
    let Some(top) = ranked.first().map(|h| h.value.clone()) else {
        return ranked;
    };

    let count = ranked.iter().take_while(|h| h.value == top).count();
    ranked.truncate(count);

    debug!("Resolved table with {count} winner(s) with {top}");
    ranked
}
