// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel showdown resolution.
use std::{panic, thread};

use super::{Player, PlayerHand, sort_hands, validate, winners};
use crate::{Card, error::Result};

/// Returns the players with the strongest hand evaluating players best hands
/// from `num_tasks` parallel tasks.
///
/// The result is the same as [resolve_table](super::resolve_table).
///
/// Panics if `num_tasks` is zero.
pub fn par_resolve_table<Id>(
    num_tasks: usize,
    players: &[Player<Id>],
    community: &[Card],
) -> Result<Vec<PlayerHand<Id>>>
where
    Id: Clone + Send + Sync,
{
    assert!(num_tasks > 0);

    validate(players, community)?;

    let players_per_task = players.len().div_ceil(num_tasks);
    let mut ranked = thread::scope(|s| {
        let handles = players
            .chunks(players_per_task)
            .map(|chunk| {
                s.spawn(move || {
                    chunk
                        .iter()
                        .map(|p| p.best_hand(community))
                        .collect::<Result<Vec<_>>>()
                })
            })
            .collect::<Vec<_>>();

        // Join in spawn order so that equal hands keep the players order.
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect::<Result<Vec<_>>>()
    })?
    .into_iter()
    .flatten()
    .collect::<Vec<_>>();

    sort_hands(&mut ranked);
    Ok(winners(ranked))
}
