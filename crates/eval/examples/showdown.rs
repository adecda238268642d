// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --example showdown -- --board "QH JH TH 5C 2D" AH,KH 9C,9D 2S,3S
// Board: QH JH TH 5C 2D
//
// Player 1: AH KH     Royal Flush [14]
// Player 2: 9C 9D     One Pair [9, 12, 11, 10]
// Player 3: 2S 3S     One Pair [2, 12, 11, 10]
//
// Winner: Player 1 with AH KH QH JH TH
// ```
use anyhow::{Context, Result, bail};
use clap::Parser;

use handrank_eval::{Card, Player, rank_players, resolve_table};

#[derive(Debug, Parser)]
struct Cli {
    /// The community cards, for example "QH JH TH 5C 2D".
    #[clap(long, short, default_value = "")]
    board: String,
    /// The players cards, one comma separated list for each player.
    #[clap(required = true)]
    players: Vec<String>,
    /// Log evaluation details.
    #[clap(long, short)]
    verbose: bool,
}

fn parse_cards<'a>(cards: impl Iterator<Item = &'a str>) -> Result<Vec<Card>> {
    cards
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<Card>().with_context(|| format!("Cannot parse card {s:?}")))
        .collect()
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let board = parse_cards(cli.board.split_whitespace())?;
    let players = cli
        .players
        .iter()
        .enumerate()
        .map(|(idx, cards)| -> Result<Player<usize>> {
            Ok(Player::new(idx + 1, parse_cards(cards.split(','))?))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut all_cards = board.clone();
    for p in &players {
        for c in &p.cards {
            if all_cards.contains(c) {
                bail!("Card {c} dealt twice");
            }
            all_cards.push(*c);
        }
    }

    println!("Board: {}\n", format_cards(&board));

    let mut ranked = rank_players(&players, &board)?;
    ranked.sort_by_key(|h| h.player);
    for hand in ranked {
        let player = &players[hand.player - 1];
        println!(
            "Player {}: {:<8}  {}",
            player.id,
            format_cards(&player.cards),
            hand.value
        );
    }

    println!();

    for winner in resolve_table(&players, &board)? {
        let mut hand = winner.hand.to_vec();
        hand.sort_by_key(|c| std::cmp::Reverse(c.rank()));
        println!(
            "Winner: Player {} with {}",
            winner.player,
            format_cards(&hand)
        );
    }

    Ok(())
}
