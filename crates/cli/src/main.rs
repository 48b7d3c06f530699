// Copyright (C) 2025 The rankcast authors.
// SPDX-License-Identifier: Apache-2.0

//! Rankcast command line hand evaluator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;

use rankcast_cards::{Card, Deck};
use rankcast_eval::{HAND_SIZE, HandCategory, evaluate_best, evaluate_distribution};

#[derive(Debug, Parser)]
struct Cli {
    /// The 7 cards to evaluate, two characters each, e.g. AH KD TC.
    #[clap(required_unless_present = "random")]
    cards: Vec<String>,
    /// Deal a random hand instead.
    #[clap(long, short, conflicts_with = "cards")]
    random: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cards = if cli.random {
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        (0..HAND_SIZE).map(|_| deck.deal()).collect::<Vec<_>>()
    } else {
        cli.cards
            .iter()
            .map(|s| s.parse::<Card>())
            .collect::<Result<Vec<_>, _>>()?
    };

    let best = evaluate_best(&cards)?;
    let census = evaluate_distribution(&cards)?;

    let hand = cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");

    println!("Hand:      {hand}");
    println!("Best hand: {best}");
    println!("Category census over the 5 card subsets:");

    for category in HandCategory::categories().rev() {
        if let Some(frequency) = census.get(&category) {
            println!("  {:<16} {:>6.2}%", category.label(), frequency * 100.0);
        }
    }

    Ok(())
}
