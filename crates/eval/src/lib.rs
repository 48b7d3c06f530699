// Copyright (C) 2025 The rankcast authors.
// SPDX-License-Identifier: Apache-2.0

//! Rankcast poker hand category evaluator.
//!
//! Given the 7 cards of a Texas Hold'em hand (2 hole cards plus 5 board
//! cards) this crate classifies the best 5 cards hand category and
//! reports how the categories distribute across all 21 five cards
//! subsets of the hand:
//!
//! ```
//! # use rankcast_eval::*;
//! let cards = "AH AD AC AS 2H 3D 4C"
//!     .split_whitespace()
//!     .map(|s| s.parse::<Card>())
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! assert_eq!(evaluate_best(&cards).unwrap(), HandCategory::FourOfAKind);
//!
//! let census = evaluate_distribution(&cards).unwrap();
//! assert_eq!(census.len(), 2);
//! assert!((census[&HandCategory::FourOfAKind] - 3.0 / 21.0).abs() < 1e-9);
//! ```
//!
//! The evaluator is a category classifier only, it does not compare
//! hands of the same category by their kickers, and it does not
//! recognize the Ace low wheel straight.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod category;
mod combine;
mod eval;

pub use category::HandCategory;
pub use combine::{Combinations, combinations};
pub use eval::{
    BEST_HAND_SIZE, EvalError, HAND_SIZE, classify, evaluate_best, evaluate_distribution,
};

// Reexport cards types.
pub use rankcast_cards::{Card, Deck, Rank, Suit};
