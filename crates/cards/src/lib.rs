// Copyright (C) 2025 The rankcast authors.
// SPDX-License-Identifier: Apache-2.0

//! Rankcast playing cards types.
//!
//! This crate defines the card types used across the workspace:
//!
//! ```
//! # use rankcast_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! cards parse from their two character form:
//!
//! ```
//! # use rankcast_cards::{Card, Rank, Suit};
//! let card = "TC".parse::<Card>().unwrap();
//! assert_eq!(card, Card::new(Rank::Ten, Suit::Clubs));
//! ```
//!
//! and a [Deck] type deals shuffled cards:
//!
//! ```
//! # use rankcast_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let hand = (0..7).map(|_| deck.deal()).collect::<Vec<_>>();
//! assert_eq!(deck.count(), Deck::SIZE - 7);
//! # assert_eq!(hand.len(), 7);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
