// Copyright (C) 2025 The rankcast authors.
// SPDX-License-Identifier: Apache-2.0

//! Hand classification and 7 cards evaluation.
use ahash::AHashMap;
use thiserror::Error;

use rankcast_cards::Card;

use crate::{category::HandCategory, combine::combinations};

/// The number of cards in an evaluated hand, hole cards plus board.
pub const HAND_SIZE: usize = 7;

/// The number of cards in a playable poker hand.
pub const BEST_HAND_SIZE: usize = 5;

/// Evaluation error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// The input does not have exactly [HAND_SIZE] cards.
    #[error("expected {HAND_SIZE} cards, got {0}")]
    InvalidInputSize(usize),
}

/// Classifies a 5 cards hand into its [HandCategory].
///
/// The checks run in strict precedence order from royal flush down to
/// high card, the first match wins. Ace low runs (A, 2, 3, 4, 5) are
/// not recognized as straights, such a hand classifies as a flush when
/// suited and as high card otherwise.
///
/// Panics if `hand` does not have exactly 5 cards. The cards are
/// assumed distinct, this is not checked.
pub fn classify(hand: &[Card]) -> HandCategory {
    assert_eq!(hand.len(), BEST_HAND_SIZE, "classify takes a 5 cards hand");

    let mut ranks = [0u8; BEST_HAND_SIZE];
    for (slot, card) in ranks.iter_mut().zip(hand) {
        *slot = card.rank().value();
    }
    ranks.sort_unstable();

    let flush = hand.iter().all(|c| c.suit() == hand[0].suit());
    let straight = ranks.windows(2).all(|w| w[1] == w[0] + 1);

    if flush && straight {
        // A run that starts at ten ends with the ace.
        return if ranks[0] == 10 {
            HandCategory::RoyalFlush
        } else {
            HandCategory::StraightFlush
        };
    }

    // Per rank value card counts, ranks span 2..=14.
    let mut counts = [0u8; 15];
    for v in ranks {
        counts[v as usize] += 1;
    }

    let quads = counts.contains(&4);
    let trips = counts.contains(&3);
    let pairs = counts.iter().filter(|&&c| c == 2).count();

    if quads {
        HandCategory::FourOfAKind
    } else if trips && pairs == 1 {
        HandCategory::FullHouse
    } else if flush {
        HandCategory::Flush
    } else if straight {
        HandCategory::Straight
    } else if trips {
        HandCategory::ThreeOfAKind
    } else if pairs == 2 {
        HandCategory::TwoPair
    } else if pairs == 1 {
        HandCategory::OnePair
    } else {
        HandCategory::HighCard
    }
}

/// Returns the best category over all 5 cards subsets of a 7 cards hand.
///
/// The 7 cards are assumed pairwise distinct, duplicates are a caller
/// contract violation and skew the result silently.
pub fn evaluate_best(cards: &[Card]) -> Result<HandCategory, EvalError> {
    if cards.len() != HAND_SIZE {
        return Err(EvalError::InvalidInputSize(cards.len()));
    }

    let mut best = HandCategory::HighCard;
    for hand in combinations(cards, BEST_HAND_SIZE) {
        best = best.max(classify(&hand));
    }

    Ok(best)
}

/// Returns the category census over all 5 cards subsets of a 7 cards hand.
///
/// Each entry maps a category to the fraction of the 21 subsets that
/// classify to it, the fractions sum to one. Categories that never
/// occur have no entry. This is a census over the known 7 cards, not a
/// probability over unseen cards or opponents holdings.
///
/// Same distinctness contract as [evaluate_best].
pub fn evaluate_distribution(cards: &[Card]) -> Result<AHashMap<HandCategory, f64>, EvalError> {
    if cards.len() != HAND_SIZE {
        return Err(EvalError::InvalidInputSize(cards.len()));
    }

    let mut counts = AHashMap::default();
    let mut subsets = 0u32;
    for hand in combinations(cards, BEST_HAND_SIZE) {
        *counts.entry(classify(&hand)).or_insert(0u32) += 1;
        subsets += 1;
    }

    Ok(counts
        .into_iter()
        .map(|(category, count)| (category, f64::from(count) / f64::from(subsets)))
        .collect())
}
