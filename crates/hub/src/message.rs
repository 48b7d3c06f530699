// Copyright (C) 2025 The rankcast authors.
// SPDX-License-Identifier: Apache-2.0

//! Wire messages exchanged with clients as JSON text frames.
use serde::{Deserialize, Serialize};

use rankcast_cards::Card;
use rankcast_eval::{EvalError, HandCategory, evaluate_best, evaluate_distribution};

/// A client request.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Request {
    /// Deal a hand from the session deck and evaluate it.
    Deal,
    /// Evaluate a client supplied 7 cards hand.
    Evaluate {
        /// The hand to evaluate.
        cards: Vec<Card>,
    },
}

/// A server response.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Response {
    /// An evaluated hand.
    Result(HandResult),
    /// An error message, sent only to the requesting client.
    Error(String),
}

/// An evaluated 7 cards hand.
#[derive(Debug, Serialize, Deserialize)]
pub struct HandResult {
    /// The evaluated cards.
    pub cards: Vec<Card>,
    /// The best category over all 5 cards subsets.
    pub best: HandCategory,
    /// The category census, ordered from weakest to strongest.
    pub census: Vec<CensusEntry>,
}

/// A category frequency in a [HandResult] census.
#[derive(Debug, Serialize, Deserialize)]
pub struct CensusEntry {
    /// The hand category.
    pub category: HandCategory,
    /// The category label for display.
    pub label: String,
    /// Fraction of the 5 cards subsets with this category.
    pub frequency: f64,
}

impl HandResult {
    /// Evaluates a 7 cards hand.
    pub fn evaluate(cards: Vec<Card>) -> Result<Self, EvalError> {
        let best = evaluate_best(&cards)?;
        let census = evaluate_distribution(&cards)?;

        let mut census = census
            .into_iter()
            .map(|(category, frequency)| CensusEntry {
                category,
                label: category.label().to_string(),
                frequency,
            })
            .collect::<Vec<_>>();
        census.sort_by_key(|e| e.category);

        Ok(Self { cards, best, census })
    }
}
