//! Structural error taxonomy.
//!
//! A `find_legal_move` that comes back empty is the normal negative outcome
//! and is not represented here. These errors only fire when a caller misuses
//! the primitive API (popping an empty pile, applying a move whose card is
//! gone) — that is a caller/engine desynchronization bug, so the right
//! response at the detection site is to fail fast, not to retry.

use serde::{Deserialize, Serialize};

/// Structural violation raised by the pile and move primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineError {
    /// A card was removed from an empty pile.
    EmptyPile,
    /// More cards were requested than the pile holds.
    InsufficientCards { requested: usize, available: usize },
    /// A move named a card that is not in its claimed source pile.
    CardNotFound,
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::EmptyPile => write!(f, "cannot remove a card from an empty pile"),
            EngineError::InsufficientCards { requested, available } => write!(
                f,
                "requested {requested} cards from a pile holding only {available}"
            ),
            EngineError::CardNotFound => {
                write!(f, "card not present in the claimed source pile")
            }
        }
    }
}

impl std::error::Error for EngineError {}
