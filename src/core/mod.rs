//! Core value types: cards, piles, the board snapshot, errors, RNG.
//!
//! Everything here is an immutable value. Algorithms treat cards and piles
//! as data, never as objects with hidden state.

pub mod card;
pub mod error;
pub mod pile;
pub mod rng;
pub mod state;

pub use card::{Card, Color, Rank, Suit, DECK_SIZE};
pub use error::EngineError;
pub use pile::{Pile, PileRole};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, PileId, FOUNDATION_PILES, TABLEAU_PILES};
