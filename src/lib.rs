//! # klondike-engine
//!
//! Move-legality and game-state engine for single-deck Klondike solitaire.
//!
//! ## Design Principles
//!
//! 1. **Immutable snapshots**: `GameState` is a value. Every operation
//!    produces a new state derived structurally from the previous one;
//!    nothing mutates in place, so undo history retains prior snapshots
//!    without deep copies and concurrent readers are always safe.
//!
//! 2. **Pure rules**: legality queries and move execution are pure
//!    functions. The engine holds zero state between calls; sessions and
//!    UIs thread their own state through it.
//!
//! 3. **Deterministic policy**: a legality query has exactly one answer.
//!    Foundation destinations beat tableau destinations, and ties break by
//!    pile-enumeration order — double-click handlers depend on it.
//!
//! ## Architecture
//!
//! The UI reads a [`GameState`], asks [`find_legal_move`] where a clicked
//! card may go, applies the returned [`Move`] with [`apply_move`], and
//! commits the new snapshot into its [`Session`]. Rendering, gestures, and
//! animation live entirely outside this crate and hold no rule knowledge.
//!
//! ## Modules
//!
//! - `core`: cards, piles, the board snapshot, errors, RNG
//! - `rules`: dealing, move legality, move execution, stock cycle, win check
//! - `session`: undo history, move counter, elapsed time

pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Card, Color, EngineError, GameRng, GameRngState, GameState, Pile, PileId, PileRole, Rank,
    Suit, DECK_SIZE, FOUNDATION_PILES, TABLEAU_PILES,
};

pub use crate::rules::{
    apply_move, cycle_waste_to_stock, draw_from_stock, find_legal_move, initial_state,
    is_game_won, is_valid_sequence, Move,
};

pub use crate::session::Session;
