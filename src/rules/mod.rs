//! The rules engine: dealing, move legality, move execution, stock cycle,
//! win detection.
//!
//! Every operation is a pure function from a snapshot to an answer or a new
//! snapshot. The engine holds no state between calls, so concurrent readers
//! of a prior snapshot never observe a half-updated board.

pub mod deal;
pub mod engine;
pub mod legality;

pub use deal::initial_state;
pub use engine::{apply_move, cycle_waste_to_stock, draw_from_stock, is_game_won};
pub use legality::{find_legal_move, is_valid_sequence, Move};
