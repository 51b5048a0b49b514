//! Move legality: where may a selected card (and its run) go?
//!
//! [`find_legal_move`] answers the UI's double-click question: given a
//! snapshot and a card, pick the unique destination the card should fly to.
//! The policy is deterministic:
//!
//! - Foundation destinations are tried before tableau destinations whenever
//!   both are eligible. Callers depend on this ordering.
//! - Among tableau candidates, the first match in pile-enumeration order
//!   wins. No reveal-a-face-down-card heuristic; ties break by slot order
//!   so the same query always returns the same move.
//!
//! Only face-up cards in the waste or a tableau pile are move sources.
//! Cards in stock or on a foundation never move through this query.

use log::trace;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::{Card, Rank};
use crate::core::pile::Pile;
use crate::core::state::{GameState, PileId};

/// A run cannot exceed King-down-to-Ace.
type Run = SmallVec<[Card; 13]>;

/// A legal move: which slot the run leaves, where it lands, and the card at
/// the bottom of the moved run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Slot the run is taken from.
    pub source: PileId,
    /// Slot the run lands on.
    pub dest: PileId,
    /// The deepest card of the moved run; everything above it moves too.
    pub card: Card,
}

/// Find the unique legal destination for `card`, if any.
///
/// Returns `None` for every illegal query: face-down card, card not on the
/// board, card in stock or foundation, covered waste card, broken run, or
/// simply no destination that accepts it. `None` is the normal negative
/// outcome, not an error.
#[must_use]
pub fn find_legal_move(state: &GameState, card: Card) -> Option<Move> {
    if !card.is_face_up() {
        return None;
    }

    let source = state.find_pile_with_card(card)?;
    let found = match source {
        PileId::Waste => {
            // Waste exposes only its top card.
            if state.pile(source).top_card() != Some(&card) {
                return None;
            }
            find_foundation_move(state, card, source)
                .or_else(|| find_tableau_move(state, card, source))
        }
        PileId::Tableau(_) => find_foundation_move(state, card, source)
            .or_else(|| find_tableau_move(state, card, source)),
        PileId::Stock | PileId::Foundation(_) => None,
    };

    if let Some(mv) = &found {
        trace!("legal move for {card}: {} -> {}", mv.source, mv.dest);
    }
    found
}

/// Check that `cards` (bottom to top) form a movable tableau run:
/// strictly descending by one, alternating colors, all face-up.
///
/// Empty and single-card sequences are trivially valid.
#[must_use]
pub fn is_valid_sequence(cards: &[Card]) -> bool {
    if cards.iter().any(|c| !c.is_face_up()) {
        trace!("sequence rejected: contains face-down cards");
        return false;
    }
    let ok = cards.windows(2).all(|pair| {
        pair[0].color() != pair[1].color() && pair[0].rank().is_next_in_sequence(pair[1].rank())
    });
    if !ok {
        trace!("sequence rejected: colors or ranks do not descend alternately");
    }
    ok
}

/// Foundation destination for a single card: empty pile for an Ace, or the
/// same-suit pile whose top card ranks directly below.
///
/// Only the top card of its pile may go to a foundation, which also rules
/// out multi-card runs.
fn find_foundation_move(state: &GameState, card: Card, source: PileId) -> Option<Move> {
    if state.pile(source).top_card() != Some(&card) {
        return None;
    }

    let accepts = |pile: &Pile| -> bool {
        if card.rank() == Rank::Ace {
            pile.is_empty()
        } else {
            pile.top_card().is_some_and(|top| {
                top.suit() == card.suit() && top.rank().is_previous_in_sequence(card.rank())
            })
        }
    };

    state
        .foundation()
        .iter()
        .position(accepts)
        .map(|i| Move { source, dest: PileId::Foundation(i), card })
}

/// Tableau destination for the run starting at `card`: an empty pile for a
/// King-led run, or a pile whose top card is opposite-colored and ranks
/// directly above the run's first card.
fn find_tableau_move(state: &GameState, card: Card, source: PileId) -> Option<Move> {
    let source_pile = state.pile(source);
    let start = source_pile.position_of(card)?;
    let run: Run = source_pile.cards().iter().skip(start).copied().collect();

    // Multi-card runs must be internally movable before any destination is
    // even considered.
    if run.len() > 1 && !is_valid_sequence(&run) {
        return None;
    }

    let accepts = |pile: &Pile| -> bool {
        match pile.top_card() {
            None => card.rank() == Rank::King,
            Some(top) => {
                top.color() != card.color() && top.rank().is_next_in_sequence(card.rank())
            }
        }
    };

    state
        .tableau()
        .iter()
        .enumerate()
        .filter(|&(i, _)| PileId::Tableau(i) != source)
        .find(|(_, pile)| accepts(pile))
        .map(|(i, _)| Move { source, dest: PileId::Tableau(i), card })
}
