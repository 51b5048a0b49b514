//! Move execution and the stock/waste/win transitions.
//!
//! Every function here is a pure transform: it takes a snapshot and returns
//! a new one, sharing every pile it did not touch. [`apply_move`] trusts its
//! `Move` argument (produced by [`find_legal_move`]) and re-checks nothing
//! but structure; a missing source card means the caller and the engine have
//! desynchronized, and that fails fast.
//!
//! [`find_legal_move`]: crate::rules::find_legal_move

use im::Vector;
use log::debug;

use crate::core::card::{Card, Rank};
use crate::core::error::EngineError;
use crate::core::pile::{Pile, PileRole};
use crate::core::state::{GameState, PileId, FOUNDATION_PILES};

use super::legality::Move;

/// Apply a validated move, producing the next snapshot.
///
/// The contiguous run from `move.card` through the top of the source pile
/// lands on the destination in the same relative order. If the source is a
/// tableau pile whose new top card is face-down, that card flips face-up —
/// the sole mechanism by which hidden tableau cards become playable. Waste
/// and foundation removals never flip anything.
///
/// Only the two named piles change. Returns `CardNotFound` when the card is
/// not in the claimed source pile.
pub fn apply_move(state: &GameState, mv: &Move) -> Result<GameState, EngineError> {
    let source_pile = state.pile(mv.source);
    let start = source_pile.position_of(mv.card).ok_or(EngineError::CardNotFound)?;
    let count = source_pile.len() - start;

    let (run, mut new_source) = source_pile.remove_cards(count)?;

    // Reveal the newly exposed tableau card, if it was hidden.
    if mv.source.role() == PileRole::Tableau {
        if let Some(top) = new_source.top_card().copied() {
            if !top.is_face_up() {
                let (_, below) = new_source.remove_top_card()?;
                new_source = below.add_card(top.face_up());
            }
        }
    }

    let new_dest = state.pile(mv.dest).add_cards(run);

    debug!("moved {} from {} to {}", mv.card, mv.source, mv.dest);
    Ok(state.with_pile(mv.source, new_source).with_pile(mv.dest, new_dest))
}

/// Recycle the waste into a fresh stock.
///
/// The waste is reversed and turned face-down, so the card most recently
/// placed in the waste is drawn first from the new stock and the original
/// draw order repeats. Only correct to invoke when the stock is empty;
/// callers own that precondition (draw and recycle are mutually exclusive
/// branches at the call site). An empty waste yields an empty stock.
#[must_use]
pub fn cycle_waste_to_stock(state: &GameState) -> GameState {
    let recycled: Vector<Card> =
        state.waste().cards().iter().rev().map(|c| c.face_down()).collect();

    debug!("recycled {} waste cards into stock", recycled.len());
    state
        .with_pile(PileId::Stock, Pile::with_cards(PileRole::Stock, recycled))
        .with_pile(PileId::Waste, Pile::new(PileRole::Waste))
}

/// Draw the top stock card face-up onto the waste.
///
/// Returns `EmptyPile` when the stock is exhausted; callers branch to
/// [`cycle_waste_to_stock`] instead.
pub fn draw_from_stock(state: &GameState) -> Result<GameState, EngineError> {
    let (card, new_stock) = state.stock().remove_top_card()?;
    let new_waste = state.waste().add_card(card.face_up());

    debug!("drew {card} from stock");
    Ok(state
        .with_pile(PileId::Stock, new_stock)
        .with_pile(PileId::Waste, new_waste))
}

/// Check the win condition: four foundations each holding a complete
/// Ace-to-King same-suit ascending run.
///
/// The engine maintains the foundation-acceptance invariant on every move,
/// so pile size alone would suffice; the full structural check costs little
/// and holds for states assembled by hand in tests.
#[must_use]
pub fn is_game_won(state: &GameState) -> bool {
    state.foundation().len() == FOUNDATION_PILES
        && state.foundation().iter().all(is_complete_foundation)
}

fn is_complete_foundation(pile: &Pile) -> bool {
    if pile.len() != Rank::King.value() as usize {
        return false;
    }
    let cards = pile.cards();
    let Some(bottom) = cards.front() else {
        return false;
    };
    if bottom.rank() != Rank::Ace {
        return false;
    }
    let mut prev = *bottom;
    for card in cards.iter().skip(1) {
        if card.suit() != prev.suit() || !prev.rank().is_previous_in_sequence(card.rank()) {
            return false;
        }
        prev = *card;
    }
    true
}

/// A full same-suit Ace-to-King foundation pile, used by win tests.
#[cfg(test)]
pub(crate) fn complete_foundation(suit: crate::core::card::Suit) -> Pile {
    Pile::with_cards(
        PileRole::Foundation,
        Rank::ALL.iter().map(|&rank| Card::new(suit, rank, true)),
    )
}
