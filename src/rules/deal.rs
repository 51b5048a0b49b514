//! Dealing a fresh game.
//!
//! Standard Klondike layout: 28 cards across 7 tableau piles of sizes 1..=7
//! with only each pile's last card face-up, the remaining 24 face-down in
//! the stock, foundations and waste empty.

use im::Vector;
use log::debug;

use crate::core::card::Card;
use crate::core::pile::{Pile, PileRole};
use crate::core::rng::GameRng;
use crate::core::state::{GameState, FOUNDATION_PILES, TABLEAU_PILES};

/// Shuffle a full deck and deal the opening layout.
#[must_use]
pub fn initial_state(rng: &mut GameRng) -> GameState {
    let mut deck = Card::standard_deck();
    rng.shuffle(&mut deck);

    let mut next = 0;
    let mut tableau: Vector<Pile> = Vector::new();
    for i in 0..TABLEAU_PILES {
        let count = i + 1;
        let mut cards: Vector<Card> = deck[next..next + count].iter().copied().collect();
        next += count;

        let top = cards.len() - 1;
        let revealed = cards[top].face_up();
        cards = cards.update(top, revealed);
        tableau.push_back(Pile::with_cards(PileRole::Tableau, cards));
    }

    let stock = Pile::with_cards(PileRole::Stock, deck[next..].iter().copied());
    let foundation: Vector<Pile> =
        (0..FOUNDATION_PILES).map(|_| Pile::new(PileRole::Foundation)).collect();

    debug!("dealt new game (seed {})", rng.seed());
    GameState::new(tableau, foundation, stock, Pile::new(PileRole::Waste))
}
