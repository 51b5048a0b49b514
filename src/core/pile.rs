//! Piles: immutable ordered card sequences tagged with a role.
//!
//! The last element is the top (accessible) card. Every operation returns a
//! new `Pile` value; nothing mutates in place. Contents live in an
//! `im::Vector`, so the "copy" in each operation is structural sharing, and
//! undo history can retain whole prior snapshots without deep copies.
//!
//! ## Usage
//!
//! ```
//! use klondike_engine::core::{Card, Pile, PileRole, Rank, Suit};
//!
//! let pile = Pile::new(PileRole::Waste)
//!     .add_card(Card::new(Suit::Hearts, Rank::Ace, true))
//!     .add_card(Card::new(Suit::Spades, Rank::Two, true));
//!
//! assert_eq!(pile.len(), 2);
//! assert_eq!(pile.top_card().unwrap().rank(), Rank::Two);
//!
//! let (top, rest) = pile.remove_top_card().unwrap();
//! assert_eq!(top.rank(), Rank::Two);
//! assert_eq!(rest.len(), 1);
//! assert_eq!(pile.len(), 2); // original untouched
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::error::EngineError;

/// The role a pile plays on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileRole {
    /// One of the 7 main play columns, built descending with alternating colors.
    Tableau,
    /// One of the 4 destination piles, built ascending Ace to King per suit.
    Foundation,
    /// The face-down draw pile.
    Stock,
    /// The face-up pile receiving cards drawn from stock.
    Waste,
}

/// An immutable ordered sequence of cards with a role tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    role: PileRole,
    cards: Vector<Card>,
}

impl Pile {
    /// Create an empty pile with the given role.
    #[must_use]
    pub fn new(role: PileRole) -> Self {
        Self { role, cards: Vector::new() }
    }

    /// Create a pile holding the given cards, bottom first.
    #[must_use]
    pub fn with_cards(role: PileRole, cards: impl IntoIterator<Item = Card>) -> Self {
        Self { role, cards: cards.into_iter().collect() }
    }

    /// The pile's role.
    #[must_use]
    pub fn role(&self) -> PileRole {
        self.role
    }

    /// The cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the pile holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The top (last) card, if any.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.cards.back()
    }

    /// Position of a card, by (suit, rank) identity.
    #[must_use]
    pub fn position_of(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|c| *c == card)
    }

    /// Check if the pile contains a card, by (suit, rank) identity.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.position_of(card).is_some()
    }

    /// A new pile with `card` on top.
    #[must_use]
    pub fn add_card(&self, card: Card) -> Self {
        let mut cards = self.cards.clone();
        cards.push_back(card);
        Self { role: self.role, cards }
    }

    /// A new pile with `new_cards` appended on top, preserving their order.
    #[must_use]
    pub fn add_cards(&self, new_cards: impl IntoIterator<Item = Card>) -> Self {
        let mut cards = self.cards.clone();
        cards.extend(new_cards);
        Self { role: self.role, cards }
    }

    /// Remove the top card.
    ///
    /// Returns the card and the shortened pile, or `EmptyPile`.
    pub fn remove_top_card(&self) -> Result<(Card, Self), EngineError> {
        let mut cards = self.cards.clone();
        let card = cards.pop_back().ok_or(EngineError::EmptyPile)?;
        Ok((card, Self { role: self.role, cards }))
    }

    /// Remove the top `count` cards.
    ///
    /// The removed cards keep their bottom-to-top order. Returns
    /// `InsufficientCards` when `count` exceeds the pile size.
    pub fn remove_cards(&self, count: usize) -> Result<(Vector<Card>, Self), EngineError> {
        let available = self.cards.len();
        if count > available {
            return Err(EngineError::InsufficientCards { requested: count, available });
        }
        let mut remaining = self.cards.clone();
        let removed = remaining.split_off(available - count);
        Ok((removed, Self { role: self.role, cards: remaining }))
    }

    /// The contiguous suffix starting at `index`, bottom to top.
    #[must_use]
    pub fn suffix_from(&self, index: usize) -> Vector<Card> {
        self.cards.clone().split_off(index.min(self.cards.len()))
    }

    /// The topmost contiguous face-up run, bottom to top.
    ///
    /// Empty when the pile is empty or its top card is face-down. Within a
    /// tableau pile everything below a face-down card is face-down, so this
    /// is exactly the movable portion.
    #[must_use]
    pub fn face_up_run(&self) -> Vector<Card> {
        let first_up = self
            .cards
            .iter()
            .rposition(|c| !c.is_face_up())
            .map_or(0, |i| i + 1);
        self.suffix_from(first_up)
    }
}
