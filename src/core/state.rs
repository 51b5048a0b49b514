//! The whole-board snapshot: 7 tableau piles, 4 foundations, stock, waste.
//!
//! `GameState` is an immutable aggregate. Every move replaces the state
//! wholesale with a new value derived structurally from the previous one;
//! the `im` vectors underneath make that a pile-level copy-on-write, so a
//! replacement touches only the piles that actually changed. Unaffected
//! piles are shared with the prior snapshot, which keeps undo history cheap
//! to retain and lets callers detect changes structurally.
//!
//! Because immutable piles carry no identity, moves address piles by slot
//! via [`PileId`] rather than by reference.
//!
//! Role tags must match their slot (every pile in `tableau` is tagged
//! `Tableau`, and so on). Violating that at construction is a programming
//! error and asserts immediately rather than propagating into a session.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::{Card, DECK_SIZE};
use super::pile::{Pile, PileRole};

/// Number of tableau piles on the board.
pub const TABLEAU_PILES: usize = 7;

/// Number of foundation piles on the board.
pub const FOUNDATION_PILES: usize = 4;

/// Stable address of a pile slot within a `GameState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileId {
    /// Tableau column by index, 0..7.
    Tableau(usize),
    /// Foundation pile by index, 0..4.
    Foundation(usize),
    Stock,
    Waste,
}

impl PileId {
    /// The role every pile stored at this slot must carry.
    #[must_use]
    pub const fn role(self) -> PileRole {
        match self {
            PileId::Tableau(_) => PileRole::Tableau,
            PileId::Foundation(_) => PileRole::Foundation,
            PileId::Stock => PileRole::Stock,
            PileId::Waste => PileRole::Waste,
        }
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PileId::Tableau(i) => write!(f, "tableau[{i}]"),
            PileId::Foundation(i) => write!(f, "foundation[{i}]"),
            PileId::Stock => write!(f, "stock"),
            PileId::Waste => write!(f, "waste"),
        }
    }
}

/// Immutable snapshot of the whole board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    tableau: Vector<Pile>,
    foundation: Vector<Pile>,
    stock: Pile,
    waste: Pile,
}

impl GameState {
    /// Assemble a state from its piles.
    ///
    /// Panics if the pile counts are not 7/4 or any role tag does not match
    /// its slot. Construction-time invariant violations never reach a
    /// running session.
    #[must_use]
    pub fn new(tableau: Vector<Pile>, foundation: Vector<Pile>, stock: Pile, waste: Pile) -> Self {
        assert_eq!(tableau.len(), TABLEAU_PILES, "expected {TABLEAU_PILES} tableau piles");
        assert_eq!(
            foundation.len(),
            FOUNDATION_PILES,
            "expected {FOUNDATION_PILES} foundation piles"
        );
        assert!(
            tableau.iter().all(|p| p.role() == PileRole::Tableau),
            "tableau slot holds a non-tableau pile"
        );
        assert!(
            foundation.iter().all(|p| p.role() == PileRole::Foundation),
            "foundation slot holds a non-foundation pile"
        );
        assert_eq!(stock.role(), PileRole::Stock, "stock slot holds a non-stock pile");
        assert_eq!(waste.role(), PileRole::Waste, "waste slot holds a non-waste pile");

        Self { tableau, foundation, stock, waste }
    }

    /// The 7 tableau piles.
    #[must_use]
    pub fn tableau(&self) -> &Vector<Pile> {
        &self.tableau
    }

    /// The 4 foundation piles.
    #[must_use]
    pub fn foundation(&self) -> &Vector<Pile> {
        &self.foundation
    }

    /// The stock pile.
    #[must_use]
    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    /// The waste pile.
    #[must_use]
    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    /// Look up a pile by slot.
    ///
    /// Panics on an out-of-range tableau or foundation index; slot addresses
    /// come from this state's own enumeration, so a bad index is a
    /// programming error.
    #[must_use]
    pub fn pile(&self, id: PileId) -> &Pile {
        match id {
            PileId::Tableau(i) => &self.tableau[i],
            PileId::Foundation(i) => &self.foundation[i],
            PileId::Stock => &self.stock,
            PileId::Waste => &self.waste,
        }
    }

    /// Every pile with its slot address: waste, tableau, foundation, stock.
    pub fn piles(&self) -> impl Iterator<Item = (PileId, &Pile)> + '_ {
        std::iter::once((PileId::Waste, &self.waste))
            .chain(self.tableau.iter().enumerate().map(|(i, p)| (PileId::Tableau(i), p)))
            .chain(self.foundation.iter().enumerate().map(|(i, p)| (PileId::Foundation(i), p)))
            .chain(std::iter::once((PileId::Stock, &self.stock)))
    }

    /// Find the pile currently holding `card`, by (suit, rank) identity.
    #[must_use]
    pub fn find_pile_with_card(&self, card: Card) -> Option<PileId> {
        self.piles().find(|(_, pile)| pile.contains(card)).map(|(id, _)| id)
    }

    /// A new state with the pile at `id` replaced.
    ///
    /// All other piles are shared with `self`. Panics if the replacement's
    /// role does not match the slot.
    #[must_use]
    pub fn with_pile(&self, id: PileId, pile: Pile) -> Self {
        assert_eq!(pile.role(), id.role(), "replacement pile role does not match slot {id}");

        let mut next = self.clone();
        match id {
            PileId::Tableau(i) => next.tableau = next.tableau.update(i, pile),
            PileId::Foundation(i) => next.foundation = next.foundation.update(i, pile),
            PileId::Stock => next.stock = pile,
            PileId::Waste => next.waste = pile,
        }
        next
    }

    /// Check that the board holds exactly the 52-card deck, no duplicates.
    ///
    /// Every state produced by the engine satisfies this; tests and debug
    /// assertions use it to catch desynchronization early.
    #[must_use]
    pub fn is_full_deck(&self) -> bool {
        let mut seen: FxHashSet<Card> = FxHashSet::default();
        let mut total = 0usize;
        for (_, pile) in self.piles() {
            for card in pile.cards() {
                total += 1;
                if !seen.insert(*card) {
                    return false;
                }
            }
        }
        total == DECK_SIZE
    }
}
