//! Playing-card value types: suit, color, rank, and the card itself.
//!
//! Cards are immutable values. Identity is (suit, rank) only: two cards with
//! the same suit and rank are indistinguishable no matter which way they face,
//! so pile-membership lookups ignore orientation. Orientation still matters to
//! the rules engine (only face-up cards are movable), which is why it lives on
//! the card rather than on the pile.
//!
//! ## Usage
//!
//! ```
//! use klondike_engine::core::{Card, Color, Rank, Suit};
//!
//! let card = Card::new(Suit::Hearts, Rank::Seven, false);
//! assert_eq!(card.color(), Color::Red);
//! assert!(!card.is_face_up());
//!
//! // Flipping produces a new value; identity is unchanged.
//! let flipped = card.face_up();
//! assert!(flipped.is_face_up());
//! assert_eq!(card, flipped);
//! ```

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Card color, derived from suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// One of the four standard suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All four suits, in foundation order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// The color of this suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Check if this suit is red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self.color(), Color::Red)
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Suit::Hearts => '\u{2665}',
            Suit::Diamonds => '\u{2666}',
            Suit::Clubs => '\u{2663}',
            Suit::Spades => '\u{2660}',
        };
        write!(f, "{symbol}")
    }
}

/// Card rank, Ace (1) through King (13).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All thirteen ranks, ascending.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value, 1 for Ace through 13 for King.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Check if `self` sits directly below `other` in rank order.
    ///
    /// ```
    /// use klondike_engine::core::Rank;
    ///
    /// assert!(Rank::Ace.is_previous_in_sequence(Rank::Two));
    /// assert!(!Rank::Ace.is_previous_in_sequence(Rank::Three));
    /// ```
    #[must_use]
    pub const fn is_previous_in_sequence(self, other: Rank) -> bool {
        self.value() + 1 == other.value()
    }

    /// Check if `self` sits directly above `other` in rank order.
    ///
    /// ```
    /// use klondike_engine::core::Rank;
    ///
    /// assert!(Rank::Eight.is_next_in_sequence(Rank::Seven));
    /// assert!(!Rank::Eight.is_next_in_sequence(Rank::Six));
    /// ```
    #[must_use]
    pub const fn is_next_in_sequence(self, other: Rank) -> bool {
        self.value() == other.value() + 1
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Ace => write!(f, "A"),
            Rank::Jack => write!(f, "J"),
            Rank::Queen => write!(f, "Q"),
            Rank::King => write!(f, "K"),
            other => write!(f, "{}", other.value()),
        }
    }
}

/// A single playing card.
///
/// Equality and hashing cover (suit, rank) only; `face_up` is presentation
/// state, not identity. A valid game never holds two cards with the same
/// suit and rank, so (suit, rank) is a unique key.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    face_up: bool,
}

impl Card {
    /// Create a card with the given orientation.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank, face_up: bool) -> Self {
        Self { suit, rank, face_up }
    }

    /// The card's suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// The card's rank.
    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Whether the card is face-up.
    #[must_use]
    pub const fn is_face_up(self) -> bool {
        self.face_up
    }

    /// The card's color, derived from its suit.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// Check if the card is red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        self.suit.is_red()
    }

    /// The same card, face-up.
    #[must_use]
    pub const fn face_up(self) -> Self {
        Self { face_up: true, ..self }
    }

    /// The same card, face-down.
    #[must_use]
    pub const fn face_down(self) -> Self {
        Self { face_up: false, ..self }
    }

    /// A full 52-card deck, face-down, in suit-then-rank order.
    ///
    /// Callers shuffle before dealing.
    #[must_use]
    pub fn standard_deck() -> Vec<Card> {
        let mut deck = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                deck.push(Card::new(suit, rank, false));
            }
        }
        deck
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.suit.hash(state);
        self.rank.hash(state);
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
