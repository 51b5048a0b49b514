//! Session state: the current snapshot, undo history, move counter, clock.
//!
//! The session wraps the engine's pure outputs for a UI caller. Every
//! successful move, draw, or recycle pushes the prior snapshot onto the
//! history; undo pops the most recent one. Snapshots are persistent values,
//! so the history shares structure with the present and costs almost
//! nothing to retain.
//!
//! The session holds no rule knowledge of its own: the convenience flows
//! ([`Session::play_card`], [`Session::stock_click`]) just sequence engine
//! calls the way an event handler would.
//!
//! ## Usage
//!
//! ```
//! use klondike_engine::core::GameRng;
//! use klondike_engine::rules::initial_state;
//! use klondike_engine::session::Session;
//!
//! let mut session = Session::new(initial_state(&mut GameRng::new(42)));
//!
//! session.stock_click().unwrap(); // draw
//! assert_eq!(session.move_count(), 1);
//!
//! session.undo();
//! assert_eq!(session.move_count(), 0);
//! assert!(!session.can_undo());
//! ```

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::card::Card;
use crate::core::error::EngineError;
use crate::core::state::GameState;
use crate::rules::{apply_move, cycle_waste_to_stock, draw_from_stock, find_legal_move, is_game_won};

/// A single game in progress: current snapshot plus caller-facing bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    current: GameState,
    /// Prior snapshots, most recent last.
    history: Vector<GameState>,
    move_count: u32,
    elapsed: Duration,
    timer_running: bool,
}

impl Session {
    /// Start a session on a freshly dealt state.
    #[must_use]
    pub fn new(initial: GameState) -> Self {
        Self {
            current: initial,
            history: Vector::new(),
            move_count: 0,
            elapsed: Duration::ZERO,
            timer_running: false,
        }
    }

    /// The current snapshot.
    #[must_use]
    pub fn current(&self) -> &GameState {
        &self.current
    }

    /// Successful moves minus undos.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Play time accumulated via [`Session::tick`].
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Whether the clock is running (starts on the first committed move).
    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.timer_running
    }

    /// Whether there is a snapshot to undo to.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Number of snapshots retained in the history.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Install `next` as the current state, pushing the old one onto the
    /// undo history and counting the move. Starts the clock.
    pub fn commit(&mut self, next: GameState) {
        let prior = std::mem::replace(&mut self.current, next);
        self.history.push_back(prior);
        self.move_count += 1;
        self.timer_running = true;
    }

    /// Revert to the most recent prior snapshot.
    ///
    /// No-op returning `false` when the history is empty.
    pub fn undo(&mut self) -> bool {
        match self.history.pop_back() {
            Some(prior) => {
                self.current = prior;
                self.move_count = self.move_count.saturating_sub(1);
                true
            }
            None => false,
        }
    }

    /// Advance the play clock. The caller owns the periodic tick.
    pub fn tick(&mut self, delta: Duration) {
        if self.timer_running {
            self.elapsed += delta;
        }
    }

    /// Discard everything and start over on a new deal.
    pub fn new_game(&mut self, initial: GameState) {
        *self = Self::new(initial);
    }

    /// Check the win condition on the current snapshot.
    #[must_use]
    pub fn is_won(&self) -> bool {
        is_game_won(&self.current)
    }

    /// Double-click flow: find the unique legal move for `card` and commit
    /// it. Returns whether a move happened; `Ok(false)` means the card has
    /// nowhere to go, which is not an error.
    pub fn play_card(&mut self, card: Card) -> Result<bool, EngineError> {
        match find_legal_move(&self.current, card) {
            Some(mv) => {
                let next = apply_move(&self.current, &mv)?;
                self.commit(next);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Stock-click flow: draw when the stock has cards, recycle the waste
    /// when it does not. Both branches commit.
    pub fn stock_click(&mut self) -> Result<(), EngineError> {
        let next = if self.current.stock().is_empty() {
            cycle_waste_to_stock(&self.current)
        } else {
            draw_from_stock(&self.current)?
        };
        self.commit(next);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Rank, Suit};
    use crate::core::pile::{Pile, PileRole};
    use crate::core::rng::GameRng;
    use crate::core::state::{PileId, FOUNDATION_PILES, TABLEAU_PILES};
    use crate::rules::initial_state;

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank, true)
    }

    fn small_board() -> GameState {
        let mut tableau: Vector<Pile> =
            (0..TABLEAU_PILES).map(|_| Pile::new(PileRole::Tableau)).collect();
        tableau = tableau.update(
            0,
            Pile::with_cards(PileRole::Tableau, vec![card(Suit::Hearts, Rank::Seven)]),
        );
        tableau = tableau.update(
            1,
            Pile::with_cards(PileRole::Tableau, vec![card(Suit::Spades, Rank::Eight)]),
        );
        let foundation: Vector<Pile> =
            (0..FOUNDATION_PILES).map(|_| Pile::new(PileRole::Foundation)).collect();
        GameState::new(tableau, foundation, Pile::new(PileRole::Stock), Pile::new(PileRole::Waste))
    }

    #[test]
    fn test_new_session() {
        let session = Session::new(small_board());

        assert_eq!(session.move_count(), 0);
        assert_eq!(session.elapsed(), Duration::ZERO);
        assert!(!session.can_undo());
        assert!(!session.is_timer_running());
    }

    #[test]
    fn test_play_card_commits() {
        let mut session = Session::new(small_board());
        let before = session.current().clone();

        let moved = session.play_card(card(Suit::Hearts, Rank::Seven)).unwrap();

        assert!(moved);
        assert_eq!(session.move_count(), 1);
        assert!(session.can_undo());
        assert!(session.is_timer_running());
        assert_ne!(*session.current(), before);
    }

    #[test]
    fn test_play_card_without_destination_is_quiet() {
        let mut session = Session::new(small_board());

        // 8♠ has no destination on this board.
        let moved = session.play_card(card(Suit::Spades, Rank::Eight)).unwrap();

        assert!(!moved);
        assert_eq!(session.move_count(), 0);
        assert!(!session.can_undo());
    }

    #[test]
    fn test_undo_restores_previous_snapshot() {
        let mut session = Session::new(small_board());
        let before = session.current().clone();

        session.play_card(card(Suit::Hearts, Rank::Seven)).unwrap();
        assert!(session.undo());

        assert_eq!(*session.current(), before);
        assert_eq!(session.move_count(), 0);
        assert!(!session.can_undo());
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut session = Session::new(small_board());
        let before = session.current().clone();

        assert!(!session.undo());
        assert_eq!(*session.current(), before);
        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn test_undo_all_the_way_back() {
        let mut session = Session::new(initial_state(&mut GameRng::new(42)));
        let start = session.current().clone();

        for _ in 0..5 {
            session.stock_click().unwrap();
        }
        assert_eq!(session.history_len(), 5);

        while session.undo() {}

        assert_eq!(*session.current(), start);
        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn test_stock_click_draws_then_recycles() {
        let two = card(Suit::Hearts, Rank::Two);
        let state = small_board().with_pile(
            PileId::Stock,
            Pile::with_cards(PileRole::Stock, vec![two.face_down()]),
        );
        let mut session = Session::new(state);

        session.stock_click().unwrap();
        assert!(session.current().stock().is_empty());
        assert_eq!(session.current().waste().top_card(), Some(&two));

        // Stock now empty: next click recycles.
        session.stock_click().unwrap();
        assert!(session.current().waste().is_empty());
        assert_eq!(session.current().stock().len(), 1);
        assert_eq!(session.move_count(), 2);
    }

    #[test]
    fn test_tick_only_counts_while_running() {
        let mut session = Session::new(small_board());

        session.tick(Duration::from_secs(3));
        assert_eq!(session.elapsed(), Duration::ZERO);

        session.play_card(card(Suit::Hearts, Rank::Seven)).unwrap();
        session.tick(Duration::from_secs(3));
        assert_eq!(session.elapsed(), Duration::from_secs(3));
    }

    #[test]
    fn test_new_game_resets_everything() {
        let mut session = Session::new(small_board());
        session.play_card(card(Suit::Hearts, Rank::Seven)).unwrap();
        session.tick(Duration::from_secs(9));

        session.new_game(initial_state(&mut GameRng::new(1)));

        assert_eq!(session.move_count(), 0);
        assert_eq!(session.elapsed(), Duration::ZERO);
        assert!(!session.can_undo());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut session = Session::new(small_board());
        session.play_card(card(Suit::Hearts, Rank::Seven)).unwrap();

        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(session, back);
    }
}
