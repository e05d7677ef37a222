//! Match resolution engine - the selection state machine
//!
//! `Idle → OneSelected → Resolving → Idle`.
//!
//! The engine never waits on its own. The lifecycle controller schedules
//! [`MatchEngine::resolve`] after the reveal delay, and for a mismatch
//! [`MatchEngine::finish_mismatch`] after a further delay. Input is rejected
//! for the whole time a pair is face up.

use tracing::debug;

use crate::board::Board;
use crate::scoring::ScoreState;
use crate::types::{CardId, GameEvent, Phase};

/// The selection slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Empty,
    One(CardId),
    /// Two cards face up, waiting for the comparison
    Pair(CardId, CardId),
    /// Compared and different, waiting to flip back
    Mismatched(CardId, CardId),
}

impl Selection {
    pub fn phase(&self) -> Phase {
        match self {
            Selection::Empty => Phase::Idle,
            Selection::One(_) => Phase::OneSelected,
            Selection::Pair(..) | Selection::Mismatched(..) => Phase::Resolving,
        }
    }

    /// Face-up cards belonging to the current selection
    pub fn cards(&self) -> (Option<CardId>, Option<CardId>) {
        match *self {
            Selection::Empty => (None, None),
            Selection::One(a) => (Some(a), None),
            Selection::Pair(a, b) | Selection::Mismatched(a, b) => (Some(a), Some(b)),
        }
    }
}

/// What a `select` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Rejected,
    /// First card of a pair revealed
    First,
    /// Second card revealed; resolution must be scheduled
    Second,
}

/// Result of comparing the face-up pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Matched { completed: bool },
    /// Cards stay face up until `finish_mismatch`
    Mismatched,
}

#[derive(Debug, Clone)]
pub struct MatchEngine {
    selection: Selection,
    score: ScoreState,
    attempts: u32,
    matched_pairs: u32,
    total_pairs: u32,
}

impl MatchEngine {
    pub fn new(total_pairs: u32) -> Self {
        Self {
            selection: Selection::Empty,
            score: ScoreState::new(),
            attempts: 0,
            matched_pairs: 0,
            total_pairs,
        }
    }

    pub fn reset(&mut self, total_pairs: u32) {
        *self = Self::new(total_pairs);
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn phase(&self) -> Phase {
        self.selection.phase()
    }

    pub fn score(&self) -> u32 {
        self.score.score
    }

    pub fn score_state(&self) -> ScoreState {
        self.score
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn matched_pairs(&self) -> u32 {
        self.matched_pairs
    }

    pub fn total_pairs(&self) -> u32 {
        self.total_pairs
    }

    pub fn is_complete(&self) -> bool {
        self.matched_pairs >= self.total_pairs
    }

    /// Try to turn a card face up.
    ///
    /// Rejected while resolving, for unknown ids, and for cards that are not
    /// hidden. A rejected call changes nothing.
    pub fn select(
        &mut self,
        board: &mut Board,
        id: CardId,
        events: &mut Vec<GameEvent>,
    ) -> SelectOutcome {
        if self.phase() == Phase::Resolving {
            return SelectOutcome::Rejected;
        }
        let Some(card) = board.get_mut(id) else {
            return SelectOutcome::Rejected;
        };
        if !card.reveal() {
            return SelectOutcome::Rejected;
        }
        events.push(GameEvent::CardRevealed(id));

        match self.selection {
            Selection::Empty => {
                self.selection = Selection::One(id);
                debug!(card = id, "first card selected");
                SelectOutcome::First
            }
            Selection::One(first) => {
                self.selection = Selection::Pair(first, id);
                self.attempts = self.attempts.saturating_add(1);
                events.push(GameEvent::AttemptsChanged(self.attempts));
                debug!(first, second = id, attempts = self.attempts, "second card selected");
                SelectOutcome::Second
            }
            // Resolving phases returned above.
            Selection::Pair(..) | Selection::Mismatched(..) => SelectOutcome::Rejected,
        }
    }

    /// Compare the face-up pair. `None` unless a pair is waiting.
    pub fn resolve(&mut self, board: &mut Board, events: &mut Vec<GameEvent>) -> Option<Resolution> {
        let Selection::Pair(first, second) = self.selection else {
            return None;
        };

        let same = match (board.get(first), board.get(second)) {
            (Some(a), Some(b)) => a.symbol == b.symbol,
            _ => false,
        };

        if !same {
            self.selection = Selection::Mismatched(first, second);
            events.push(GameEvent::MatchFailed);
            debug!(first, second, "pair mismatched");
            return Some(Resolution::Mismatched);
        }

        for id in [first, second] {
            if let Some(card) = board.get_mut(id) {
                if card.set_matched() {
                    events.push(GameEvent::CardMatched(id));
                }
            }
        }
        events.push(GameEvent::MatchSucceeded);

        if self.score.on_match() {
            events.push(GameEvent::ScoreChanged(self.score.score));
        }
        self.matched_pairs = (self.matched_pairs + 1).min(self.total_pairs);
        self.selection = Selection::Empty;

        let completed = self.is_complete();
        debug!(
            first,
            second,
            score = self.score.score,
            streak = self.score.consecutive_matches,
            matched = self.matched_pairs,
            "pair matched"
        );
        Some(Resolution::Matched { completed })
    }

    /// Flip a mismatched pair back and apply the mismatch rule.
    ///
    /// Returns false if no mismatch was waiting.
    pub fn finish_mismatch(&mut self, board: &mut Board, events: &mut Vec<GameEvent>) -> bool {
        let Selection::Mismatched(first, second) = self.selection else {
            return false;
        };

        for id in [first, second] {
            if let Some(card) = board.get_mut(id) {
                if card.hide() {
                    events.push(GameEvent::CardHidden(id));
                }
            }
        }

        if self.score.on_mismatch() {
            events.push(GameEvent::ScoreChanged(self.score.score));
        }
        self.selection = Selection::Empty;
        true
    }
}
