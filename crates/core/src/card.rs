//! Card entity - per-card state machine
//!
//! `Hidden → Revealed → Hidden` on a mismatch, `Revealed → Matched` on a match.
//! `Matched` is terminal until [`Card::reset`].
//!
//! Transitions return `true` when they changed something, so the caller knows
//! whether to emit a presentation event.

use crate::types::{CardId, CardState, Symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: CardId,
    pub symbol: Symbol,
    state: CardState,
    /// Terminal visual intent; the presentation draws matched cards faded.
    dimmed: bool,
}

impl Card {
    pub fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            state: CardState::Hidden,
            dimmed: false,
        }
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    pub fn dimmed(&self) -> bool {
        self.dimmed
    }

    pub fn is_matched(&self) -> bool {
        self.state == CardState::Matched
    }

    /// Flip face up. No-op unless hidden.
    pub fn reveal(&mut self) -> bool {
        if self.state != CardState::Hidden {
            return false;
        }
        self.state = CardState::Revealed;
        true
    }

    /// Flip face down. No-op unless revealed.
    pub fn hide(&mut self) -> bool {
        if self.state != CardState::Revealed {
            return false;
        }
        self.state = CardState::Hidden;
        true
    }

    /// Lock as part of a matched pair.
    pub fn set_matched(&mut self) -> bool {
        let changed = self.state != CardState::Matched;
        self.state = CardState::Matched;
        self.dimmed = true;
        changed
    }

    /// Force back to hidden regardless of current state.
    pub fn reset(&mut self) {
        self.state = CardState::Hidden;
        self.dimmed = false;
    }
}
