use crate::types::{CardState, Phase, Symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardSnapshot {
    pub symbol: Symbol,
    pub state: CardState,
    pub dimmed: bool,
}

impl CardSnapshot {
    /// The face a renderer may show; hidden cards give nothing away.
    pub fn visible_symbol(&self) -> Option<Symbol> {
        match self.state {
            CardState::Hidden => None,
            CardState::Revealed | CardState::Matched => Some(self.symbol),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub rows: u8,
    pub cols: u8,
    pub cards: Vec<CardSnapshot>,
    pub phase: Phase,
    pub score: u32,
    pub attempts: u32,
    pub matched_pairs: u32,
    pub total_pairs: u32,
    pub time_remaining_ms: u32,
    pub timer_active: bool,
    pub paused: bool,
    pub game_over: bool,
    pub completed: bool,
    pub next_level_available: bool,
    pub advancing: bool,
    pub level: u32,
    pub generation: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cards.clear();
        *self = Self {
            cards: std::mem::take(&mut self.cards),
            ..Self::default()
        };
    }

    /// Whole seconds left, rounded up (what a countdown label shows)
    pub fn seconds_remaining(&self) -> u32 {
        seconds_ceil(self.time_remaining_ms)
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused && !self.advancing && !self.completed
    }
}

pub(crate) fn seconds_ceil(ms: u32) -> u32 {
    ms.div_ceil(1000)
}
