//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! Boards are generated with a random shape:
//!
//! - **Rows**: drawn from [`ROW_CHOICES`] (2 or 3)
//! - **Columns**: drawn from [`MIN_COLS`]..=[`MAX_COLS`] such that `rows * cols` is even
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `DEFAULT_TIME_LIMIT_MS` | 60000 | Countdown per board |
//! | `REVEAL_DELAY_MS` | 500 | Both cards face up before the comparison |
//! | `MISMATCH_HIDE_DELAY_MS` | 500 | Extra face-up time before a mismatch flips back |
//! | `COMPLETION_FANFARE_MS` | 300 | Board-complete flourish before "next level" is offered |
//! | `ADVANCE_INTERSTITIAL_MS` | 700 | Fade-out plus hold before the next board is dealt |
//!
//! # Examples
//!
//! ```
//! use tui_pairs_types::{CardState, GameAction, Symbol, ROW_CHOICES};
//!
//! let a = Symbol(3);
//! let b = Symbol(3);
//! assert_eq!(a, b);
//!
//! assert!(CardState::Hidden.is_selectable());
//! assert!(!CardState::Matched.is_selectable());
//!
//! assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
//! assert_eq!(ROW_CHOICES, [2, 3]);
//! ```

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Countdown per board (60 seconds)
pub const DEFAULT_TIME_LIMIT_MS: u32 = 60_000;

/// Delay between the second reveal and the match comparison
pub const REVEAL_DELAY_MS: u32 = 500;

/// Additional delay before a mismatched pair is hidden again
pub const MISMATCH_HIDE_DELAY_MS: u32 = 500;

/// Board-complete flourish (grow 200ms + shrink 100ms)
pub const COMPLETION_FANFARE_MS: u32 = 300;

/// Level transition before the next board is dealt (fade 500ms + hold 200ms)
pub const ADVANCE_INTERSTITIAL_MS: u32 = 700;

/// Candidate row counts
pub const ROW_CHOICES: [u8; 2] = [2, 3];

/// Smallest column count considered by the generator
pub const MIN_COLS: u8 = 2;

/// Largest column count considered by the generator
pub const MAX_COLS: u8 = 7;

/// Minimum number of cards on a board
pub const MIN_CARDS: usize = 4;

/// Number of distinct symbols in the default palette
///
/// At least the largest default pair count (3 x 6 = 9 pairs), so default boards
/// never repeat a face.
pub const DEFAULT_PALETTE_SIZE: u16 = 10;

/// Index of a card on the board (row-major)
pub type CardId = usize;

/// Opaque card face identifier.
///
/// Only equality matters; symbols have no ordering semantics for gameplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(pub u16);

impl Symbol {
    /// Build a palette of `size` distinct symbols.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pairs_types::Symbol;
    ///
    /// let palette = Symbol::palette(4);
    /// assert_eq!(palette, vec![Symbol(0), Symbol(1), Symbol(2), Symbol(3)]);
    /// ```
    pub fn palette(size: u16) -> Vec<Symbol> {
        (0..size).map(Symbol).collect()
    }
}

/// Card lifecycle
///
/// - **Hidden**: face down, selectable
/// - **Revealed**: face up, part of the current selection
/// - **Matched**: terminal; only a full reset brings it back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardState {
    #[default]
    Hidden,
    Revealed,
    Matched,
}

impl CardState {
    /// Whether a card in this state may be selected.
    pub fn is_selectable(&self) -> bool {
        matches!(self, CardState::Hidden)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardState::Hidden => "hidden",
            CardState::Revealed => "revealed",
            CardState::Matched => "matched",
        }
    }
}

/// Match resolution phase
///
/// The cycle goes: Idle → OneSelected → Resolving → Idle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    OneSelected,
    Resolving,
}

/// Inputs the presentation layer forwards to the core
///
/// The clock tick is not an action; it is passed to `GameState::tick` directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// A card was clicked/activated
    Activate(CardId),
    /// Deal the next board after completion
    NextLevel,
    /// Replay the current layout from scratch
    Restart,
    /// Pause (`true`) or resume (`false`)
    Pause(bool),
}

impl GameAction {
    /// Parse a parameterless action from string
    ///
    /// `Activate` carries a card id and is never produced here.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pairs_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("nextLevel"), Some(GameAction::NextLevel));
    /// assert_eq!(GameAction::from_str("pause"), Some(GameAction::Pause(true)));
    /// assert_eq!(GameAction::from_str("resume"), Some(GameAction::Pause(false)));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "nextlevel" => Some(GameAction::NextLevel),
            "restart" => Some(GameAction::Restart),
            "pause" => Some(GameAction::Pause(true)),
            "resume" => Some(GameAction::Pause(false)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Activate(_) => "activate",
            GameAction::NextLevel => "nextLevel",
            GameAction::Restart => "restart",
            GameAction::Pause(true) => "pause",
            GameAction::Pause(false) => "resume",
        }
    }
}

/// Events emitted by the core for presentation and audio to consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Card flipped face up (flip sound / animation cue)
    CardRevealed(CardId),
    /// Card flipped back face down
    CardHidden(CardId),
    /// Card locked as part of a matched pair
    CardMatched(CardId),
    MatchSucceeded,
    MatchFailed,
    ScoreChanged(u32),
    AttemptsChanged(u32),
    /// Whole seconds remaining, rounded up
    TimerChanged(u32),
    BoardCompleted,
    GameOver,
    /// Completion flourish finished; offer the next level
    NextLevelAvailable,
    /// Next-level interstitial started; input is locked until the new board
    LevelTransitionStarted,
    /// A fresh board was dealt
    BoardReady { rows: u8, cols: u8 },
    PauseChanged(bool),
}
