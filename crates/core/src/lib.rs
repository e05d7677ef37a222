//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on UI, audio, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical boards
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: grid of paired cards and the random board generator
//! - [`card`]: per-card hidden/revealed/matched state machine
//! - [`config`]: tunable parameters with environment overrides
//! - [`error`]: configuration errors
//! - [`game_state`]: session lifecycle, countdown, restart and level advance
//! - [`resolver`]: selection and match resolution state machine
//! - [`rng`]: LCG and palette bag drawing
//! - [`scheduler`]: generation-tagged deferred tasks
//! - [`scoring`]: streak bonus and mismatch penalty
//!
//! # Game Rules
//!
//! - Cards are turned over two at a time; a matching pair stays face up.
//! - A match scores +1, or doubles the score while a match streak is running.
//! - The second mismatch in a row (outside a streak) costs a point.
//! - Clearing the board before the 60s countdown ends completes the level.
//!
//! # Example
//!
//! ```
//! use tui_pairs_core::{GameConfig, GameState};
//! use tui_pairs_types::{GameAction, REVEAL_DELAY_MS};
//!
//! let mut game = GameState::new(GameConfig::default().with_seed(12345)).unwrap();
//!
//! // Turn over the first card and its twin.
//! let symbol = game.board().cards()[0].symbol;
//! let (a, b) = game.board().pair_of(symbol).unwrap();
//! game.apply_action(GameAction::Activate(a));
//! game.apply_action(GameAction::Activate(b));
//!
//! // Resolution happens after the reveal delay.
//! game.tick(REVEAL_DELAY_MS);
//! assert_eq!(game.score(), 1);
//! assert_eq!(game.matched_pairs(), 1);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds. The countdown and all delayed steps advance from it.

pub mod board;
pub mod card;
pub mod config;
pub mod error;
pub mod game_state;
pub mod resolver;
pub mod rng;
pub mod scheduler;
pub mod scoring;
pub mod snapshot;

pub use tui_pairs_types as types;

// Re-export commonly used types for convenience
pub use board::{generate_board, Board};
pub use card::Card;
pub use config::GameConfig;
pub use error::ConfigurationError;
pub use game_state::GameState;
pub use resolver::{MatchEngine, Resolution, SelectOutcome, Selection};
pub use rng::{SimpleRng, SymbolBag};
pub use scheduler::{Scheduler, Task};
pub use scoring::{calculate_match_score, ScoreState};
pub use snapshot::{CardSnapshot, GameSnapshot};
