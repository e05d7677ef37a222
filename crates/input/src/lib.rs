//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`KeyCommand`]s and keeps a grid cursor that
//! turns "activate" into [`crate::types::GameAction::Activate`] for the card
//! under it.

pub mod cursor;
pub mod map;

pub use tui_pairs_types as types;

pub use cursor::{CardCursor, Direction};
pub use map::{handle_key_event, should_quit, KeyCommand};
