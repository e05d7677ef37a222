//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders a
//! snapshot into a framebuffer that is then flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure so layout can be unit-tested without a terminal

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_pairs_core as core;
pub use tui_pairs_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_full_into, TerminalRenderer};
