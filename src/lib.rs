//! TUI Pairs (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `tui_pairs::{core, input, term, types}`.

pub use tui_pairs_core as core;
pub use tui_pairs_input as input;
pub use tui_pairs_term as term;
pub use tui_pairs_types as types;
