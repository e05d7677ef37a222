//! Error types for board setup.
//!
//! Gameplay misuse (re-selecting a face-up card, clicking during resolution)
//! is not an error; those calls are silent no-ops.

use thiserror::Error;

/// Invalid grid or palette parameters. No partial board is ever created.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("row candidate set is empty")]
    NoRowCandidates,

    #[error("invalid column range {min_cols}..={max_cols}")]
    InvalidColumnRange { min_cols: u8, max_cols: u8 },

    #[error("no column count in {min_cols}..={max_cols} gives an even grid of at least 4 cards for {rows} rows")]
    NoValidColumns { rows: u8, min_cols: u8, max_cols: u8 },

    #[error("symbol palette is empty")]
    EmptyPalette,
}
