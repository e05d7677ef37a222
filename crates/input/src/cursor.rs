//! Grid cursor over the card layout.

use crate::types::{CardId, GameAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Highlighted card position. Moves clamp at the grid edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardCursor {
    row: u8,
    col: u8,
    rows: u8,
    cols: u8,
}

impl CardCursor {
    pub fn new(rows: u8, cols: u8) -> Self {
        Self {
            row: 0,
            col: 0,
            rows,
            cols,
        }
    }

    /// Adopt a new grid shape, keeping the position when it still fits.
    pub fn resize(&mut self, rows: u8, cols: u8) {
        self.rows = rows;
        self.cols = cols;
        self.row = self.row.min(rows.saturating_sub(1));
        self.col = self.col.min(cols.saturating_sub(1));
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Row-major card id under the cursor
    pub fn card_id(&self) -> CardId {
        self.row as usize * self.cols as usize + self.col as usize
    }

    pub fn move_by(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.col = self.col.saturating_sub(1),
            Direction::Right => {
                if self.col + 1 < self.cols {
                    self.col += 1;
                }
            }
            Direction::Up => self.row = self.row.saturating_sub(1),
            Direction::Down => {
                if self.row + 1 < self.rows {
                    self.row += 1;
                }
            }
        }
    }

    /// The core action for flipping the highlighted card
    pub fn activate(&self) -> GameAction {
        GameAction::Activate(self.card_id())
    }
}
