//! Board module - grid of paired cards
//!
//! The board is a `rows x cols` grid stored as a flat vector in row-major order,
//! so a card's id is also its index: `id = row * cols + col`.
//!
//! Invariant: every symbol on the board appears in whole pairs. When the
//! palette holds at least as many symbols as the board has pairs (the default),
//! every symbol appears exactly twice.

use std::collections::HashMap;

use tracing::debug;

use crate::card::Card;
use crate::config::GameConfig;
use crate::error::ConfigurationError;
use crate::rng::{SimpleRng, SymbolBag};
use crate::types::{CardId, Symbol, MIN_CARDS};

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    rows: u8,
    cols: u8,
    cards: Vec<Card>,
}

impl Board {
    /// Build a board from an explicit layout.
    ///
    /// Returns `None` unless `symbols` fills the grid exactly, the grid is even
    /// with at least [`MIN_CARDS`] cards, and every symbol appears in whole pairs.
    pub fn from_symbols(rows: u8, cols: u8, symbols: Vec<Symbol>) -> Option<Self> {
        let total = rows as usize * cols as usize;
        if symbols.len() != total || total % 2 != 0 || total < MIN_CARDS {
            return None;
        }
        if !counts_are_pairs(&symbols) {
            return None;
        }
        Some(Self::assemble(rows, cols, symbols))
    }

    fn assemble(rows: u8, cols: u8, symbols: Vec<Symbol>) -> Self {
        let cards = symbols
            .into_iter()
            .enumerate()
            .map(|(id, symbol)| Card::new(id, symbol))
            .collect();
        Self { rows, cols, cards }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn total_pairs(&self) -> u32 {
        (self.cards.len() / 2) as u32
    }

    /// Card id at (row, col); `None` if out of bounds
    pub fn index(&self, row: u8, col: u8) -> Option<CardId> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Flip every card back to hidden, keeping the layout
    pub fn reset_all(&mut self) {
        for card in &mut self.cards {
            card.reset();
        }
    }

    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    /// Ids of the two cards carrying `symbol`
    pub fn pair_of(&self, symbol: Symbol) -> Option<(CardId, CardId)> {
        let mut ids = self.cards.iter().filter(|c| c.symbol == symbol).map(|c| c.id);
        Some((ids.next()?, ids.next()?))
    }
}

fn counts_are_pairs(symbols: &[Symbol]) -> bool {
    let mut counts: HashMap<Symbol, usize> = HashMap::new();
    for &s in symbols {
        *counts.entry(s).or_default() += 1;
    }
    counts.values().all(|&n| n % 2 == 0)
}

/// Deal a new randomized board.
///
/// Picks the row count from `config.row_choices`, then a column count from
/// `config.min_cols..=config.max_cols` that keeps the grid even. Symbols are
/// drawn from a palette bag (refilled when exhausted) and pushed twice each,
/// then the whole layout is Fisher-Yates shuffled.
pub fn generate_board(
    palette: &[Symbol],
    config: &GameConfig,
    rng: &mut SimpleRng,
) -> Result<Board, ConfigurationError> {
    let rows = *rng
        .choose(&config.row_choices)
        .ok_or(ConfigurationError::NoRowCandidates)?;

    let valid_cols = config.valid_cols(rows);
    let cols = *rng
        .choose(&valid_cols)
        .ok_or(ConfigurationError::NoValidColumns {
            rows,
            min_cols: config.min_cols,
            max_cols: config.max_cols,
        })?;

    let mut bag = SymbolBag::new(palette).ok_or(ConfigurationError::EmptyPalette)?;

    let total = rows as usize * cols as usize;
    let mut symbols = Vec::with_capacity(total);
    while symbols.len() < total {
        let symbol = bag.draw(rng);
        symbols.push(symbol);
        symbols.push(symbol);
    }

    rng.shuffle(&mut symbols);

    debug!(rows, cols, total, palette = palette.len(), "generated board");
    Ok(Board::assemble(rows, cols, symbols))
}
