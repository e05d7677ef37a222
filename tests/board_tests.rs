//! Board generation tests

use std::collections::HashMap;

use proptest::prelude::*;

use tui_pairs::core::{generate_board, Board, ConfigurationError, GameConfig, SimpleRng};
use tui_pairs::types::{CardState, Symbol, MAX_COLS, MIN_CARDS, MIN_COLS, ROW_CHOICES};

fn symbol_counts(board: &Board) -> HashMap<Symbol, usize> {
    let mut counts = HashMap::new();
    for card in board.cards() {
        *counts.entry(card.symbol).or_insert(0) += 1;
    }
    counts
}

#[test]
fn test_generated_board_starts_hidden() {
    let config = GameConfig::default();
    let mut rng = SimpleRng::new(7);
    let board = generate_board(&config.palette(), &config, &mut rng).unwrap();

    assert!(board.cards().iter().all(|c| c.state() == CardState::Hidden));
    for (id, card) in board.cards().iter().enumerate() {
        assert_eq!(card.id, id);
    }
}

#[test]
fn test_from_symbols_rejects_bad_layouts() {
    // Wrong length
    assert!(Board::from_symbols(2, 2, vec![Symbol(0), Symbol(0)]).is_none());
    // Odd grid
    assert!(Board::from_symbols(3, 3, vec![Symbol(0); 9]).is_none());
    // Unpaired symbol
    assert!(
        Board::from_symbols(2, 2, vec![Symbol(0), Symbol(0), Symbol(1), Symbol(2)]).is_none()
    );
}

#[test]
fn test_tiny_palette_refills() {
    let config = GameConfig {
        palette_size: 1,
        ..GameConfig::default()
    };
    let mut rng = SimpleRng::new(99);
    let board = generate_board(&config.palette(), &config, &mut rng).unwrap();

    // One face everywhere, still in whole pairs.
    let counts = symbol_counts(&board);
    assert_eq!(counts.len(), 1);
    assert_eq!(counts[&Symbol(0)], board.len());
}

#[test]
fn test_empty_palette_is_an_error() {
    let config = GameConfig::default();
    let mut rng = SimpleRng::new(1);
    assert_eq!(
        generate_board(&[], &config, &mut rng).unwrap_err(),
        ConfigurationError::EmptyPalette
    );
}

#[test]
fn test_single_row_grid_options() {
    let config = GameConfig {
        row_choices: vec![1],
        ..GameConfig::default()
    };
    assert_eq!(config.valid_cols(1), vec![4, 6]);

    let mut rng = SimpleRng::new(3);
    let board = generate_board(&config.palette(), &config, &mut rng).unwrap();
    assert_eq!(board.rows(), 1);
    assert!(board.cols() == 4 || board.cols() == 6);
}

proptest! {
    #[test]
    fn prop_default_board_is_well_formed(seed in any::<u32>()) {
        let config = GameConfig::default().with_seed(seed);
        let mut rng = SimpleRng::new(seed);
        let board = generate_board(&config.palette(), &config, &mut rng).unwrap();

        prop_assert!(ROW_CHOICES.contains(&board.rows()));
        prop_assert!((MIN_COLS..=MAX_COLS).contains(&board.cols()));
        prop_assert_eq!(board.len(), board.rows() as usize * board.cols() as usize);
        prop_assert_eq!(board.len() % 2, 0);
        prop_assert!(board.len() >= MIN_CARDS);
        prop_assert_eq!(board.total_pairs() as usize * 2, board.len());

        for count in symbol_counts(&board).values() {
            prop_assert_eq!(*count, 2);
        }
    }

    #[test]
    fn prop_same_seed_same_board(seed in any::<u32>()) {
        let config = GameConfig::default();
        let a = generate_board(&config.palette(), &config, &mut SimpleRng::new(seed)).unwrap();
        let b = generate_board(&config.palette(), &config, &mut SimpleRng::new(seed)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_small_palette_keeps_whole_pairs(seed in any::<u32>(), palette_size in 1u16..6) {
        let config = GameConfig { palette_size, ..GameConfig::default() };
        let mut rng = SimpleRng::new(seed);
        let board = generate_board(&config.palette(), &config, &mut rng).unwrap();

        for (symbol, count) in symbol_counts(&board) {
            prop_assert!(symbol.0 < palette_size);
            prop_assert_eq!(count % 2, 0);
        }
    }
}
