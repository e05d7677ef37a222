//! Rendering a live game through the terminal view

use tui_pairs::core::{Board, GameConfig, GameState};
use tui_pairs::input::{CardCursor, Direction};
use tui_pairs::term::{encode_full_into, GameView, Viewport};
use tui_pairs::types::{GameAction, Symbol, REVEAL_DELAY_MS};

fn screen(state: &GameState, cursor: &CardCursor, w: u16, h: u16) -> Vec<String> {
    let fb = GameView::new().render(
        &state.snapshot(),
        Some((cursor.row(), cursor.col())),
        Viewport::new(w, h),
    );
    (0..fb.height()).map(|y| fb.row_text(y)).collect()
}

fn fixed_state() -> GameState {
    let board = Board::from_symbols(2, 2, vec![Symbol(0), Symbol(1), Symbol(1), Symbol(0)]).unwrap();
    GameState::with_board(GameConfig::default(), board).unwrap()
}

#[test]
fn test_hidden_board_shows_no_faces() {
    let state = fixed_state();
    let cursor = CardCursor::new(2, 2);
    let lines = screen(&state, &cursor, 80, 24);

    assert!(lines.iter().any(|l| l.contains("Level 1") && l.contains("Time 60")));
    let backs: usize = lines.iter().map(|l| l.matches("[###]").count()).sum();
    assert_eq!(backs, 4);
    assert!(!lines.iter().any(|l| l.contains("[ A ]") || l.contains("[ B ]")));
}

#[test]
fn test_cursor_activation_reveals_then_matches() {
    let mut state = fixed_state();
    let mut cursor = CardCursor::new(2, 2);

    state.apply_action(cursor.activate());
    cursor.move_by(Direction::Down);
    cursor.move_by(Direction::Right);
    assert_eq!(cursor.card_id(), 3);
    state.apply_action(cursor.activate());

    let lines = screen(&state, &cursor, 80, 24);
    let faces: usize = lines.iter().map(|l| l.matches("[ A ]").count()).sum();
    assert_eq!(faces, 2);

    state.tick(REVEAL_DELAY_MS);
    let lines = screen(&state, &cursor, 80, 24);
    let matched: usize = lines.iter().map(|l| l.matches("( A )").count()).sum();
    assert_eq!(matched, 2);
    assert!(lines.iter().any(|l| l.contains("Score 1")));
    assert!(lines.iter().any(|l| l.contains("Matched 1/2")));
}

#[test]
fn test_pause_status_is_rendered() {
    let mut state = fixed_state();
    state.apply_action(GameAction::Pause(true));
    let cursor = CardCursor::new(2, 2);
    let lines = screen(&state, &cursor, 80, 24);
    assert!(lines.iter().any(|l| l.contains("PAUSED")));
}

#[test]
fn test_tiny_viewport_clips_without_panicking() {
    let state = GameState::new(GameConfig::default().with_seed(11)).unwrap();
    let cursor = CardCursor::new(state.board().rows(), state.board().cols());
    let lines = screen(&state, &cursor, 10, 3);
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.chars().count() == 10));

    let fb = GameView::new().render(&state.snapshot(), None, Viewport::new(10, 3));
    let mut out = Vec::new();
    encode_full_into(&fb, &mut out).unwrap();
    assert!(!out.is_empty());
}
