//! Terminal pairs runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `tui_pairs::term`.
//! Logs go to a file (`PAIRS_LOG_PATH`, default `tui_pairs.log`) so they never
//! fight the alternate screen.

use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use tui_pairs::core::{GameConfig, GameSnapshot, GameState};
use tui_pairs::input::{handle_key_event, should_quit, CardCursor, KeyCommand};
use tui_pairs::term::{GameView, TerminalRenderer, Viewport};
use tui_pairs::types::{GameAction, GameEvent, TICK_MS};

fn init_logging() -> Result<()> {
    let path = std::env::var("PAIRS_LOG_PATH").unwrap_or_else(|_| "tui_pairs.log".to_string());
    let log_file = std::fs::File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;

    let mut config = GameConfig::from_env();
    if std::env::var_os("PAIRS_SEED").is_none() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
            .unwrap_or(1);
        config = config.with_seed(nanos);
    }
    info!(seed = config.seed, time_limit_ms = config.time_limit_ms, "starting tui-pairs");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let mut game_state = GameState::new(config)?;
    let mut cursor = CardCursor::new(game_state.board().rows(), game_state.board().cols());

    let view = GameView::new();
    let mut snapshot = GameSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Events first so the cursor matches the board being drawn.
        for ev in game_state.drain_events() {
            match ev {
                GameEvent::BoardReady { rows, cols } => cursor.resize(rows, cols),
                GameEvent::GameOver | GameEvent::BoardCompleted => info!(event = ?ev),
                _ => debug!(event = ?ev),
            }
        }

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game_state.snapshot_into(&mut snapshot);
        let fb = view.render(&snapshot, Some((cursor.row(), cursor.col())), Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        info!(score = game_state.score(), level = game_state.level(), "quit");
                        return Ok(());
                    }

                    match handle_key_event(key) {
                        Some(KeyCommand::Move(direction)) => cursor.move_by(direction),
                        Some(KeyCommand::Activate) => {
                            game_state.apply_action(cursor.activate());
                        }
                        Some(KeyCommand::NextLevel) => {
                            game_state.apply_action(GameAction::NextLevel);
                        }
                        Some(KeyCommand::Restart) => {
                            game_state.apply_action(GameAction::Restart);
                        }
                        Some(KeyCommand::TogglePause) => {
                            let paused = !game_state.paused();
                            game_state.apply_action(GameAction::Pause(paused));
                        }
                        None => {}
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game_state.tick(TICK_MS);
        }
    }
}
