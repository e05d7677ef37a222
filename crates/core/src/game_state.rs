//! Game state module - session lifecycle and timer
//!
//! This module ties together the core components: board generation, the match
//! engine, scoring and the deferred-task scheduler. It owns the countdown, the
//! game-over and completion transitions, restart and level advance.
//!
//! Everything runs on the caller's thread. Delays (reveal, mismatch flip-back,
//! completion flourish, level interstitial) are scheduled tasks that fire from
//! [`GameState::tick`]. Each task carries the session generation, and tasks
//! from a previous session are discarded.

use tracing::{debug, error, info};

use crate::board::{generate_board, Board};
use crate::config::GameConfig;
use crate::error::ConfigurationError;
use crate::resolver::{MatchEngine, Resolution, SelectOutcome, Selection};
use crate::rng::SimpleRng;
use crate::scheduler::{Scheduler, Task};
use crate::snapshot::{seconds_ceil, CardSnapshot, GameSnapshot};
use crate::types::*;

/// One play session: a board plus everything that happens on it
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    palette: Vec<Symbol>,
    rng: SimpleRng,
    board: Board,
    engine: MatchEngine,
    scheduler: Scheduler,
    events: Vec<GameEvent>,
    /// Bumped on every new board or restart; stale tasks are dropped.
    generation: u32,
    level: u32,
    time_remaining_ms: u32,
    timer_active: bool,
    /// Last whole-second value reported through `TimerChanged`.
    shown_seconds: u32,
    paused: bool,
    game_over: bool,
    completed: bool,
    next_level_available: bool,
    advancing: bool,
}

impl GameState {
    /// Validate `config` and deal the first board.
    pub fn new(config: GameConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let mut rng = SimpleRng::new(config.seed);
        let palette = config.palette();
        let board = generate_board(&palette, &config, &mut rng)?;
        Ok(Self::assemble(config, palette, rng, board))
    }

    /// Start a session on a fixed layout (replays, tests).
    ///
    /// Later boards (`advance_level`) are still generated from `config`.
    pub fn with_board(config: GameConfig, board: Board) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let rng = SimpleRng::new(config.seed);
        let palette = config.palette();
        Ok(Self::assemble(config, palette, rng, board))
    }

    fn assemble(config: GameConfig, palette: Vec<Symbol>, rng: SimpleRng, board: Board) -> Self {
        let engine = MatchEngine::new(board.total_pairs());
        let mut state = Self {
            config,
            palette,
            rng,
            board,
            engine,
            scheduler: Scheduler::new(),
            events: Vec::new(),
            generation: 0,
            level: 1,
            time_remaining_ms: 0,
            timer_active: false,
            shown_seconds: 0,
            paused: false,
            game_over: false,
            completed: false,
            next_level_available: false,
            advancing: false,
        };
        state.begin_session();
        state.announce_board();
        state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.engine.score()
    }

    pub fn attempts(&self) -> u32 {
        self.engine.attempts()
    }

    pub fn matched_pairs(&self) -> u32 {
        self.engine.matched_pairs()
    }

    pub fn total_pairs(&self) -> u32 {
        self.engine.total_pairs()
    }

    pub fn consecutive_matches(&self) -> u32 {
        self.engine.score_state().consecutive_matches
    }

    pub fn consecutive_mismatches(&self) -> u32 {
        self.engine.score_state().consecutive_mismatches
    }

    pub fn selection(&self) -> Selection {
        self.engine.selection()
    }

    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    pub fn is_resolving(&self) -> bool {
        self.phase() == Phase::Resolving
    }

    pub fn time_remaining_ms(&self) -> u32 {
        self.time_remaining_ms
    }

    pub fn timer_active(&self) -> bool {
        self.timer_active
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn next_level_available(&self) -> bool {
        self.next_level_available
    }

    pub fn advancing(&self) -> bool {
        self.advancing
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }

    /// Hand queued events to the presentation layer.
    ///
    /// The queue is unbounded; callers must drain it every frame.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Whether card input is currently accepted at all
    pub fn accepts_input(&self) -> bool {
        !self.paused && !self.game_over && !self.advancing && !self.is_resolving()
    }

    /// Reset counters, timer and flags for a fresh run on the current board.
    fn begin_session(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.scheduler.clear();
        self.engine.reset(self.board.total_pairs());

        self.time_remaining_ms = self.config.time_limit_ms;
        self.timer_active = true;
        self.shown_seconds = seconds_ceil(self.time_remaining_ms);
        if self.paused {
            self.events.push(GameEvent::PauseChanged(false));
        }
        self.paused = false;
        self.game_over = false;
        self.completed = false;
        self.next_level_available = false;
        self.advancing = false;

        self.events.push(GameEvent::ScoreChanged(0));
        self.events.push(GameEvent::AttemptsChanged(0));
        self.events.push(GameEvent::TimerChanged(self.shown_seconds));
    }

    fn announce_board(&mut self) {
        let (rows, cols) = (self.board.rows(), self.board.cols());
        self.events.push(GameEvent::BoardReady { rows, cols });
        info!(
            rows,
            cols,
            pairs = self.board.total_pairs(),
            level = self.level,
            generation = self.generation,
            "board ready"
        );
    }

    /// Throw the current board away and deal a new one.
    ///
    /// On error the current board and session are left untouched.
    pub fn start_new_board(&mut self) -> Result<(), ConfigurationError> {
        let board = generate_board(&self.palette, &self.config, &mut self.rng)?;
        self.board = board;
        self.begin_session();
        self.announce_board();
        Ok(())
    }

    /// Replay the current layout from scratch.
    ///
    /// Cancels every pending continuation, so a half-finished resolution can
    /// never touch the reset board.
    pub fn restart(&mut self) {
        for card in self.board.cards() {
            if card.state() != CardState::Hidden {
                self.events.push(GameEvent::CardHidden(card.id));
            }
        }
        self.board.reset_all();
        self.begin_session();
        info!(generation = self.generation, "restarted board");
    }

    /// Move on to the next level once it has been offered.
    ///
    /// Input is locked through a short interstitial, then a new board is dealt.
    pub fn advance_level(&mut self) -> bool {
        if !self.next_level_available || self.advancing {
            return false;
        }
        self.advancing = true;
        self.events.push(GameEvent::LevelTransitionStarted);
        self.scheduler
            .schedule(ADVANCE_INTERSTITIAL_MS, self.generation, Task::FinishAdvance);
        info!(level = self.level, "level transition started");
        true
    }

    /// Pause or resume. Pausing stops the timer and locks card input.
    pub fn pause(&mut self, paused: bool) -> bool {
        if paused {
            self.timer_active = false;
        } else if !self.game_over && self.engine.matched_pairs() < self.engine.total_pairs() {
            self.timer_active = true;
        }

        if self.paused == paused {
            return false;
        }
        self.paused = paused;
        self.events.push(GameEvent::PauseChanged(paused));
        debug!(paused, "pause toggled");
        true
    }

    /// Card activated by the player
    pub fn select(&mut self, id: CardId) -> bool {
        if self.paused || self.game_over || self.advancing {
            return false;
        }

        match self.engine.select(&mut self.board, id, &mut self.events) {
            SelectOutcome::Rejected => false,
            SelectOutcome::First => true,
            SelectOutcome::Second => {
                self.scheduler
                    .schedule(REVEAL_DELAY_MS, self.generation, Task::ResolvePair);
                true
            }
        }
    }

    /// Advance the clock by `elapsed_ms`: countdown first, then due tasks.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.timer_active {
            self.time_remaining_ms = self.time_remaining_ms.saturating_sub(elapsed_ms);

            let seconds = seconds_ceil(self.time_remaining_ms);
            if seconds != self.shown_seconds {
                self.shown_seconds = seconds;
                self.events.push(GameEvent::TimerChanged(seconds));
            }

            if self.time_remaining_ms == 0 {
                self.timer_active = false;
                self.game_over = true;
                self.events.push(GameEvent::GameOver);
                info!(
                    score = self.engine.score(),
                    matched = self.engine.matched_pairs(),
                    total = self.engine.total_pairs(),
                    "time is up"
                );
            }
        }

        for due in self.scheduler.take_due(elapsed_ms) {
            if due.generation != self.generation {
                debug!(task = ?due.task, generation = due.generation, "discarding stale task");
                continue;
            }
            self.run_task(due.task);
        }
    }

    fn run_task(&mut self, task: Task) {
        match task {
            Task::ResolvePair => match self.engine.resolve(&mut self.board, &mut self.events) {
                Some(Resolution::Matched { completed: true }) => self.complete_board(),
                Some(Resolution::Matched { completed: false }) | None => {}
                Some(Resolution::Mismatched) => {
                    self.scheduler.schedule(
                        MISMATCH_HIDE_DELAY_MS,
                        self.generation,
                        Task::HideMismatch,
                    );
                }
            },
            Task::HideMismatch => {
                self.engine.finish_mismatch(&mut self.board, &mut self.events);
            }
            Task::ShowNextLevel => {
                self.next_level_available = true;
                self.events.push(GameEvent::NextLevelAvailable);
            }
            Task::FinishAdvance => match self.start_new_board() {
                Ok(()) => {
                    self.level = self.level.saturating_add(1);
                    info!(level = self.level, "advanced to next level");
                }
                Err(err) => {
                    // Config is validated up front, so this only fires if it was bypassed.
                    error!(%err, "could not deal next board");
                    self.advancing = false;
                }
            },
        }
    }

    fn complete_board(&mut self) {
        // A pair resolved after the clock ran out does not win the board.
        if self.game_over || self.completed {
            return;
        }
        self.timer_active = false;
        self.completed = true;
        self.events.push(GameEvent::BoardCompleted);
        self.scheduler
            .schedule(COMPLETION_FANFARE_MS, self.generation, Task::ShowNextLevel);
        info!(
            score = self.engine.score(),
            attempts = self.engine.attempts(),
            remaining_ms = self.time_remaining_ms,
            "board completed"
        );
    }

    /// Apply a presentation input
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Activate(id) => self.select(id),
            GameAction::NextLevel => self.advance_level(),
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::Pause(paused) => self.pause(paused),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.board.rows();
        out.cols = self.board.cols();
        out.cards.clear();
        out.cards.extend(self.board.cards().iter().map(|c| CardSnapshot {
            symbol: c.symbol,
            state: c.state(),
            dimmed: c.dimmed(),
        }));
        out.phase = self.phase();
        out.score = self.engine.score();
        out.attempts = self.engine.attempts();
        out.matched_pairs = self.engine.matched_pairs();
        out.total_pairs = self.engine.total_pairs();
        out.time_remaining_ms = self.time_remaining_ms;
        out.timer_active = self.timer_active;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.completed = self.completed;
        out.next_level_available = self.next_level_available;
        out.advancing = self.advancing;
        out.level = self.level;
        out.generation = self.generation;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
