//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout (centered in the viewport):
//!
//! ```text
//! Level 1   Score 4   Attempts 6   Time 42
//!
//! [###] [ C ] [###] [###]
//!
//! ( A ) [###] [###] ( A )
//!
//!            Matched 1/4
//! arrows move  enter flip  n next  r restart  p pause  q quit
//! ```

use crate::core::{CardSnapshot, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CardState, Symbol};

/// Terminal columns per card, e.g. `[ A ]`
pub const CARD_W: u16 = 5;
/// Blank columns between cards
pub const CARD_GAP: u16 = 1;
/// Terminal rows per grid row (card line + spacer)
pub const ROW_PITCH: u16 = 2;

const HELP: &str = "arrows move  enter flip  n next  r restart  p pause  q quit";

const FACE_COLORS: [Rgb; 6] = [
    Rgb::new(0, 200, 220),
    Rgb::new(230, 200, 0),
    Rgb::new(200, 80, 220),
    Rgb::new(80, 210, 80),
    Rgb::new(230, 70, 70),
    Rgb::new(90, 120, 240),
];

const BACK: Rgb = Rgb::new(120, 120, 140);
const CURSOR_BG: Rgb = Rgb::new(60, 60, 90);
const HUD: Rgb = Rgb::new(220, 220, 220);
const ALERT: Rgb = Rgb::new(250, 160, 60);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the pairs board.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Letter printed on a face-up card
    pub fn glyph(symbol: Symbol) -> char {
        (b'A' + (symbol.0 % 26) as u8) as char
    }

    fn face_color(symbol: Symbol) -> Rgb {
        FACE_COLORS[symbol.0 as usize % FACE_COLORS.len()]
    }

    /// Text and style of one card
    pub fn card_cell(card: &CardSnapshot, highlighted: bool) -> (String, CellStyle) {
        let (text, style) = match (card.state, card.visible_symbol()) {
            (CardState::Matched, Some(s)) => (
                format!("( {} )", Self::glyph(s)),
                CellStyle::fg(Self::face_color(s)).dim(),
            ),
            (_, Some(s)) => (
                format!("[ {} ]", Self::glyph(s)),
                CellStyle::fg(Self::face_color(s)).bold(),
            ),
            (_, None) => ("[###]".to_string(), CellStyle::fg(BACK)),
        };
        let style = if highlighted { style.on(CURSOR_BG) } else { style };
        (text, style)
    }

    /// One-line status under the board
    pub fn status_line(snap: &GameSnapshot) -> String {
        if snap.game_over {
            "TIME UP  -  r: restart".to_string()
        } else if snap.advancing {
            "Next level...".to_string()
        } else if snap.completed && snap.next_level_available {
            "BOARD CLEAR!  n: next level".to_string()
        } else if snap.completed {
            "BOARD CLEAR!".to_string()
        } else if snap.paused {
            "PAUSED  -  p: resume".to_string()
        } else {
            format!("Matched {}/{}", snap.matched_pairs, snap.total_pairs)
        }
    }

    pub fn hud_line(snap: &GameSnapshot) -> String {
        format!(
            "Level {}   Score {}   Attempts {}   Time {}",
            snap.level,
            snap.score,
            snap.attempts,
            snap.seconds_remaining()
        )
    }

    /// Render into a fresh framebuffer the size of `viewport`.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        cursor: Option<(u8, u8)>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, &mut fb);
        fb
    }

    pub fn render_into(&self, snap: &GameSnapshot, cursor: Option<(u8, u8)>, fb: &mut FrameBuffer) {
        let rows = snap.rows as u16;
        let cols = snap.cols as u16;
        let grid_w = (cols * CARD_W + cols.saturating_sub(1) * CARD_GAP).max(1);
        // hud, spacer, grid, status, help
        let total_h = 2 + rows * ROW_PITCH + 2;
        let top = fb.height().saturating_sub(total_h) / 2;

        let hud = Self::hud_line(snap);
        let hud_style = CellStyle::fg(HUD).bold();
        put_centered(fb, top, &hud, hud_style);

        let grid_x = fb.width().saturating_sub(grid_w) / 2;
        let grid_y = top + 2;
        for r in 0..snap.rows {
            for c in 0..snap.cols {
                let id = r as usize * snap.cols as usize + c as usize;
                let Some(card) = snap.cards.get(id) else {
                    continue;
                };
                let (text, style) = Self::card_cell(card, cursor == Some((r, c)));
                let x = grid_x + c as u16 * (CARD_W + CARD_GAP);
                let y = grid_y + r as u16 * ROW_PITCH;
                fb.put_str(x, y, &text, style);
            }
        }

        let status_y = grid_y + rows * ROW_PITCH;
        let status = Self::status_line(snap);
        let status_style = if snap.playable() {
            CellStyle::fg(HUD)
        } else {
            CellStyle::fg(ALERT).bold()
        };
        put_centered(fb, status_y, &status, status_style);
        put_centered(fb, status_y + 1, HELP, CellStyle::fg(BACK));
    }
}

fn put_centered(fb: &mut FrameBuffer, y: u16, text: &str, style: CellStyle) {
    let len = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    let x = fb.width().saturating_sub(len) / 2;
    fb.put_str(x, y, text, style);
}
