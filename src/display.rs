//! Rendering layer — all terminal I/O lives here.
//!
//! `render` receives a mutable writer and an immutable view of the game
//! state.  No game logic is performed; playfield coordinates are scaled onto
//! whatever terminal size is current.

use std::io::Write;

use codex_pong::entities::{GameState, GameStatus, Paddle};
use codex_pong::geometry::Rect;
use codex_pong::theme::{Palette, Rgb};
use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

const PADDLE_GLYPH: &str = "█";
const BALL_GLYPH: &str = "●";
const C_HINT: Color = Color::DarkGrey;

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

// ── Coordinate mapping ────────────────────────────────────────────────────────

/// Terminal area the playfield is scaled onto, with one background colour
/// per row.  The last terminal row is reserved for the controls hint.
struct Viewport {
    cols: u16,
    rows: u16,
    field_width: i32,
    field_height: i32,
    gradient: Vec<Color>,
}

impl Viewport {
    fn new(cols: u16, rows: u16, state: &GameState, palette: &Palette) -> Self {
        let rows = rows.saturating_sub(1).max(1);
        Viewport {
            cols: cols.max(1),
            rows,
            field_width: state.config.width.max(1),
            field_height: state.config.height.max(1),
            gradient: palette.background(rows as u32).into_iter().map(color).collect(),
        }
    }

    fn col(&self, x: i32) -> u16 {
        let c = x as i64 * self.cols as i64 / self.field_width as i64;
        c.clamp(0, self.cols as i64 - 1) as u16
    }

    fn row(&self, y: i32) -> u16 {
        let r = y as i64 * self.rows as i64 / self.field_height as i64;
        r.clamp(0, self.rows as i64 - 1) as u16
    }

    /// Inclusive cell span covered by `rect`; never empty.
    fn cells(&self, rect: &Rect) -> (u16, u16, u16, u16) {
        let c0 = self.col(rect.x0);
        let r0 = self.row(rect.y0);
        let c1 = self.col(rect.x0 + rect.width() - 1).max(c0);
        let r1 = self.row(rect.y0 + rect.height() - 1).max(r0);
        (c0, r0, c1, r1)
    }

    fn background(&self, row: u16) -> Color {
        self.gradient
            .get(row as usize)
            .copied()
            .unwrap_or(Color::Reset)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    palette: &Palette,
) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let view = Viewport::new(cols, rows, state, palette);

    draw_background(out, &view)?;

    match state.status {
        GameStatus::Title => draw_title(out, &view, state, palette)?,
        GameStatus::Play => {
            draw_paddle(out, &view, &state.left_paddle, palette.left_paddle)?;
            draw_paddle(out, &view, &state.right_paddle, palette.right_paddle)?;
            draw_ball(out, &view, state, palette)?;
            draw_hud(out, &view, state, palette)?;
        }
    }

    draw_controls_hint(out, &view, state)?;

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows))?;
    out.flush()?;
    Ok(())
}

// ── Background ────────────────────────────────────────────────────────────────

fn draw_background<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let blank = " ".repeat(view.cols as usize);
    for row in 0..view.rows {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(style::SetBackgroundColor(view.background(row)))?;
        out.queue(Print(&blank))?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_paddle<W: Write>(
    out: &mut W,
    view: &Viewport,
    paddle: &Paddle,
    rgb: Rgb,
) -> std::io::Result<()> {
    let (c0, r0, c1, r1) = view.cells(&paddle.rect());
    let bar = PADDLE_GLYPH.repeat((c1 - c0 + 1) as usize);
    out.queue(style::SetForegroundColor(color(rgb)))?;
    for row in r0..=r1 {
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(style::SetBackgroundColor(view.background(row)))?;
        out.queue(Print(&bar))?;
    }
    Ok(())
}

fn draw_ball<W: Write>(
    out: &mut W,
    view: &Viewport,
    state: &GameState,
    palette: &Palette,
) -> std::io::Result<()> {
    let col = view.col(state.ball.x);
    let row = view.row(state.ball.y);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetBackgroundColor(view.background(row)))?;
    out.queue(style::SetForegroundColor(color(palette.ball)))?;
    out.queue(Print(BALL_GLYPH))?;
    Ok(())
}

// ── Text ──────────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    view: &Viewport,
    row: u16,
    text: &str,
    fg: Rgb,
) -> std::io::Result<()> {
    let col = (view.cols / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetBackgroundColor(view.background(row)))?;
    out.queue(style::SetForegroundColor(color(fg)))?;
    out.queue(Print(text))?;
    Ok(())
}

/// Score line, 20 playfield units below the top edge.
fn draw_hud<W: Write>(
    out: &mut W,
    view: &Viewport,
    state: &GameState,
    palette: &Palette,
) -> std::io::Result<()> {
    let line = format!("Score: {}  Highscore: {}", state.score, state.high_score);
    draw_centered(out, view, view.row(20), &line, palette.text)
}

fn draw_title<W: Write>(
    out: &mut W,
    view: &Viewport,
    state: &GameState,
    palette: &Palette,
) -> std::io::Result<()> {
    let highscore = format!("Highscore: {}", state.high_score);
    let lines = ["Codex Pong", "Press SPACE to start", highscore.as_str()];

    let start_row = (view.rows / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, line) in lines.iter().enumerate() {
        draw_centered(out, view, start_row + i as u16, line, palette.text)?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(
    out: &mut W,
    view: &Viewport,
    state: &GameState,
) -> std::io::Result<()> {
    let hint = match state.status {
        GameStatus::Title => "SPACE : Start   Q : Quit",
        GameStatus::Play => "↑ ↓ / W S : Move   Q : Quit",
    };
    out.queue(cursor::MoveTo(0, view.rows))?;
    out.queue(style::ResetColor)?;
    out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
    out.queue(cursor::MoveTo(1, view.rows))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}
