//! All game entity types — pure data, no game logic.

use crate::geometry::Rect;

// ── Tuning ────────────────────────────────────────────────────────────────────

/// Playfield dimensions and the fixed sizes/speeds of every entity.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub width: i32,
    pub height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    /// Gap between a side wall and the outer edge of its paddle.
    pub paddle_inset: i32,
    /// Vertical distance a paddle travels per move.
    pub paddle_speed: i32,
    pub ball_radius: i32,
    /// Magnitude of both velocity components when the ball is served.
    pub ball_speed: i32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: 600,
            height: 400,
            paddle_width: 10,
            paddle_height: 80,
            paddle_inset: 20,
            paddle_speed: 6,
            ball_radius: 8,
            ball_speed: 4,
        }
    }
}

impl Config {
    /// Largest valid paddle top.
    pub fn paddle_max_y(&self) -> i32 {
        (self.height - self.paddle_height).max(0)
    }
}

// ── Paddles & ball ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// CPU-controlled.
    Left,
    /// Human-controlled.
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Paddle {
    pub side: Side,
    /// Left edge; never changes after creation.
    pub x: i32,
    /// Top edge, always within `[0, height - paddle_height]`.
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ball {
    /// Center position.
    pub x: i32,
    pub y: i32,
    pub radius: i32,
    pub vx: i32,
    pub vy: i32,
}

impl Ball {
    /// Bounding box of the ball at its current position.
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.x - self.radius,
            self.y - self.radius,
            self.x + self.radius,
            self.y + self.radius,
        )
    }

    /// Bounding box after one step at the current velocity.
    pub fn tentative_rect(&self) -> Rect {
        self.rect().translate(self.vx, self.vy)
    }
}

// ── Flow control ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Title,
    Play,
}

/// Discrete player inputs, applied between ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    MoveUp,
    MoveDown,
}

/// What happened to the ball during one simulator step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BallOutcome {
    InPlay,
    /// Ball passed the left edge: the human player scores.
    Scored,
    /// Ball passed the right edge: the session is over.
    Lost,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub config: Config,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    pub score: u32,
    pub high_score: u32,
    pub status: GameStatus,
    /// Ticks simulated in the current session.
    pub frame: u64,
}
