//! Pure game-logic functions.
//!
//! Every public function takes immutable references and returns brand-new
//! values; the caller decides when to swap them in.  Persistence is left to
//! the caller as well: `tick` only records a beaten high score in the state.

use tracing::{debug, info};

use crate::entities::{
    Ball, BallOutcome, Command, Config, GameState, GameStatus, Paddle, Side,
};
use crate::geometry::{clamp, collides};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Paddle of the given side, vertically centered.
pub fn new_paddle(config: &Config, side: Side) -> Paddle {
    let x = match side {
        Side::Left => config.paddle_inset,
        Side::Right => config.width - config.paddle_inset - config.paddle_width,
    };
    Paddle {
        side,
        x,
        y: config.height / 2 - config.paddle_height / 2,
        width: config.paddle_width,
        height: config.paddle_height,
    }
}

/// Ball at the center of the playfield, moving down and toward `direction`
/// (`+1` rightward, `-1` leftward) at base speed.
pub fn serve_ball(config: &Config, direction: i32) -> Ball {
    Ball {
        x: config.width / 2,
        y: config.height / 2,
        radius: config.ball_radius,
        vx: config.ball_speed * direction.signum(),
        vy: config.ball_speed,
    }
}

/// Build the title-screen state.  Entities are already placed so a renderer
/// never has to special-case missing objects.
pub fn init_state(config: Config, high_score: u32) -> GameState {
    GameState {
        left_paddle: new_paddle(&config, Side::Left),
        right_paddle: new_paddle(&config, Side::Right),
        ball: serve_ball(&config, 1),
        score: 0,
        high_score,
        status: GameStatus::Title,
        frame: 0,
        config,
    }
}

// ── Paddles ──────────────────────────────────────────────────────────────────

/// Shift a paddle vertically, clamped so it never leaves the playfield.
pub fn move_paddle(paddle: &Paddle, dy: i32, config: &Config) -> Paddle {
    Paddle {
        y: clamp(paddle.y + dy, 0, config.paddle_max_y()),
        ..paddle.clone()
    }
}

/// One step of the CPU tracker: follow the ball's vertical center, holding
/// still while within one speed step of it.
pub fn cpu_step(paddle: &Paddle, ball: &Ball, config: &Config) -> Paddle {
    // Centers are compared doubled to stay in integers.
    let paddle_cy2 = paddle.rect().center_y2();
    let ball_cy2 = ball.rect().center_y2();
    let dead_zone2 = 2 * config.paddle_speed;

    if paddle_cy2 < ball_cy2 - dead_zone2 {
        move_paddle(paddle, config.paddle_speed, config)
    } else if paddle_cy2 > ball_cy2 + dead_zone2 {
        move_paddle(paddle, -config.paddle_speed, config)
    } else {
        paddle.clone()
    }
}

/// Let the CPU move the left paddle.
pub fn move_cpu(state: &GameState) -> GameState {
    GameState {
        left_paddle: cpu_step(&state.left_paddle, &state.ball, &state.config),
        ..state.clone()
    }
}

pub fn move_player_up(state: &GameState) -> GameState {
    move_player(state, -state.config.paddle_speed)
}

pub fn move_player_down(state: &GameState) -> GameState {
    move_player(state, state.config.paddle_speed)
}

fn move_player(state: &GameState, dy: i32) -> GameState {
    if state.status != GameStatus::Play {
        return state.clone();
    }
    GameState {
        right_paddle: move_paddle(&state.right_paddle, dy, &state.config),
        ..state.clone()
    }
}

// ── Ball ─────────────────────────────────────────────────────────────────────

/// Advance the ball by one step.
///
/// Wall and paddle reflections are decided on the tentative box (current box
/// plus current velocity), then the move is committed with the adjusted
/// velocity.  A wall flip and a paddle flip may both apply in the same step.
/// If the tentative box touches both paddles only the left one bounces.
pub fn step_ball(
    ball: &Ball,
    left: &Paddle,
    right: &Paddle,
    config: &Config,
) -> (Ball, BallOutcome) {
    let next = ball.tentative_rect();
    let mut vx = ball.vx;
    let mut vy = ball.vy;

    if next.y0 <= 0 || next.y1 >= config.height {
        vy = -vy;
    }

    if collides(&next, &left.rect()) {
        vx = vx.abs();
    } else if collides(&next, &right.rect()) {
        vx = -vx.abs();
    }

    let moved = Ball {
        x: ball.x + vx,
        y: ball.y + vy,
        vx,
        vy,
        ..ball.clone()
    };

    let bounds = moved.rect();
    let outcome = if bounds.x0 <= 0 {
        BallOutcome::Scored
    } else if bounds.x1 >= config.width {
        BallOutcome::Lost
    } else {
        BallOutcome::InPlay
    };
    (moved, outcome)
}

// ── State machine ────────────────────────────────────────────────────────────

/// Leave the title screen and begin a fresh session.  No-op while playing.
pub fn start_game(state: &GameState) -> GameState {
    if state.status != GameStatus::Title {
        return state.clone();
    }
    info!(high_score = state.high_score, "session started");
    GameState {
        status: GameStatus::Play,
        frame: 0,
        ..init_state(state.config.clone(), state.high_score)
    }
}

/// Close the session: keep the better of score and high score, back to title.
pub fn end_session(state: &GameState) -> GameState {
    let high_score = if state.score > state.high_score {
        info!(
            score = state.score,
            previous = state.high_score,
            "new high score"
        );
        state.score
    } else {
        state.high_score
    };
    info!(score = state.score, frames = state.frame, "session ended");
    GameState {
        high_score,
        status: GameStatus::Title,
        ..state.clone()
    }
}

/// Apply one player input.
pub fn apply_command(state: &GameState, command: Command) -> GameState {
    match command {
        Command::Start => start_game(state),
        Command::MoveUp => move_player_up(state),
        Command::MoveDown => move_player_down(state),
    }
}

/// Advance the simulation by one frame.  Nothing happens on the title screen.
pub fn tick(state: &GameState) -> GameState {
    if state.status != GameStatus::Play {
        return state.clone();
    }

    let state = move_cpu(state);
    let (ball, outcome) = step_ball(
        &state.ball,
        &state.left_paddle,
        &state.right_paddle,
        &state.config,
    );
    let state = GameState {
        ball,
        frame: state.frame + 1,
        ..state
    };

    match outcome {
        BallOutcome::InPlay => state,
        BallOutcome::Scored => {
            let score = state.score + 1;
            debug!(score, frame = state.frame, "point scored");
            GameState {
                score,
                ball: serve_ball(&state.config, 1),
                ..state
            }
        }
        BallOutcome::Lost => end_session(&state),
    }
}
