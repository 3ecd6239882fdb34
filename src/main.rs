mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use codex_pong::compute::{apply_command, init_state, tick};
use codex_pong::entities::{Command, Config, GameState};
use codex_pong::storage::{HighScoreStore, DEFAULT_HIGH_SCORE_FILE};
use codex_pong::theme::{Palette, Rgb, DEFAULT_BACKGROUND_BOTTOM, DEFAULT_BACKGROUND_TOP};

/// Two-paddle pong against a CPU opponent, in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// File holding the persisted high score.
    #[arg(long, default_value = DEFAULT_HIGH_SCORE_FILE)]
    high_score_file: PathBuf,

    /// Milliseconds between simulation ticks.
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,

    /// Write diagnostics to this file (filtered by RUST_LOG, default info).
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Playfield width in game units.
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(i32).range(100..=10_000))]
    width: i32,

    /// Playfield height in game units.
    #[arg(long, default_value_t = 400, value_parser = clap::value_parser!(i32).range(100..=10_000))]
    height: i32,

    /// Background gradient colour at the top edge, as #rrggbb.
    #[arg(long, default_value = DEFAULT_BACKGROUND_TOP)]
    background_top: Rgb,

    /// Background gradient colour at the bottom edge, as #rrggbb.
    #[arg(long, default_value = DEFAULT_BACKGROUND_BOTTOM)]
    background_bottom: Rgb,
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is taken over by the game, so logs only go to a file.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file: {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

// ── Input ─────────────────────────────────────────────────────────────────────

enum Action {
    Command(Command),
    Quit,
}

/// Map a key event to a game action.  Repeats count as fresh moves so a held
/// arrow key keeps the paddle going.
fn key_action(key: &KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ') if key.kind == KeyEventKind::Press => {
            Some(Action::Command(Command::Start))
        }
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Action::Command(Command::MoveUp))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Action::Command(Command::MoveDown))
        }
        _ => None,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Each frame drains every pending key event (so each one is applied exactly
/// once, before the tick), advances the simulation, persists a beaten high
/// score and redraws.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    store: &HighScoreStore,
    palette: &Palette,
    frame: Duration,
) -> std::io::Result<()> {
    let mut saved_high_score = state.high_score;

    loop {
        let frame_start = Instant::now();

        while let Ok(ev) = rx.try_recv() {
            let Event::Key(key) = ev else {
                continue;
            };
            match key_action(&key) {
                Some(Action::Quit) => return Ok(()),
                Some(Action::Command(command)) => *state = apply_command(state, command),
                None => {}
            }
        }

        *state = tick(state);

        saved_high_score = store.persist_if_beaten(saved_high_score, state);

        display::render(out, state, palette)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let store = HighScoreStore::new(cli.high_score_file.clone());
    let config = Config {
        width: cli.width,
        height: cli.height,
        ..Config::default()
    };
    let palette = Palette::with_background(cli.background_top, cli.background_bottom);
    let mut state = init_state(config, store.load());
    info!(
        high_score = state.high_score,
        width = state.config.width,
        height = state.config.height,
        tick_ms = cli.tick_ms,
        background_top = %palette.background_top,
        background_bottom = %palette.background_bottom,
        "starting"
    );

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = game_loop(
        &mut out,
        &mut state,
        &rx,
        &store,
        &palette,
        Duration::from_millis(cli.tick_ms),
    );

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!(high_score = state.high_score, "exiting");
    result.context("terminal error")
}
