use std::fs;

use codex_pong::compute::{init_state, start_game, tick};
use codex_pong::entities::{Ball, Config, GameState, GameStatus};
use codex_pong::storage::{HighScoreStore, StoreError};

/// A session with `score` points and the ball one tick from leaving right.
fn about_to_lose(score: u32, high_score: u32) -> GameState {
    let mut s = start_game(&init_state(Config::default(), high_score));
    s.score = score;
    s.ball = Ball {
        x: 588,
        y: 50,
        radius: 8,
        vx: 4,
        vy: 4,
    };
    s
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = HighScoreStore::new(dir.path().join("highscore.txt"));
    store.save(42);
    assert_eq!(store.load(), 42);
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "42");
}

#[test]
fn save_overwrites_previous_value() {
    let dir = tempfile::tempdir().unwrap();
    let store = HighScoreStore::new(dir.path().join("highscore.txt"));
    store.save(7);
    store.save(3);
    assert_eq!(store.load(), 3);
}

#[test]
fn missing_file_loads_zero() {
    let dir = tempfile::tempdir().unwrap();
    let store = HighScoreStore::new(dir.path().join("absent.txt"));
    assert_eq!(store.load(), 0);
    assert!(matches!(store.try_load(), Err(StoreError::Io { .. })));
}

#[test]
fn garbage_loads_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highscore.txt");
    fs::write(&path, "not a number").unwrap();
    let store = HighScoreStore::new(&path);
    assert_eq!(store.load(), 0);
    assert!(matches!(store.try_load(), Err(StoreError::Parse { .. })));
}

#[test]
fn negative_value_loads_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highscore.txt");
    fs::write(&path, "-5").unwrap();
    assert_eq!(HighScoreStore::new(&path).load(), 0);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highscore.txt");
    fs::write(&path, "  17\n").unwrap();
    assert_eq!(HighScoreStore::new(&path).try_load().unwrap(), 17);
}

#[test]
fn unwritable_location_is_swallowed() {
    let dir = tempfile::tempdir().unwrap();
    let store = HighScoreStore::new(dir.path().join("no_such_dir").join("highscore.txt"));
    store.save(10);
    assert!(store.try_save(10).is_err());
    assert_eq!(store.load(), 0);
}

// ── persist_if_beaten ─────────────────────────────────────────────────────────

#[test]
fn beaten_high_score_is_written_on_session_end() {
    let dir = tempfile::tempdir().unwrap();
    let store = HighScoreStore::new(dir.path().join("highscore.txt"));
    store.save(2);
    let saved = store.load();

    let s = tick(&about_to_lose(5, saved));
    assert_eq!(s.status, GameStatus::Title);

    let saved = store.persist_if_beaten(saved, &s);
    assert_eq!(saved, 5);
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "5");
}

#[test]
fn unbeaten_session_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let store = HighScoreStore::new(dir.path().join("highscore.txt"));
    store.save(9);

    let s = tick(&about_to_lose(3, 9));
    assert_eq!(s.status, GameStatus::Title);
    assert_eq!(store.persist_if_beaten(9, &s), 9);
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "9");
}

#[test]
fn nothing_is_written_while_playing() {
    let dir = tempfile::tempdir().unwrap();
    let store = HighScoreStore::new(dir.path().join("highscore.txt"));

    let mut s = start_game(&init_state(Config::default(), 0));
    let mut saved = 0;
    for _ in 0..50 {
        s = tick(&s);
        saved = store.persist_if_beaten(saved, &s);
    }
    assert_eq!(s.status, GameStatus::Play);
    assert_eq!(saved, 0);
    assert!(!store.path().exists());
}

#[test]
fn second_record_overwrites_first() {
    let dir = tempfile::tempdir().unwrap();
    let store = HighScoreStore::new(dir.path().join("highscore.txt"));

    let first = tick(&about_to_lose(4, 0));
    let saved = store.persist_if_beaten(0, &first);
    assert_eq!(store.load(), 4);

    let second = tick(&about_to_lose(7, first.high_score));
    let saved = store.persist_if_beaten(saved, &second);
    assert_eq!(saved, 7);
    assert_eq!(store.load(), 7);
}
