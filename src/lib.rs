//! Simulation core for Codex Pong.
//!
//! `entities` holds plain data, `compute` advances it, `storage` persists the
//! high score and `theme` describes the colours the front-end paints with.
//! Nothing in this crate touches the terminal.

pub mod compute;
pub mod entities;
pub mod geometry;
pub mod storage;
pub mod theme;
