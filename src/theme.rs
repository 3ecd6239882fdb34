//! Colour palette and the background gradient.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid colour {0:?}, expected #rrggbb")]
pub struct ParseColorError(String);

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// ── Palette ──────────────────────────────────────────────────────────────────

/// Default gradient endpoints, in the form accepted on the command line.
pub const DEFAULT_BACKGROUND_TOP: &str = "#004e92";
pub const DEFAULT_BACKGROUND_BOTTOM: &str = "#000428";

pub const LEFT_PADDLE: Rgb = Rgb::new(0xf9, 0x53, 0xc6);
pub const RIGHT_PADDLE: Rgb = Rgb::new(0xb9, 0x1d, 0x73);
pub const BALL: Rgb = Rgb::new(0xff, 0xdd, 0x00);
pub const TEXT: Rgb = Rgb::new(0xff, 0xff, 0xff);

/// Everything the renderer paints with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background_top: Rgb,
    pub background_bottom: Rgb,
    pub left_paddle: Rgb,
    pub right_paddle: Rgb,
    pub ball: Rgb,
    pub text: Rgb,
}

impl Palette {
    /// Standard palette with the given background gradient endpoints.
    pub fn with_background(top: Rgb, bottom: Rgb) -> Self {
        Palette {
            background_top: top,
            background_bottom: bottom,
            left_paddle: LEFT_PADDLE,
            right_paddle: RIGHT_PADDLE,
            ball: BALL,
            text: TEXT,
        }
    }

    /// Background colour per row, top to bottom.
    pub fn background(&self, rows: u32) -> Vec<Rgb> {
        vertical_gradient(self.background_top, self.background_bottom, rows)
    }
}

// ── Gradient ─────────────────────────────────────────────────────────────────

/// Colour of row `row` in a vertical gradient of `rows` rows.
///
/// Channels are widened to 16 bits (`0xab` becomes `0xabab`), moved linearly
/// toward `end`, truncated, then narrowed back with `>> 8`.  Row 0 is exactly
/// `start`; the last row stops short of `end`.
pub fn gradient_at(start: Rgb, end: Rgb, row: u32, rows: u32) -> Rgb {
    if rows == 0 {
        return start;
    }
    let lerp = |a: u8, b: u8| {
        let (a, b) = (a as i64 * 0x101, b as i64 * 0x101);
        let (row, rows) = (row as i64, rows as i64);
        // Numerator stays non-negative, so division floors.
        let wide = (a * rows + (b - a) * row) / rows;
        (wide >> 8).clamp(0, 255) as u8
    };
    Rgb::new(
        lerp(start.r, end.r),
        lerp(start.g, end.g),
        lerp(start.b, end.b),
    )
}

/// One colour per row, top to bottom.
pub fn vertical_gradient(start: Rgb, end: Rgb, rows: u32) -> Vec<Rgb> {
    (0..rows).map(|row| gradient_at(start, end, row, rows)).collect()
}
