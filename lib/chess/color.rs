use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops::Not;

/// The color of a chess [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[derive(Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Color {
    #[display(fmt = "black")]
    Black,
    #[display(fmt = "white")]
    White,
}

impl Color {
    /// The row on which this side's pawns start.
    pub fn pawn_row(&self) -> u8 {
        match self {
            Color::Black => 1,
            Color::White => 6,
        }
    }

    /// The row on which this side's pawns are promoted.
    pub fn promotion_row(&self) -> u8 {
        match self {
            Color::Black => 7,
            Color::White => 0,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::Black
    }
}

impl Not for Color {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}
