use crate::chess::Color;
use derive_more::{Constructor, Display};
use serde::{Deserialize, Serialize};

/// The identity of one of the two sides of a [`Game`][`crate::chess::Game`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash, Constructor, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{} ({})", name, color)]
pub struct Player {
    #[cfg_attr(test, strategy("[A-Za-z][A-Za-z ]{0,15}"))]
    pub name: String,
    pub color: Color,
}

impl Player {
    /// A player named after the [`Color`] it plays.
    pub fn anonymous(color: Color) -> Self {
        let name = match color {
            Color::White => "White",
            Color::Black => "Black",
        };

        Player::new(name.into(), color)
    }
}
