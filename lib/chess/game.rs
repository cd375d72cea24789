use crate::chess::{Board, Color, Outcome, Player};
use derive_more::{Display, Error, From};
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use tracing::instrument;

/// A [`Board`] and the two [`Player`]s sitting at it.
///
/// Whose turn it is is not part of the game, that is up to whoever drives it.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(deny_unknown_fields, rename = "game")]
pub struct Game {
    pub board: Board,
    pub white: Player,
    pub black: Player,
}

impl Default for Game {
    fn default() -> Self {
        Game::new(
            Player::anonymous(Color::White),
            Player::anonymous(Color::Black),
        )
    }
}

impl Game {
    /// A game between two players, starting from the standard arrangement.
    pub fn new(white: Player, black: Player) -> Self {
        Game {
            board: Board::standard(),
            white,
            black,
        }
    }

    /// The player of a [`Color`].
    pub fn player(&self, side: Color) -> &Player {
        match side {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// Whether the game has ended from the point of view of `side`.
    ///
    /// A side without a king on the board can be neither mated nor stalemated.
    #[instrument(level = "debug", skip(self), ret)]
    pub fn outcome(&mut self, side: Color) -> Option<Outcome> {
        let king = self.board.king(side)?;

        if self.board.checkmated(king) {
            Some(Outcome::Checkmate(!side))
        } else if self.board.stalemated(king) {
            Some(Outcome::Stalemate)
        } else {
            None
        }
    }
}

/// Renders the game as a [RON] document.
///
/// [RON]: https://github.com/ron-rs/ron
impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let doc = ron::ser::to_string_pretty(self, PrettyConfig::default()).map_err(|_| fmt::Error)?;
        f.write_str(&doc)
    }
}

/// The reason why parsing [`Game`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse game")]
pub struct ParseGameError(ron::de::SpannedError);

impl FromStr for Game {
    type Err = ParseGameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{Move, Piece, Position, Role};
    use test_strategy::proptest;

    fn at(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[proptest]
    fn parsing_printed_game_is_an_identity(b: Board, white: Player, black: Player) {
        let g = Game { board: b, white, black };
        assert_eq!(g.to_string().parse(), Ok(g));
    }

    #[test]
    fn parsing_game_fails_for_malformed_documents() {
        assert!("game(board: ())".parse::<Game>().is_err());
        assert!("not ron".parse::<Game>().is_err());
    }

    #[test]
    fn new_game_starts_from_standard_arrangement() {
        let g = Game::default();
        assert_eq!(g.board, Board::standard());
        assert_eq!(g.player(Color::White).color, Color::White);
        assert_eq!(g.player(Color::Black).color, Color::Black);
    }

    #[test]
    fn new_game_has_not_ended() {
        let mut g = Game::default();
        assert_eq!(g.outcome(Color::White), None);
        assert_eq!(g.outcome(Color::Black), None);
    }

    #[test]
    fn game_without_king_has_not_ended() {
        let mut g = Game::default();
        g.board = Board::new();
        assert_eq!(g.outcome(Color::White), None);
    }

    #[test]
    fn fools_mate_is_a_win_for_white() -> Result<(), anyhow::Error> {
        // White starts on the high rows here, so the mirror image of the classic line.
        let mut g = Game::default();

        for m in ["f2 f3", "e7 e5", "g2 g4", "d8 h4"] {
            g.board.make(m.parse::<Move>()?)?;
        }

        assert_eq!(g.outcome(Color::Black), Some(Outcome::Checkmate(Color::White)));
        assert_eq!(g.outcome(Color::White), None);

        Ok(())
    }

    #[test]
    fn stalemated_side_draws() {
        let mut g = Game::default();
        g.board = Board::new();
        g.board.place(Piece::new(Role::King, Color::White), at("g8"));
        g.board.place(Piece::new(Role::Queen, Color::Black), at("f6"));
        g.board.place(Piece::new(Role::Rook, Color::Black), at("h6"));

        assert_eq!(g.outcome(Color::White), Some(Outcome::Stalemate));
    }
}
