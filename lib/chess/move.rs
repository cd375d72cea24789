use crate::chess::{Board, Destinations, InvalidPosition, Piece, Position, Role};
use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::instrument;

/// A chess move, written as two positions separated by a single space.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{} {}", _0, _1)]
pub struct Move(pub Position, pub Position);

impl Move {
    /// The source [`Position`].
    pub fn whence(&self) -> Position {
        self.0
    }

    /// The destination [`Position`].
    pub fn whither(&self) -> Position {
        self.1
    }
}

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseMoveError {
    #[display(fmt = "invalid 'from' position")]
    InvalidFromPosition(InvalidPosition),

    #[display(fmt = "invalid 'to' position")]
    InvalidToPosition(InvalidPosition),

    #[display(fmt = "expected two positions separated by a single space")]
    InvalidSyntax,
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ParseMoveError::*;

        let Some((whence, whither)) = s.split_once(' ') else {
            return Err(InvalidSyntax);
        };

        Ok(Move(
            whence.parse().map_err(InvalidFromPosition)?,
            whither.parse().map_err(InvalidToPosition)?,
        ))
    }
}

/// Represents an illegal [`Move`] on a given [`Board`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "move `{}` is illegal", _0)]
pub struct IllegalMove(#[error(not(source))] pub Move);

impl Board {
    /// Whether moving the piece at `start` to `finish` is legal.
    ///
    /// A move is legal if there is a piece to move, the destination is among
    /// its [moves][`Board::moves`], neither an ally nor a king is captured,
    /// and the mover's own king is not left in check.
    #[instrument(level = "debug", skip(self), ret)]
    pub fn valid_move(&mut self, start: Position, finish: Position) -> bool {
        let Some(piece) = self.piece_on(start) else {
            return false;
        };

        match self.piece_on(finish) {
            Some(p) if p.color() == piece.color() => return false,
            Some(p) if p.role() == Role::King => return false,
            _ => {}
        }

        if !self.moves(start).contains(&finish) {
            return false;
        }

        let trial = self.trial(start, finish);
        let king = match piece.role() {
            Role::King => Some(finish),
            _ => trial.king(piece.color()),
        };

        king.map_or(true, |k| !trial.in_check(k))
    }

    /// The [moves][`Board::moves`] of the piece at `pos` that are [valid][`Board::valid_move`].
    pub fn legal_moves(&mut self, pos: Position) -> Destinations {
        let mut moves = self.moves(pos);
        moves.retain(|&mut target| self.valid_move(pos, target));
        moves
    }

    /// Makes a [`Move`] if it is [valid][`Board::valid_move`].
    ///
    /// Returns the captured piece, if any.
    #[instrument(level = "debug", skip(self), err)]
    pub fn make(&mut self, m: Move) -> Result<Option<Piece>, IllegalMove> {
        if self.valid_move(m.whence(), m.whither()) {
            Ok(self.move_piece(m.whence(), m.whither()))
        } else {
            Err(IllegalMove(m))
        }
    }
}
