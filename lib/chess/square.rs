use crate::chess::Piece;
use serde::{Deserialize, Serialize};

/// A cell of the [`Board`][`crate::chess::Board`] holding at most one [`Piece`].
///
/// A square does not know where it is, ask the board to
/// [locate][`crate::chess::Board::locate`] it.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(transparent)]
pub struct Square {
    piece: Option<Piece>,
}

impl Square {
    /// A square holding `piece`.
    pub fn new(piece: Piece) -> Self {
        Square { piece: Some(piece) }
    }

    /// Whether a piece is on this square.
    pub fn is_occupied(&self) -> bool {
        self.piece.is_some()
    }

    /// The piece on this square, if any.
    pub fn piece(&self) -> Option<Piece> {
        self.piece
    }

    /// Mutable access to the piece on this square, if any.
    pub fn piece_mut(&mut self) -> Option<&mut Piece> {
        self.piece.as_mut()
    }

    /// Puts `piece` on this square, returning whatever was there before.
    pub fn replace(&mut self, piece: Piece) -> Option<Piece> {
        self.piece.replace(piece)
    }

    /// Clears this square, returning whatever was there before.
    pub fn take(&mut self) -> Option<Piece> {
        self.piece.take()
    }

    /// Restores the exact content of this square.
    pub(crate) fn set(&mut self, piece: Option<Piece>) {
        self.piece = piece;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[test]
    fn default_square_is_empty() {
        assert!(!Square::default().is_occupied());
        assert_eq!(Square::default().piece(), None);
    }

    #[proptest]
    fn square_holds_its_piece(p: Piece) {
        let sq = Square::new(p);
        assert!(sq.is_occupied());
        assert_eq!(sq.piece(), Some(p));
    }

    #[proptest]
    fn replacing_piece_overwrites_previous_one(mut sq: Square, p: Piece) {
        let before = sq.piece();
        assert_eq!(sq.replace(p), before);
        assert_eq!(sq.piece(), Some(p));
    }

    #[proptest]
    fn taking_piece_clears_square(mut sq: Square) {
        let before = sq.piece();
        assert_eq!(sq.take(), before);
        assert!(!sq.is_occupied());
    }
}
