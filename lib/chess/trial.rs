use crate::chess::{Board, Piece, Position};
use std::ops::Deref;

/// A tentative move that is undone when dropped.
///
/// While the trial is alive the board can only be inspected, so the mutated
/// position is never observed by anything other than the trial's owner.
#[derive(Debug)]
pub struct Trial<'a> {
    board: &'a mut Board,
    start: Position,
    finish: Position,
    moved: Option<Piece>,
    captured: Option<Piece>,
}

impl<'a> Trial<'a> {
    /// Moves whatever is on `start` to `finish` until the trial is dropped.
    pub fn new(board: &'a mut Board, start: Position, finish: Position) -> Self {
        let moved = board.piece_on(start);
        let captured = board.piece_on(finish);
        board.move_piece(start, finish);

        Trial {
            board,
            start,
            finish,
            moved,
            captured,
        }
    }
}

impl Deref for Trial<'_> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.board.square_mut(self.finish).set(self.captured);
        self.board.square_mut(self.start).set(self.moved);
    }
}

impl Board {
    /// Tentatively moves whatever is on `start` to `finish`.
    ///
    /// The board is restored to its exact prior state when the returned
    /// [`Trial`] goes out of scope.
    pub fn trial(&mut self, start: Position, finish: Position) -> Trial<'_> {
        Trial::new(self, start, finish)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn trial_moves_piece(mut b: Board, start: Position, #[filter(#finish != #start)] finish: Position) {
        let piece = b.piece_on(start);
        let trial = b.trial(start, finish);
        assert_eq!(trial.piece_on(start), None);
        assert_eq!(trial.piece_on(finish), piece);
    }

    #[proptest]
    fn dropping_trial_restores_board(mut b: Board, start: Position, finish: Position) {
        let before = b.clone();
        drop(b.trial(start, finish));
        assert_eq!(b, before);
    }

    #[proptest]
    fn board_is_restored_on_early_return(mut b: Board, start: Position, finish: Position) {
        fn occupied(b: &mut Board, start: Position, finish: Position) -> Option<Position> {
            let trial = b.trial(start, finish);
            trial.piece_on(finish)?;
            Some(finish)
        }

        let before = b.clone();
        occupied(&mut b, start, finish);
        assert_eq!(b, before);
    }
}
