use crate::chess::{Color, File, InvalidPieceKind, Piece, Position, Rank, Role, Square};
use serde::{Deserialize, Serialize};
use std::{fmt, ptr};
use tracing::instrument;

/// The kinds of the pieces on the back rank, from file `a` to file `h`.
const BACK_RANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// The 8x8 grid of [`Square`]s.
///
/// The board enforces no chess rules on its mutators, moves should be
/// checked with [`Board::valid_move`] before they are made.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct Board {
    squares: [[Square; 8]; 8],
}

// We provide a custom implementation of Arbitrary rather than deriving,
// so that random boards are sparse enough to leave room for moves.
#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Board {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Board>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::{collection::vec, option::weighted, prelude::*};

        vec(weighted(0.25, any::<Piece>()), 64)
            .prop_map(|v| {
                let mut board = Board::default();

                for (sq, p) in board.squares.iter_mut().flatten().zip(v) {
                    sq.set(p);
                }

                board
            })
            .boxed()
    }
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// A board holding the standard opening arrangement.
    pub fn standard() -> Self {
        let mut board = Self::new();
        board.setup();
        board
    }

    /// Populates the board with the standard opening arrangement.
    ///
    /// Black occupies rows 0 and 1, White occupies rows 6 and 7.
    #[instrument(level = "trace", skip(self))]
    pub fn setup(&mut self) {
        for (column, role) in BACK_RANK.into_iter().enumerate() {
            let file = File::ALL[column];

            for color in [Color::Black, Color::White] {
                let back = Rank::ALL[(7 - color.promotion_row()) as usize];
                let front = Rank::ALL[color.pawn_row() as usize];

                self.place(Piece::new(role, color), Position::from_notation(file, back));
                self.place(Piece::new(Role::Pawn, color), Position::from_notation(file, front));
            }
        }
    }

    /// The [`Square`] at a given [`Position`].
    pub fn square(&self, pos: Position) -> &Square {
        &self.squares[pos.row() as usize][pos.column() as usize]
    }

    /// Mutable access to the [`Square`] at a given [`Position`].
    pub fn square_mut(&mut self, pos: Position) -> &mut Square {
        &mut self.squares[pos.row() as usize][pos.column() as usize]
    }

    /// The [`Piece`] at a given [`Position`], if any.
    pub fn piece_on(&self, pos: Position) -> Option<Piece> {
        self.square(pos).piece()
    }

    /// The [`Position`] of a [`Square`] that belongs to this board.
    ///
    /// Squares are identified by address, so a copy of a square is never located.
    pub fn locate(&self, square: &Square) -> Option<Position> {
        Position::iter().find(|&pos| ptr::eq(self.square(pos), square))
    }

    /// Puts a [`Piece`] on the board, returning whatever was there before.
    pub fn place(&mut self, piece: Piece, pos: Position) -> Option<Piece> {
        self.square_mut(pos).replace(piece)
    }

    /// Puts a black piece of the kind named by `kind` on the board.
    #[instrument(level = "trace", skip(self), err)]
    pub fn place_piece(&mut self, kind: &str, pos: Position) -> Result<(), InvalidPieceKind> {
        let role: Role = kind.parse()?;
        self.place(role.into(), pos);
        Ok(())
    }

    /// Clears the square at a given [`Position`], returning the piece that was there.
    pub fn remove_piece(&mut self, pos: Position) -> Option<Piece> {
        self.square_mut(pos).take()
    }

    /// Moves whatever is on `start` to `finish` unconditionally.
    ///
    /// Returns the piece previously on `finish`, which is no longer on the board.
    #[instrument(level = "trace", skip(self), ret)]
    pub fn move_piece(&mut self, start: Position, finish: Position) -> Option<Piece> {
        if start == finish {
            return None;
        }

        let piece = self.square_mut(start).take();
        let captured = self.square(finish).piece();
        self.square_mut(finish).set(piece);
        captured
    }

    /// An iterator over all pieces on the board in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::iter().filter_map(|pos| Some((pos, self.piece_on(pos)?)))
    }

    /// The [`Position`] of the king of a [`Color`], if any.
    pub fn king(&self, side: Color) -> Option<Position> {
        let king = Piece::new(Role::King, side);
        self.iter().find(|&(_, p)| p == king).map(|(pos, _)| pos)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for file in File::iter() {
            write!(f, "   {}", file)?;
        }

        writeln!(f)?;
        writeln!(f, "   +---+---+---+---+---+---+---+---+")?;

        for rank in Rank::iter().rev() {
            write!(f, " {} |", rank)?;

            for file in File::iter() {
                match self.piece_on(Position::from_notation(file, rank)) {
                    Some(piece) if f.alternate() => write!(f, " {:#} |", piece)?,
                    Some(piece) => write!(f, " {} |", piece)?,
                    None => write!(f, "   |")?,
                }
            }

            writeln!(f, " {}", rank)?;
            writeln!(f, "   +---+---+---+---+---+---+---+---+")?;
        }

        write!(f, "  ")?;
        for file in File::iter() {
            write!(f, "   {}", file)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::InvalidPosition;
    use test_strategy::proptest;

    #[proptest]
    fn new_board_is_empty() {
        assert_eq!(Board::new().iter().count(), 0);
    }

    #[proptest]
    fn locating_square_returns_its_position(b: Board, pos: Position) {
        assert_eq!(b.locate(b.square(pos)), Some(pos));
    }

    #[proptest]
    fn copies_of_squares_cannot_be_located(b: Board, pos: Position) {
        let copy = *b.square(pos);
        assert_eq!(b.locate(&copy), None);
    }

    #[test]
    fn setup_arranges_back_ranks_and_pawns() -> Result<(), InvalidPosition> {
        let b = Board::standard();

        for column in 0..8 {
            let black = Position::new(0, column)?;
            let white = Position::new(7, column)?;
            assert_eq!(b.piece_on(black), Some(Piece::new(BACK_RANK[column as usize], Color::Black)));
            assert_eq!(b.piece_on(white), Some(Piece::new(BACK_RANK[column as usize], Color::White)));

            let black = Position::new(1, column)?;
            let white = Position::new(6, column)?;
            assert_eq!(b.piece_on(black), Some(Piece::new(Role::Pawn, Color::Black)));
            assert_eq!(b.piece_on(white), Some(Piece::new(Role::Pawn, Color::White)));
        }

        assert_eq!(b.iter().count(), 32);

        Ok(())
    }

    #[proptest]
    fn placing_piece_overwrites_square(mut b: Board, p: Piece, pos: Position) {
        let before = b.piece_on(pos);
        assert_eq!(b.place(p, pos), before);
        assert_eq!(b.piece_on(pos), Some(p));
    }

    #[proptest]
    fn place_piece_creates_black_piece_by_name(mut b: Board, r: Role, pos: Position) {
        assert_eq!(b.place_piece(&r.to_string(), pos), Ok(()));
        assert_eq!(b.piece_on(pos), Some(Piece::new(r, Color::Black)));
    }

    #[proptest]
    fn place_piece_fails_for_unknown_kind(mut b: Board, pos: Position) {
        let before = b.clone();
        assert_eq!(b.place_piece("Archbishop", pos), Err(InvalidPieceKind));
        assert_eq!(b, before);
    }

    #[proptest]
    fn removing_piece_clears_square(mut b: Board, pos: Position) {
        let before = b.piece_on(pos);
        assert_eq!(b.remove_piece(pos), before);
        assert_eq!(b.piece_on(pos), None);
    }

    #[proptest]
    fn moving_piece_overwrites_destination(
        mut b: Board,
        start: Position,
        #[filter(#finish != #start)] finish: Position,
    ) {
        let piece = b.piece_on(start);
        let captured = b.piece_on(finish);
        assert_eq!(b.move_piece(start, finish), captured);
        assert_eq!(b.piece_on(start), None);
        assert_eq!(b.piece_on(finish), piece);
    }

    #[proptest]
    fn moving_piece_to_its_own_square_is_a_no_op(mut b: Board, pos: Position) {
        let before = b.clone();
        assert_eq!(b.move_piece(pos, pos), None);
        assert_eq!(b, before);
    }

    #[proptest]
    fn king_finds_the_king_of_a_side(mut b: Board, c: Color, pos: Position) {
        for (k, _) in b.clone().iter().filter(|(_, p)| p.role() == Role::King) {
            b.remove_piece(k);
        }

        assert_eq!(b.king(c), None);
        b.place(Piece::new(Role::King, c), pos);
        assert_eq!(b.king(c), Some(pos));
        assert_eq!(b.king(!c), None);
    }

    #[test]
    fn board_is_rendered_with_highest_row_on_top() {
        let rendered = Board::standard().to_string();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 19);
        assert_eq!(lines[0], "     a   b   c   d   e   f   g   h");
        assert_eq!(lines[2], " 8 | R | N | B | Q | K | B | N | R | 8");
        assert_eq!(lines[8], " 5 |   |   |   |   |   |   |   |   | 5");
        assert_eq!(lines[16], " 1 | r | n | b | q | k | b | n | r | 1");
    }

    #[test]
    fn board_can_be_rendered_with_figurines() {
        let rendered = format!("{:#}", Board::standard());
        assert!(rendered.contains(" ♖ | ♘ | ♗ | ♕ | ♔ "));
        assert!(rendered.contains(" ♟ | ♟ "));
    }
}
