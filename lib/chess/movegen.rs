use crate::chess::{Board, Color, Position, Role};
use arrayvec::ArrayVec;

/// The squares a piece may move to.
///
/// A queen in the middle of an empty board reaches 27 squares, no piece reaches more.
pub type Destinations = ArrayVec<Position, 27>;

/// A direction on the board, north being towards the eighth rank.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// The four diagonal directions.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// The four horizontal and vertical directions.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// All eight directions.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The `(rows, columns)` covered by one step in this direction.
    pub fn step(&self) -> (i8, i8) {
        match self {
            Direction::North => (1, 0),
            Direction::NorthEast => (1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (-1, 1),
            Direction::South => (-1, 0),
            Direction::SouthWest => (-1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (1, -1),
        }
    }

    /// The vertical direction in which pawns of a [`Color`] advance.
    pub fn forward(side: Color) -> Self {
        match side {
            Color::Black => Direction::North,
            Color::White => Direction::South,
        }
    }

    /// The two diagonal directions in which pawns of a [`Color`] capture.
    pub fn captures(side: Color) -> [Self; 2] {
        match side {
            Color::Black => [Direction::NorthWest, Direction::NorthEast],
            Color::White => [Direction::SouthWest, Direction::SouthEast],
        }
    }
}

/// The `(rows, columns)` leaps of a knight.
const KNIGHT_LEAPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

impl Board {
    /// The squares the piece at `pos` may move to, if any.
    ///
    /// Board edges, blocking pieces and captures are accounted for, but
    /// moves that would leave the mover's own king in check are not excluded.
    pub fn moves(&self, pos: Position) -> Destinations {
        let mut moves = Destinations::new();

        if let Some(piece) = self.piece_on(pos) {
            match piece.role() {
                Role::Pawn => self.pawn_moves(pos, piece.color(), &mut moves),
                Role::Knight => self.knight_moves(pos, piece.color(), &mut moves),
                Role::Bishop => self.rays(pos, &Direction::DIAGONAL, None, &mut moves),
                Role::Rook => self.rays(pos, &Direction::ORTHOGONAL, None, &mut moves),
                Role::Queen => self.rays(pos, &Direction::ALL, None, &mut moves),
                Role::King => self.rays(pos, &Direction::ALL, Some(1), &mut moves),
            }
        }

        moves
    }

    /// Walks from `pos` along each of `directions`, at most `limit` steps each.
    ///
    /// Each ray ends before an ally or on an enemy. Walking stops once `moves` is full.
    pub(crate) fn rays(
        &self,
        pos: Position,
        directions: &[Direction],
        limit: Option<usize>,
        moves: &mut Destinations,
    ) {
        let Some(side) = self.piece_on(pos).map(|p| p.color()) else {
            return;
        };

        for &direction in directions {
            let (rows, columns) = direction.step();
            let mut next = pos;

            for _ in 0..limit.unwrap_or(usize::MAX) {
                let Some(target) = next.offset(rows, columns) else {
                    break;
                };

                match self.piece_on(target) {
                    None => {
                        if moves.try_push(target).is_err() {
                            return;
                        }
                    }
                    Some(p) if p.color() != side => {
                        if moves.try_push(target).is_err() {
                            return;
                        }

                        break;
                    }
                    Some(_) => break,
                }

                next = target;
            }
        }
    }

    fn knight_moves(&self, pos: Position, side: Color, moves: &mut Destinations) {
        for (rows, columns) in KNIGHT_LEAPS {
            if let Some(target) = pos.offset(rows, columns) {
                if self.piece_on(target).map_or(true, |p| p.color() != side) {
                    moves.push(target);
                }
            }
        }
    }

    fn pawn_moves(&self, pos: Position, side: Color, moves: &mut Destinations) {
        let (rows, columns) = Direction::forward(side).step();
        let limit = if pos.row() == side.pawn_row() { 2 } else { 1 };

        let mut next = pos;
        for _ in 0..limit {
            match next.offset(rows, columns) {
                Some(target) if self.piece_on(target).is_none() => {
                    moves.push(target);
                    next = target;
                }
                _ => break,
            }
        }

        for direction in Direction::captures(side) {
            let (rows, columns) = direction.step();
            if let Some(target) = pos.offset(rows, columns) {
                if self.piece_on(target).is_some_and(|p| p.color() != side) {
                    moves.push(target);
                }
            }
        }
    }
}
