use crate::chess::{File, Rank};
use derive_more::{Display, Error};
use std::{fmt, str::FromStr};

/// A coordinate on the chess board.
///
/// The row is the [`Rank`] index and the column is the [`File`] index, so
/// `a1` is `(0, 0)` and `h8` is `(7, 7)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Position {
    rank: Rank,
    file: File,
}

/// The reason why a [`Position`] could not be constructed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "invalid position, expected `[a-h][1-8]` or a row and column in `(0..=7)`")]
pub struct InvalidPosition;

impl Position {
    /// Constructs [`Position`] from a pair of row and column indices.
    pub fn new(row: u8, column: u8) -> Result<Self, InvalidPosition> {
        Ok(Position::from_notation(column.try_into()?, row.try_into()?))
    }

    /// Constructs [`Position`] from a pair of [`File`] and [`Rank`].
    pub fn from_notation(file: File, rank: Rank) -> Self {
        Position { rank, file }
    }

    /// This position's row in the range (0..=7).
    pub fn row(&self) -> u8 {
        self.rank.index()
    }

    /// This position's column in the range (0..=7).
    pub fn column(&self) -> u8 {
        self.file.index()
    }

    /// This position's [`File`].
    pub fn file(&self) -> File {
        self.file
    }

    /// This position's [`Rank`].
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// The position `rows` and `columns` away from this one, if still on the board.
    pub fn offset(&self, rows: i8, columns: i8) -> Option<Self> {
        let row = u8::try_from((self.row() as i8).checked_add(rows)?).ok()?;
        let column = u8::try_from((self.column() as i8).checked_add(columns)?).ok()?;
        Position::new(row, column).ok()
    }

    /// Returns an iterator over all 64 positions in row-major order.
    pub fn iter() -> impl Iterator<Item = Self> {
        Rank::iter().flat_map(|r| File::iter().map(move |f| Position::from_notation(f, r)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.file, f)?;
        fmt::Display::fmt(&self.rank, f)?;
        Ok(())
    }
}

impl FromStr for Position {
    type Err = InvalidPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => Ok(Position::from_notation(f.try_into()?, r.try_into()?)),
            _ => Err(InvalidPosition),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn new_constructs_position_from_row_and_column(p: Position) {
        assert_eq!(Position::new(p.row(), p.column()), Ok(p));
    }

    #[proptest]
    fn new_fails_if_row_out_of_range(#[strategy(8u8..)] row: u8, #[strategy(0u8..8)] column: u8) {
        assert_eq!(Position::new(row, column), Err(InvalidPosition));
    }

    #[proptest]
    fn new_fails_if_column_out_of_range(#[strategy(0u8..8)] row: u8, #[strategy(8u8..)] column: u8) {
        assert_eq!(Position::new(row, column), Err(InvalidPosition));
    }

    #[test]
    fn rank_one_maps_to_row_zero() {
        assert_eq!("a1".parse(), Position::new(0, 0));
        assert_eq!("d4".parse(), Position::new(3, 3));
        assert_eq!("g8".parse(), Position::new(7, 6));
        assert_eq!("c5".parse(), Position::new(4, 2));
    }

    #[proptest]
    fn parsing_printed_position_is_an_identity(p: Position) {
        assert_eq!(p.to_string().parse(), Ok(p));
    }

    #[proptest]
    fn parsing_position_ignores_case_of_file(p: Position) {
        assert_eq!(p.to_string().to_uppercase().parse(), Ok(p));
    }

    #[proptest]
    fn parsing_position_matches_notation_pattern(#[strategy("[a-hA-H][1-8]")] s: String) {
        let p: Position = s.parse()?;
        assert_eq!(p.to_string(), s.to_lowercase());
    }

    #[proptest]
    fn parsing_position_fails_if_file_invalid(
        #[filter(!('a'..='h').contains(&#c.to_ascii_lowercase()))] c: char,
        r: Rank,
    ) {
        assert_eq!(
            [c.to_string(), r.to_string()].concat().parse::<Position>(),
            Err(InvalidPosition)
        );
    }

    #[proptest]
    fn parsing_position_fails_if_rank_invalid(f: File, #[filter(!('1'..='8').contains(&#c))] c: char) {
        assert_eq!(
            [f.to_string(), c.to_string()].concat().parse::<Position>(),
            Err(InvalidPosition)
        );
    }

    #[proptest]
    fn parsing_position_fails_if_length_not_two(#[filter(#s.chars().count() != 2)] s: String) {
        assert_eq!(s.parse::<Position>(), Err(InvalidPosition));
    }

    #[proptest]
    fn offset_moves_by_rows_and_columns(p: Position, rows: i8, columns: i8) {
        let row = p.row() as i16 + rows as i16;
        let column = p.column() as i16 + columns as i16;

        match p.offset(rows, columns) {
            Some(q) => assert_eq!((q.row() as i16, q.column() as i16), (row, column)),
            None => assert!(!(0..8).contains(&row) || !(0..8).contains(&column)),
        }
    }

    #[test]
    fn offset_is_none_far_off_the_board() {
        let h8 = Position::from_notation(File::H, Rank::Eighth);
        let a1 = Position::from_notation(File::A, Rank::First);
        assert_eq!(h8.offset(i8::MAX, 0), None);
        assert_eq!(h8.offset(0, i8::MAX), None);
        assert_eq!(a1.offset(i8::MIN, i8::MIN), None);
        assert_eq!(h8.offset(-7, -7), Some(a1));
    }

    #[test]
    fn iter_visits_every_position_once() {
        let all: Vec<_> = Position::iter().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all.first(), Some(&Position::from_notation(File::A, Rank::First)));
        assert_eq!(all.last(), Some(&Position::from_notation(File::H, Rank::Eighth)));
    }
}
