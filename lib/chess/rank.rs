use crate::chess::InvalidPosition;
use derive_more::Display;
use std::{ops::Sub, str::FromStr};

/// A row on the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Rank {
    #[display(fmt = "1")]
    First,
    #[display(fmt = "2")]
    Second,
    #[display(fmt = "3")]
    Third,
    #[display(fmt = "4")]
    Fourth,
    #[display(fmt = "5")]
    Fifth,
    #[display(fmt = "6")]
    Sixth,
    #[display(fmt = "7")]
    Seventh,
    #[display(fmt = "8")]
    Eighth,
}

impl Rank {
    /// All ranks ordered by [index][`Rank::index`].
    pub const ALL: [Rank; 8] = [
        Rank::First,
        Rank::Second,
        Rank::Third,
        Rank::Fourth,
        Rank::Fifth,
        Rank::Sixth,
        Rank::Seventh,
        Rank::Eighth,
    ];

    /// This rank's index in the range (0..=7), which is also its row.
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Returns an iterator over [`Rank`]s ordered by [index][`Rank::index`].
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        Rank::ALL.into_iter()
    }
}

impl Sub for Rank {
    type Output = i8;

    fn sub(self, rhs: Self) -> Self::Output {
        self.index() as i8 - rhs.index() as i8
    }
}

impl TryFrom<u8> for Rank {
    type Error = InvalidPosition;

    fn try_from(i: u8) -> Result<Self, Self::Error> {
        Rank::ALL.get(i as usize).copied().ok_or(InvalidPosition)
    }
}

impl TryFrom<char> for Rank {
    type Error = InvalidPosition;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '1'..='8' => Rank::try_from(c as u8 - b'1'),
            _ => Err(InvalidPosition),
        }
    }
}

impl From<Rank> for char {
    fn from(r: Rank) -> char {
        (b'1' + r.index()) as char
    }
}

impl FromStr for Rank {
    type Err = InvalidPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.try_into(),
            _ => Err(InvalidPosition),
        }
    }
}
