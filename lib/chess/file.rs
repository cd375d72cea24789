use crate::chess::InvalidPosition;
use derive_more::Display;
use std::{ops::Sub, str::FromStr};

/// A column on the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum File {
    #[display(fmt = "a")]
    A,
    #[display(fmt = "b")]
    B,
    #[display(fmt = "c")]
    C,
    #[display(fmt = "d")]
    D,
    #[display(fmt = "e")]
    E,
    #[display(fmt = "f")]
    F,
    #[display(fmt = "g")]
    G,
    #[display(fmt = "h")]
    H,
}

impl File {
    /// All files ordered by [index][`File::index`].
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// This file's index in the range (0..=7), which is also its column.
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Returns an iterator over [`File`]s ordered by [index][`File::index`].
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        File::ALL.into_iter()
    }
}

impl Sub for File {
    type Output = i8;

    fn sub(self, rhs: Self) -> Self::Output {
        self.index() as i8 - rhs.index() as i8
    }
}

impl TryFrom<u8> for File {
    type Error = InvalidPosition;

    fn try_from(i: u8) -> Result<Self, Self::Error> {
        File::ALL.get(i as usize).copied().ok_or(InvalidPosition)
    }
}

/// Accepts letters in the range `('a'..='h')` regardless of case.
impl TryFrom<char> for File {
    type Error = InvalidPosition;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            c @ 'a'..='h' => File::try_from(c as u8 - b'a'),
            _ => Err(InvalidPosition),
        }
    }
}

impl From<File> for char {
    fn from(f: File) -> char {
        (b'a' + f.index()) as char
    }
}

impl FromStr for File {
    type Err = InvalidPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.try_into(),
            _ => Err(InvalidPosition),
        }
    }
}
