use crate::chess::{Board, Piece, Position, Role};
use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::instrument;

/// The kinds of piece a pawn may be promoted to.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Promotion {
    #[display(fmt = "knight")]
    Knight,
    #[display(fmt = "bishop")]
    Bishop,
    #[display(fmt = "rook")]
    Rook,
    #[display(fmt = "queen")]
    Queen,
}

/// The reason why a [`Promotion`] could not be chosen.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected one of `bishop|rook|knight|queen`")]
pub struct InvalidPromotionChoice;

impl FromStr for Promotion {
    type Err = InvalidPromotionChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Role>()
            .map_err(|_| InvalidPromotionChoice)?
            .try_into()
    }
}

impl TryFrom<Role> for Promotion {
    type Error = InvalidPromotionChoice;

    fn try_from(r: Role) -> Result<Self, Self::Error> {
        match r {
            Role::Knight => Ok(Promotion::Knight),
            Role::Bishop => Ok(Promotion::Bishop),
            Role::Rook => Ok(Promotion::Rook),
            Role::Queen => Ok(Promotion::Queen),
            Role::Pawn | Role::King => Err(InvalidPromotionChoice),
        }
    }
}

impl From<Promotion> for Role {
    fn from(p: Promotion) -> Self {
        match p {
            Promotion::Knight => Role::Knight,
            Promotion::Bishop => Role::Bishop,
            Promotion::Rook => Role::Rook,
            Promotion::Queen => Role::Queen,
        }
    }
}

impl Board {
    /// The position of a pawn that reached its last row, if any.
    pub fn promotable_pawn(&self) -> Option<Position> {
        self.iter()
            .find(|(pos, p)| p.role() == Role::Pawn && pos.row() == p.color().promotion_row())
            .map(|(pos, _)| pos)
    }

    /// Whether any pawn reached its last row.
    pub fn pawn_promotable(&self) -> bool {
        self.promotable_pawn().is_some()
    }

    /// Replaces the piece at `pos` by one of the kind chosen, preserving its color.
    ///
    /// Returns the new piece, or `None` if there is no pawn at `pos`.
    #[instrument(level = "debug", skip(self), ret)]
    pub fn promote(&mut self, pos: Position, choice: Promotion) -> Option<Piece> {
        let piece = self.square_mut(pos).piece_mut().filter(|p| p.role() == Role::Pawn)?;
        *piece = Piece::new(choice.into(), piece.color());
        Some(*piece)
    }
}
