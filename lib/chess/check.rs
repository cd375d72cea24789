use crate::chess::{Board, Position};
use tracing::instrument;

impl Board {
    /// Whether the piece at `pos` is attacked by any piece of the opposite color.
    ///
    /// An empty square is never in check.
    pub fn in_check(&self, pos: Position) -> bool {
        let Some(side) = self.piece_on(pos).map(|p| p.color()) else {
            return false;
        };

        self.iter()
            .filter(|(_, p)| p.color() != side)
            .any(|(attacker, _)| self.moves(attacker).contains(&pos))
    }

    /// Whether the king at `pos` is in check and cannot step out of it.
    ///
    /// Only the king's own moves are considered as escapes, blocking the
    /// attack or capturing the attacker with another piece is not.
    #[instrument(level = "debug", skip(self), ret)]
    pub fn checkmated(&mut self, pos: Position) -> bool {
        if !self.in_check(pos) {
            return false;
        }

        !self.moves(pos).into_iter().any(|escape| {
            let trial = self.trial(pos, escape);
            !trial.in_check(escape)
        })
    }

    /// Whether the king at `pos` is not in check, but no allied piece can
    /// move without leaving it in check.
    #[instrument(level = "debug", skip(self), ret)]
    pub fn stalemated(&mut self, pos: Position) -> bool {
        if self.in_check(pos) {
            return false;
        }

        let Some(side) = self.piece_on(pos).map(|p| p.color()) else {
            return false;
        };

        let allies: Vec<_> = self
            .iter()
            .filter(|(_, p)| p.color() == side)
            .map(|(ally, _)| ally)
            .collect();

        !allies.into_iter().any(|ally| {
            self.moves(ally).into_iter().any(|target| {
                let king = if ally == pos { target } else { pos };
                let trial = self.trial(ally, target);
                !trial.in_check(king)
            })
        })
    }
}
