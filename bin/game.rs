use crate::play::Play;
use derive_more::Constructor;
use lib::chess::{Color, Game, Outcome};
use tracing::{field::display, info, instrument, warn, Span};

/// Drives a [`Game`] turn by turn until it is over.
#[derive(Debug, Constructor)]
pub struct Match<P> {
    player: P,
}

impl<P: Play> Match<P> {
    /// Play until one side is checkmated or stalemated, starting with `turn`.
    ///
    /// `moved` is called with the game after every move that was accepted.
    #[instrument(level = "debug", skip(self, game, moved), err,
        fields(white = %game.white, black = %game.black, %turn, outcome))]
    pub fn play(
        &mut self,
        game: &mut Game,
        mut turn: Color,
        mut moved: impl FnMut(&Game),
    ) -> Result<Outcome, P::Error> {
        loop {
            if let Some(o) = game.outcome(turn) {
                Span::current().record("outcome", display(o));
                break Ok(o);
            }

            let m = self.player.play(game, turn)?;

            if game.board.piece_on(m.whence()).map(|p| p.color()) != Some(turn) {
                warn!(%m, "not a {} piece", turn);
                self.player.reject(format!("there is no {} piece on {}", turn, m.whence()))?;
                continue;
            }

            if let Err(e) = game.board.make(m) {
                warn!(%m, "{}", e);
                self.player.reject(e.to_string())?;
                continue;
            }

            if let Some(pos) = game.board.promotable_pawn() {
                let choice = self.player.promote(game, pos)?;
                game.board.promote(pos, choice);
            }

            info!(player = %game.player(turn), %m);
            moved(game);
            turn = !turn;
        }
    }
}
