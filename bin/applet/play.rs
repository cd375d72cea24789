use super::load;
use crate::{game::Match, play::Terminal};
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::{Color, Game, Player};
use std::{fs, io, path::PathBuf};
use tracing::{info, instrument, warn};

/// A game of chess between two players sharing the terminal.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// The name of the player with the white pieces.
    #[clap(long)]
    white: Option<String>,

    /// The name of the player with the black pieces.
    #[clap(long)]
    black: Option<String>,

    /// Resume the game saved in this file, white to move.
    #[clap(long)]
    load: Option<PathBuf>,

    /// Save the game to this file after every move.
    #[clap(long)]
    save: Option<PathBuf>,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut game = load(self.load.as_deref())?;

        if let Some(name) = self.white {
            game.white = Player::new(name, Color::White);
        }

        if let Some(name) = self.black {
            game.black = Player::new(name, Color::Black);
        }

        let save = |g: &Game| {
            if let Some(path) = &self.save {
                if let Err(e) = fs::write(path, g.to_string()) {
                    warn!(path = %path.display(), "failed to save the game: {}", e);
                }
            }
        };

        let mut terminal = Match::new(Terminal::new(io::stdout(), io::stdin()));
        let outcome = terminal.play(&mut game, Color::White, save)?;

        println!("\n{:#}", game.board);
        match outcome.winner() {
            Some(side) => println!("{}, {} wins", outcome, game.player(side)),
            None => println!("{}, nobody wins", outcome),
        }

        info!(%outcome);

        Ok(())
    }
}
