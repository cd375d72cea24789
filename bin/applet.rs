use anyhow::{Context, Error as Anyhow};
use clap::Subcommand;
use derive_more::From;
use lib::chess::Game;
use std::{fs, path::Path};

mod analyze;
mod play;

#[derive(Debug, From, Subcommand)]
pub enum Applet {
    Play(play::Play),
    Analyze(analyze::Analyze),
}

impl Default for Applet {
    fn default() -> Self {
        play::Play::default().into()
    }
}

impl Applet {
    pub fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Play(a) => Ok(a.execute()?),
            Applet::Analyze(a) => Ok(a.execute()?),
        }
    }
}

/// Reads the [`Game`] saved at `path`, or starts a new one.
fn load(path: Option<&Path>) -> Result<Game, Anyhow> {
    let Some(path) = path else {
        return Ok(Game::default());
    };

    let doc = fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;

    doc.parse::<Game>()
        .with_context(|| format!("failed to load the game from `{}`", path.display()))
}
