use super::load;
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::{Position, Role};
use std::path::PathBuf;
use tracing::{info, instrument};

/// Lists the legal moves of a piece.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Analyze {
    /// Analyze the game saved in this file instead of a new game.
    #[clap(long)]
    load: Option<PathBuf>,

    /// The square of the piece to analyze, e.g. `e2`.
    square: Position,
}

impl Analyze {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut game = load(self.load.as_deref())?;
        let board = &mut game.board;

        println!("{:#}", board);

        let Some(piece) = board.piece_on(self.square) else {
            println!("there is no piece on {}", self.square);
            return Ok(());
        };

        let mut moves = board.legal_moves(self.square);
        moves.sort();

        let moves: Vec<_> = moves.iter().map(|m| m.to_string()).collect();
        println!("{} {} on {}: [{}]", piece.color(), piece.role(), self.square, moves.join(", "));
        info!(%piece, square = %self.square, moves = moves.len());

        if piece.role() == Role::King {
            println!("in check: {}", board.in_check(self.square));
            println!("checkmated: {}", board.checkmated(self.square));
            println!("stalemated: {}", board.stalemated(self.square));
        }

        Ok(())
    }
}
