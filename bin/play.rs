use crate::io::Io;
use lib::chess::{Color, Game, Move, Position, Promotion};
use std::fmt::Display;
use std::io::{self, Read, Write};
use tracing::instrument;

/// Trait for types that know how to play chess.
#[cfg_attr(test, mockall::automock(type Error = String;))]
pub trait Play {
    /// The reason why a move could not be played.
    type Error: Display;

    /// Chooses the next [`Move`] for `side`.
    fn play(&mut self, game: &Game, side: Color) -> Result<Move, Self::Error>;

    /// Chooses what the pawn at `pos` is promoted to.
    fn promote(&mut self, game: &Game, pos: Position) -> Result<Promotion, Self::Error>;

    /// Explains why the last [`Move`] was not accepted.
    fn reject(&mut self, reason: String) -> Result<(), Self::Error>;
}

/// Both players sharing a single terminal.
#[derive(Debug)]
pub struct Terminal<W: Write, R: Read> {
    io: Io<W, R>,
}

impl<W: Write, R: Read> Terminal<W, R> {
    pub fn new(writer: W, reader: R) -> Self {
        Terminal {
            io: Io::new(writer, reader),
        }
    }
}

impl<W: Write, R: Read> Play for Terminal<W, R> {
    type Error = io::Error;

    #[instrument(level = "debug", skip(self, game), ret, err)]
    fn play(&mut self, game: &Game, side: Color) -> Result<Move, Self::Error> {
        self.io.send(format_args!("\n{:#}", game.board))?;
        self.io.prompt(format_args!("{}, your move", game.player(side)))
    }

    #[instrument(level = "debug", skip(self, game), ret, err)]
    fn promote(&mut self, game: &Game, pos: Position) -> Result<Promotion, Self::Error> {
        self.io.send(format_args!("\n{:#}", game.board))?;
        self.io.prompt(format_args!("promote the pawn on {} to", pos))
    }

    #[instrument(level = "debug", skip(self), err)]
    fn reject(&mut self, reason: String) -> Result<(), Self::Error> {
        self.io.send(reason)
    }
}
