mod board;
mod check;
mod color;
mod file;
mod game;
mod r#move;
mod movegen;
mod outcome;
mod piece;
mod player;
mod position;
mod promotion;
mod rank;
mod role;
mod square;
mod trial;

pub use board::*;
pub use color::*;
pub use file::*;
pub use game::*;
pub use movegen::*;
pub use outcome::*;
pub use piece::*;
pub use player::*;
pub use position::*;
pub use promotion::*;
pub use r#move::*;
pub use rank::*;
pub use role::*;
pub use square::*;
pub use trial::*;
