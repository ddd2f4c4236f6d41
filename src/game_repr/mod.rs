mod castling;
mod checks;
mod fen;
mod legal;
mod moves;
mod piece;
mod piece_moves;
mod position;
mod square;

#[cfg(test)]
mod tests;

pub use castling::*;
pub use checks::{Check, Pin, PinsAndChecks};
pub use fen::*;
pub use legal::*;
pub use moves::*;
pub use piece::*;
pub use position::*;
pub use square::*;
