use crate::game_repr::checks::Pin;
use crate::game_repr::{MoveList, Square};

use super::super::position::GameState;

impl GameState {
    /// Rook and bishop moves combined; the pin axis restricts both halves.
    pub fn queen_moves_into(&self, sq: Square, pins: &[Pin], moves: &mut MoveList) {
        self.bishop_moves_into(sq, pins, moves);
        self.rook_moves_into(sq, pins, moves);
    }
}
