use crate::game_repr::checks::{Pin, BISHOP_DIRECTIONS};
use crate::game_repr::{MoveList, Square};

use super::super::position::GameState;

impl GameState {
    pub fn bishop_moves_into(&self, sq: Square, pins: &[Pin], moves: &mut MoveList) {
        self.slide_moves_into(sq, &BISHOP_DIRECTIONS, pins, moves);
    }
}
