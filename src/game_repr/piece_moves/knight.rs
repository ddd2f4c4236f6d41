use crate::game_repr::checks::{pin_direction, Pin, KNIGHT_OFFSETS};
use crate::game_repr::{Move, MoveList, MoveType, Square};

use super::super::position::GameState;

impl GameState {
    /// Knight moves from `sq`. A pinned knight can never stay on its pin line.
    pub fn knight_moves_into(&self, sq: Square, pins: &[Pin], moves: &mut MoveList) {
        if pin_direction(pins, sq).is_some() {
            return;
        }

        let ally = self.piece_at(sq).color;
        for &(dr, dc) in KNIGHT_OFFSETS.iter() {
            let Some(target) = sq.offset(dr, dc) else {
                continue;
            };
            // Empty or enemy
            if !self.piece_at(target).is(ally) {
                moves.push(Move::new(sq, target, &self.board, MoveType::Normal));
            }
        }
    }
}
