use crate::game_repr::checks::{on_pin_axis, pin_direction, Pin, ROOK_DIRECTIONS};
use crate::game_repr::{Move, MoveList, MoveType, Square};

use super::super::position::GameState;

impl GameState {
    pub fn rook_moves_into(&self, sq: Square, pins: &[Pin], moves: &mut MoveList) {
        self.slide_moves_into(sq, &ROOK_DIRECTIONS, pins, moves);
    }

    /// Walks each direction square by square: empty squares are kept, the
    /// first enemy is kept and ends the ray, a friendly piece ends it unkept.
    /// A pinned slider only walks the directions lying on its pin axis.
    pub(crate) fn slide_moves_into(
        &self,
        sq: Square,
        directions: &[(i8, i8)],
        pins: &[Pin],
        moves: &mut MoveList,
    ) {
        let ally = self.piece_at(sq).color;
        let pin = pin_direction(pins, sq);

        for &dir in directions {
            if !on_pin_axis(pin, dir) {
                continue;
            }
            for i in 1..8 {
                let Some(target) = sq.offset(dir.0 * i, dir.1 * i) else {
                    break;
                };
                let occupant = self.piece_at(target);
                if occupant.is_none() {
                    moves.push(Move::new(sq, target, &self.board, MoveType::Normal));
                } else if occupant.is(ally) {
                    break;
                } else {
                    moves.push(Move::new(sq, target, &self.board, MoveType::Normal));
                    break;
                }
            }
        }
    }
}
