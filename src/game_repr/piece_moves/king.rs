use crate::game_repr::checks::KING_DIRECTIONS;
use crate::game_repr::{Move, MoveList, MoveType, Square, Type};

use super::super::position::GameState;

impl GameState {
    /// Fully legal king steps (castling is generated separately).
    ///
    /// Each destination is tried by rescanning for checks as if the king stood
    /// there. The scan result is a local value, so the caller's pins and checks
    /// are untouched and the king location never changes.
    pub fn king_moves_into(&self, sq: Square, moves: &mut MoveList) {
        let ally = self.piece_at(sq).color;

        for &(dr, dc) in KING_DIRECTIONS.iter() {
            let Some(target) = sq.offset(dr, dc) else {
                continue;
            };
            if self.piece_at(target).is(ally) {
                continue;
            }
            if !self.scan_pins_and_checks(target, ally).in_check {
                moves.push(Move::new(sq, target, &self.board, MoveType::Normal));
            }
        }
    }

    /// Castling moves for the king on `sq`. Call only when that king is not in check.
    pub fn castle_moves_into(&self, sq: Square, moves: &mut MoveList) {
        let ally = self.piece_at(sq).color;
        let enemy = ally.opposite();
        let row = ally.home_row();

        if sq != Square::new(row, 4) || self.square_under_attack(sq, enemy) {
            return;
        }

        let empty = |col: i8| self.piece_at(Square::new(row, col)).is_none();
        let safe = |col: i8| !self.square_under_attack(Square::new(row, col), enemy);
        let rook_home = |col: i8| {
            let rook = self.piece_at(Square::new(row, col));
            rook.is(ally) && rook.is_type(Type::Rook)
        };

        if self.castle_rights.kingside(ally) && rook_home(7) && empty(5) && empty(6) && safe(5) && safe(6) {
            moves.push(Move::new(sq, Square::new(row, 6), &self.board, MoveType::Castling));
        }

        // b-file must be empty but may be attacked: only the rook crosses it
        if self.castle_rights.queenside(ally)
            && rook_home(0)
            && empty(1)
            && empty(2)
            && empty(3)
            && safe(2)
            && safe(3)
        {
            moves.push(Move::new(sq, Square::new(row, 2), &self.board, MoveType::Castling));
        }
    }
}
