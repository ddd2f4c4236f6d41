use crate::game_repr::checks::{on_pin_axis, pin_direction, Pin};
use crate::game_repr::{Move, MoveList, MoveType, Square, Type};

use super::super::position::GameState;

impl GameState {
    pub fn pawn_moves_into(&self, sq: Square, pins: &[Pin], moves: &mut MoveList) {
        let pawn = self.piece_at(sq);
        let color = pawn.color;
        let enemy = color.opposite();
        let forward = color.forward();
        let pin = pin_direction(pins, sq);

        let kind_for = |target: Square| {
            if target.row == color.promotion_row() {
                MoveType::Promotion
            } else {
                MoveType::Normal
            }
        };

        // Advances
        if let Some(one) = sq.offset(forward, 0) {
            if self.piece_at(one).is_none() && on_pin_axis(pin, (forward, 0)) {
                moves.push(Move::new(sq, one, &self.board, kind_for(one)));

                if sq.row == color.pawn_start_row() {
                    if let Some(two) = sq.offset(2 * forward, 0) {
                        if self.piece_at(two).is_none() {
                            moves.push(Move::new(sq, two, &self.board, MoveType::Normal));
                        }
                    }
                }
            }
        }

        // Captures, including en passant
        for dc in [-1, 1] {
            let Some(target) = sq.offset(forward, dc) else {
                continue;
            };
            if !on_pin_axis(pin, (forward, dc)) {
                continue;
            }

            if self.piece_at(target).is(enemy) {
                moves.push(Move::new(sq, target, &self.board, kind_for(target)));
            } else if self.enpassant_possible == Some(target)
                && !self.enpassant_exposes_king(sq, target)
            {
                moves.push(Move::new(sq, target, &self.board, MoveType::EnPassant));
            }
        }
    }

    /// En passant empties two squares on the capturing pawn's rank at once,
    /// which the pin scan cannot see. Look along that rank from the king: if
    /// nothing stands between the king and the two pawns, and the first piece
    /// beyond them is an enemy rook or queen, the capture would expose the king.
    pub(crate) fn enpassant_exposes_king(&self, sq: Square, target: Square) -> bool {
        let ally = self.piece_at(sq).color;
        let king = self.king_square(ally);
        if king.row != sq.row {
            return false;
        }

        let near = sq.col.min(target.col);
        let far = sq.col.max(target.col);

        // (squares between king and the pawns, squares beyond the pawns walking away from the king)
        let (inside, outside): (Vec<i8>, Vec<i8>) = if king.col < near {
            ((king.col + 1..near).collect(), (far + 1..8).collect())
        } else if king.col > far {
            ((far + 1..king.col).collect(), (0..near).rev().collect())
        } else {
            return false;
        };

        let row = sq.row;
        if inside
            .iter()
            .any(|&col| !self.piece_at(Square::new(row, col)).is_none())
        {
            return false;
        }

        for col in outside {
            let piece = self.piece_at(Square::new(row, col));
            if piece.is_none() {
                continue;
            }
            return piece.is(ally.opposite())
                && (piece.is_type(Type::Rook) || piece.is_type(Type::Queen));
        }
        false
    }
}
