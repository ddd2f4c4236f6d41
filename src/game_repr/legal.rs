use smallvec::SmallVec;

use super::*;

/// Move buffer used by the generator. Spills to the heap past 64 moves.
pub type MoveList = SmallVec<[Move; 64]>;

impl GameState {
    /// Pseudo-legal moves for the side to move, already honouring `pins`.
    /// King steps are fully legal; castling is not included.
    pub fn all_possible_moves(&self, pins: &[Pin]) -> MoveList {
        let mut moves = MoveList::new();

        for row in 0..8i8 {
            for col in 0..8i8 {
                let sq = Square::new(row, col);
                let piece = self.piece_at(sq);
                if !piece.is(self.to_move) {
                    continue;
                }
                match piece.piece_type {
                    Type::Pawn => self.pawn_moves_into(sq, pins, &mut moves),
                    Type::Knight => self.knight_moves_into(sq, pins, &mut moves),
                    Type::Bishop => self.bishop_moves_into(sq, pins, &mut moves),
                    Type::Rook => self.rook_moves_into(sq, pins, &mut moves),
                    Type::Queen => self.queen_moves_into(sq, pins, &mut moves),
                    Type::King => self.king_moves_into(sq, &mut moves),
                    Type::None => {}
                }
            }
        }

        moves
    }

    /// Every legal move for the side to move.
    ///
    /// Also refreshes `in_check`, `pins`, `checks`, `checkmate` and `stalemate`;
    /// those fields describe this position only until the state changes again.
    pub fn get_valid_moves(&mut self) -> MoveList {
        let scan = self.check_for_pins_and_checks();
        let king = self.king_square(self.to_move);

        let moves = if scan.in_check {
            if scan.checks.len() == 1 {
                let mut moves = self.all_possible_moves(&scan.pins);
                let check = scan.checks[0];
                let rescue = self.rescue_squares(king, check);

                moves.retain(|mv| {
                    mv.piece_moved.is_type(Type::King)
                        || rescue.contains(&mv.end)
                        // Taking the checking pawn en passant lands beside it, not on it
                        || (mv.is_enpassant_move() && mv.capture_square() == check.square)
                });
                moves
            } else {
                // Double check: only the king can do anything about it
                let mut moves = MoveList::new();
                self.king_moves_into(king, &mut moves);
                moves
            }
        } else {
            let mut moves = self.all_possible_moves(&scan.pins);
            self.castle_moves_into(king, &mut moves);
            moves
        };

        self.in_check = scan.in_check;
        self.pins = scan.pins;
        self.checks = scan.checks;
        self.checkmate = moves.is_empty() && self.in_check;
        self.stalemate = moves.is_empty() && !self.in_check;

        moves
    }

    /// Squares a non-king move may land on to answer a single check: the
    /// checker's own square for a knight, otherwise the ray from the king up to
    /// and including the checker.
    fn rescue_squares(&self, king: Square, check: Check) -> SmallVec<[Square; 8]> {
        let mut squares = SmallVec::new();
        if self.piece_at(check.square).is_type(Type::Knight) {
            squares.push(check.square);
            return squares;
        }

        for i in 1..8 {
            let Some(sq) = king.offset(check.dir_row * i, check.dir_col * i) else {
                break;
            };
            squares.push(sq);
            if sq == check.square {
                break;
            }
        }
        squares
    }

    /// Perft (Performance Test) - counts leaf nodes at a given depth.
    /// Used to validate move generation correctness.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.get_valid_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.undo_move();
        }
        nodes
    }

    /// Perft split by root move, sorted by coordinate notation. Debugging aid.
    pub fn divide(&mut self, depth: u32) -> Vec<(String, u64)> {
        let moves = self.get_valid_moves();
        let mut counts: Vec<(String, u64)> = moves
            .into_iter()
            .map(|mv| {
                self.make_move(mv);
                let count = self.perft(depth.saturating_sub(1));
                self.undo_move();
                (mv.to_notation_string(), count)
            })
            .collect();
        counts.sort();
        counts
    }
}
