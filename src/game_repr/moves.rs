use std::fmt;
use std::hash::{Hash, Hasher};

use super::piece::{Piece, Type};
use super::position::Board;
use super::square::Square;

/// Special handling a move needs when applied. A move is at most one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveType {
    Normal,
    EnPassant,
    Promotion,
    Castling,
}

/// A single board transition, frozen at construction time.
///
/// `piece_moved` and `piece_captured` are read from the board when the move is
/// built, so a move keeps describing the position it was generated in even
/// after the board changes. For en passant the captured piece is the enemy pawn
/// beside the mover, not the (empty) destination square.
///
/// Equality only looks at the start and end squares: a move typed in by a user
/// compares equal to the generator's flagged move between the same squares, and
/// the promotion piece never takes part in identity (promotion is always to a queen).
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Piece,
    pub piece_captured: Piece,
    move_type: MoveType,
}

impl Move {
    pub fn new(start: Square, end: Square, board: &Board, move_type: MoveType) -> Move {
        let piece_moved = board[start.row as usize][start.col as usize];
        let piece_captured = match move_type {
            MoveType::EnPassant => Piece::new(piece_moved.color.opposite(), Type::Pawn),
            _ => board[end.row as usize][end.col as usize],
        };

        Self {
            start,
            end,
            piece_moved,
            piece_captured,
            move_type,
        }
    }

    /// A move with no special flags, the way a UI builds one from two clicked squares.
    pub fn normal(start: Square, end: Square, board: &Board) -> Move {
        Self::new(start, end, board, MoveType::Normal)
    }

    pub fn move_type(&self) -> MoveType {
        self.move_type
    }

    pub fn is_pawn_promotion(&self) -> bool {
        self.move_type == MoveType::Promotion
    }

    pub fn is_enpassant_move(&self) -> bool {
        self.move_type == MoveType::EnPassant
    }

    pub fn is_castle_move(&self) -> bool {
        self.move_type == MoveType::Castling
    }

    pub fn is_capture_move(&self) -> bool {
        !self.piece_captured.is_none()
    }

    /// Square of the piece removed by this move, which differs from `end` only for en passant.
    pub fn capture_square(&self) -> Square {
        if self.is_enpassant_move() {
            Square::new(self.start.row, self.end.col)
        } else {
            self.end
        }
    }

    /// Coordinate notation, e.g. "e2e4".
    pub fn to_notation_string(&self) -> String {
        format!("{}{}", self.start, self.end)
    }

    /// Simplified SAN for display: no disambiguation and no check markers.
    pub fn to_san_string(&self) -> String {
        if self.is_castle_move() {
            return if self.end.col > self.start.col {
                "O-O".to_string()
            } else {
                "O-O-O".to_string()
            };
        }

        let mut san = String::new();
        match self.piece_moved.piece_type {
            Type::Pawn => {
                if self.is_capture_move() {
                    san.push(self.start.file_char());
                    san.push('x');
                }
                san.push_str(&self.end.to_string());
                if self.is_pawn_promotion() {
                    san.push_str("=Q");
                }
            }
            piece_type => {
                san.push(piece_type.letter());
                if self.is_capture_move() {
                    san.push('x');
                }
                san.push_str(&self.end.to_string());
            }
        }
        san
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)
    }
}
