use std::error::Error;
use std::fmt;

use super::*;

/// Reasons a FEN string was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    MissingField(&'static str),
    InvalidPiece(char),
    BadRankLength(usize),
    BadRankCount(usize),
    InvalidSideToMove(String),
    InvalidCastling(char),
    InvalidEnPassant(String),
    MissingKing(Color),
    DuplicateKing(Color),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::MissingField(field) => write!(f, "FEN is missing the {} field", field),
            FenError::InvalidPiece(c) => write!(f, "invalid piece character '{}'", c),
            FenError::BadRankLength(row) => write!(f, "row {} does not describe 8 squares", row),
            FenError::BadRankCount(n) => write!(f, "expected 8 ranks, found {}", n),
            FenError::InvalidSideToMove(s) => write!(f, "invalid side to move '{}'", s),
            FenError::InvalidCastling(c) => write!(f, "invalid castling character '{}'", c),
            FenError::InvalidEnPassant(s) => write!(f, "invalid en passant square '{}'", s),
            FenError::MissingKing(color) => write!(f, "no {:?} king on the board", color),
            FenError::DuplicateKing(color) => write!(f, "more than one {:?} king on the board", color),
        }
    }
}

impl Error for FenError {}

/// The target must be the empty square a double-pushed enemy pawn just
/// crossed: rank 6 with a black pawn on rank 5 when white moves, rank 3 with a
/// white pawn on rank 4 when black moves.
fn enpassant_target_fits(board: &Board, to_move: Color, target: Square) -> bool {
    let (target_row, pawn_row) = match to_move {
        Color::White => (2, 3),
        Color::Black => (5, 4),
    };
    target.row == target_row
        && board[target.row as usize][target.col as usize].is_none()
        && board[pawn_row][target.col as usize] == Piece::new(to_move.opposite(), Type::Pawn)
}

impl GameState {
    /// Builds a state from FEN. Only the first four fields are read; the move
    /// clocks are accepted and ignored. Missing castling / en passant fields
    /// default to "-".
    pub fn from_fen(fen: &str) -> Result<GameState, FenError> {
        let mut parts = fen.split_whitespace();
        let placement = parts.next().ok_or(FenError::MissingField("piece placement"))?;
        let side = parts.next().ok_or(FenError::MissingField("side to move"))?;
        let castling = parts.next().unwrap_or("-");
        let en_passant = parts.next().unwrap_or("-");

        let mut board = [[Piece::none(); 8]; 8];
        let mut white_king = None;
        let mut black_king = None;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::BadRankCount(ranks.len()));
        }

        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if skip == 0 {
                        return Err(FenError::BadRankLength(row));
                    }
                    col += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece(c))?;
                if col >= 8 {
                    return Err(FenError::BadRankLength(row));
                }
                if piece.is_type(Type::King) {
                    let slot = match piece.color {
                        Color::White => &mut white_king,
                        Color::Black => &mut black_king,
                    };
                    if slot.is_some() {
                        return Err(FenError::DuplicateKing(piece.color));
                    }
                    *slot = Some(Square::new(row as i8, col as i8));
                }
                board[row][col] = piece;
                col += 1;
            }
            if col != 8 {
                return Err(FenError::BadRankLength(row));
            }
        }

        let to_move = match side {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidSideToMove(other.to_string())),
        };

        let mut rights = CastleRights::none();
        if castling != "-" {
            for c in castling.chars() {
                match c {
                    'K' => rights.white_kingside = true,
                    'Q' => rights.white_queenside = true,
                    'k' => rights.black_kingside = true,
                    'q' => rights.black_queenside = true,
                    other => return Err(FenError::InvalidCastling(other)),
                }
            }
        }

        let enpassant_possible = match en_passant {
            "-" => None,
            text => {
                let target = Square::from_algebraic(text)
                    .filter(|&target| enpassant_target_fits(&board, to_move, target))
                    .ok_or_else(|| FenError::InvalidEnPassant(text.to_string()))?;
                Some(target)
            }
        };

        let white_king = white_king.ok_or(FenError::MissingKing(Color::White))?;
        let black_king = black_king.ok_or(FenError::MissingKing(Color::Black))?;

        Ok(GameState::from_parts(
            board,
            to_move,
            white_king,
            black_king,
            rights,
            enpassant_possible,
        ))
    }

    /// Current position as FEN. Move clocks are not tracked and are written as "0 1".
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for (row, rank) in self.board.iter().enumerate() {
            let mut empty_count = 0;
            for piece in rank {
                if piece.is_none() {
                    empty_count += 1;
                    continue;
                }
                if empty_count > 0 {
                    fen.push_str(&empty_count.to_string());
                    empty_count = 0;
                }
                fen.push(piece.to_char());
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }

        let side = if self.white_to_move() { "w" } else { "b" };
        let en_passant = self
            .enpassant_possible
            .map(|sq| sq.to_string())
            .unwrap_or_else(|| "-".to_string());

        format!(
            "{} {} {} {} 0 1",
            fen,
            side,
            self.castle_rights.to_fen_field(),
            en_passant
        )
    }
}
