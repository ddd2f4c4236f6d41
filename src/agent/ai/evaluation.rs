// Position evaluation
// Scores are in pawns from white's point of view (positive = good for white)

use crate::game_repr::{Board, Color, GameState, Type};

/// Score of a finished game. Bigger than any material difference.
pub const CHECKMATE_SCORE: i32 = 1000;
pub const STALEMATE_SCORE: i32 = 0;

/// Material value of a piece type. Kings are never traded, so they count for nothing.
pub fn piece_value(piece_type: Type) -> i32 {
    match piece_type {
        Type::Pawn => 1,
        Type::Knight => 3,
        Type::Bishop => 3,
        Type::Rook => 5,
        Type::Queen => 9,
        Type::King | Type::None => 0,
    }
}

/// Material balance: white pieces add, black pieces subtract.
pub fn score_material(board: &Board) -> i32 {
    board
        .iter()
        .flatten()
        .filter(|piece| !piece.is_none())
        .map(|piece| {
            let value = piece_value(piece.piece_type);
            if piece.is(Color::White) {
                value
            } else {
                -value
            }
        })
        .sum()
}

/// Whole-position score, white positive.
///
/// Reads the checkmate/stalemate flags, so it is only meaningful right after
/// `get_valid_moves` was called on this exact position. A mated side to move
/// means the other side just won.
pub fn score_board(state: &GameState) -> i32 {
    if state.checkmate {
        if state.white_to_move() {
            -CHECKMATE_SCORE
        } else {
            CHECKMATE_SCORE
        }
    } else if state.stalemate {
        STALEMATE_SCORE
    } else {
        score_material(&state.board)
    }
}
