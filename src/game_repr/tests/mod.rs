use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Square from algebraic coordinates, e.g. `sq("e4")`.
pub fn sq(name: &str) -> Square {
    Square::from_algebraic(name).expect("test squares are valid")
}

/// Empty board with no castling rights. Kings must be placed before generating moves.
pub fn empty_state(to_move: Color) -> GameState {
    GameState::from_parts(
        [[Piece::none(); 8]; 8],
        to_move,
        sq("e1"),
        sq("e8"),
        CastleRights::none(),
        None,
    )
}

/// Places a piece, keeping the king location fields in sync.
pub fn place_piece(state: &mut GameState, at: &str, color: Color, piece_type: Type) {
    let square = sq(at);
    state.set_piece(square, Piece::new(color, piece_type));
    if piece_type == Type::King {
        match color {
            Color::White => state.white_king = square,
            Color::Black => state.black_king = square,
        }
    }
}

pub fn state_from_fen(fen: &str) -> GameState {
    GameState::from_fen(fen).expect("test FEN is valid")
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
    moves.iter().any(|m| m.start == sq(from) && m.end == sq(to))
}

pub fn find_move(moves: &[Move], from: &str, to: &str) -> Move {
    *moves
        .iter()
        .find(|m| m.start == sq(from) && m.end == sq(to))
        .unwrap_or_else(|| panic!("{}{} should be legal", from, to))
}

/// Helper function to count moves of a specific type
pub fn count_move_type(moves: &[Move], move_type: MoveType) -> usize {
    moves.iter().filter(|m| m.move_type() == move_type).count()
}

/// Plays coordinate moves ("e2e4") from the current position, each validated against the legal list.
pub fn play(state: &mut GameState, line: &[&str]) {
    for text in line {
        let moves = state.get_valid_moves();
        let mv = find_move(&moves, &text[0..2], &text[2..4]);
        state.make_move(mv);
    }
}

// ==================== TEST MODULES ====================

mod fen;
mod perft;
