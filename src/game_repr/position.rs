use super::*;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND MAKE/UNDO
 */

/// 8x8 grid indexed `[row][col]`; row 0 is rank 8.
pub type Board = [[Piece; 8]; 8];

const BACK_RANK: [Type; 8] = [
    Type::Rook,
    Type::Knight,
    Type::Bishop,
    Type::Queen,
    Type::King,
    Type::Bishop,
    Type::Knight,
    Type::Rook,
];

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub to_move: Color,
    pub white_king: Square,
    pub black_king: Square,
    pub castle_rights: CastleRights,
    pub enpassant_possible: Option<Square>,
    pub move_log: Vec<Move>,
    /// One entry per applied move plus the initial value; the last entry is current.
    pub(crate) enpassant_log: Vec<Option<Square>>,
    pub(crate) castle_rights_log: Vec<CastleRights>,

    // Outputs of the last `get_valid_moves` call. Not meaningful across other calls.
    pub in_check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard starting position, white to move.
    pub fn new() -> GameState {
        let mut board = [[Piece::none(); 8]; 8];
        for (col, &piece_type) in BACK_RANK.iter().enumerate() {
            board[0][col] = Piece::new(Color::Black, piece_type);
            board[1][col] = Piece::new(Color::Black, Type::Pawn);
            board[6][col] = Piece::new(Color::White, Type::Pawn);
            board[7][col] = Piece::new(Color::White, piece_type);
        }

        Self::from_parts(
            board,
            Color::White,
            Square::new(7, 4),
            Square::new(0, 4),
            CastleRights::all(),
            None,
        )
    }

    pub(crate) fn from_parts(
        board: Board,
        to_move: Color,
        white_king: Square,
        black_king: Square,
        castle_rights: CastleRights,
        enpassant_possible: Option<Square>,
    ) -> GameState {
        Self {
            board,
            to_move,
            white_king,
            black_king,
            castle_rights,
            enpassant_possible,
            move_log: Vec::new(),
            enpassant_log: vec![enpassant_possible],
            castle_rights_log: vec![castle_rights],
            in_check: false,
            checkmate: false,
            stalemate: false,
            pins: Vec::new(),
            checks: Vec::new(),
        }
    }

    pub fn white_to_move(&self) -> bool {
        self.to_move == Color::White
    }

    pub fn piece_at(&self, sq: Square) -> Piece {
        self.board[sq.row as usize][sq.col as usize]
    }

    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.board[sq.row as usize][sq.col as usize] = piece;
    }

    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    fn set_king_square(&mut self, color: Color, sq: Square) {
        match color {
            Color::White => self.white_king = sq,
            Color::Black => self.black_king = sq,
        }
    }

    /// Applies `mv` in place. The move must come from `get_valid_moves` (or be
    /// equal to one of them) for the resulting position to be legal.
    pub fn make_move(&mut self, mv: Move) {
        let mover = mv.piece_moved.color;

        self.set_piece(mv.start, Piece::none());
        self.set_piece(mv.end, mv.piece_moved);
        self.move_log.push(mv);
        self.to_move = self.to_move.opposite();

        if mv.piece_moved.is_type(Type::King) {
            self.set_king_square(mover, mv.end);
        }

        // A double pawn push leaves the jumped-over square open for en passant
        self.enpassant_possible =
            if mv.piece_moved.is_type(Type::Pawn) && (mv.start.row - mv.end.row).abs() == 2 {
                Some(Square::new((mv.start.row + mv.end.row) / 2, mv.start.col))
            } else {
                None
            };

        match mv.move_type() {
            MoveType::EnPassant => {
                self.set_piece(mv.capture_square(), Piece::none());
            }
            MoveType::Promotion => {
                self.set_piece(mv.end, Piece::new(mover, Type::Queen));
            }
            MoveType::Castling => {
                let (rook_from, rook_to) = castle_rook_squares(mv);
                let rook = self.piece_at(rook_from);
                self.set_piece(rook_to, rook);
                self.set_piece(rook_from, Piece::none());
            }
            MoveType::Normal => {}
        }

        self.update_castle_rights(&mv);

        self.enpassant_log.push(self.enpassant_possible);
        self.castle_rights_log.push(self.castle_rights);
    }

    /// Reverts the last applied move. Does nothing when no move has been made.
    ///
    /// Checkmate and stalemate flags are cleared; call `get_valid_moves` again
    /// to recompute them.
    pub fn undo_move(&mut self) {
        let Some(mv) = self.move_log.pop() else {
            return;
        };
        let mover = mv.piece_moved.color;

        self.set_piece(mv.start, mv.piece_moved);
        self.set_piece(mv.end, mv.piece_captured);
        self.to_move = self.to_move.opposite();

        if mv.piece_moved.is_type(Type::King) {
            self.set_king_square(mover, mv.start);
        }

        match mv.move_type() {
            MoveType::EnPassant => {
                // Landing square was empty; the victim sat beside the mover
                self.set_piece(mv.end, Piece::none());
                self.set_piece(mv.capture_square(), mv.piece_captured);
            }
            MoveType::Castling => {
                let (rook_from, rook_to) = castle_rook_squares(mv);
                let rook = self.piece_at(rook_to);
                self.set_piece(rook_from, rook);
                self.set_piece(rook_to, Piece::none());
            }
            MoveType::Promotion | MoveType::Normal => {}
        }

        self.enpassant_log.pop();
        self.enpassant_possible = self.enpassant_log.last().copied().flatten();

        self.castle_rights_log.pop();
        if let Some(&rights) = self.castle_rights_log.last() {
            self.castle_rights = rights;
        }

        self.checkmate = false;
        self.stalemate = false;
    }

    /// Narrows castling rights after `mv`: capturing a rook on its corner, moving
    /// the king, or moving a rook off its corner each clear the matching right.
    pub fn update_castle_rights(&mut self, mv: &Move) {
        let captured = mv.piece_captured;
        if captured.is_type(Type::Rook) {
            self.clear_corner_right(captured.color, mv.end);
        }

        let moved = mv.piece_moved;
        match moved.piece_type {
            Type::King => self.castle_rights.clear_both(moved.color),
            Type::Rook => self.clear_corner_right(moved.color, mv.start),
            _ => {}
        }
    }

    fn clear_corner_right(&mut self, color: Color, sq: Square) {
        if sq.row != color.home_row() {
            return;
        }
        match sq.col {
            0 => self.castle_rights.clear_queenside(color),
            7 => self.castle_rights.clear_kingside(color),
            _ => {}
        }
    }
}

/// Rook origin and destination for a castling king move.
fn castle_rook_squares(mv: Move) -> (Square, Square) {
    let row = mv.end.row;
    if mv.end.col > mv.start.col {
        (Square::new(row, 7), Square::new(row, mv.end.col - 1))
    } else {
        (Square::new(row, 0), Square::new(row, mv.end.col + 1))
    }
}
