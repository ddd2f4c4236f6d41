use super::piece::Color;

/// Which castles are still available. Rights only ever narrow during play;
/// undo restores them from the snapshot log kept by the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl Default for CastleRights {
    fn default() -> Self {
        Self::all()
    }
}

impl CastleRights {
    pub const fn all() -> Self {
        Self {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            white_kingside: false,
            white_queenside: false,
            black_kingside: false,
            black_queenside: false,
        }
    }

    pub fn kingside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    pub fn queenside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    pub fn clear_kingside(&mut self, color: Color) {
        match color {
            Color::White => self.white_kingside = false,
            Color::Black => self.black_kingside = false,
        }
    }

    pub fn clear_queenside(&mut self, color: Color) {
        match color {
            Color::White => self.white_queenside = false,
            Color::Black => self.black_queenside = false,
        }
    }

    pub fn clear_both(&mut self, color: Color) {
        self.clear_kingside(color);
        self.clear_queenside(color);
    }

    /// FEN castling field ("KQkq", "-" when nothing is left).
    pub fn to_fen_field(&self) -> String {
        let mut field = String::new();
        if self.white_kingside {
            field.push('K');
        }
        if self.white_queenside {
            field.push('Q');
        }
        if self.black_kingside {
            field.push('k');
        }
        if self.black_queenside {
            field.push('q');
        }
        if field.is_empty() {
            field.push('-');
        }
        field
    }
}
