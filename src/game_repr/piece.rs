#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
    None,
}

impl Type {
    /// Upper-case letter used in FEN and SAN. Pawns and empty squares use 'P' and '-'.
    pub fn letter(&self) -> char {
        match self {
            Type::King => 'K',
            Type::Queen => 'Q',
            Type::Rook => 'R',
            Type::Bishop => 'B',
            Type::Knight => 'N',
            Type::Pawn => 'P',
            Type::None => '-',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row delta of a single pawn advance. Row 0 is rank 8, so white moves "up" (-1).
    pub fn forward(&self) -> i8 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    /// Row holding this side's king and rooks at the start of the game.
    pub fn home_row(&self) -> i8 {
        match self {
            Self::White => 7,
            Self::Black => 0,
        }
    }

    pub fn pawn_start_row(&self) -> i8 {
        match self {
            Self::White => 6,
            Self::Black => 1,
        }
    }

    pub fn promotion_row(&self) -> i8 {
        match self {
            Self::White => 0,
            Self::Black => 7,
        }
    }
}

/// A square's occupant. Empty squares hold `Type::None`; their color is meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
}

impl Default for Piece {
    fn default() -> Self {
        Self::none()
    }
}

impl Piece {
    pub const fn new(color: Color, piece_type: Type) -> Self {
        Self { color, piece_type }
    }

    pub const fn none() -> Self {
        Self {
            color: Color::White,
            piece_type: Type::None,
        }
    }

    pub fn is_none(&self) -> bool {
        self.piece_type == Type::None
    }

    /// True only for a real piece of `color`; empty squares never match.
    pub fn is(&self, color: Color) -> bool {
        !self.is_none() && self.color == color
    }

    pub fn is_type(&self, piece_type: Type) -> bool {
        self.piece_type == piece_type
    }

    pub fn from_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece_type = match c.to_ascii_lowercase() {
            'p' => Type::Pawn,
            'n' => Type::Knight,
            'b' => Type::Bishop,
            'r' => Type::Rook,
            'q' => Type::Queen,
            'k' => Type::King,
            _ => return None,
        };
        Some(Self { color, piece_type })
    }

    /// FEN letter: upper case for white, lower case for black, '.' for an empty square.
    pub fn to_char(&self) -> char {
        if self.is_none() {
            return '.';
        }
        let letter = self.piece_type.letter();
        match self.color {
            Color::White => letter,
            Color::Black => letter.to_ascii_lowercase(),
        }
    }
}
