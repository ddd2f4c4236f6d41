use std::fmt;

/// Board coordinate. Row 0 is rank 8 (black's back rank), row 7 is rank 1; col 0 is file a.
///
/// Coordinates outside 0..8 are a caller error; use [`Square::offset`] when stepping
/// across the board so that edges are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(row: i8, col: i8) -> bool {
        (0..8).contains(&row) && (0..8).contains(&col)
    }

    /// Square `steps` away along `(dr, dc)`, or `None` when that falls off the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row + dr;
        let col = self.col + dc;
        Square::is_on_board(row, col).then_some(Square { row, col })
    }

    pub fn file_char(self) -> char {
        (b'a' + self.col as u8) as char
    }

    pub fn rank_char(self) -> char {
        (b'8' - self.row as u8) as char
    }

    /// Parses "e4" style coordinates.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() || !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }
        Some(Square {
            row: (b'8' - rank as u8) as i8,
            col: (file as u8 - b'a') as i8,
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}
