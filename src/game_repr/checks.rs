use super::*;

/// Orthogonal rays first, then diagonals. The split matters when deciding
/// which enemy sliders attack along a ray.
pub(crate) const KING_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// A friendly piece standing between its king and an enemy slider.
/// `dir_row`/`dir_col` point from the king towards the pinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    pub dir_row: i8,
    pub dir_col: i8,
}

/// An enemy piece attacking the king. For sliders and adjacent pieces the
/// direction is the ray from king to attacker; for knights it is the knight offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub square: Square,
    pub dir_row: i8,
    pub dir_col: i8,
}

/// Result of one pin/check scan. Built fresh on every call and owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinsAndChecks {
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

impl PinsAndChecks {
    pub fn pin_direction(&self, sq: Square) -> Option<(i8, i8)> {
        pin_direction(&self.pins, sq)
    }
}

pub(crate) fn pin_direction(pins: &[Pin], sq: Square) -> Option<(i8, i8)> {
    pins.iter()
        .find(|pin| pin.square == sq)
        .map(|pin| (pin.dir_row, pin.dir_col))
}

/// Whether a piece pinned along `pin` may step in direction `dir`.
/// Unpinned pieces may go anywhere; pinned ones only along the pin axis, both ways.
pub(crate) fn on_pin_axis(pin: Option<(i8, i8)>, dir: (i8, i8)) -> bool {
    match pin {
        None => true,
        Some(p) => p == dir || p == (-dir.0, -dir.1),
    }
}

impl GameState {
    /// Scans from the side-to-move's king for checks and pins.
    pub fn check_for_pins_and_checks(&self) -> PinsAndChecks {
        let ally = self.to_move;
        self.scan_pins_and_checks(self.king_square(ally), ally)
    }

    /// Same scan as if `ally`'s king stood on `from`. The real king square is
    /// treated as empty, so this also answers "would the king be safe there".
    pub(crate) fn scan_pins_and_checks(&self, from: Square, ally: Color) -> PinsAndChecks {
        let enemy = ally.opposite();
        let mut result = PinsAndChecks::default();

        for (j, &(dr, dc)) in KING_DIRECTIONS.iter().enumerate() {
            let orthogonal = j < 4;
            let mut possible_pin: Option<Pin> = None;

            for i in 1..8 {
                let Some(sq) = from.offset(dr * i, dc * i) else {
                    break;
                };
                let piece = self.piece_at(sq);

                if piece.is(ally) {
                    if piece.is_type(Type::King) {
                        continue;
                    }
                    if possible_pin.is_some() {
                        // Second friendly piece: nothing can pin or check through it
                        break;
                    }
                    possible_pin = Some(Pin {
                        square: sq,
                        dir_row: dr,
                        dir_col: dc,
                    });
                } else if piece.is(enemy) {
                    let attacks = match piece.piece_type {
                        Type::Rook => orthogonal,
                        Type::Bishop => !orthogonal,
                        Type::Queen => true,
                        // Enemy pawns capture towards us, so they sit against their own forward direction
                        Type::Pawn => i == 1 && !orthogonal && dr == -enemy.forward(),
                        // Keeps the two kings from standing next to each other
                        Type::King => i == 1,
                        Type::Knight | Type::None => false,
                    };

                    if attacks {
                        match possible_pin {
                            None => {
                                result.in_check = true;
                                result.checks.push(Check {
                                    square: sq,
                                    dir_row: dr,
                                    dir_col: dc,
                                });
                            }
                            Some(pin) => result.pins.push(pin),
                        }
                    }
                    break;
                }
            }
        }

        for &(dr, dc) in KNIGHT_OFFSETS.iter() {
            let Some(sq) = from.offset(dr, dc) else {
                continue;
            };
            let piece = self.piece_at(sq);
            if piece.is(enemy) && piece.is_type(Type::Knight) {
                result.in_check = true;
                result.checks.push(Check {
                    square: sq,
                    dir_row: dr,
                    dir_col: dc,
                });
            }
        }

        result
    }

    /// True if `by` attacks `sq` in the current position.
    pub fn square_under_attack(&self, sq: Square, by: Color) -> bool {
        self.scan_pins_and_checks(sq, by.opposite()).in_check
    }
}
