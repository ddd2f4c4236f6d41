use super::*;

// ==================== SYMMETRICAL MIDDLE GAME PERFT TESTS ====================
// Position 6: pinned minor pieces on both sides
// FEN: r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10

const SYMMETRICAL: &str = "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10";

#[test]
fn test_perft_symmetrical_depth_1() {
    assert_eq!(perft_fen(SYMMETRICAL, 1), 46);
}

#[test]
fn test_perft_symmetrical_depth_2() {
    assert_eq!(perft_fen(SYMMETRICAL, 2), 2079);
}

#[test]
fn test_perft_symmetrical_depth_3() {
    assert_eq!(perft_fen(SYMMETRICAL, 3), 89890);
}
