use super::*;

// ==================== KIWIPETE PERFT TESTS ====================
// Position 2: castling, en passant and pins all over the board
// FEN: r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -";

#[test]
fn test_perft_kiwipete_depth_1() {
    assert_eq!(perft_fen(KIWIPETE, 1), 48);
}

#[test]
fn test_perft_kiwipete_depth_2() {
    assert_eq!(perft_fen(KIWIPETE, 2), 2039);
}

#[test]
fn test_perft_kiwipete_depth_3() {
    assert_eq!(perft_fen(KIWIPETE, 3), 97862);
}
