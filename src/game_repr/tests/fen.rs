use super::*;

// ==================== FEN TESTS ====================

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[test]
fn test_start_position_round_trip() {
    let state = GameState::new();
    assert_eq!(state.to_fen(), START_FEN);

    let parsed = state_from_fen(START_FEN);
    assert_eq!(parsed.board, state.board);
    assert_eq!(parsed.castle_rights, CastleRights::all());
    assert_eq!(parsed.white_king, sq("e1"));
    assert_eq!(parsed.black_king, sq("e8"));
}

#[test]
fn test_fen_tracks_en_passant_and_side() {
    let mut state = GameState::new();
    play(&mut state, &["e2e4"]);

    assert_eq!(
        state.to_fen(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );
}

#[test]
fn test_optional_fields_default() {
    let state = state_from_fen("4k3/8/8/8/8/8/8/4K3 b");
    assert_eq!(state.to_move, Color::Black);
    assert_eq!(state.castle_rights, CastleRights::none());
    assert_eq!(state.enpassant_possible, None);
}

#[test]
fn test_partial_castling_rights() {
    let state = state_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq -");
    assert!(state.castle_rights.white_kingside);
    assert!(!state.castle_rights.white_queenside);
    assert!(!state.castle_rights.black_kingside);
    assert!(state.castle_rights.black_queenside);
    assert_eq!(state.castle_rights.to_fen_field(), "Kq");
}

#[test]
fn test_fen_errors() {
    assert_eq!(
        GameState::from_fen("").unwrap_err(),
        FenError::MissingField("piece placement")
    );
    assert_eq!(
        GameState::from_fen("4k3/8/8/8/8/8/8/4K3").unwrap_err(),
        FenError::MissingField("side to move")
    );
    assert_eq!(
        GameState::from_fen("4k3/8/8/8/8/8/4K3 w").unwrap_err(),
        FenError::BadRankCount(7)
    );
    assert_eq!(
        GameState::from_fen("4k3/8/8/8/8/8/8/4K4 w").unwrap_err(),
        FenError::BadRankLength(7)
    );
    assert_eq!(
        GameState::from_fen("4k3/8/8/8/8/8/8/4X3 w").unwrap_err(),
        FenError::InvalidPiece('X')
    );
    assert_eq!(
        GameState::from_fen("4k3/8/8/8/8/8/8/4K3 x").unwrap_err(),
        FenError::InvalidSideToMove("x".to_string())
    );
    assert_eq!(
        GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w KZ").unwrap_err(),
        FenError::InvalidCastling('Z')
    );
    assert_eq!(
        GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - e9").unwrap_err(),
        FenError::InvalidEnPassant("e9".to_string())
    );
    assert_eq!(
        GameState::from_fen("8/8/8/8/8/8/8/4K3 w").unwrap_err(),
        FenError::MissingKing(Color::Black)
    );
    assert_eq!(
        GameState::from_fen("4k3/8/8/8/8/8/8/3KK3 w").unwrap_err(),
        FenError::DuplicateKing(Color::White)
    );
}

#[test]
fn test_fen_error_messages() {
    let err = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 x").unwrap_err();
    assert_eq!(err.to_string(), "invalid side to move 'x'");
}

#[test]
fn test_en_passant_target_round_trips() {
    let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
    let state = state_from_fen(fen);
    assert_eq!(state.enpassant_possible, Some(sq("e3")));
    assert_eq!(state.to_fen(), fen);

    let state = state_from_fen("4k3/8/8/3Pp3/8/8/8/4K3 w - e6");
    assert_eq!(state.enpassant_possible, Some(sq("e6")));
}

#[test]
fn test_en_passant_target_must_follow_a_double_push() {
    let rejected = [
        // No black pawn behind e6; the white king stands there instead
        "4k3/8/8/3PK3/8/8/8/8 w - e6",
        // Wrong rank for the side to move
        "4k3/8/8/3Pp3/8/8/8/4K3 w - e3",
        "4k3/8/8/8/3pP3/8/8/4K3 b - e6",
        // Target square occupied
        "4k3/8/4n3/3Pp3/8/8/8/4K3 w - e6",
        // Pawn behind the target belongs to the side to move
        "4k3/8/8/3PP3/8/8/8/4K3 w - e6",
    ];
    for fen in rejected {
        let text = fen.rsplit(' ').next().unwrap_or_default().to_string();
        assert_eq!(
            GameState::from_fen(fen).unwrap_err(),
            FenError::InvalidEnPassant(text),
            "{} should be rejected",
            fen
        );
    }
}

#[test]
fn test_zero_skip_is_rejected() {
    assert_eq!(
        GameState::from_fen("4k3/8/8/8/8/8/8/04K3 w").unwrap_err(),
        FenError::BadRankLength(7)
    );
    assert_eq!(
        GameState::from_fen("4k3/8/8/8/8/80/8/4K3 w").unwrap_err(),
        FenError::BadRankLength(5)
    );
}
