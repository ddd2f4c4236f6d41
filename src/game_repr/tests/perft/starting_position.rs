use super::*;

// ==================== STARTING POSITION PERFT TESTS ====================

#[test]
fn test_perft_starting_position_depth_1() {
    let mut state = GameState::new();
    assert_eq!(state.perft(1), 20);
}

#[test]
fn test_perft_starting_position_depth_2() {
    let mut state = GameState::new();
    assert_eq!(state.perft(2), 400);
}

#[test]
fn test_perft_starting_position_depth_3() {
    let mut state = GameState::new();
    assert_eq!(state.perft(3), 8902);
}

#[test]
fn test_perft_starting_position_depth_4() {
    let mut state = GameState::new();
    assert_eq!(state.perft(4), 197281);
}

#[test]
fn test_perft_leaves_position_unchanged() {
    let mut state = GameState::new();
    state.perft(3);
    assert_eq!(state.to_fen(), GameState::new().to_fen());
    assert!(state.move_log.is_empty());
}

#[test]
fn test_divide_sums_to_perft() {
    let mut state = GameState::new();
    let split = state.divide(2);

    assert_eq!(split.len(), 20);
    assert!(split.iter().all(|(_, count)| *count == 20));
    assert_eq!(split.iter().map(|(_, count)| count).sum::<u64>(), 400);
    assert_eq!(split[0].0, "a2a3");
}
