// Negamax Search with Alpha-Beta Pruning
//
// Negamax exploits the zero-sum property of chess: max(a, b) = -min(-a, -b).
// One function serves both sides; each ply negates the child's score and
// swaps/negates the alpha-beta window.
//
// The search is plain fixed depth: no move ordering, no transposition table,
// no quiescence. Every node below the root calls `get_valid_moves` once, which
// also refreshes the checkmate/stalemate flags `score_board` reads at the leaves.

use log::debug;

use super::evaluation::{score_board, CHECKMATE_SCORE};
use crate::game_repr::{GameState, Move};

/// Worse than any reachable score, so the first move searched always becomes the best so far
pub const MIN_SCORE: i32 = -CHECKMATE_SCORE - 1;

/// Better than any reachable score
pub const MAX_SCORE: i32 = CHECKMATE_SCORE + 1;

/// Outcome of a root search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Score from the perspective of the side to move at the root
    pub score: i32,
    /// Nodes visited, root included
    pub nodes: u64,
}

/// Negamax search with alpha-beta pruning
///
/// # Arguments
///
/// * `state` - Position to search; every move made here is undone before returning
/// * `valid_moves` - Legal moves in `state`, searched in the order given
/// * `depth` - Remaining plies
/// * `alpha`, `beta` - Search window
/// * `turn_multiplier` - 1 when white is to move in `state`, -1 for black
/// * `nodes` - Node counter, incremented once per call
///
/// # Returns
///
/// (score, best_move) - Score from the perspective of the side to move.
/// Ties keep the move searched first.
pub fn negamax(
    state: &mut GameState,
    valid_moves: &[Move],
    depth: u32,
    mut alpha: i32,
    beta: i32,
    turn_multiplier: i32,
    nodes: &mut u64,
) -> (i32, Option<Move>) {
    *nodes += 1;

    // A node without replies is mate or stalemate whatever the remaining depth
    if depth == 0 || valid_moves.is_empty() {
        return (turn_multiplier * score_board(state), None);
    }

    let mut best_score = MIN_SCORE;
    let mut best_move = None;

    for &mv in valid_moves {
        state.make_move(mv);
        let replies = state.get_valid_moves();
        let (child_score, _) = negamax(
            state,
            &replies,
            depth - 1,
            -beta,
            -alpha,
            -turn_multiplier,
            nodes,
        );
        state.undo_move();

        let score = -child_score;
        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }

        if best_score > alpha {
            alpha = best_score;
        }
        if alpha >= beta {
            break;
        }
    }

    (best_score, best_move)
}

/// Runs a full-window search from the root and reports the result.
///
/// `depth` below 1 is raised to 1 so that a non-empty move list always
/// produces a move. The per-call outputs on `state` (check, pins, mate flags)
/// are put back the way they were found.
pub fn search(state: &mut GameState, valid_moves: &[Move], depth: u32) -> SearchResult {
    if valid_moves.is_empty() {
        return SearchResult {
            best_move: None,
            score: 0,
            nodes: 0,
        };
    }

    let saved = (
        state.in_check,
        state.checkmate,
        state.stalemate,
        state.pins.clone(),
        state.checks.clone(),
    );

    let turn_multiplier = if state.white_to_move() { 1 } else { -1 };
    let mut nodes = 0;
    let (score, best_move) = negamax(
        state,
        valid_moves,
        depth.max(1),
        MIN_SCORE,
        MAX_SCORE,
        turn_multiplier,
        &mut nodes,
    );

    let (in_check, checkmate, stalemate, pins, checks) = saved;
    state.in_check = in_check;
    state.checkmate = checkmate;
    state.stalemate = stalemate;
    state.pins = pins;
    state.checks = checks;

    debug!(
        "negamax depth {}: {} nodes, score {}, best {}",
        depth.max(1),
        nodes,
        score,
        best_move.map_or_else(|| "-".to_string(), |mv| mv.to_notation_string())
    );

    SearchResult {
        best_move,
        score,
        nodes,
    }
}

/// Best move for the side to move, or `None` only when `valid_moves` is empty.
///
/// Moves are searched in the order given, so callers that want variety among
/// equally scored moves shuffle the list first.
pub fn find_best_move(state: &mut GameState, valid_moves: &[Move], depth: u32) -> Option<Move> {
    search(state, valid_moves, depth).best_move
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::ai::evaluation::STALEMATE_SCORE;
    use crate::game_repr::{Square, Type};

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn best_for(fen: &str, depth: u32) -> (GameState, SearchResult) {
        let mut state = GameState::from_fen(fen).unwrap();
        let moves = state.get_valid_moves();
        let result = search(&mut state, &moves, depth);
        (state, result)
    }

    #[test]
    fn test_empty_move_list_returns_none() {
        let mut state = GameState::new();
        assert_eq!(find_best_move(&mut state, &[], 3), None);
    }

    #[test]
    fn test_depth_one_wins_the_queen() {
        // Only one capture: the e4 pawn takes the d5 queen
        let (_, result) = best_for("4k3/8/8/3q4/4P3/8/8/4K3 w - -", 1);
        let mv = result.best_move.unwrap();
        assert_eq!((mv.start, mv.end), (sq("e4"), sq("d5")));
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_finds_mate_in_one() {
        let (_, result) = best_for("6k1/5ppp/8/8/8/8/8/R5K1 w - -", 3);
        let mv = result.best_move.unwrap();
        assert_eq!((mv.start, mv.end), (sq("a1"), sq("a8")));
        assert_eq!(result.score, CHECKMATE_SCORE);
    }

    #[test]
    fn test_black_finds_mate_in_one() {
        let (_, result) = best_for("r5k1/8/8/8/8/8/5PPP/6K1 b - -", 2);
        let mv = result.best_move.unwrap();
        assert_eq!((mv.start, mv.end), (sq("a8"), sq("a1")));
        assert_eq!(result.score, CHECKMATE_SCORE);
    }

    #[test]
    fn test_avoids_hanging_the_queen() {
        // Qxd5 loses the queen to exd5; depth 2 sees the recapture
        let (_, result) = best_for("4k3/8/4p3/3p4/8/8/8/3QK3 w - -", 2);
        let mv = result.best_move.unwrap();
        assert!(
            !(mv.start == sq("d1") && mv.end == sq("d5")),
            "queen should not take a defended pawn"
        );
    }

    #[test]
    fn test_search_leaves_state_untouched() {
        let mut state =
            GameState::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
                .unwrap();
        let moves = state.get_valid_moves();
        let fen_before = state.to_fen();
        let pins_before = state.pins.clone();

        let best = find_best_move(&mut state, &moves, 2);
        assert!(best.is_some());
        assert_eq!(state.to_fen(), fen_before);
        assert!(state.move_log.is_empty());
        assert_eq!(state.pins, pins_before);
        assert!(!state.checkmate && !state.stalemate);
    }

    #[test]
    fn test_ties_keep_first_move() {
        // Bare kings: every move scores 0, so the first listed move wins
        let mut state = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - -").unwrap();
        let moves = state.get_valid_moves();
        let best = find_best_move(&mut state, &moves, 2).unwrap();
        assert_eq!(best, moves[0]);

        let reversed: Vec<Move> = moves.iter().rev().copied().collect();
        let best = find_best_move(&mut state, &reversed, 2).unwrap();
        assert_eq!(best, reversed[0]);
    }

    #[test]
    fn test_stalemate_scores_zero() {
        // Qg6 stalemates, Qg7 mates
        let mut state = GameState::from_fen("7k/8/5K2/8/8/8/8/6Q1 w - -").unwrap();
        let moves = state.get_valid_moves();
        let stalemating: Vec<Move> = moves
            .iter()
            .filter(|mv| mv.end == sq("g6") && mv.piece_moved.is_type(Type::Queen))
            .copied()
            .collect();
        assert_eq!(stalemating.len(), 1);

        let result = search(&mut state, &stalemating, 1);
        assert_eq!(result.score, STALEMATE_SCORE, "a queen up is worth nothing once stalemated");

        let result = search(&mut state, &moves, 1);
        assert_eq!(result.score, CHECKMATE_SCORE);
        assert_eq!(result.best_move.unwrap().end, sq("g7"));
    }

    #[test]
    fn test_depth_zero_is_raised_to_one() {
        let (_, result) = best_for("4k3/8/8/3q4/4P3/8/8/4K3 w - -", 0);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn test_pruning_matches_full_window_minimax() {
        // Alpha-beta must not change the root score
        let mut state = GameState::new();
        let moves = state.get_valid_moves();
        let pruned = search(&mut state, &moves, 3);

        fn minimax(state: &mut GameState, depth: u32, turn: i32) -> i32 {
            let moves = state.get_valid_moves();
            if depth == 0 || moves.is_empty() {
                return turn * score_board(state);
            }
            let mut best = MIN_SCORE;
            for mv in moves {
                state.make_move(mv);
                best = best.max(-minimax(state, depth - 1, -turn));
                state.undo_move();
            }
            best
        }
        assert_eq!(pruned.score, minimax(&mut state, 3, 1));
    }
}
