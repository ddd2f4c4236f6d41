// AI Agent - Negamax with Alpha-Beta Pruning
//
// This module implements a classical chess AI: fixed-depth negamax with
// alpha-beta pruning over a material-only evaluation, plus a random mover.
//
// Key features:
// - Deterministic for a given move order (callers may shuffle to vary play)
// - Every search runs make/undo on a GameState it exclusively owns
// - Checkmate and stalemate are scored at any depth

mod difficulty;
mod evaluation;
mod negamax;
mod random;

pub use difficulty::{Difficulty, SearchConfig, DEFAULT_DEPTH};
pub use evaluation::{piece_value, score_board, score_material, CHECKMATE_SCORE, STALEMATE_SCORE};
pub use negamax::{find_best_move, negamax, search, SearchResult, MAX_SCORE, MIN_SCORE};
pub use random::{find_random_move, find_random_move_with, shuffle_moves};
