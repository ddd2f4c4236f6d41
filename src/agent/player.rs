//! Player trait and associated types for chess game agents.
//!
//! A player is anything that can be asked for a move in a given position.
//! The orchestrator owns the authoritative [`GameState`]; players only ever
//! see it by shared reference and answer with a [`Move`], which the
//! orchestrator validates against the legal move list before applying it.
//!
//! The trait does not define a constructor: a random mover needs a seed, a
//! searching player needs a [`SearchConfig`], and each provides its own.

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::ai::{find_random_move_with, Difficulty, SearchConfig};
use super::worker::{run_search, SearchWorker};
use crate::game_repr::{Color, GameState, Move};

/// Result of a completed chess game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Black was checkmated or forfeited
    WhiteWins,
    /// White was checkmated or forfeited
    BlackWins,
    /// Side to move has no legal moves but is not in check
    Stalemate,
    /// Stopped without a decision (ply limit reached)
    Draw,
}

impl GameResult {
    /// Create a GameResult from the winning color
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::WhiteWins => Some(Color::White),
            GameResult::BlackWins => Some(Color::Black),
            GameResult::Stalemate | GameResult::Draw => None,
        }
    }
}

/// What a player answers when it is asked to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Move(Move),
    /// Take back the last move of each side
    Undo,
}

/// Trait for entities that can provide chess moves.
///
/// Only `get_move()` must be implemented.
///
/// ## `get_move()`
/// - May block while the player thinks
/// - **Returns `None`**: the player has no move to offer (no legal moves, or it gives up)
/// - **Returns `Some(Move)`**: a move for the side to move in `state`. It is
///   checked by equality against the legal moves before it is played.
pub trait Player {
    fn get_move(&mut self, state: &GameState) -> Option<Move>;

    /// What the orchestrator actually asks for. Players that can request a
    /// takeback override this; everyone else just plays a move.
    fn get_action(&mut self, state: &GameState) -> Option<PlayerAction> {
        self.get_move(state).map(PlayerAction::Move)
    }

    /// Called after the opponent's move has been applied.
    fn opponent_moved(&mut self, _mv: Move) {}

    /// Called after `plies` moves were taken back.
    fn moves_taken_back(&mut self, _plies: usize) {}

    /// Called once when the game reaches a result.
    fn game_ended(&mut self, _result: GameResult) {}

    fn name(&self) -> &str {
        "Player"
    }
}

/// Plays a uniformly random legal move.
pub struct RandomPlayer {
    rng: StdRng,
    name: String,
}

impl RandomPlayer {
    /// Seeded players replay the same game; `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            name: "Random".to_string(),
        }
    }
}

impl Player for RandomPlayer {
    fn get_move(&mut self, state: &GameState) -> Option<Move> {
        let mut position = state.clone();
        let moves = position.get_valid_moves();
        find_random_move_with(&moves, &mut self.rng)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// AI Player that uses negamax with alpha-beta pruning
///
/// Each request clones the position and hands the copy to a [`SearchWorker`],
/// so the search always runs on a state nobody else touches.
pub struct NegamaxPlayer {
    config: SearchConfig,
    rng: StdRng,
    name: String,
}

impl NegamaxPlayer {
    pub fn new(config: SearchConfig, seed: Option<u64>, name: String) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng, name }
    }

    /// Player named after its difficulty, e.g. "AI (Hard)"
    pub fn with_difficulty(difficulty: Difficulty, seed: Option<u64>) -> Self {
        let name = format!("AI ({})", difficulty.name());
        Self::new(SearchConfig::from(difficulty), seed, name)
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl Player for NegamaxPlayer {
    fn get_move(&mut self, state: &GameState) -> Option<Move> {
        let seed: u64 = self.rng.gen();

        let outcome = match SearchWorker::spawn(state.clone(), self.config, seed) {
            Ok(worker) => worker.wait(),
            Err(err) => {
                warn!("[{}] could not start search thread ({}), searching inline", self.name, err);
                Some(run_search(&mut state.clone(), self.config, seed))
            }
        }?;

        debug!(
            "[{}] depth {}: {} nodes, score {}",
            self.name, self.config.depth, outcome.nodes, outcome.score
        );
        outcome.best_move
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::Square;

    #[test]
    fn test_game_result_winner() {
        assert_eq!(GameResult::from_winner(Color::White), GameResult::WhiteWins);
        assert_eq!(GameResult::BlackWins.winner(), Some(Color::Black));
        assert_eq!(GameResult::Stalemate.winner(), None);
        assert_eq!(GameResult::Draw.winner(), None);
    }

    #[test]
    fn test_random_player_plays_legal_moves() {
        let mut state = GameState::new();
        let mut player = RandomPlayer::new(Some(5));
        let legal = state.get_valid_moves();

        let mv = player.get_move(&state).unwrap();
        assert!(legal.contains(&mv));
        assert_eq!(player.name(), "Random");
    }

    #[test]
    fn test_random_player_has_nothing_when_mated() {
        let state = GameState::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq -").unwrap();
        let mut player = RandomPlayer::new(Some(5));
        assert_eq!(player.get_move(&state), None);
    }

    #[test]
    fn test_negamax_player_takes_free_queen() {
        let state = GameState::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - -").unwrap();
        let mut player = NegamaxPlayer::with_difficulty(Difficulty::Medium, Some(1));
        assert_eq!(player.name(), "AI (Medium)");
        assert_eq!(player.config().depth, 2);

        let mv = player.get_move(&state).unwrap();
        assert_eq!(mv.end, Square::from_algebraic("d5").unwrap());
    }

    #[test]
    fn test_negamax_player_does_not_touch_the_state() {
        let state = GameState::new();
        let fen = state.to_fen();
        let mut player = NegamaxPlayer::with_difficulty(Difficulty::Easy, Some(2));

        assert!(player.get_move(&state).is_some());
        assert_eq!(state.to_fen(), fen);
    }
}
