//! Game flow coordination.
//!
//! The [`Orchestrator`] owns the authoritative [`GameState`] and the two
//! [`Player`]s. Each turn it:
//! 1. Generates the legal moves and checks for checkmate/stalemate
//! 2. Stops the game as a draw once the ply limit is reached
//! 3. Asks the side to move for a move
//! 4. Validates the move by equality against the legal list and plays the
//!    generator's version of it (which carries the en passant/castle/promotion flag)
//! 5. Tells the opponent what was played
//!
//! Instead of a move, a player may ask for a takeback. The last move of each
//! side is undone and the same player is asked again from the earlier position.
//!
//! ```text
//! [Start] -> [Legal moves] -> [Game over?] -> [Request Move] -> [Validate]
//!   -> [Execute Move] -> [Notify opponent] -> [Legal moves] ...
//! ```

use log::{info, warn};

use crate::agent::player::{GameResult, Player, PlayerAction};
use crate::config::GameConfig;
use crate::game_repr::{Color, FenError, GameState, Move};

/// Illegal answers a player may give in one turn before forfeiting the game
const MAX_ATTEMPTS: usize = 3;

/// Headless game driver.
pub struct Orchestrator {
    state: GameState,

    /// (white_player, black_player)
    players: (Box<dyn Player>, Box<dyn Player>),

    /// Plies after which the game is stopped as a draw
    max_plies: usize,

    /// Result of the game if it has ended
    game_result: Option<GameResult>,
}

impl Orchestrator {
    pub fn new(
        state: GameState,
        white: Box<dyn Player>,
        black: Box<dyn Player>,
        max_plies: usize,
    ) -> Self {
        Self {
            state,
            players: (white, black),
            max_plies,
            game_result: None,
        }
    }

    /// Sets up players and starting position from `config`.
    pub fn from_config(config: &GameConfig) -> Result<Self, FenError> {
        let state = match &config.starting_fen {
            Some(fen) => GameState::from_fen(fen)?,
            None => GameState::new(),
        };
        let (white_seed, black_seed) = config.player_seeds();

        Ok(Self::new(
            state,
            config.white_player.build(white_seed),
            config.black_player.build(black_seed),
            config.max_plies,
        ))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn result(&self) -> Option<GameResult> {
        self.game_result
    }

    pub fn is_game_active(&self) -> bool {
        self.game_result.is_none()
    }

    /// Plays until the game has a result.
    pub fn play(&mut self) -> GameResult {
        info!(
            "{} (white) vs {} (black) from {}",
            self.players.0.name(),
            self.players.1.name(),
            self.state.to_fen()
        );

        loop {
            if let Some(result) = self.play_turn() {
                return result;
            }
        }
    }

    /// Plays a single ply. Returns the result once the game is over.
    pub fn play_turn(&mut self) -> Option<GameResult> {
        if self.game_result.is_some() {
            return self.game_result;
        }

        let legal = self.state.get_valid_moves();
        if let Some(result) = self.check_game_end() {
            self.handle_game_end(result);
            return self.game_result;
        }

        let mover = self.state.to_move;
        match self.request_action(&legal) {
            Some(PlayerAction::Move(mv)) => self.process_move(mv),
            Some(PlayerAction::Undo) => self.take_back(),
            None => {
                warn!("{:?} has no move to offer and forfeits", mover);
                self.handle_game_end(GameResult::from_winner(mover.opposite()));
            }
        }
        self.game_result
    }

    /// Asks the side to move until it answers with a legal move or a takeback,
    /// at most [`MAX_ATTEMPTS`] times. Moves come back as the generator's copy.
    fn request_action(&mut self, legal: &[Move]) -> Option<PlayerAction> {
        let player = match self.state.to_move {
            Color::White => &mut self.players.0,
            Color::Black => &mut self.players.1,
        };

        for _ in 0..MAX_ATTEMPTS {
            let candidate = match player.get_action(&self.state)? {
                PlayerAction::Undo => return Some(PlayerAction::Undo),
                PlayerAction::Move(candidate) => candidate,
            };
            match legal.iter().find(|mv| **mv == candidate) {
                Some(&mv) => return Some(PlayerAction::Move(mv)),
                None => warn!("[{}] illegal move {} rejected", player.name(), candidate),
            }
        }
        None
    }

    /// Undoes the last move of each side, so the player who asked is to move
    /// again. Refused while fewer than two plies have been played.
    fn take_back(&mut self) {
        let plies = 2;
        if self.state.move_log.len() < plies {
            warn!("takeback refused, only {} plies played", self.state.move_log.len());
            return;
        }
        for _ in 0..plies {
            self.state.undo_move();
        }
        info!("Took back {} plies, {:?} to move", plies, self.state.to_move);

        self.players.0.moves_taken_back(plies);
        self.players.1.moves_taken_back(plies);
    }

    /// Executes a validated move and notifies the opponent.
    fn process_move(&mut self, mv: Move) {
        let ply = self.state.move_log.len();
        info!(
            "{}{} {}",
            ply / 2 + 1,
            if ply % 2 == 0 { "." } else { "..." },
            mv.to_san_string()
        );

        self.state.make_move(mv);

        let opponent = match self.state.to_move {
            Color::White => &mut self.players.0,
            Color::Black => &mut self.players.1,
        };
        opponent.opponent_moved(mv);
    }

    /// Decides the game from the flags set by the last `get_valid_moves` call.
    fn check_game_end(&self) -> Option<GameResult> {
        if self.state.checkmate {
            info!("Checkmate! {:?} wins", self.state.to_move.opposite());
            Some(GameResult::from_winner(self.state.to_move.opposite()))
        } else if self.state.stalemate {
            info!("Stalemate! Game is a draw");
            Some(GameResult::Stalemate)
        } else if self.state.move_log.len() >= self.max_plies {
            info!("Ply limit of {} reached, game is a draw", self.max_plies);
            Some(GameResult::Draw)
        } else {
            None
        }
    }

    fn handle_game_end(&mut self, result: GameResult) {
        self.game_result = Some(result);
        self.players.0.game_ended(result);
        self.players.1.game_ended(result);
        info!("Game over after {} plies: {:?}", self.state.move_log.len(), result);
    }
}
