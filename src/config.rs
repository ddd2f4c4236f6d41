//! Match configuration.
//!
//! A [`GameConfig`] says who plays each side, where the game starts and when
//! to stop. Defaults can be overridden from the environment with
//! [`GameConfig::from_env`]:
//!
//! | variable          | values                              |
//! |-------------------|---------------------------------------------|
//! | `CHESS_WHITE`     | `human`, `random`, `easy`, `medium`, `hard` |
//! | `CHESS_BLACK`     | `human`, `random`, `easy`, `medium`, `hard` |
//! | `CHESS_MAX_PLIES` | positive integer                            |
//! | `CHESS_SEED`      | unsigned integer                            |
//! | `CHESS_FEN`       | starting position in FEN                    |

use std::env;

use log::warn;

use crate::agent::ai::Difficulty;
use crate::agent::{HumanPlayer, NegamaxPlayer, Player, RandomPlayer};

/// Game is called a draw after this many plies
pub const DEFAULT_MAX_PLIES: usize = 200;

/// Configuration for a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerConfig {
    /// Moves typed on standard input
    Human,
    /// Uniformly random legal moves
    Random,
    /// Negamax search at the given difficulty
    AI { difficulty: Difficulty },
}

impl PlayerConfig {
    /// Parses `human`, `random`, `easy`, `medium` or `hard` (any case).
    pub fn from_name(name: &str) -> Option<PlayerConfig> {
        if name.eq_ignore_ascii_case("human") {
            return Some(PlayerConfig::Human);
        }
        if name.eq_ignore_ascii_case("random") {
            return Some(PlayerConfig::Random);
        }
        Difficulty::from_name(name).map(|difficulty| PlayerConfig::AI { difficulty })
    }

    /// Builds the player. Seeded players make the whole game reproducible.
    pub fn build(&self, seed: Option<u64>) -> Box<dyn Player> {
        match *self {
            PlayerConfig::Human => Box::new(HumanPlayer::stdin("Human".to_string())),
            PlayerConfig::Random => Box::new(RandomPlayer::new(seed)),
            PlayerConfig::AI { difficulty } => Box::new(NegamaxPlayer::with_difficulty(difficulty, seed)),
        }
    }
}

/// Complete description of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Configuration for the White player
    pub white_player: PlayerConfig,
    /// Configuration for the Black player
    pub black_player: PlayerConfig,
    /// Plies after which the game is stopped as a draw
    pub max_plies: usize,
    /// Seed for both players; `None` plays a different game every time
    pub seed: Option<u64>,
    /// Starting position; `None` is the standard one
    pub starting_fen: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            white_player: PlayerConfig::AI {
                difficulty: Difficulty::Hard,
            },
            black_player: PlayerConfig::Random,
            max_plies: DEFAULT_MAX_PLIES,
            seed: None,
            starting_fen: None,
        }
    }
}

impl GameConfig {
    /// Two searching players.
    pub fn aivai(white_difficulty: Difficulty, black_difficulty: Difficulty) -> Self {
        Self {
            white_player: PlayerConfig::AI {
                difficulty: white_difficulty,
            },
            black_player: PlayerConfig::AI {
                difficulty: black_difficulty,
            },
            ..Self::default()
        }
    }

    /// Defaults overridden by the `CHESS_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an arbitrary variable source.
    /// Unparsable values are logged and the default is kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("CHESS_WHITE") {
            match PlayerConfig::from_name(value.trim()) {
                Some(player) => config.white_player = player,
                None => warn!("ignoring CHESS_WHITE={:?}: expected human|random|easy|medium|hard", value),
            }
        }
        if let Some(value) = lookup("CHESS_BLACK") {
            match PlayerConfig::from_name(value.trim()) {
                Some(player) => config.black_player = player,
                None => warn!("ignoring CHESS_BLACK={:?}: expected human|random|easy|medium|hard", value),
            }
        }
        if let Some(value) = lookup("CHESS_MAX_PLIES") {
            match value.trim().parse::<usize>() {
                Ok(plies) if plies > 0 => config.max_plies = plies,
                _ => warn!("ignoring CHESS_MAX_PLIES={:?}: expected a positive integer", value),
            }
        }
        if let Some(value) = lookup("CHESS_SEED") {
            match value.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(err) => warn!("ignoring CHESS_SEED={:?}: {}", value, err),
            }
        }
        if let Some(value) = lookup("CHESS_FEN") {
            if !value.trim().is_empty() {
                config.starting_fen = Some(value.trim().to_string());
            }
        }

        config
    }

    /// Seeds for (white, black), distinct so the two sides do not mirror each other.
    pub fn player_seeds(&self) -> (Option<u64>, Option<u64>) {
        match self.seed {
            Some(seed) => (Some(seed), Some(seed.wrapping_add(1))),
            None => (None, None),
        }
    }
}
