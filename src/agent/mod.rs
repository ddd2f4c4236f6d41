pub mod player;
pub use player::*;

pub mod human_player;
pub use human_player::HumanPlayer;

pub mod worker;
pub use worker::{run_search, SearchOutcome, SearchWorker};

pub mod ai;
pub use ai::{Difficulty, SearchConfig, SearchResult};
