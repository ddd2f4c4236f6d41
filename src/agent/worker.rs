//! Background search.
//!
//! A [`SearchWorker`] takes ownership of a [`GameState`] snapshot and runs the
//! negamax search on its own thread, so the caller never shares a position
//! with a running search. The result comes back over a channel and can be
//! polled with [`SearchWorker::try_result`] or awaited with [`SearchWorker::wait`].
//!
//! There is no cancellation inside the search. Dropping the worker abandons
//! the result: the thread runs to completion and its send fails silently.

use std::io;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::ai::{search, shuffle_moves, SearchConfig};
use crate::game_repr::{GameState, Move};

/// What a finished search produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// `None` only when the position has no legal moves
    pub best_move: Option<Move>,
    /// Score for the side to move
    pub score: i32,
    pub nodes: u64,
}

/// Searches `state` to completion on the current thread.
///
/// Legal moves are generated here, optionally shuffled with a generator
/// seeded from `seed`, then handed to negamax.
pub fn run_search(state: &mut GameState, config: SearchConfig, seed: u64) -> SearchOutcome {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut moves = state.get_valid_moves();
    if config.shuffle {
        shuffle_moves(&mut moves, &mut rng);
    }

    let result = search(state, &moves, config.depth);
    SearchOutcome {
        best_move: result.best_move,
        score: result.score,
        nodes: result.nodes,
    }
}

/// Handle to a search running on a background thread.
pub struct SearchWorker {
    receiver: Receiver<SearchOutcome>,
    finished: Option<SearchOutcome>,
    disconnected: bool,
}

impl SearchWorker {
    /// Moves `state` onto a new thread and starts searching it.
    pub fn spawn(mut state: GameState, config: SearchConfig, seed: u64) -> io::Result<SearchWorker> {
        let (sender, receiver) = mpsc::channel();

        thread::Builder::new()
            .name("search-worker".to_string())
            .spawn(move || {
                let outcome = run_search(&mut state, config, seed);
                if sender.send(outcome).is_err() {
                    debug!("search result abandoned");
                }
            })?;

        Ok(SearchWorker {
            receiver,
            finished: None,
            disconnected: false,
        })
    }

    /// Non-blocking check. Returns the outcome once the search is done; keeps
    /// returning it on later calls. `None` while still searching, or if the
    /// worker thread died without answering.
    pub fn try_result(&mut self) -> Option<SearchOutcome> {
        if self.finished.is_none() && !self.disconnected {
            match self.receiver.try_recv() {
                Ok(outcome) => self.finished = Some(outcome),
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    warn!("search worker stopped without a result");
                    self.disconnected = true;
                }
            }
        }
        self.finished
    }

    /// True once the worker thread has gone away without sending a result.
    pub fn is_disconnected(&self) -> bool {
        self.disconnected
    }

    /// Blocks until the search is done. `None` if the worker thread died without answering.
    pub fn wait(self) -> Option<SearchOutcome> {
        if self.finished.is_some() || self.disconnected {
            return self.finished;
        }
        self.receiver.recv().ok()
    }
}
