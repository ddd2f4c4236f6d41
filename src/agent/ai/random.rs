// Random move selection
//
// Used as the "random" player and to pre-shuffle candidate moves before a search.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_repr::Move;

/// Uniformly random move from `valid_moves`, or `None` when the list is empty.
pub fn find_random_move(valid_moves: &[Move]) -> Option<Move> {
    find_random_move_with(valid_moves, &mut rand::thread_rng())
}

/// Same as [`find_random_move`] with a caller-supplied RNG, for reproducible games.
pub fn find_random_move_with<R: Rng + ?Sized>(valid_moves: &[Move], rng: &mut R) -> Option<Move> {
    valid_moves.choose(rng).copied()
}

/// Shuffles candidate moves in place so that the search breaks ties differently between games.
pub fn shuffle_moves<R: Rng + ?Sized>(moves: &mut [Move], rng: &mut R) {
    moves.shuffle(rng);
}
