use super::*;

// Reference counts from the standard perft suite. Depths are kept below the
// first ply at which under-promotions appear, since every promotion here is to a queen.

pub fn perft_fen(fen: &str, depth: u32) -> u64 {
    state_from_fen(fen).perft(depth)
}

mod endgame;
mod kiwipete;
mod starting_position;
mod symmetrical;
