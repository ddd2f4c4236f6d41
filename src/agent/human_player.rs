//! Human player reading typed moves.
//!
//! Moves are entered in coordinate notation, one per line (`e2e4`, `e7e8q`).
//! A typed move is only handed to the orchestrator when it is in the legal
//! move list; anything else is reported and the player is asked again.
//!
//! | input              | effect                               |
//! |--------------------|--------------------------------------|
//! | `e2e4`             | play the move                        |
//! | `z` / `undo`       | take back the last move of each side |
//! | `?` / `moves`      | list the legal moves                 |
//! | `quit` / `resign`  | give up the game                     |
//!
//! End of input counts as giving up.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use log::{debug, warn};

use super::player::{GameResult, Player, PlayerAction};
use crate::game_repr::{GameState, Move, Square};

/// Player driven by lines of text from `input`. Prompts and feedback go to `output`.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
    name: String,
}

impl HumanPlayer<StdinLock<'static>, Stdout> {
    /// Human at the terminal.
    pub fn stdin(name: String) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), name)
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W, name: String) -> Self {
        Self { input, output, name }
    }

    /// Gives back the output sink, mostly so tests can read what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads lines until one is a legal move or a command that ends the turn.
    fn read_action(&mut self, state: &GameState, allow_undo: bool) -> Option<PlayerAction> {
        let mut position = state.clone();
        let legal = position.get_valid_moves();

        self.say(&render_board(state));
        loop {
            self.prompt(state);

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => {
                    debug!("[{}] input closed", self.name);
                    return None;
                }
                Ok(_) => {}
                Err(err) => {
                    warn!("[{}] could not read input: {}", self.name, err);
                    return None;
                }
            }

            let text = line.trim().to_ascii_lowercase();
            match text.as_str() {
                "" => continue,
                "quit" | "resign" => return None,
                "z" | "undo" if allow_undo => return Some(PlayerAction::Undo),
                "z" | "undo" => {
                    self.say("Nothing to take back here");
                    continue;
                }
                "?" | "moves" => {
                    let names: Vec<String> = legal.iter().map(|mv| mv.to_notation_string()).collect();
                    self.say(&names.join(" "));
                    continue;
                }
                _ => {}
            }

            let Some(typed) = parse_coordinates(&text, state) else {
                self.say(&format!("Could not read '{}', expected a move like e2e4", text));
                continue;
            };
            if let Some(&mv) = legal.iter().find(|mv| **mv == typed) {
                return Some(PlayerAction::Move(mv));
            }
            self.say(&format!("{} is not a legal move", typed));
        }
    }

    fn prompt(&mut self, state: &GameState) {
        let side = if state.white_to_move() { "White" } else { "Black" };
        // Output failures only lose the prompt; input still drives the game
        let _ = write!(self.output, "{} to move> ", side);
        let _ = self.output.flush();
    }

    fn say(&mut self, message: &str) {
        let _ = writeln!(self.output, "{}", message);
    }
}

/// Parses `e2e4` style input. A fifth promotion letter is accepted and
/// ignored, since pawns always promote to a queen.
fn parse_coordinates(text: &str, state: &GameState) -> Option<Move> {
    if !(4..=5).contains(&text.len()) || !text.is_ascii() {
        return None;
    }
    if text.len() == 5 && !matches!(&text[4..], "q" | "r" | "b" | "n") {
        return None;
    }
    let from = Square::from_algebraic(&text[0..2])?;
    let to = Square::from_algebraic(&text[2..4])?;
    Some(Move::normal(from, to, &state.board))
}

/// Board diagram with rank 8 on top.
fn render_board(state: &GameState) -> String {
    let mut out = String::new();
    for (row, rank) in state.board.iter().enumerate() {
        out.push_str(&format!("{} ", 8 - row));
        for piece in rank {
            out.push(' ');
            out.push(piece.to_char());
        }
        out.push('\n');
    }
    out.push_str("   a b c d e f g h");
    out
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn get_move(&mut self, state: &GameState) -> Option<Move> {
        match self.read_action(state, false)? {
            PlayerAction::Move(mv) => Some(mv),
            PlayerAction::Undo => None,
        }
    }

    fn get_action(&mut self, state: &GameState) -> Option<PlayerAction> {
        self.read_action(state, true)
    }

    fn opponent_moved(&mut self, mv: Move) {
        self.say(&format!("Opponent played {}", mv.to_san_string()));
    }

    fn moves_taken_back(&mut self, plies: usize) {
        self.say(&format!("Took back {} plies", plies));
    }

    fn game_ended(&mut self, result: GameResult) {
        self.say(&format!("Game over: {:?}", result));
    }

    fn name(&self) -> &str {
        &self.name
    }
}
