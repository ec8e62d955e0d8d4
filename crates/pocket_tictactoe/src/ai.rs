//! Heuristic move selection for the AI opponent.
//!
//! The opponent is intentionally beatable: 60% of the time it plays a
//! win/block/center heuristic, otherwise it plays a uniformly random open
//! square. Randomness comes through the [`RandomSource`] trait so tests
//! can drive either branch deterministically.

use crate::position::Position;
use crate::rules::LINES;
use crate::types::{Board, Player, Square};
use rand::Rng;
use tracing::{debug, instrument};

/// Probability that the opponent plays the heuristic rather than a
/// random open square.
pub const SMART_CHANCE: f64 = 0.6;

/// Source of randomness for move selection.
///
/// The production implementation is [`ThreadRandom`]; tests substitute
/// scripted values to pin down which branch the selector takes.
pub trait RandomSource {
    /// Returns a uniform value in `[0, 1)`.
    fn roll(&mut self) -> f64;

    /// Returns a uniform index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// [`RandomSource`] backed by the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn roll(&mut self) -> f64 {
        rand::thread_rng().gen_range(0.0..1.0)
    }

    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Error returned when a move is requested on a full board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("No open square to play")]
pub struct BoardFullError;

impl std::error::Error for BoardFullError {}

/// Finds a square that completes a line for `player`, if one exists.
///
/// Scans [`LINES`] in order and returns the open square of the first
/// line holding two of the player's marks.
#[instrument]
pub fn winning_move(board: &Board, player: Player) -> Option<Position> {
    for line in LINES {
        let mut open = None;
        let mut owned = 0;
        for pos in line {
            match board.get(pos) {
                Square::Empty => open = Some(pos),
                Square::Occupied(p) if p == player => owned += 1,
                Square::Occupied(_) => {}
            }
        }
        if owned == 2 {
            if let Some(pos) = open {
                return Some(pos);
            }
        }
    }
    None
}

/// Selects the opponent's next move.
///
/// With probability [`SMART_CHANCE`] the selector takes its own win if
/// one is available, otherwise blocks the human's win, otherwise takes
/// the center. When no heuristic fires (or the roll misses the gate) it
/// picks uniformly among the open squares.
///
/// # Errors
///
/// Returns [`BoardFullError`] if no square is open. The match controller
/// checks for a draw before asking for a move, so this is a caller bug.
#[instrument(skip(rng))]
pub fn select_move(board: &Board, rng: &mut dyn RandomSource) -> Result<Position, BoardFullError> {
    let open = Position::open_squares(board);
    if open.is_empty() {
        return Err(BoardFullError);
    }

    if rng.roll() < SMART_CHANCE {
        if let Some(pos) = winning_move(board, Player::O) {
            debug!(%pos, "Taking the win");
            return Ok(pos);
        }
        if let Some(pos) = winning_move(board, Player::X) {
            debug!(%pos, "Blocking");
            return Ok(pos);
        }
        if board.is_empty(Position::Center) {
            debug!("Taking the center");
            return Ok(Position::Center);
        }
    }

    let pos = open[rng.pick(open.len())];
    debug!(%pos, "Playing a random open square");
    Ok(pos)
}
