//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the AI and the match controller can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, LINES};

use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Evaluates a board into a [`GameStatus`].
///
/// Lines are scanned in the fixed order of [`LINES`], so the reported
/// winning line is deterministic. A full board with no winner is a draw;
/// anything else is still in progress.
#[instrument]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((winner, line)) = check_winner(board) {
        return GameStatus::Won { winner, line };
    }
    if is_full(board) {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}
