//! Core domain types for tic-tac-toe.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Owner of a mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The human player (goes first).
    X,
    /// The AI opponent (goes second).
    O,
}

impl Player {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// Error returned when placing a mark on a non-empty square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Square {_0} is already occupied")]
pub struct OccupiedError(pub Position);

impl std::error::Error for OccupiedError {}

/// 3x3 tic-tac-toe board.
///
/// `Board` is a plain value: placing a mark produces a new board and
/// leaves the original untouched, so callers can keep snapshots of
/// earlier positions without cloning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns a new board with the player's mark at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`OccupiedError`] if the square is not empty. The receiver
    /// is unchanged in either case.
    pub fn with_mark(&self, pos: Position, player: Player) -> Result<Self, OccupiedError> {
        if !self.is_empty(pos) {
            return Err(OccupiedError(pos));
        }
        let mut next = *self;
        next.squares[pos.to_index()] = Square::Occupied(player);
        Ok(next)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                let symbol = match self.squares[idx] {
                    Square::Empty => (idx + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won {
        /// The player with three in a row.
        winner: Player,
        /// The completed line, in board order.
        line: [Position; 3],
    },
    /// Game ended with a full board and no winner.
    Draw,
}

impl GameStatus {
    /// Returns true for any status other than [`GameStatus::InProgress`].
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_mark_leaves_receiver_unchanged() {
        let board = Board::new();
        let snapshot = board;
        let next = board
            .with_mark(Position::Center, Player::X)
            .expect("empty square");
        assert_eq!(board, snapshot);
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
        assert!(board.is_empty(Position::Center));
    }

    #[test]
    fn test_with_mark_rejects_occupied_square() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .expect("empty square");
        let result = board.with_mark(Position::TopLeft, Player::O);
        assert_eq!(result, Err(OccupiedError(Position::TopLeft)));
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
    }

    #[test]
    fn test_render_shows_marks_and_numbers() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .and_then(|b| b.with_mark(Position::Center, Player::O))
            .expect("empty squares");
        assert_eq!(board.render(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
