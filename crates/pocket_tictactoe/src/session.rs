//! Match controller: turn sequencing, validation, and score keeping.

use crate::ai::{self, BoardFullError, RandomSource};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, OccupiedError, Player};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Running score across games in one session.
///
/// Counters only ever increase; [`Match::reset`] starts a new game but
/// keeps the score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Games won by the human.
    pub human: u32,
    /// Games won by the AI.
    pub ai: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Score {
    /// Total number of completed games.
    pub fn completed_games(&self) -> u32 {
        self.human + self.ai + self.draws
    }

    fn record(&mut self, status: &GameStatus) {
        match status {
            GameStatus::Won {
                winner: Player::X, ..
            } => self.human += 1,
            GameStatus::Won {
                winner: Player::O, ..
            } => self.ai += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

/// The state returned to the frontend after every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current board.
    pub board: Board,
    /// Current game status.
    pub status: GameStatus,
    /// Side to move (meaningful only while in progress).
    pub to_move: Player,
}

/// Errors that can occur when submitting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum MoveError {
    /// The index does not name a board square.
    #[display("Index {_0} is out of range (expected 0-8)")]
    #[from(skip)]
    InvalidIndex(usize),

    /// The target square is already occupied.
    #[display("{_0}")]
    Occupied(OccupiedError),

    /// The move was submitted out of turn, or the game is over.
    #[display("It is not {_0}'s turn")]
    #[from(skip)]
    OutOfTurn(Player),

    /// An AI move was requested on a full board.
    #[display("{_0}")]
    NoOpenSquare(BoardFullError),
}

impl std::error::Error for MoveError {}

/// A single human-versus-AI match with a session score.
///
/// The human always plays [`Player::X`] and moves first. Failed moves
/// leave the match untouched; terminal games reject every move until
/// [`Match::reset`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    board: Board,
    to_move: Player,
    status: GameStatus,
    score: Score,
}

impl Match {
    /// The mark played by the human.
    pub const HUMAN: Player = Player::X;
    /// The mark played by the AI opponent.
    pub const AI: Player = Player::O;

    /// Creates a new match with an empty board and a zero score.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Self::HUMAN,
            status: GameStatus::InProgress,
            score: Score::default(),
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the session score.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Returns the current state as a [`Snapshot`].
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            status: self.status,
            to_move: self.to_move,
        }
    }

    /// Submits the human's move.
    ///
    /// # Errors
    ///
    /// Fails with [`MoveError::OutOfTurn`] if the game is over or it is
    /// the AI's turn, and [`MoveError::Occupied`] if the square is taken.
    /// The match is unchanged on failure.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn human_move(&mut self, pos: Position) -> Result<Snapshot, MoveError> {
        self.expect_turn(Self::HUMAN)?;
        let next = self.board.with_mark(pos, Self::HUMAN)?;
        Ok(self.advance(next))
    }

    /// Submits the human's move by board index (0-8).
    ///
    /// # Errors
    ///
    /// Fails with [`MoveError::InvalidIndex`] for indices outside 0-8,
    /// otherwise as [`Match::human_move`].
    pub fn human_move_at(&mut self, index: usize) -> Result<Snapshot, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::InvalidIndex(index))?;
        self.human_move(pos)
    }

    /// Plays the AI's move using the supplied random source.
    ///
    /// Synchronous: any presentation delay belongs to the caller's
    /// scheduler, not to the game logic.
    ///
    /// # Errors
    ///
    /// Fails with [`MoveError::OutOfTurn`] if the game is over or it is
    /// the human's turn. [`MoveError::NoOpenSquare`] is unreachable when
    /// draws are detected, since a full board is never in progress.
    #[instrument(skip(self, rng), fields(status = ?self.status))]
    pub fn ai_move(&mut self, rng: &mut dyn RandomSource) -> Result<Snapshot, MoveError> {
        self.expect_turn(Self::AI)?;
        let pos = ai::select_move(&self.board, rng)?;
        let next = self.board.with_mark(pos, Self::AI)?;
        Ok(self.advance(next))
    }

    /// Starts a new game, keeping the score.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Snapshot {
        info!(score = ?self.score, "Resetting the board");
        self.board = Board::new();
        self.to_move = Self::HUMAN;
        self.status = GameStatus::InProgress;
        self.snapshot()
    }

    fn expect_turn(&self, player: Player) -> Result<(), MoveError> {
        if self.status.is_terminal() || self.to_move != player {
            return Err(MoveError::OutOfTurn(player));
        }
        Ok(())
    }

    /// Installs the post-move board, re-evaluates, and either records a
    /// finished game or passes the turn. The score update happens on the
    /// transition into a terminal status, so it fires exactly once per game.
    fn advance(&mut self, board: Board) -> Snapshot {
        self.board = board;
        self.status = rules::evaluate(&self.board);
        if self.status.is_terminal() {
            self.score.record(&self.status);
            info!(status = ?self.status, score = ?self.score, "Game over");
        } else {
            self.to_move = self.to_move.opponent();
        }
        self.snapshot()
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}
