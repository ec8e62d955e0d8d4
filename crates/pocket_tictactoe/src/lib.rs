//! Tic-tac-toe game core.
//!
//! The playable heart of the portfolio page, extracted from its
//! presentation layer: a value-semantic board, pure win/draw rules, a
//! beatable heuristic opponent, and a match controller that keeps a
//! session score.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Player`], [`Square`], [`GameStatus`]
//! - **Rules**: pure evaluation of wins and draws ([`rules`])
//! - **AI**: win/block/center heuristic behind a probability gate ([`ai`])
//! - **Session**: [`Match`] sequences turns and accumulates the [`Score`]
//!
//! Randomness is injected through [`RandomSource`], and the AI move is
//! synchronous - any "thinking" delay is the frontend's business.
//!
//! # Example
//!
//! ```
//! use pocket_tictactoe::{Match, Position, ThreadRandom};
//!
//! let mut game = Match::new();
//! let mut rng = ThreadRandom;
//!
//! let after_human = game.human_move(Position::Center)?;
//! assert!(!after_human.status.is_terminal());
//!
//! let after_ai = game.ai_move(&mut rng)?;
//! assert_eq!(after_ai.to_move, Match::HUMAN);
//! # Ok::<(), pocket_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod ai;
mod position;
pub mod rules;
mod session;
mod types;

pub use ai::{BoardFullError, RandomSource, ThreadRandom, SMART_CHANCE};
pub use position::Position;
pub use session::{Match, MoveError, Score, Snapshot};
pub use types::{Board, GameStatus, OccupiedError, Player, Square};
