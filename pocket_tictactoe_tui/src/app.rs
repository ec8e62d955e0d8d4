//! Application state and logic.

use pocket_tictactoe::{GameStatus, Match, ThreadRandom};
use tracing::debug;

/// Delay before the AI's reply is played, for pacing only.
pub const AI_DELAY_MS: u64 = 500;

/// Main application state.
pub struct App {
    game: Match,
    rng: ThreadRandom,
    status_message: String,
    /// Bumped on every restart; stale scheduled AI moves are dropped.
    generation: u64,
    ai_pending: bool,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            game: Match::new(),
            rng: ThreadRandom,
            status_message: "Your turn. Press 1-9 to place a mark.".to_string(),
            generation: 0,
            ai_pending: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Makes the human's move at the given board index.
    pub fn human_move(&mut self, index: usize) {
        if self.ai_pending {
            // A reply is already scheduled; the click is a no-op.
            debug!(index, "Ignoring move while the AI reply is pending");
            return;
        }

        debug!(index, "Making move");
        match self.game.human_move_at(index) {
            Ok(snapshot) => self.status_message = Self::describe(&snapshot.status, false),
            Err(e) => {
                debug!(error = %e, "Move rejected");
                self.status_message = format!("{e}. Try again.");
            }
        }
    }

    /// True when an AI reply should be scheduled.
    pub fn wants_ai_move(&self) -> bool {
        !self.ai_pending
            && !self.game.status().is_terminal()
            && self.game.to_move() == Match::AI
    }

    /// Marks the AI reply as scheduled and returns the generation to
    /// stamp it with.
    pub fn arm_ai(&mut self) -> u64 {
        self.ai_pending = true;
        self.status_message = "AI is thinking...".to_string();
        self.generation
    }

    /// Plays a scheduled AI move. Moves stamped with an old generation
    /// were canceled by a restart and are dropped.
    pub fn ai_move_due(&mut self, generation: u64) {
        if generation != self.generation {
            debug!(generation, current = self.generation, "Dropping stale AI move");
            return;
        }
        self.ai_pending = false;

        match self.game.ai_move(&mut self.rng) {
            Ok(snapshot) => self.status_message = Self::describe(&snapshot.status, true),
            Err(e) => {
                // Unreachable in practice: the turn was armed for the AI.
                tracing::warn!(error = %e, "AI move rejected");
                self.status_message = format!("AI error: {e}");
            }
        }
    }

    /// Restarts the game, keeping the score. Cancels any pending AI reply.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.generation += 1;
        self.ai_pending = false;
        self.game.reset();
        self.status_message = "Your turn. Press 1-9 to place a mark.".to_string();
    }

    fn describe(status: &GameStatus, ai_moved: bool) -> String {
        match status {
            GameStatus::InProgress => {
                if ai_moved {
                    "Your turn.".to_string()
                } else {
                    "AI is thinking...".to_string()
                }
            }
            GameStatus::Won { winner, .. } => {
                if *winner == Match::HUMAN {
                    "You win! Press 'r' to play again or 'q' to quit.".to_string()
                } else {
                    "AI wins! Press 'r' to play again or 'q' to quit.".to_string()
                }
            }
            GameStatus::Draw => {
                "It's a draw! Press 'r' to play again or 'q' to quit.".to_string()
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
