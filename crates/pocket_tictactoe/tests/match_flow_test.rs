//! End-to-end tests for the match controller.

use pocket_tictactoe::{
    GameStatus, Match, MoveError, Player, Position, RandomSource, Score, Square,
};

/// Random source that always takes the smart branch and, when the
/// heuristics do not fire, plays the first open square.
struct Smart;

impl RandomSource for Smart {
    fn roll(&mut self) -> f64 {
        0.0
    }

    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}

/// Random source that always skips the heuristics and plays the open
/// square at the given offset.
struct RandomAt(usize);

impl RandomSource for RandomAt {
    fn roll(&mut self) -> f64 {
        0.99
    }

    fn pick(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

fn pos(index: usize) -> Position {
    Position::from_index(index).expect("valid index")
}

/// Plays out a fixed sequence of human/AI moves, with the AI driven by
/// scripted random offsets so games are fully deterministic.
fn play_human_win(game: &mut Match) {
    // Human takes the 0-4-8 diagonal; the AI is scripted away from it.
    game.human_move(pos(0)).expect("human 0");
    game.ai_move(&mut RandomAt(0)).expect("ai plays 1");
    game.human_move(pos(4)).expect("human 4");
    game.ai_move(&mut RandomAt(0)).expect("ai plays 2");
    let end = game.human_move(pos(8)).expect("human 8");
    assert_eq!(
        end.status,
        GameStatus::Won {
            winner: Player::X,
            line: [pos(0), pos(4), pos(8)],
        }
    );
}

#[test]
fn test_new_match_initial_state() {
    let game = Match::new();
    let snap = game.snapshot();
    assert_eq!(snap.status, GameStatus::InProgress);
    assert_eq!(snap.to_move, Match::HUMAN);
    assert!(snap.board.squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(*game.score(), Score::default());
}

#[test]
fn test_human_win_reports_line_exactly_on_third_move() {
    let mut game = Match::new();
    game.human_move(pos(0)).expect("human 0");
    game.ai_move(&mut RandomAt(0)).expect("ai");
    let mid = game.human_move(pos(4)).expect("human 4");
    assert_eq!(mid.status, GameStatus::InProgress);

    game.ai_move(&mut RandomAt(0)).expect("ai");
    let end = game.human_move(pos(8)).expect("human 8");
    assert_eq!(
        end.status,
        GameStatus::Won {
            winner: Player::X,
            line: [pos(0), pos(4), pos(8)],
        }
    );
    assert_eq!(game.score().human, 1);
}

#[test]
fn test_draw_counts_once() {
    let mut game = Match::new();
    // X O X / O X X / O X O - no line for either side.
    // Move order keeps turns alternating: X plays 0,4,5,7,2; O plays 1,3,6,8.
    game.human_move(pos(0)).expect("x");
    game.ai_move(&mut RandomAt(0)).expect("o takes 1");
    game.human_move(pos(4)).expect("x");
    game.ai_move(&mut RandomAt(1)).expect("o takes 3");
    game.human_move(pos(5)).expect("x");
    game.ai_move(&mut RandomAt(1)).expect("o takes 6");
    game.human_move(pos(7)).expect("x");
    game.ai_move(&mut RandomAt(1)).expect("o takes 8");
    let end = game.human_move(pos(2)).expect("x fills the board");

    assert_eq!(end.status, GameStatus::Draw);
    assert_eq!(*game.score(), Score { human: 0, ai: 0, draws: 1 });
}

#[test]
fn test_terminal_state_rejects_moves_without_mutation() {
    let mut game = Match::new();
    play_human_win(&mut game);

    let board_before = *game.board();
    let score_before = *game.score();

    assert!(matches!(
        game.human_move(pos(2)),
        Err(MoveError::OutOfTurn(Player::X))
    ));
    assert!(matches!(
        game.ai_move(&mut Smart),
        Err(MoveError::OutOfTurn(Player::O))
    ));

    assert_eq!(*game.board(), board_before);
    assert_eq!(*game.score(), score_before);
}

#[test]
fn test_reset_preserves_score() {
    let mut game = Match::new();
    play_human_win(&mut game);
    let score_before = *game.score();
    assert_eq!(score_before.human, 1);

    let snap = game.reset();
    assert_eq!(snap.status, GameStatus::InProgress);
    assert_eq!(snap.to_move, Match::HUMAN);
    assert!(snap.board.squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(*game.score(), score_before);
}

#[test]
fn test_score_sum_equals_completed_games() {
    let mut game = Match::new();
    for _ in 0..3 {
        play_human_win(&mut game);
        game.reset();
    }
    assert_eq!(game.score().completed_games(), 3);
    assert_eq!(game.score().human, 3);
}

#[test]
fn test_out_of_turn_human_move_rejected() {
    let mut game = Match::new();
    game.human_move(pos(0)).expect("first move");
    // It is now the AI's turn; a second human move must fail cleanly.
    let board_before = *game.board();
    assert!(matches!(
        game.human_move(pos(1)),
        Err(MoveError::OutOfTurn(Player::X))
    ));
    assert_eq!(*game.board(), board_before);

    // And an AI move out of turn fails the same way after it plays.
    game.ai_move(&mut Smart).expect("ai reply");
    assert!(matches!(
        game.ai_move(&mut Smart),
        Err(MoveError::OutOfTurn(Player::O))
    ));
}

#[test]
fn test_occupied_square_rejected_without_state_change() {
    let mut game = Match::new();
    game.human_move(pos(4)).expect("human takes center");
    game.ai_move(&mut RandomAt(0)).expect("ai takes 0");

    let board_before = *game.board();
    let result = game.human_move(pos(0));
    assert!(matches!(result, Err(MoveError::Occupied(_))));
    assert_eq!(*game.board(), board_before);
    assert_eq!(game.to_move(), Match::HUMAN);
}

#[test]
fn test_invalid_index_rejected() {
    let mut game = Match::new();
    assert!(matches!(
        game.human_move_at(9),
        Err(MoveError::InvalidIndex(9))
    ));
    assert_eq!(game.snapshot().to_move, Match::HUMAN);

    game.human_move_at(4).expect("index 4 is the center");
    assert_eq!(game.board().get(pos(4)), Square::Occupied(Player::X));
}

#[test]
fn test_ai_win_increments_ai_score() {
    let mut game = Match::new();
    // Human wanders; the smart AI takes the top row.
    game.human_move(pos(8)).expect("x");
    game.ai_move(&mut RandomAt(4)).expect("o takes center");
    game.human_move(pos(6)).expect("x");
    // Block at 7 via the smart branch.
    game.ai_move(&mut Smart).expect("o blocks 7");
    assert_eq!(game.board().get(pos(7)), Square::Occupied(Player::O));
    game.human_move(pos(2)).expect("x blocks nothing");
    // O has 4 and 7; 1 completes the column.
    let end = game.ai_move(&mut Smart).expect("o wins");
    assert_eq!(
        end.status,
        GameStatus::Won {
            winner: Player::O,
            line: [pos(1), pos(4), pos(7)],
        }
    );
    assert_eq!(game.score().ai, 1);
}

#[test]
fn test_snapshot_round_trips_through_json() {
    let mut game = Match::new();
    let snap = game.human_move(pos(0)).expect("first move");
    let json = serde_json::to_string(&snap).expect("serialize");
    let back: pocket_tictactoe::Snapshot = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, snap);
}
