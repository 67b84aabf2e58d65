use std::sync::Arc;

use crate::board::Board;
use crate::bot_controller;
use crate::game_state::GameState;
use crate::session_rng::SessionRng;
use crate::types::{Difficulty, GameStatus, LinePattern, MoveRejection, Multiplier, Side};
use crate::validate::MoveValidator;
use crate::win_detector::WinDetector;

#[derive(Clone, Copy, Debug, Default)]
pub struct SessionSettings {
    pub difficulty: Difficulty,
    /// Fixed RNG seed; None draws one from entropy.
    pub seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied,
    Rejected(MoveRejection),
    Won { side: Side, pattern: LinePattern },
    Draw,
}

/// Result of one computer turn, reported back for message display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComputerTurn {
    Played {
        multiplier: Multiplier,
        operand: u32,
        target: u32,
        outcome: MoveOutcome,
    },
    /// The chosen multiplier had no legal target; the turn goes back to the
    /// player. A routine game condition, not an error.
    Passed { multiplier: Multiplier },
}

/// One human-vs-computer game. Owns the board, the precomputed line
/// patterns, both mark sets, and the session RNG; the presentation layer
/// drives it exclusively through this surface and never touches the mark
/// sets directly.
pub struct GameSession {
    board: Arc<Board>,
    validator: MoveValidator,
    detector: WinDetector,
    state: GameState,
    rng: SessionRng,
    difficulty: Difficulty,
}

impl GameSession {
    pub fn new(board: Board, settings: SessionSettings) -> Self {
        let board = Arc::new(board);
        let validator = MoveValidator::new(Arc::clone(&board));
        let detector = WinDetector::new(&board);
        let rng = match settings.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_entropy(),
        };
        Self {
            board,
            validator,
            detector,
            state: GameState::new(),
            rng,
            difficulty: settings.difficulty,
        }
    }

    pub fn standard(settings: SessionSettings) -> Self {
        Self::new(Board::standard(), settings)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Settable between turns; takes effect from the next computer move.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Read-only query for rendering selectable targets.
    pub fn legal_moves(&self, multiplier: Multiplier) -> Vec<(u32, u32)> {
        self.validator.legal_moves(
            multiplier,
            self.state.player_marks(),
            self.state.computer_marks(),
        )
    }

    /// The patterns one move away from completion for `side`, with the
    /// missing value. Used for explanatory display.
    pub fn near_wins(&self, side: Side) -> Vec<(&LinePattern, u32)> {
        self.detector.near_wins(self.state.marks(side))
    }

    /// Apply one human move. A rejection leaves the session unchanged.
    pub fn attempt_move(&mut self, multiplier: Multiplier, target: u32) -> MoveOutcome {
        match self.state.place_mark(
            Side::Player,
            multiplier,
            target,
            &self.validator,
            &self.detector,
        ) {
            Err(reason) => MoveOutcome::Rejected(reason),
            Ok(()) => self.outcome_after_move(),
        }
    }

    /// Let the computer pick a multiplier and a target and apply them.
    pub fn computer_turn(&mut self) -> ComputerTurn {
        let multiplier = bot_controller::choose_multiplier(
            &self.validator,
            self.state.player_marks(),
            self.state.computer_marks(),
            self.difficulty,
            &mut self.rng,
        );

        let chosen = bot_controller::choose_move(
            &self.validator,
            multiplier,
            self.state.player_marks(),
            self.state.computer_marks(),
            self.difficulty,
            Some(&self.detector),
            &mut self.rng,
        );

        match chosen {
            None => {
                self.state.pass_turn(Side::Computer);
                ComputerTurn::Passed { multiplier }
            }
            Some((operand, target)) => {
                let outcome = match self.state.place_mark(
                    Side::Computer,
                    multiplier,
                    target,
                    &self.validator,
                    &self.detector,
                ) {
                    Err(reason) => MoveOutcome::Rejected(reason),
                    Ok(()) => self.outcome_after_move(),
                };
                ComputerTurn::Played {
                    multiplier,
                    operand,
                    target,
                    outcome,
                }
            }
        }
    }

    /// Back to an empty board with the player to move. The only way out of
    /// a terminal state.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    fn outcome_after_move(&self) -> MoveOutcome {
        match self.state.status() {
            GameStatus::InProgress => MoveOutcome::Applied,
            GameStatus::Draw => MoveOutcome::Draw,
            GameStatus::PlayerWon => self.won_outcome(Side::Player),
            GameStatus::ComputerWon => self.won_outcome(Side::Computer),
        }
    }

    fn won_outcome(&self, side: Side) -> MoveOutcome {
        match self.state.winning_pattern() {
            Some(pattern) => MoveOutcome::Won { side, pattern },
            // Unreachable in practice: a won status always carries a pattern.
            None => MoveOutcome::Applied,
        }
    }
}
