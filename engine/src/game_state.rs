use std::collections::HashSet;

use crate::types::{GameStatus, LinePattern, MoveRejection, Multiplier, Side};
use crate::validate::MoveValidator;
use crate::win_detector::WinDetector;

/// One applied move, kept for message display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedMove {
    pub side: Side,
    pub multiplier: Multiplier,
    pub operand: u32,
    pub target: u32,
}

/// Mutable per-game state: both mark sets, whose turn it is, and the
/// terminal status. The two mark sets stay disjoint; a value is marked by
/// at most one side.
#[derive(Clone, Debug)]
pub struct GameState {
    player_marks: HashSet<u32>,
    computer_marks: HashSet<u32>,
    turn: Side,
    status: GameStatus,
    winning_pattern: Option<LinePattern>,
    last_move: Option<PlacedMove>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            player_marks: HashSet::new(),
            computer_marks: HashSet::new(),
            turn: Side::Player,
            status: GameStatus::InProgress,
            winning_pattern: None,
            last_move: None,
        }
    }

    pub fn player_marks(&self) -> &HashSet<u32> {
        &self.player_marks
    }

    pub fn computer_marks(&self) -> &HashSet<u32> {
        &self.computer_marks
    }

    pub fn marks(&self, side: Side) -> &HashSet<u32> {
        match side {
            Side::Player => &self.player_marks,
            Side::Computer => &self.computer_marks,
        }
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winning_pattern(&self) -> Option<LinePattern> {
        self.winning_pattern
    }

    pub fn last_move(&self) -> Option<PlacedMove> {
        self.last_move
    }

    /// Apply one legal move for `side`. On success the win/draw check runs
    /// and, if the game goes on, the turn switches. Any rejection leaves the
    /// state untouched.
    pub fn place_mark(
        &mut self,
        side: Side,
        multiplier: Multiplier,
        target: u32,
        validator: &MoveValidator,
        detector: &WinDetector,
    ) -> Result<(), MoveRejection> {
        if self.status != GameStatus::InProgress {
            return Err(MoveRejection::GameOver);
        }
        if side != self.turn {
            return Err(MoveRejection::NotYourTurn);
        }
        validator.check_move(multiplier, target, &self.player_marks, &self.computer_marks)?;

        let operand = validator
            .find_reachable_values(multiplier)
            .into_iter()
            .find(|&(_, product)| product == target)
            .map(|(operand, _)| operand);
        let Some(operand) = operand else {
            return Err(MoveRejection::NotAValidProduct);
        };

        match side {
            Side::Player => self.player_marks.insert(target),
            Side::Computer => self.computer_marks.insert(target),
        };
        self.last_move = Some(PlacedMove {
            side,
            multiplier,
            operand,
            target,
        });

        self.check_game_over(detector);
        if self.status == GameStatus::InProgress {
            self.turn = self.turn.opponent();
        }
        Ok(())
    }

    /// Give the turn away without moving. Used when a side has no legal
    /// target for any multiplier.
    pub fn pass_turn(&mut self, side: Side) {
        if self.status == GameStatus::InProgress && self.turn == side {
            self.turn = side.opponent();
        }
    }

    pub fn reset(&mut self) {
        *self = GameState::new();
    }

    fn check_game_over(&mut self, detector: &WinDetector) {
        let mover_marks = self.marks(self.turn);
        if let Some(pattern) = detector.check_win(mover_marks) {
            self.winning_pattern = Some(*pattern);
            self.status = match self.turn {
                Side::Player => GameStatus::PlayerWon,
                Side::Computer => GameStatus::ComputerWon,
            };
            return;
        }
        if detector.is_draw(&self.player_marks, &self.computer_marks) {
            self.status = GameStatus::Draw;
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
