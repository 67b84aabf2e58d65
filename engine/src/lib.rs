//! Rules engine for the multiplication four-in-a-row board game.
//!
//! A turn is: pick a multiplier from 1..=9, then mark a board cell whose
//! value is that multiplier times some other value on the board. Four marks
//! in a line (row, column, or diagonal) win; a full board is a draw.
//!
//! The engine is pure and synchronous; rendering and input belong to a
//! separate presentation layer that drives [`GameSession`].

mod board;
mod bot_controller;
mod game_state;
mod session;
mod session_rng;
mod types;
mod validate;
mod win_detector;

pub use board::{Board, BoardError, BOARD_SIZE, CELL_COUNT, STANDARD_ROWS};
pub use bot_controller::{choose_move, choose_multiplier};
pub use game_state::{GameState, PlacedMove};
pub use session::{ComputerTurn, GameSession, MoveOutcome, SessionSettings};
pub use session_rng::SessionRng;
pub use types::{
    Difficulty, GameStatus, LinePattern, MoveRejection, Multiplier, Position, Side,
};
pub use validate::MoveValidator;
pub use win_detector::WinDetector;
