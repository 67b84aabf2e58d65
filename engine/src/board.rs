use std::collections::HashMap;
use std::fmt;

use crate::types::Position;

pub const BOARD_SIZE: usize = 6;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The grid the original paper game is played on.
pub const STANDARD_ROWS: [[u32; BOARD_SIZE]; BOARD_SIZE] = [
    [1, 2, 3, 4, 5, 6],
    [7, 8, 9, 10, 12, 14],
    [15, 16, 18, 20, 21, 24],
    [25, 27, 28, 30, 32, 35],
    [36, 40, 42, 45, 48, 49],
    [54, 56, 63, 64, 72, 81],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardError {
    BadDimensions { rows: usize, cols: usize },
    ZeroValue { position: Position },
    DuplicateValue { value: u32 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BadDimensions { rows, cols } => write!(
                f,
                "Board must be {}x{}, got {}x{}",
                BOARD_SIZE, BOARD_SIZE, rows, cols
            ),
            BoardError::ZeroValue { position } => write!(
                f,
                "Board values must be positive, found 0 at ({}, {})",
                position.row, position.col
            ),
            BoardError::DuplicateValue { value } => {
                write!(f, "Board values must be distinct, {} appears twice", value)
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Immutable 6x6 grid of distinct positive integers with a bidirectional
/// position/value lookup. Every value maps to exactly one cell.
#[derive(Clone, Debug)]
pub struct Board {
    rows: [[u32; BOARD_SIZE]; BOARD_SIZE],
    positions: HashMap<u32, Position>,
}

impl Board {
    pub fn new(rows: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, BoardError> {
        let mut positions = HashMap::with_capacity(CELL_COUNT);
        for (row, row_values) in rows.iter().enumerate() {
            for (col, &value) in row_values.iter().enumerate() {
                let position = Position::new(row, col);
                if value == 0 {
                    return Err(BoardError::ZeroValue { position });
                }
                if positions.insert(value, position).is_some() {
                    return Err(BoardError::DuplicateValue { value });
                }
            }
        }
        Ok(Self { rows, positions })
    }

    /// Checked constructor for grids read from config files.
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self, BoardError> {
        let cols = rows.first().map(|row| row.len()).unwrap_or(0);
        if rows.len() != BOARD_SIZE || rows.iter().any(|row| row.len() != BOARD_SIZE) {
            return Err(BoardError::BadDimensions {
                rows: rows.len(),
                cols,
            });
        }
        let mut grid = [[0u32; BOARD_SIZE]; BOARD_SIZE];
        for (row, row_values) in rows.iter().enumerate() {
            for (col, &value) in row_values.iter().enumerate() {
                grid[row][col] = value;
            }
        }
        Self::new(grid)
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_ROWS).expect("standard board is well formed")
    }

    pub fn value_at(&self, position: Position) -> Option<u32> {
        if position.row >= BOARD_SIZE || position.col >= BOARD_SIZE {
            return None;
        }
        Some(self.rows[position.row][position.col])
    }

    pub fn position_of(&self, value: u32) -> Option<Position> {
        self.positions.get(&value).copied()
    }

    pub fn contains(&self, value: u32) -> bool {
        self.positions.contains_key(&value)
    }

    /// Values in board scan order (row-major).
    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }

    pub fn rows(&self) -> &[[u32; BOARD_SIZE]; BOARD_SIZE] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_board_bijection() {
        let board = Board::standard();
        assert_eq!(board.values().count(), CELL_COUNT);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let position = Position::new(row, col);
                let value = board.value_at(position).unwrap();
                assert_eq!(board.position_of(value), Some(position));
            }
        }
    }

    #[test]
    fn test_duplicate_value_rejected() {
        let mut rows = STANDARD_ROWS;
        rows[5][5] = 1;
        assert_eq!(
            Board::new(rows).err(),
            Some(BoardError::DuplicateValue { value: 1 })
        );
    }

    #[test]
    fn test_zero_value_rejected() {
        let mut rows = STANDARD_ROWS;
        rows[2][3] = 0;
        assert_eq!(
            Board::new(rows).err(),
            Some(BoardError::ZeroValue {
                position: Position::new(2, 3)
            })
        );
    }

    #[test]
    fn test_from_rows_bad_dimensions() {
        let rows = vec![vec![1, 2, 3]];
        assert_eq!(
            Board::from_rows(&rows).err(),
            Some(BoardError::BadDimensions { rows: 1, cols: 3 })
        );
    }

    #[test]
    fn test_from_rows_matches_new() {
        let rows: Vec<Vec<u32>> = STANDARD_ROWS.iter().map(|row| row.to_vec()).collect();
        let board = Board::from_rows(&rows).unwrap();
        assert_eq!(board.value_at(Position::new(5, 5)), Some(81));
    }

    #[test]
    fn test_value_lookup_out_of_bounds() {
        let board = Board::standard();
        assert_eq!(board.value_at(Position::new(6, 0)), None);
        assert_eq!(board.position_of(11), None);
    }
}
