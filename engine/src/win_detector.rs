use std::collections::HashSet;

use crate::board::{Board, BOARD_SIZE, CELL_COUNT};
use crate::types::LinePattern;

const LINE_LEN: usize = 4;

/// Precomputes every four-in-a-line pattern for a board and answers win,
/// draw, and near-win queries against a mark set.
#[derive(Clone)]
pub struct WinDetector {
    patterns: Vec<LinePattern>,
}

impl WinDetector {
    pub fn new(board: &Board) -> Self {
        Self {
            patterns: generate_patterns(board),
        }
    }

    pub fn patterns(&self) -> &[LinePattern] {
        &self.patterns
    }

    /// First fully marked pattern in generation order: rows, columns,
    /// down-right diagonals, up-right diagonals.
    pub fn check_win(&self, marks: &HashSet<u32>) -> Option<&LinePattern> {
        self.patterns
            .iter()
            .find(|pattern| pattern.values.iter().all(|value| marks.contains(value)))
    }

    /// Board full. Callers must check for a win first: the filling move can
    /// still complete a line.
    pub fn is_draw(&self, player_marks: &HashSet<u32>, computer_marks: &HashSet<u32>) -> bool {
        player_marks.len() + computer_marks.len() == CELL_COUNT
    }

    /// Patterns with exactly three of four values marked, with the one value
    /// still missing.
    pub fn near_wins(&self, marks: &HashSet<u32>) -> Vec<(&LinePattern, u32)> {
        let mut near = Vec::new();
        for pattern in &self.patterns {
            let marked = pattern
                .values
                .iter()
                .filter(|value| marks.contains(value))
                .count();
            if marked == LINE_LEN - 1
                && let Some(&missing) = pattern.values.iter().find(|value| !marks.contains(value))
            {
                near.push((pattern, missing));
            }
        }
        near
    }
}

fn generate_patterns(board: &Board) -> Vec<LinePattern> {
    let rows = board.rows();
    let mut patterns = Vec::new();

    for row in 0..BOARD_SIZE {
        for col in 0..=BOARD_SIZE - LINE_LEN {
            let mut values = [0u32; LINE_LEN];
            for (step, value) in values.iter_mut().enumerate() {
                *value = rows[row][col + step];
            }
            patterns.push(LinePattern::new(values));
        }
    }

    for row in 0..=BOARD_SIZE - LINE_LEN {
        for col in 0..BOARD_SIZE {
            let mut values = [0u32; LINE_LEN];
            for (step, value) in values.iter_mut().enumerate() {
                *value = rows[row + step][col];
            }
            patterns.push(LinePattern::new(values));
        }
    }

    for row in 0..=BOARD_SIZE - LINE_LEN {
        for col in 0..=BOARD_SIZE - LINE_LEN {
            let mut values = [0u32; LINE_LEN];
            for (step, value) in values.iter_mut().enumerate() {
                *value = rows[row + step][col + step];
            }
            patterns.push(LinePattern::new(values));
        }
    }

    for row in LINE_LEN - 1..BOARD_SIZE {
        for col in 0..=BOARD_SIZE - LINE_LEN {
            let mut values = [0u32; LINE_LEN];
            for (step, value) in values.iter_mut().enumerate() {
                *value = rows[row - step][col + step];
            }
            patterns.push(LinePattern::new(values));
        }
    }

    patterns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> WinDetector {
        WinDetector::new(&Board::standard())
    }

    fn marks(values: &[u32]) -> HashSet<u32> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_pattern_count_is_54() {
        // 18 horizontal + 18 vertical + 9 + 9 diagonal for a 6x6 board.
        assert_eq!(detector().patterns().len(), 54);
    }

    #[test]
    fn test_row_win() {
        let detector = detector();
        let won = detector.check_win(&marks(&[1, 2, 3, 4])).unwrap();
        assert_eq!(won.values, [1, 2, 3, 4]);
    }

    #[test]
    fn test_column_win() {
        let detector = detector();
        let won = detector.check_win(&marks(&[3, 9, 18, 28])).unwrap();
        assert_eq!(won.values, [3, 9, 18, 28]);
    }

    #[test]
    fn test_down_right_diagonal_win() {
        let detector = detector();
        let won = detector.check_win(&marks(&[7, 16, 28, 45])).unwrap();
        assert_eq!(won.values, [7, 16, 28, 45]);
    }

    #[test]
    fn test_up_right_diagonal_win() {
        let detector = detector();
        let won = detector.check_win(&marks(&[25, 16, 9, 4])).unwrap();
        assert_eq!(won.values, [25, 16, 9, 4]);
    }

    #[test]
    fn test_three_marks_is_not_a_win() {
        assert!(detector().check_win(&marks(&[1, 2, 3])).is_none());
    }

    #[test]
    fn test_first_pattern_in_generation_order_reported() {
        // Marks complete both row 0's first window and column 2's window;
        // rows come first in generation order.
        let detector = detector();
        let marked = marks(&[1, 2, 3, 4, 9, 18, 28]);
        let won = detector.check_win(&marked).unwrap();
        assert_eq!(won.values, [1, 2, 3, 4]);
    }

    #[test]
    fn test_every_pattern_is_detected() {
        let detector = detector();
        for pattern in detector.patterns() {
            let marked: HashSet<u32> = pattern.values.iter().copied().collect();
            let won = detector.check_win(&marked).unwrap();
            assert!(won.values.iter().all(|value| marked.contains(value)));
        }
    }

    #[test]
    fn test_near_wins_reports_missing_value() {
        let detector = detector();
        let near = detector.near_wins(&marks(&[1, 2, 3, 10, 15]));
        assert!(near
            .iter()
            .any(|&(pattern, missing)| missing == 4 && pattern.values == [1, 2, 3, 4]));
    }

    #[test]
    fn test_near_wins_ignores_complete_patterns() {
        let detector = detector();
        let near = detector.near_wins(&marks(&[1, 2, 3, 4]));
        assert!(near
            .iter()
            .all(|&(pattern, _)| pattern.values != [1, 2, 3, 4]));
    }

    #[test]
    fn test_draw_requires_full_board() {
        let detector = detector();
        let board = Board::standard();
        let all: Vec<u32> = board.values().collect();
        let player: HashSet<u32> = all[..18].iter().copied().collect();
        let computer: HashSet<u32> = all[18..].iter().copied().collect();
        assert!(detector.is_draw(&player, &computer));

        let short: HashSet<u32> = all[18..35].iter().copied().collect();
        assert!(!detector.is_draw(&player, &short));
    }
}
