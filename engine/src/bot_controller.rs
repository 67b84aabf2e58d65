use std::collections::HashSet;

use crate::session_rng::SessionRng;
use crate::types::{Difficulty, Multiplier};
use crate::validate::MoveValidator;
use crate::win_detector::WinDetector;

/// Multipliers within this share of the best legal-move count are all
/// acceptable on normal difficulty.
const NORMAL_TIER_RATIO: f64 = 0.7;

/// Pick a multiplier for the computer based on how many legal moves each one
/// opens up. Every tier falls back to a uniform 1..=9 pick when no multiplier
/// has any legal move left.
pub fn choose_multiplier(
    validator: &MoveValidator,
    player_marks: &HashSet<u32>,
    computer_marks: &HashSet<u32>,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Multiplier {
    let counts: Vec<(Multiplier, usize)> = Multiplier::all()
        .map(|multiplier| {
            let count = validator
                .legal_moves(multiplier, player_marks, computer_marks)
                .len();
            (multiplier, count)
        })
        .collect();

    let max = counts.iter().map(|&(_, count)| count).max().unwrap_or(0);

    let pool: Vec<Multiplier> = if max == 0 {
        Multiplier::all().collect()
    } else {
        counts
            .iter()
            .filter(|&&(_, count)| match difficulty {
                Difficulty::Easy => count > 0,
                Difficulty::Normal => count as f64 >= max as f64 * NORMAL_TIER_RATIO,
                Difficulty::Hard => count == max,
            })
            .map(|&(multiplier, _)| multiplier)
            .collect()
    };

    rng.pick(&pool).copied().unwrap_or_default()
}

/// Pick the computer's target for the given multiplier. Returns the chosen
/// (operand, product) pair, or None when the multiplier has no legal target.
///
/// On hard difficulty with a detector supplied, winning moves are taken
/// before blocking ones; both scans run in legal-move order and only ever
/// simulate on copies of the mark sets.
pub fn choose_move(
    validator: &MoveValidator,
    multiplier: Multiplier,
    player_marks: &HashSet<u32>,
    computer_marks: &HashSet<u32>,
    difficulty: Difficulty,
    lookahead: Option<&WinDetector>,
    rng: &mut SessionRng,
) -> Option<(u32, u32)> {
    let legal = validator.legal_moves(multiplier, player_marks, computer_marks);
    if legal.is_empty() {
        return None;
    }

    if difficulty == Difficulty::Hard
        && let Some(detector) = lookahead
    {
        for &(operand, target) in &legal {
            let mut simulated = computer_marks.clone();
            simulated.insert(target);
            if detector.check_win(&simulated).is_some() {
                return Some((operand, target));
            }
        }

        for &(operand, target) in &legal {
            let mut simulated = player_marks.clone();
            simulated.insert(target);
            if detector.check_win(&simulated).is_some() {
                return Some((operand, target));
            }
        }
    }

    rng.pick(&legal).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use std::sync::Arc;

    fn setup() -> (MoveValidator, WinDetector) {
        let board = Arc::new(Board::standard());
        (MoveValidator::new(Arc::clone(&board)), WinDetector::new(&board))
    }

    fn marks(values: &[u32]) -> HashSet<u32> {
        values.iter().copied().collect()
    }

    fn multiplier(value: u8) -> Multiplier {
        Multiplier::new(value).unwrap()
    }

    fn all_cells_split() -> (HashSet<u32>, HashSet<u32>) {
        let all: Vec<u32> = Board::standard().values().collect();
        let player = all[..18].iter().copied().collect();
        let computer = all[18..].iter().copied().collect();
        (player, computer)
    }

    #[test]
    fn test_hard_multiplier_picks_strict_max() {
        let (validator, _) = setup();
        // On an empty board multiplier 1 reaches all 36 cells, strictly more
        // than any other multiplier, so hard picks it regardless of seed.
        let empty = HashSet::new();
        for seed in 0..20 {
            let mut rng = SessionRng::new(seed);
            let chosen =
                choose_multiplier(&validator, &empty, &empty, Difficulty::Hard, &mut rng);
            assert_eq!(chosen.get(), 1);
        }
    }

    #[test]
    fn test_easy_multiplier_skips_exhausted_selectors() {
        let (validator, _) = setup();
        // Marking every product reachable with multiplier 5 leaves it with
        // zero legal moves; easy must never choose it.
        let player = marks(&[5, 10, 15, 20, 25, 30, 35, 40, 45]);
        let computer = HashSet::new();
        assert!(validator
            .legal_moves(multiplier(5), &player, &computer)
            .is_empty());
        for seed in 0..50 {
            let mut rng = SessionRng::new(seed);
            let chosen =
                choose_multiplier(&validator, &player, &computer, Difficulty::Easy, &mut rng);
            assert_ne!(chosen.get(), 5);
        }
    }

    #[test]
    fn test_multiplier_fallback_when_board_exhausted() {
        let (validator, _) = setup();
        let (player, computer) = all_cells_split();
        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            let mut rng = SessionRng::new(3);
            let chosen = choose_multiplier(&validator, &player, &computer, difficulty, &mut rng);
            assert!((1..=9).contains(&chosen.get()));
        }
    }

    #[test]
    fn test_normal_multiplier_stays_near_best() {
        let (validator, _) = setup();
        let empty = HashSet::new();
        let counts: Vec<usize> = Multiplier::all()
            .map(|m| validator.legal_moves(m, &empty, &empty).len())
            .collect();
        let max = *counts.iter().max().unwrap();
        for seed in 0..30 {
            let mut rng = SessionRng::new(seed);
            let chosen =
                choose_multiplier(&validator, &empty, &empty, Difficulty::Normal, &mut rng);
            let count = counts[usize::from(chosen.get()) - 1];
            assert!(count as f64 >= max as f64 * NORMAL_TIER_RATIO);
        }
    }

    #[test]
    fn test_no_legal_moves_returns_none() {
        let (validator, detector) = setup();
        let (player, computer) = all_cells_split();
        let mut rng = SessionRng::new(1);
        let chosen = choose_move(
            &validator,
            multiplier(3),
            &player,
            &computer,
            Difficulty::Hard,
            Some(&detector),
            &mut rng,
        );
        assert_eq!(chosen, None);
    }

    #[test]
    fn test_hard_takes_win_over_block() {
        let (validator, detector) = setup();
        // Computer needs 10 to finish [7, 8, 9, 10]; the player needs 4 to
        // finish [1, 2, 3, 4]. The block target 4 comes first in scan order,
        // but the winning target 10 must be taken.
        let player = marks(&[1, 2, 3]);
        let computer = marks(&[7, 8, 9]);
        for seed in 0..20 {
            let mut rng = SessionRng::new(seed);
            let chosen = choose_move(
                &validator,
                multiplier(1),
                &player,
                &computer,
                Difficulty::Hard,
                Some(&detector),
                &mut rng,
            );
            assert_eq!(chosen, Some((10, 10)));
        }
    }

    #[test]
    fn test_hard_blocks_when_no_win_available() {
        let (validator, detector) = setup();
        let player = marks(&[1, 2, 3]);
        let computer = marks(&[54, 72]);
        for seed in 0..20 {
            let mut rng = SessionRng::new(seed);
            let chosen = choose_move(
                &validator,
                multiplier(1),
                &player,
                &computer,
                Difficulty::Hard,
                Some(&detector),
                &mut rng,
            );
            assert_eq!(chosen, Some((4, 4)));
        }
    }

    #[test]
    fn test_hard_without_lookahead_is_random_but_legal() {
        let (validator, _) = setup();
        let player = marks(&[1, 2, 3]);
        let computer = marks(&[7, 8, 9]);
        let legal = validator.legal_moves(multiplier(1), &player, &computer);
        let mut rng = SessionRng::new(5);
        let chosen = choose_move(
            &validator,
            multiplier(1),
            &player,
            &computer,
            Difficulty::Hard,
            None,
            &mut rng,
        );
        assert!(legal.contains(&chosen.unwrap()));
    }

    #[test]
    fn test_choices_replay_with_same_seed() {
        let (validator, detector) = setup();
        let player = marks(&[9, 16, 25]);
        let computer = marks(&[4, 10, 21]);
        let mut first = SessionRng::new(99);
        let mut second = SessionRng::new(99);
        for _ in 0..10 {
            let a = choose_multiplier(&validator, &player, &computer, Difficulty::Normal, &mut first);
            let b = choose_multiplier(&validator, &player, &computer, Difficulty::Normal, &mut second);
            assert_eq!(a, b);
            let move_a = choose_move(
                &validator,
                a,
                &player,
                &computer,
                Difficulty::Normal,
                Some(&detector),
                &mut first,
            );
            let move_b = choose_move(
                &validator,
                b,
                &player,
                &computer,
                Difficulty::Normal,
                Some(&detector),
                &mut second,
            );
            assert_eq!(move_a, move_b);
        }
    }
}
