use std::collections::HashSet;
use std::sync::Arc;

use crate::board::Board;
use crate::types::{MoveRejection, Multiplier};

/// Legality checks for a single move: target must be unmarked, on the board,
/// and reachable as multiplier x some board value.
#[derive(Clone)]
pub struct MoveValidator {
    board: Arc<Board>,
}

impl MoveValidator {
    pub fn new(board: Arc<Board>) -> Self {
        Self { board }
    }

    /// Every (operand, product) pair whose product lands on the board, in
    /// board scan order. Pairs are kept per operand so the factorization a
    /// mover used is available for move descriptions.
    pub fn find_reachable_values(&self, multiplier: Multiplier) -> Vec<(u32, u32)> {
        let mut pairs = Vec::new();
        for operand in self.board.values() {
            let product = u32::from(multiplier.get()) * operand;
            if self.board.contains(product) {
                pairs.push((operand, product));
            }
        }
        pairs
    }

    /// Reachable pairs whose product is not yet marked by either side.
    pub fn legal_moves(
        &self,
        multiplier: Multiplier,
        player_marks: &HashSet<u32>,
        computer_marks: &HashSet<u32>,
    ) -> Vec<(u32, u32)> {
        self.find_reachable_values(multiplier)
            .into_iter()
            .filter(|(_, product)| {
                !player_marks.contains(product) && !computer_marks.contains(product)
            })
            .collect()
    }

    pub fn check_move(
        &self,
        multiplier: Multiplier,
        target: u32,
        player_marks: &HashSet<u32>,
        computer_marks: &HashSet<u32>,
    ) -> Result<(), MoveRejection> {
        if player_marks.contains(&target) || computer_marks.contains(&target) {
            return Err(MoveRejection::AlreadyMarked);
        }
        if !self.board.contains(target) {
            return Err(MoveRejection::NotOnBoard);
        }
        let reachable = self
            .find_reachable_values(multiplier)
            .iter()
            .any(|&(_, product)| product == target);
        if !reachable {
            return Err(MoveRejection::NotAValidProduct);
        }
        Ok(())
    }
}
