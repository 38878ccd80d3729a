//! Game results.

use serde::{Deserialize, Serialize};

use super::validator::has_legal_move;
use crate::board::Board;
use crate::core::{Side, SideMap};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The side holding more cells.
    Winner(Side),
    /// Both sides hold the same number of cells.
    Draw,
}

impl GameResult {
    /// Decide the result from the current cell counts.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let a = board.count_for(Side::A);
        let b = board.count_for(Side::B);
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => GameResult::Winner(Side::A),
            std::cmp::Ordering::Less => GameResult::Winner(Side::B),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }
}

/// Cell count per side.
#[must_use]
pub fn score(board: &Board) -> SideMap<usize> {
    SideMap::new(|side| board.count_for(side))
}

/// Check if play can continue with `to_move` next.
///
/// Play stops once every cell is claimed or the side to move has no
/// legal placement left.
#[must_use]
pub fn is_terminal(board: &Board, to_move: Side) -> bool {
    board.is_full() || !has_legal_move(board, to_move)
}
