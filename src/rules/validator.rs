//! Move validation.
//!
//! A move is legal iff the target cell is on the board, unclaimed, and in
//! the placement reach of at least one cell the mover already holds.
//! Whose turn it is gets checked by the session, not here.

use crate::board::Board;
use crate::core::{CellIndex, GameError, Result, Side};

/// Check whether `side` may place on `cell`.
#[must_use]
pub fn is_legal_move(board: &Board, side: Side, cell: CellIndex) -> bool {
    if !board.contains(cell) || !board.owner_of(cell).is_unclaimed() {
        return false;
    }

    // Placement adjacency is symmetric, so scanning the reach of the
    // candidate is the same as scanning the reach of every friendly cell.
    let friendly = board.cells_of(side);
    board
        .placement_reach(cell)
        .iter()
        .any(|reach| friendly.contains(reach))
}

/// `is_legal_move` as a `Result`, failing with `IllegalMove`.
pub fn check_move(board: &Board, side: Side, cell: CellIndex) -> Result<()> {
    if is_legal_move(board, side, cell) {
        Ok(())
    } else {
        Err(GameError::IllegalMove { side, cell })
    }
}

/// Every cell `side` could legally place on, in index order.
#[must_use]
pub fn legal_moves(board: &Board, side: Side) -> Vec<CellIndex> {
    let mut moves: Vec<CellIndex> = board
        .cells_of(side)
        .iter()
        .flat_map(|&cell| board.placement_reach(cell))
        .filter(|&cell| board.owner_of(cell).is_unclaimed())
        .collect();

    moves.sort_unstable();
    moves.dedup();
    moves
}

/// Check if `side` has at least one legal placement.
#[must_use]
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    board
        .cells_of(side)
        .iter()
        .flat_map(|&cell| board.placement_reach(cell))
        .any(|cell| board.owner_of(cell).is_unclaimed())
}
