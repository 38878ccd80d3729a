//! Capture propagation.
//!
//! After a placement every opposing cell in the capture neighbourhood of
//! the placed cell switches to the placing side. The flip is one level
//! deep: a freshly flipped cell does not flip its own neighbours.

use smallvec::SmallVec;
use tracing::debug;

use crate::board::{Board, Owner};
use crate::core::{CellIndex, Side};

/// Flip opposing capture-neighbours of `placed` to `side`.
///
/// Returns the flipped cells in neighbourhood order. Calling it again on
/// the same board returns an empty set, as does a `placed` cell that is
/// not on the board.
pub fn apply_capture(board: &mut Board, placed: CellIndex, side: Side) -> SmallVec<[CellIndex; 8]> {
    let opponent = Owner::Claimed(side.opponent());

    let flipped: SmallVec<[CellIndex; 8]> = board
        .neighbors_of(placed)
        .into_iter()
        .filter(|&cell| board.owner_of(cell) == opponent)
        .collect();

    for &cell in &flipped {
        board.set_owner(cell, Owner::Claimed(side));
    }

    if !flipped.is_empty() {
        debug!(%side, cell = %placed, flipped = flipped.len(), "Captured cells");
    }

    flipped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(cells: &[CellIndex]) -> Vec<u32> {
        let mut v: Vec<u32> = cells.iter().map(|c| c.0).collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_flips_only_opposing_neighbours() {
        let mut board = Board::new(144, 12).unwrap();
        // Ring of Side B around 65, plus one friendly and one far cell.
        for i in [52, 53, 54, 64] {
            board.set_owner(CellIndex::new(i), Side::B.into());
        }
        board.set_owner(CellIndex::new(66), Side::A.into());
        board.set_owner(CellIndex::new(90), Side::B.into());

        board.set_owner(CellIndex::new(65), Side::A.into());
        let flipped = apply_capture(&mut board, CellIndex::new(65), Side::A);

        assert_eq!(idx(&flipped), vec![52, 53, 54, 64]);
        assert_eq!(board.owner_of(CellIndex::new(90)), Owner::Claimed(Side::B));
        assert_eq!(board.count_for(Side::A), 6);
        assert_eq!(board.count_for(Side::B), 1);
    }

    #[test]
    fn test_single_depth() {
        let mut board = Board::new(144, 12).unwrap();
        // 53 touches 65; 41 touches 53 but not 65.
        board.set_owner(CellIndex::new(53), Side::B.into());
        board.set_owner(CellIndex::new(41), Side::B.into());

        board.set_owner(CellIndex::new(65), Side::A.into());
        let flipped = apply_capture(&mut board, CellIndex::new(65), Side::A);

        assert_eq!(idx(&flipped), vec![53]);
        assert_eq!(board.owner_of(CellIndex::new(41)), Owner::Claimed(Side::B));
    }

    #[test]
    fn test_no_wraparound_at_row_edge() {
        let mut board = Board::new(144, 12).unwrap();
        // 12 starts row 1; 11 and 23 sit at the end of rows 0 and 1.
        board.set_owner(CellIndex::new(11), Side::B.into());
        board.set_owner(CellIndex::new(23), Side::B.into());

        board.set_owner(CellIndex::new(12), Side::A.into());
        let flipped = apply_capture(&mut board, CellIndex::new(12), Side::A);

        assert!(flipped.is_empty());
        assert_eq!(board.count_for(Side::B), 2);
    }

    #[test]
    fn test_off_board_placement_flips_nothing() {
        let mut board = Board::new(144, 12).unwrap();
        board.set_owner(CellIndex::new(132), Side::B.into());
        board.set_owner(CellIndex::new(133), Side::B.into());

        let flipped = apply_capture(&mut board, CellIndex::new(144), Side::A);

        assert!(flipped.is_empty());
        assert_eq!(board.count_for(Side::B), 2);
    }

    #[test]
    fn test_idempotent() {
        let mut board = Board::new(24, 12).unwrap();
        board.set_owner(CellIndex::new(1), Side::B.into());
        board.set_owner(CellIndex::new(0), Side::A.into());

        let first = apply_capture(&mut board, CellIndex::new(0), Side::A);
        let after_first = board.clone();
        let second = apply_capture(&mut board, CellIndex::new(0), Side::A);

        assert_eq!(idx(&first), vec![1]);
        assert!(second.is_empty());
        assert_eq!(board, after_first);
    }
}
