//! The two adjacency relations of the board.
//!
//! Both are expressed as `(row, col)` steps rather than linear index
//! offsets so a step that would leave the grid is dropped instead of
//! wrapping onto the neighbouring row.
//!
//! ## Capture adjacency
//!
//! The 3x3 Moore neighbourhood minus the centre. A placement flips
//! opposing cells in this set.
//!
//! ## Placement adjacency
//!
//! The coarser "reach" used to decide where a side may place next. In
//! linear terms, for a board of width `w`, the reachable offsets are
//! `±(w-2)`, `±(w-1)`, `±(w+1)`, `±(2w-1)`, `±(2w+1)` and `±(2w-2)`.
//!
//! ```
//! use wordclaim::board::adjacency::{capture_neighbors, placement_neighbors};
//! use wordclaim::core::CellIndex;
//!
//! // 11 ends row 0; 12 starts row 1 and is not touching it.
//! let n = capture_neighbors(CellIndex::new(11), 12, 2);
//! assert!(!n.contains(&CellIndex::new(12)));
//!
//! // 13 reaches 2 (offset w-1) but not 1 (straight up).
//! let reach = placement_neighbors(CellIndex::new(13), 12, 2);
//! assert!(reach.contains(&CellIndex::new(2)));
//! assert!(!reach.contains(&CellIndex::new(1)));
//! ```

use smallvec::SmallVec;

use crate::core::CellIndex;

/// A `(row, col)` displacement on the grid.
pub type Step = (isize, isize);

/// Capture adjacency: every cell touching the centre, diagonals included.
#[rustfmt::skip]
pub const CAPTURE_OFFSETS: [Step; 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Placement adjacency, listed as `+offset` then `-offset` for each
/// linear offset `w-2, w-1, w+1, 2w-1, 2w+1, 2w-2`.
#[rustfmt::skip]
pub const PLACEMENT_OFFSETS: [Step; 12] = [
    (1, -2), (-1, 2),
    (1, -1), (-1, 1),
    (1, 1),  (-1, -1),
    (2, -1), (-2, 1),
    (2, 1),  (-2, -1),
    (2, -2), (-2, 2),
];

/// Apply a step to a cell, or `None` if the cell or the target is off
/// the grid.
#[must_use]
pub fn step(cell: CellIndex, (dr, dc): Step, width: usize, height: usize) -> Option<CellIndex> {
    if cell.row(width) >= height {
        return None;
    }
    let row = cell.row(width).checked_add_signed(dr)?;
    let col = cell.col(width).checked_add_signed(dc)?;
    (row < height && col < width).then(|| CellIndex::from_coords(row, col, width))
}

/// Capture neighbours of `cell` (up to 8).
#[must_use]
pub fn capture_neighbors(cell: CellIndex, width: usize, height: usize) -> SmallVec<[CellIndex; 8]> {
    CAPTURE_OFFSETS
        .iter()
        .filter_map(|&s| step(cell, s, width, height))
        .collect()
}

/// Cells reachable for placement from a friendly `cell` (up to 12).
#[must_use]
pub fn placement_neighbors(cell: CellIndex, width: usize, height: usize) -> SmallVec<[CellIndex; 12]> {
    PLACEMENT_OFFSETS
        .iter()
        .filter_map(|&s| step(cell, s, width, height))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(cell: u32, step: Step, width: usize) -> isize {
        cell as isize + step.0 * width as isize + step.1
    }

    #[test]
    fn test_placement_offsets_match_linear_table() {
        let w = 12isize;
        let mut expected = vec![w - 2, w - 1, w + 1, 2 * w - 1, 2 * w + 1, 2 * w - 2];
        expected.extend(expected.clone().into_iter().map(|o| -o));
        expected.sort_unstable();

        let mut actual: Vec<isize> = PLACEMENT_OFFSETS
            .iter()
            .map(|&s| linear(0, s, 12))
            .collect();
        actual.sort_unstable();

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_offsets_are_symmetric() {
        for &(dr, dc) in &CAPTURE_OFFSETS {
            assert!(CAPTURE_OFFSETS.contains(&(-dr, -dc)));
        }
        for &(dr, dc) in &PLACEMENT_OFFSETS {
            assert!(PLACEMENT_OFFSETS.contains(&(-dr, -dc)));
        }
    }

    #[test]
    fn test_interior_cell_has_full_neighbourhoods() {
        // Row 5, col 5 on the reference board.
        let cell = CellIndex::new(65);
        assert_eq!(capture_neighbors(cell, 12, 12).len(), 8);
        assert_eq!(placement_neighbors(cell, 12, 12).len(), 12);
    }

    #[test]
    fn test_corner_capture_neighbours() {
        let mut n: Vec<u32> = capture_neighbors(CellIndex::new(0), 12, 12).iter().map(|c| c.0).collect();
        n.sort_unstable();
        assert_eq!(n, vec![1, 12, 13]);

        let mut n: Vec<u32> = capture_neighbors(CellIndex::new(11), 12, 12).iter().map(|c| c.0).collect();
        n.sort_unstable();
        assert_eq!(n, vec![10, 22, 23]);
    }

    #[test]
    fn test_left_edge_does_not_wrap() {
        // Cell 12 starts row 1; 11 and 23 end rows 0 and 1.
        let n = capture_neighbors(CellIndex::new(12), 12, 12);
        assert!(!n.contains(&CellIndex::new(11)));
        assert!(!n.contains(&CellIndex::new(23)));

        // w-2 from column 0 would land on column 10 of the next row.
        let reach = placement_neighbors(CellIndex::new(12), 12, 12);
        assert!(!reach.contains(&CellIndex::new(22)));
    }

    #[test]
    fn test_step_off_grid() {
        assert_eq!(step(CellIndex::new(0), (-1, 0), 12, 12), None);
        assert_eq!(step(CellIndex::new(143), (0, 1), 12, 12), None);
        assert_eq!(step(CellIndex::new(143), (1, 0), 12, 12), None);
        assert_eq!(step(CellIndex::new(13), (-1, 1), 12, 12), Some(CellIndex::new(2)));
    }

    #[test]
    fn test_off_grid_origin_has_no_neighbours() {
        // Row 12 is one past the last row; stepping up would land on row 11.
        assert_eq!(step(CellIndex::new(144), (-1, 0), 12, 12), None);
        assert!(capture_neighbors(CellIndex::new(144), 12, 12).is_empty());
        assert!(placement_neighbors(CellIndex::new(157), 12, 12).is_empty());
    }
}
