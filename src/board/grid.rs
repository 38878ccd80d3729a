//! The cell grid and per-cell ownership.
//!
//! ## Owner
//!
//! Each cell is `Unclaimed` or claimed by one side.
//!
//! ## Board
//!
//! Fixed-size grid in row-major order. Besides the per-cell owner it keeps
//! one owned-cell set per side so move validation only has to walk the
//! mover's cells. Both views are updated together in `set_owner`.
//!
//! Uses `im` persistent structures so cloning a board for a snapshot is O(1).

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::adjacency::{capture_neighbors, placement_neighbors};
use crate::core::config::check_geometry;
use crate::core::{CellIndex, Result, Side, SideMap};

/// Ownership tag of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    #[default]
    Unclaimed,
    Claimed(Side),
}

impl Owner {
    /// The owning side, if any.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Owner::Unclaimed => None,
            Owner::Claimed(side) => Some(side),
        }
    }

    #[must_use]
    pub const fn is_unclaimed(self) -> bool {
        matches!(self, Owner::Unclaimed)
    }
}

impl From<Side> for Owner {
    fn from(side: Side) -> Self {
        Owner::Claimed(side)
    }
}

/// Rectangular board of `size` cells, `width` per row.
///
/// ## Example
///
/// ```
/// use wordclaim::board::{Board, Owner};
/// use wordclaim::core::{CellIndex, Side};
///
/// let mut board = Board::new(24, 12).unwrap();
/// board.set_owner(CellIndex::new(13), Side::B.into());
///
/// assert_eq!(board.owner_of(CellIndex::new(13)), Owner::Claimed(Side::B));
/// assert_eq!(board.count_for(Side::B), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vector<Owner>,
    owned: SideMap<OrdSet<CellIndex>>,
}

impl Board {
    /// Allocate `size` unclaimed cells.
    ///
    /// Fails with `InvalidConfiguration` if either dimension is zero or
    /// `size` is not a multiple of `width`.
    pub fn new(size: usize, width: usize) -> Result<Self> {
        check_geometry(size, width)?;

        Ok(Self {
            width,
            height: size / width,
            cells: std::iter::repeat(Owner::Unclaimed).take(size).collect(),
            owned: SideMap::new(|_| OrdSet::new()),
        })
    }

    /// Total number of cells.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if `cell` is on this board.
    #[must_use]
    pub fn contains(&self, cell: CellIndex) -> bool {
        cell.index() < self.size()
    }

    /// Capture adjacency of `cell`: its Moore neighbourhood, clipped to
    /// the grid. Empty for a cell that is not on the board.
    #[must_use]
    pub fn neighbors_of(&self, cell: CellIndex) -> SmallVec<[CellIndex; 8]> {
        capture_neighbors(cell, self.width, self.height)
    }

    /// Placement adjacency of `cell`, clipped to the grid.
    #[must_use]
    pub fn placement_reach(&self, cell: CellIndex) -> SmallVec<[CellIndex; 12]> {
        placement_neighbors(cell, self.width, self.height)
    }

    /// Owner of `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is not on the board.
    #[must_use]
    pub fn owner_of(&self, cell: CellIndex) -> Owner {
        self.cells[cell.index()]
    }

    /// Set the owner of a single cell. Callers validate first.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is not on the board.
    pub fn set_owner(&mut self, cell: CellIndex, owner: Owner) {
        let previous = self.cells.set(cell.index(), owner);

        if let Some(side) = previous.side() {
            self.owned[side].remove(&cell);
        }
        if let Some(side) = owner.side() {
            self.owned[side].insert(cell);
        }
    }

    /// Number of cells held by `side`.
    #[must_use]
    pub fn count_for(&self, side: Side) -> usize {
        self.owned[side].len()
    }

    /// Cells held by `side`, in index order.
    #[must_use]
    pub fn cells_of(&self, side: Side) -> &OrdSet<CellIndex> {
        &self.owned[side]
    }

    /// Number of cells nobody holds yet.
    #[must_use]
    pub fn unclaimed_count(&self) -> usize {
        self.size() - self.count_for(Side::A) - self.count_for(Side::B)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.unclaimed_count() == 0
    }

    /// Iterate over every cell and its owner in index order.
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, Owner)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &owner)| (CellIndex::new(i as u32), owner))
    }

    /// Return every cell to `Unclaimed`.
    pub fn clear(&mut self) {
        self.cells = std::iter::repeat(Owner::Unclaimed).take(self.size()).collect();
        self.owned = SideMap::new(|_| OrdSet::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameError;

    #[test]
    fn test_new_board_is_unclaimed() {
        let board = Board::new(144, 12).unwrap();

        assert_eq!(board.size(), 144);
        assert_eq!(board.width(), 12);
        assert_eq!(board.height(), 12);
        assert!(board.iter().all(|(_, owner)| owner.is_unclaimed()));
        assert_eq!(board.unclaimed_count(), 144);
    }

    #[test]
    fn test_invalid_geometry() {
        assert!(matches!(Board::new(100, 12), Err(GameError::InvalidConfiguration(_))));
        assert!(matches!(Board::new(0, 12), Err(GameError::InvalidConfiguration(_))));
        assert!(matches!(Board::new(12, 0), Err(GameError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_set_owner_keeps_sets_consistent() {
        let mut board = Board::new(24, 12).unwrap();
        let cell = CellIndex::new(5);

        board.set_owner(cell, Side::A.into());
        assert!(board.cells_of(Side::A).contains(&cell));
        assert_eq!(board.count_for(Side::A), 1);

        board.set_owner(cell, Side::B.into());
        assert!(!board.cells_of(Side::A).contains(&cell));
        assert!(board.cells_of(Side::B).contains(&cell));
        assert_eq!(board.count_for(Side::A), 0);
        assert_eq!(board.count_for(Side::B), 1);

        board.set_owner(cell, Owner::Unclaimed);
        assert_eq!(board.count_for(Side::B), 0);
        assert_eq!(board.unclaimed_count(), 24);
    }

    #[test]
    fn test_neighbors_of_row_end() {
        let board = Board::new(24, 12).unwrap();
        let n = board.neighbors_of(CellIndex::new(11));

        assert!(!n.contains(&CellIndex::new(12)));
        assert!(!n.contains(&CellIndex::new(0)));

        let mut n = n.to_vec();
        n.sort_unstable();
        assert_eq!(n, vec![CellIndex::new(10), CellIndex::new(22), CellIndex::new(23)]);
    }

    #[test]
    fn test_off_board_cell_has_no_neighbours() {
        let board = Board::new(144, 12).unwrap();

        assert!(board.neighbors_of(CellIndex::new(144)).is_empty());
        assert!(board.placement_reach(CellIndex::new(150)).is_empty());
    }

    #[test]
    fn test_clear() {
        let mut board = Board::new(24, 12).unwrap();
        board.set_owner(CellIndex::new(0), Side::A.into());
        board.set_owner(CellIndex::new(13), Side::B.into());

        board.clear();

        assert_eq!(board.unclaimed_count(), 24);
        assert!(board.cells_of(Side::A).is_empty());
        assert!(board.cells_of(Side::B).is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = Board::new(24, 12).unwrap();
        board.set_owner(CellIndex::new(3), Side::A.into());

        let snapshot = board.clone();
        board.set_owner(CellIndex::new(4), Side::A.into());

        assert_eq!(snapshot.count_for(Side::A), 1);
        assert_eq!(board.count_for(Side::A), 2);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(4, 2).unwrap();
        for i in 0..4 {
            board.set_owner(CellIndex::new(i), Side::A.into());
        }
        assert!(board.is_full());
    }
}
