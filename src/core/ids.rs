//! Cell and room identifiers.
//!
//! ## CellIndex
//!
//! Cells are addressed by their position in row-major order. The grid
//! coordinate is always derived from the index and the board width:
//!
//! ```
//! use wordclaim::core::CellIndex;
//!
//! let cell = CellIndex::new(26);
//! assert_eq!(cell.row(12), 2);
//! assert_eq!(cell.col(12), 2);
//! assert_eq!(CellIndex::from_coords(2, 2, 12), cell);
//! ```
//!
//! ## RoomId
//!
//! Opaque room identifier handed out by the registry.

use serde::{Deserialize, Serialize};

/// Index of a cell on the board, in `[0, size)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellIndex(pub u32);

impl CellIndex {
    /// Create a new cell index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Build an index from a grid coordinate.
    #[must_use]
    pub const fn from_coords(row: usize, col: usize, width: usize) -> Self {
        Self((row * width + col) as u32)
    }

    /// Get the raw index as `usize`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row of this cell on a board of the given width.
    #[must_use]
    pub const fn row(self, width: usize) -> usize {
        self.index() / width
    }

    /// Column of this cell on a board of the given width.
    #[must_use]
    pub const fn col(self, width: usize) -> usize {
        self.index() % width
    }
}

impl std::fmt::Display for CellIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}

/// Game room identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub u32);

impl RoomId {
    /// Create a new room ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_coords() {
        let cell = CellIndex::new(11);
        assert_eq!(cell.row(12), 0);
        assert_eq!(cell.col(12), 11);

        let next_row = CellIndex::new(12);
        assert_eq!(next_row.row(12), 1);
        assert_eq!(next_row.col(12), 0);
    }

    #[test]
    fn test_cell_from_coords_roundtrip() {
        for i in 0..144u32 {
            let cell = CellIndex::new(i);
            assert_eq!(CellIndex::from_coords(cell.row(12), cell.col(12), 12), cell);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CellIndex::new(5)), "Cell(5)");
        assert_eq!(format!("{}", RoomId::new(4242)), "4242");
    }
}
