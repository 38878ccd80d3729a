//! Session configuration.
//!
//! A host provides one `SessionConfig` when it builds the room registry.
//! Every room created by that registry shares it:
//! - Board geometry (`size`, `width`)
//! - Starting cell for each side
//! - Which side moves first
//! - Base seed for the registry RNG
//!
//! Configs are plain serde documents so they can be loaded from JSON.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::ids::CellIndex;
use super::side::{Side, SideMap};

/// Cells on the reference board.
pub const REFERENCE_SIZE: usize = 144;

/// Width of the reference board.
pub const REFERENCE_WIDTH: usize = 12;

/// Configuration shared by every room of a registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Total number of cells.
    pub size: usize,

    /// Cells per row. Must divide `size`.
    pub width: usize,

    /// Cell seeded for each side when play starts.
    pub starting_cells: SideMap<CellIndex>,

    /// Side that moves first.
    pub first_side: Side,

    /// Base seed for room ids and word shuffles.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::reference()
    }
}

impl SessionConfig {
    /// The reference instance: 12x12 board, blue (Side A) at 117 moving
    /// first, red (Side B) at 26.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            size: REFERENCE_SIZE,
            width: REFERENCE_WIDTH,
            starting_cells: SideMap::new(|side| match side {
                Side::A => CellIndex::new(117),
                Side::B => CellIndex::new(26),
            }),
            first_side: Side::A,
            seed: 0,
        }
    }

    /// Create a config for an arbitrary board with the given starting cells.
    #[must_use]
    pub fn new(size: usize, width: usize, start_a: CellIndex, start_b: CellIndex) -> Self {
        Self {
            size,
            width,
            starting_cells: SideMap::new(|side| match side {
                Side::A => start_a,
                Side::B => start_b,
            }),
            first_side: Side::A,
            seed: 0,
        }
    }

    /// Set the side that moves first.
    #[must_use]
    pub fn with_first_side(mut self, side: Side) -> Self {
        self.first_side = side;
        self
    }

    /// Set the base RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Board height derived from size and width.
    #[must_use]
    pub fn height(&self) -> usize {
        self.size / self.width
    }

    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config describes a playable board.
    ///
    /// Starting cells must be on the board and distinct.
    pub fn validate(&self) -> Result<()> {
        check_geometry(self.size, self.width)?;

        for (side, cell) in self.starting_cells.iter() {
            if cell.index() >= self.size {
                return Err(GameError::config(format!(
                    "starting cell {cell} for {side} is outside a board of {} cells",
                    self.size
                )));
            }
        }

        let a = self.starting_cells[Side::A];
        let b = self.starting_cells[Side::B];
        if a == b {
            return Err(GameError::config(format!("both sides start on {a}")));
        }

        Ok(())
    }
}

/// Validate board geometry: both positive, `size` a multiple of `width`,
/// and every index representable as a `CellIndex`.
pub(crate) fn check_geometry(size: usize, width: usize) -> Result<()> {
    if size == 0 || width == 0 {
        return Err(GameError::config(format!(
            "board size and width must be positive (size {size}, width {width})"
        )));
    }
    if size % width != 0 {
        return Err(GameError::config(format!(
            "board size {size} is not divisible by width {width}"
        )));
    }
    if u32::try_from(size).is_err() {
        return Err(GameError::config(format!("board size {size} is too large")));
    }
    Ok(())
}
