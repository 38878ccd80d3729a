//! Board model: fixed cell grid, ownership, and the two adjacency relations.
//!
//! - `adjacency`: named offset tables for capture and placement adjacency
//! - `grid`: the `Board` itself and the `Owner` tag

pub mod adjacency;
pub mod grid;

pub use adjacency::{CAPTURE_OFFSETS, PLACEMENT_OFFSETS};
pub use grid::{Board, Owner};
