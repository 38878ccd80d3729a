//! Word data and per-round payloads.
//!
//! - `pool`: `WordSet` / `WordPool` reference data
//! - `round`: `Round` generation and the labelled board snapshot

pub mod pool;
pub mod round;

pub use pool::{WordPool, WordSet};
pub use round::{next_round, snapshot, CellLabel, LabeledCell, Round};
