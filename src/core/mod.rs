//! Core engine types: identifiers, sides, RNG, configuration, errors.
//!
//! Everything here is independent of the board rules and the session
//! state machine. Hosts configure rooms via `SessionConfig`.

pub mod ids;
pub mod side;
pub mod rng;
pub mod config;
pub mod error;

pub use ids::{CellIndex, RoomId};
pub use side::{Side, SideMap};
pub use rng::{GameRng, GameRngState};
pub use config::{SessionConfig, REFERENCE_SIZE, REFERENCE_WIDTH};
pub use error::{GameError, RejectReason, Result};
