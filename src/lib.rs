//! # wordclaim
//!
//! Session and board engine for a two-player territory-capture word game.
//!
//! A host screen shows a word; two players race to find another spelling
//! of it and, when they do, claim a cell on a shared grid. Claiming a cell
//! flips the opponent's cells touching it.
//!
//! ## Design Principles
//!
//! 1. **No I/O**: The engine consumes `InboundEvent`s and returns
//!    `OutboundEvent`s. Connections, membership and delivery belong to
//!    the transport.
//!
//! 2. **One writer per room**: Each `GameSession` is behind its own lock in
//!    the `RoomRegistry`; rooms never share mutable state.
//!
//! 3. **Two explicit adjacencies**: Placement reach and capture reach are
//!    separate named offset tables, both clipped at the grid edges.
//!
//! ## Modules
//!
//! - `core`: Cell/room ids, sides, RNG, configuration, errors
//! - `board`: Cell grid, ownership, adjacency tables
//! - `rules`: Move validation, capture, game results
//! - `words`: Word pool and round payloads
//! - `session`: Per-room state machine and room registry

pub mod core;
pub mod board;
pub mod rules;
pub mod words;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    CellIndex, RoomId, Side, SideMap,
    GameRng, GameRngState,
    SessionConfig, GameError, RejectReason, Result,
};

pub use crate::board::{Board, Owner};

pub use crate::rules::{apply_capture, is_legal_move, legal_moves, GameResult};

pub use crate::words::{next_round, CellLabel, LabeledCell, Round, WordPool, WordSet};

pub use crate::session::{
    Audience, GameSession, InboundEvent, MoveOutcome, MoveRecord, OutboundEvent,
    Phase, RoomRegistry, SessionEvent,
};
