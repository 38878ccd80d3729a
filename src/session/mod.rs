//! Session coordination: one state machine per room, plus the registry
//! that routes inbound events to the right room.
//!
//! - `phase`: room lifecycle phases
//! - `event`: inbound/outbound events at the transport boundary
//! - `session`: `GameSession`, the per-room aggregate
//! - `registry`: `RoomRegistry`, rooms keyed by `RoomId`

pub mod phase;
pub mod event;
#[allow(clippy::module_inception)]
pub mod session;
pub mod registry;

pub use phase::Phase;
pub use event::{Audience, InboundEvent, OutboundEvent, SessionEvent};
pub use session::{GameSession, MoveOutcome, MoveRecord};
pub use registry::{RoomRegistry, SessionHandle, ROOM_ID_SPACE};
