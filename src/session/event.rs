//! Events crossing the boundary with the transport layer.
//!
//! The transport owns connections and room membership. It turns client
//! messages into `InboundEvent`s and delivers each `OutboundEvent` to the
//! audience the event names. The engine never addresses a connection.

use serde::{Deserialize, Serialize};

use crate::core::{CellIndex, RejectReason, Result, RoomId, Side, SideMap};
use crate::rules::GameResult;
use crate::words::Round;

/// Event delivered to the registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InboundEvent {
    /// A host asks for a new room.
    CreateRoom,
    /// Both players have joined.
    RoomReady { room: RoomId },
    /// The pre-game countdown ran out.
    CountdownElapsed { room: RoomId },
    /// A player tapped a cell.
    MoveRequested { room: RoomId, side: Side, cell: CellIndex },
    /// A player asked for a new game in the same room.
    RestartRequested { room: RoomId },
    /// The transport ends the game (e.g. a timeout on its side).
    GameOver { room: RoomId },
    /// Everyone left; drop the room.
    CloseRoom { room: RoomId },
}

impl InboundEvent {
    /// Target room, or `None` for `CreateRoom`.
    #[must_use]
    pub fn room(&self) -> Option<RoomId> {
        match self {
            InboundEvent::CreateRoom => None,
            InboundEvent::RoomReady { room }
            | InboundEvent::CountdownElapsed { room }
            | InboundEvent::MoveRequested { room, .. }
            | InboundEvent::RestartRequested { room }
            | InboundEvent::GameOver { room }
            | InboundEvent::CloseRoom { room } => Some(*room),
        }
    }
}

/// Event handled by a single `GameSession`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    RoomReady,
    CountdownElapsed,
    MoveRequested { side: Side, cell: CellIndex },
    RestartRequested,
    GameOver,
}

impl SessionEvent {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            SessionEvent::RoomReady => "RoomReady",
            SessionEvent::CountdownElapsed => "CountdownElapsed",
            SessionEvent::MoveRequested { .. } => "MoveRequested",
            SessionEvent::RestartRequested => "RestartRequested",
            SessionEvent::GameOver => "GameOver",
        }
    }
}

/// Who should receive an outbound event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Audience {
    /// Everyone in the room.
    Room,
    /// Only the connection that sent the triggering request.
    Requester,
}

/// Event produced for the transport to deliver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutboundEvent {
    RoomCreated {
        room: RoomId,
    },
    CountdownStarted {
        room: RoomId,
    },
    GameStarted {
        room: RoomId,
        initial_round: Round,
        turn: Side,
    },
    RoundUpdated {
        room: RoomId,
        round: Round,
        turn: Side,
        placed: CellIndex,
        flipped: Vec<CellIndex>,
    },
    MoveRejected {
        room: RoomId,
        side: Side,
        cell: CellIndex,
        reason: RejectReason,
    },
    GameFinished {
        room: RoomId,
        result: GameResult,
        score: SideMap<usize>,
    },
    GameReset {
        room: RoomId,
    },
    RoomClosed {
        room: RoomId,
    },
}

impl OutboundEvent {
    #[must_use]
    pub fn room(&self) -> RoomId {
        match self {
            OutboundEvent::RoomCreated { room }
            | OutboundEvent::CountdownStarted { room }
            | OutboundEvent::GameStarted { room, .. }
            | OutboundEvent::RoundUpdated { room, .. }
            | OutboundEvent::MoveRejected { room, .. }
            | OutboundEvent::GameFinished { room, .. }
            | OutboundEvent::GameReset { room }
            | OutboundEvent::RoomClosed { room } => *room,
        }
    }

    /// Rejections and the room handle go back to the requester only;
    /// everything else is broadcast to the room.
    #[must_use]
    pub fn audience(&self) -> Audience {
        match self {
            OutboundEvent::MoveRejected { .. } | OutboundEvent::RoomCreated { .. } => Audience::Requester,
            _ => Audience::Room,
        }
    }

    /// Encode for the wire.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from the wire.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
