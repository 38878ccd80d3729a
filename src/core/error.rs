//! Crate-wide error type.
//!
//! Fatal errors (`InvalidConfiguration`, `InvalidWordPool`) stop a room
//! from being created. Move errors are recoverable: the session turns them
//! into a `MoveRejected` notice for the requester and leaves state untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ids::{CellIndex, RoomId};
use super::side::Side;
use crate::session::Phase;

/// Central error type.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid word pool: {0}")]
    InvalidWordPool(String),

    #[error("illegal move by {side} at {cell}")]
    IllegalMove { side: Side, cell: CellIndex },

    #[error("not {side}'s turn ({active} to move)")]
    NotYourTurn { side: Side, active: Side },

    #[error("unknown room {0}")]
    UnknownRoom(RoomId),

    #[error("room limit of {0} reached")]
    RoomLimit(usize),

    #[error("{event} is not accepted while {phase:?}")]
    InvalidPhase { event: &'static str, phase: Phase },

    #[error("encoding failed: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("malformed document: {0}")]
    Parse(#[from] serde_json::Error),
}

impl GameError {
    /// Build an `InvalidConfiguration` error.
    pub fn config(detail: impl Into<String>) -> Self {
        Self::InvalidConfiguration(detail.into())
    }

    /// Build an `InvalidWordPool` error.
    pub fn word_pool(detail: impl Into<String>) -> Self {
        Self::InvalidWordPool(detail.into())
    }

    /// Reason reported to the requesting side, for errors that reject a move.
    ///
    /// Returns `None` for errors that are not move rejections.
    #[must_use]
    pub fn reject_reason(&self) -> Option<RejectReason> {
        match self {
            GameError::IllegalMove { .. } => Some(RejectReason::IllegalMove),
            GameError::NotYourTurn { .. } => Some(RejectReason::NotYourTurn),
            GameError::InvalidPhase { .. } => Some(RejectReason::GameNotActive),
            _ => None,
        }
    }
}

/// Why a move request was rejected.
///
/// `IllegalMove` and `NotYourTurn` are handled the same way by clients;
/// they are kept apart for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    IllegalMove,
    NotYourTurn,
    GameNotActive,
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_reason_mapping() {
        let illegal = GameError::IllegalMove { side: Side::A, cell: CellIndex::new(3) };
        assert_eq!(illegal.reject_reason(), Some(RejectReason::IllegalMove));

        let turn = GameError::NotYourTurn { side: Side::B, active: Side::A };
        assert_eq!(turn.reject_reason(), Some(RejectReason::NotYourTurn));

        let phase = GameError::InvalidPhase { event: "MoveRequested", phase: Phase::Lobby };
        assert_eq!(phase.reject_reason(), Some(RejectReason::GameNotActive));

        assert_eq!(GameError::UnknownRoom(RoomId::new(1)).reject_reason(), None);
        assert_eq!(GameError::config("bad").reject_reason(), None);
    }

    #[test]
    fn test_error_messages() {
        let err = GameError::NotYourTurn { side: Side::B, active: Side::A };
        assert_eq!(err.to_string(), "not Side B's turn (Side A to move)");

        let err = GameError::IllegalMove { side: Side::A, cell: CellIndex::new(7) };
        assert_eq!(err.to_string(), "illegal move by Side A at Cell(7)");

        let err = GameError::UnknownRoom(RoomId::new(99));
        assert_eq!(err.to_string(), "unknown room 99");
    }
}
