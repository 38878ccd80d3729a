//! Room lifecycle phases.

use serde::{Deserialize, Serialize};

/// Where a room is in its lifecycle.
///
/// ```text
/// Lobby --RoomReady--> Countdown --CountdownElapsed--> Active --GameOver/stuck--> Finished
///   ^                                                                               |
///   +------------------------------- RestartRequested ------------------------------+
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Created, waiting for the second participant.
    #[default]
    Lobby,
    /// Room is full; the transport runs the countdown.
    Countdown,
    /// Moves are accepted.
    Active,
    /// Game over; only a restart leaves this phase.
    Finished,
}

impl Phase {
    #[must_use]
    pub const fn accepts_moves(self) -> bool {
        matches!(self, Phase::Active)
    }
}
