//! One game room: board, turn, round counter, and the phase machine.
//!
//! `GameSession::handle` is the single entry point. It never talks to
//! the network; it returns the events the transport should deliver.
//!
//! A move is validated completely before anything is mutated, so a
//! rejected request leaves the session exactly as it was.

use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use super::event::{OutboundEvent, SessionEvent};
use super::phase::Phase;
use crate::board::Board;
use crate::core::{CellIndex, GameError, GameRng, RejectReason, Result, RoomId, SessionConfig, Side};
use crate::rules::{apply_capture, check_move, is_terminal, score, GameResult};
use crate::words::{next_round, Round, WordPool};

/// An accepted move, kept for diagnostics and replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub side: Side,
    pub cell: CellIndex,
    pub flipped: Vec<CellIndex>,
    /// Round number produced by this move.
    pub round: u32,
}

/// What an accepted move changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub placed: CellIndex,
    pub flipped: SmallVec<[CellIndex; 8]>,
    pub round: Round,
    /// Side to move next.
    pub turn: Side,
    /// Set when this move ended the game.
    pub result: Option<GameResult>,
}

/// State of a single room.
#[derive(Clone, Debug)]
pub struct GameSession {
    room: RoomId,
    config: Arc<SessionConfig>,
    pool: Arc<WordPool>,
    board: Board,
    phase: Phase,
    turn: Side,
    round_number: u32,
    current_round: Option<Round>,
    history: Vector<MoveRecord>,
    rng: GameRng,
}

impl GameSession {
    /// Create a session in `Lobby` with an empty board.
    ///
    /// Fails with `InvalidConfiguration` if the config does not describe
    /// a playable board.
    pub fn new(room: RoomId, config: Arc<SessionConfig>, pool: Arc<WordPool>, rng: GameRng) -> Result<Self> {
        config.validate()?;
        let board = Board::new(config.size, config.width)?;

        Ok(Self {
            room,
            turn: config.first_side,
            config,
            pool,
            board,
            phase: Phase::Lobby,
            round_number: 0,
            current_round: None,
            history: Vector::new(),
            rng,
        })
    }

    #[must_use]
    pub fn room(&self) -> RoomId {
        self.room
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Side to move next.
    #[must_use]
    pub fn turn(&self) -> Side {
        self.turn
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Last round payload sent, if the game has started.
    #[must_use]
    pub fn current_round(&self) -> Option<&Round> {
        self.current_round.as_ref()
    }

    /// Accepted moves since the last restart.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Apply one event and return what to broadcast.
    ///
    /// Move rejections come back as `Ok` with a `MoveRejected` event for
    /// the requester. Lifecycle events in the wrong phase come back as
    /// `Err(InvalidPhase)` with no event; the transport reports those to
    /// the requester itself, using the error message as the reason.
    pub fn handle(&mut self, event: SessionEvent) -> Result<Vec<OutboundEvent>> {
        match event {
            SessionEvent::RoomReady => self.room_ready(event),
            SessionEvent::CountdownElapsed => self.start(event),
            SessionEvent::MoveRequested { side, cell } => Ok(self.request_move(side, cell)),
            SessionEvent::RestartRequested => Ok(vec![self.restart()]),
            SessionEvent::GameOver => self.end_game(event),
        }
    }

    fn expect_phase(&self, expected: Phase, event: SessionEvent) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::InvalidPhase { event: event.name(), phase: self.phase })
        }
    }

    fn room_ready(&mut self, event: SessionEvent) -> Result<Vec<OutboundEvent>> {
        self.expect_phase(Phase::Lobby, event)?;
        self.phase = Phase::Countdown;

        info!(room = %self.room, "Room full, countdown started");
        Ok(vec![OutboundEvent::CountdownStarted { room: self.room }])
    }

    fn start(&mut self, event: SessionEvent) -> Result<Vec<OutboundEvent>> {
        self.expect_phase(Phase::Countdown, event)?;

        self.board.clear();
        for (side, &cell) in self.config.starting_cells.iter() {
            self.board.set_owner(cell, side.into());
        }
        self.turn = self.config.first_side;
        self.round_number = 0;
        self.phase = Phase::Active;

        let round = next_round(&self.pool, self.round_number, &self.board, &mut self.rng);
        self.current_round = Some(round.clone());

        info!(room = %self.room, turn = %self.turn, "Game started");
        let mut events = vec![OutboundEvent::GameStarted {
            room: self.room,
            initial_round: round,
            turn: self.turn,
        }];
        if is_terminal(&self.board, self.turn) {
            let result = self.finish();
            events.push(self.finished_event(result));
        }
        Ok(events)
    }

    /// Validate and apply a move.
    ///
    /// On error nothing has changed. Fails with `InvalidPhase` outside
    /// `Active`, `NotYourTurn` when `side` is not to move, and
    /// `IllegalMove` when the placement rule is not met.
    pub fn apply_move(&mut self, side: Side, cell: CellIndex) -> Result<MoveOutcome> {
        if !self.phase.accepts_moves() {
            return Err(GameError::InvalidPhase { event: "MoveRequested", phase: self.phase });
        }
        if side != self.turn {
            return Err(GameError::NotYourTurn { side, active: self.turn });
        }
        check_move(&self.board, side, cell)?;

        self.board.set_owner(cell, side.into());
        let flipped = apply_capture(&mut self.board, cell, side);

        self.turn = side.opponent();
        self.round_number += 1;

        let round = next_round(&self.pool, self.round_number, &self.board, &mut self.rng);
        self.current_round = Some(round.clone());
        self.history.push_back(MoveRecord {
            side,
            cell,
            flipped: flipped.to_vec(),
            round: self.round_number,
        });

        debug!(
            room = %self.room,
            %side,
            %cell,
            flipped = flipped.len(),
            round = self.round_number,
            "Move applied"
        );

        let result = if is_terminal(&self.board, self.turn) {
            Some(self.finish())
        } else {
            None
        };

        Ok(MoveOutcome {
            placed: cell,
            flipped,
            round,
            turn: self.turn,
            result,
        })
    }

    fn request_move(&mut self, side: Side, cell: CellIndex) -> Vec<OutboundEvent> {
        match self.apply_move(side, cell) {
            Ok(outcome) => {
                let mut events = vec![OutboundEvent::RoundUpdated {
                    room: self.room,
                    round: outcome.round,
                    turn: outcome.turn,
                    placed: outcome.placed,
                    flipped: outcome.flipped.to_vec(),
                }];
                if let Some(result) = outcome.result {
                    events.push(self.finished_event(result));
                }
                events
            }
            Err(err) => {
                // apply_move only fails with move rejections.
                let reason = err.reject_reason().unwrap_or(RejectReason::IllegalMove);
                warn!(room = %self.room, %side, %cell, error = %err, "Move rejected");
                vec![OutboundEvent::MoveRejected {
                    room: self.room,
                    side,
                    cell,
                    reason,
                }]
            }
        }
    }

    fn finish(&mut self) -> GameResult {
        self.phase = Phase::Finished;
        let result = GameResult::from_board(&self.board);

        info!(
            room = %self.room,
            ?result,
            side_a = self.board.count_for(Side::A),
            side_b = self.board.count_for(Side::B),
            "Game finished"
        );
        result
    }

    fn finished_event(&self, result: GameResult) -> OutboundEvent {
        OutboundEvent::GameFinished {
            room: self.room,
            result,
            score: score(&self.board),
        }
    }

    fn end_game(&mut self, event: SessionEvent) -> Result<Vec<OutboundEvent>> {
        self.expect_phase(Phase::Active, event)?;
        let result = self.finish();
        Ok(vec![self.finished_event(result)])
    }

    /// Back to `Lobby` with an empty board, keeping the room id.
    fn restart(&mut self) -> OutboundEvent {
        self.board.clear();
        self.turn = self.config.first_side;
        self.round_number = 0;
        self.current_round = None;
        self.history = Vector::new();
        self.phase = Phase::Lobby;

        info!(room = %self.room, "Game reset");
        OutboundEvent::GameReset { room: self.room }
    }
}
