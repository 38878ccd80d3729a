//! Room registry: owns every live `GameSession`.
//!
//! Each session sits behind its own mutex, so a move is validated and
//! applied as one unit and two requests for the same room never
//! interleave. The map itself is behind a read-write lock that is only
//! held long enough to look up or insert a room, so different rooms are
//! processed in parallel. The word pool is the only shared data and it
//! is read-only.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use super::event::{InboundEvent, OutboundEvent, SessionEvent};
use super::session::GameSession;
use crate::core::{GameError, GameRng, Result, RoomId, SessionConfig};
use crate::words::WordPool;

/// Room ids are drawn from `[0, ROOM_ID_SPACE)`.
pub const ROOM_ID_SPACE: u32 = 100_000;

/// Shared handle to one room.
pub type SessionHandle = Arc<Mutex<GameSession>>;

/// All rooms of one host process.
pub struct RoomRegistry {
    config: Arc<SessionConfig>,
    pool: Arc<WordPool>,
    rooms: RwLock<FxHashMap<RoomId, SessionHandle>>,
    rng: Mutex<GameRng>,
}

impl RoomRegistry {
    /// Create an empty registry.
    ///
    /// Fails with `InvalidConfiguration` if `config` is not playable, so
    /// a bad config is caught before the first room.
    pub fn new(config: SessionConfig, pool: Arc<WordPool>) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            rng: Mutex::new(GameRng::new(config.seed)),
            config: Arc::new(config),
            pool,
            rooms: RwLock::new(FxHashMap::default()),
        })
    }

    /// Number of live rooms.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.read().len()
    }

    /// Look up a room.
    pub fn session(&self, room: RoomId) -> Result<SessionHandle> {
        self.rooms
            .read()
            .get(&room)
            .cloned()
            .ok_or(GameError::UnknownRoom(room))
    }

    /// Create a room in `Lobby` and return its id.
    pub fn create_room(&self) -> Result<RoomId> {
        let mut rooms = self.rooms.write();
        if rooms.len() >= ROOM_ID_SPACE as usize {
            return Err(GameError::RoomLimit(ROOM_ID_SPACE as usize));
        }

        let mut rng = self.rng.lock();
        let room = loop {
            let candidate = RoomId::new(rng.gen_range_u32(0..ROOM_ID_SPACE));
            if !rooms.contains_key(&candidate) {
                break candidate;
            }
        };
        let session_rng = rng.fork().for_context("words");
        drop(rng);

        let session = GameSession::new(room, Arc::clone(&self.config), Arc::clone(&self.pool), session_rng)?;
        rooms.insert(room, Arc::new(Mutex::new(session)));

        info!(%room, rooms = rooms.len(), "Room created");
        Ok(room)
    }

    /// Drop a room.
    pub fn close_room(&self, room: RoomId) -> Result<()> {
        match self.rooms.write().remove(&room) {
            Some(_) => {
                info!(%room, "Room closed");
                Ok(())
            }
            None => Err(GameError::UnknownRoom(room)),
        }
    }

    /// Route one inbound event and return what to deliver.
    ///
    /// Fails with `UnknownRoom` for a room that does not exist and with
    /// `InvalidPhase` for lifecycle events that arrive out of order. No
    /// outbound event is produced for either; the transport must turn
    /// the `Err` into a notice for the requester. Move rejections are
    /// already returned as `MoveRejected`.
    pub fn dispatch(&self, event: InboundEvent) -> Result<Vec<OutboundEvent>> {
        debug!(?event, "Dispatching");

        match event {
            InboundEvent::CreateRoom => {
                let room = self.create_room()?;
                Ok(vec![OutboundEvent::RoomCreated { room }])
            }
            InboundEvent::CloseRoom { room } => {
                self.close_room(room)?;
                Ok(vec![OutboundEvent::RoomClosed { room }])
            }
            InboundEvent::RoomReady { room } => self.forward(room, SessionEvent::RoomReady),
            InboundEvent::CountdownElapsed { room } => self.forward(room, SessionEvent::CountdownElapsed),
            InboundEvent::MoveRequested { room, side, cell } => {
                self.forward(room, SessionEvent::MoveRequested { side, cell })
            }
            InboundEvent::RestartRequested { room } => self.forward(room, SessionEvent::RestartRequested),
            InboundEvent::GameOver { room } => self.forward(room, SessionEvent::GameOver),
        }
    }

    fn forward(&self, room: RoomId, event: SessionEvent) -> Result<Vec<OutboundEvent>> {
        let handle = self.session(room)?;
        let mut session = handle.lock();
        session.handle(event)
    }
}
