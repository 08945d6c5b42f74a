//! In-process session store.
//!
//! Each session sits behind its own mutex so placement, turn taking and the
//! "both fleets placed" transition are atomic per session. The map lock is
//! only held long enough to clone a session handle.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock},
};

use log::info;

use crate::{
    catalog::Catalog,
    common::MatchError,
    config::MatchConfig,
    fleet::ShipInstance,
    game::{
        BoardView, FireReport, Match, Mode, ParticipantId, SessionId, SessionSummary, ShotHistory,
        Statistics,
    },
    ship::{Orientation, ShipTypeId},
};

type SessionHandle = Arc<Mutex<Match>>;

/// Owns every live match and the catalog used to create them.
pub struct SessionStore<C: Catalog> {
    catalog: C,
    defaults: MatchConfig,
    sessions: RwLock<HashMap<SessionId, SessionHandle>>,
}

impl<C: Catalog> SessionStore<C> {
    pub fn new(catalog: C) -> Self {
        Self::with_config(catalog, MatchConfig::default())
    }

    /// Store whose sessions are created with `defaults` unless overridden.
    pub fn with_config(catalog: C, defaults: MatchConfig) -> Self {
        Self {
            catalog,
            defaults,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    fn handle(&self, id: SessionId) -> Result<SessionHandle, MatchError> {
        let sessions = self.sessions.read().unwrap_or_else(PoisonError::into_inner);
        sessions.get(&id).cloned().ok_or(MatchError::SessionNotFound)
    }

    fn handles(&self) -> Vec<SessionHandle> {
        let sessions = self.sessions.read().unwrap_or_else(PoisonError::into_inner);
        sessions.values().cloned().collect()
    }

    fn lock(handle: &SessionHandle) -> MutexGuard<'_, Match> {
        handle.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` against the locked session `id`.
    fn with_session<T>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut Match) -> Result<T, MatchError>,
    ) -> Result<T, MatchError> {
        let handle = self.handle(id)?;
        let mut game = Self::lock(&handle);
        f(&mut *game)
    }

    /// Create a session with the store's default configuration.
    pub fn create_session(
        &self,
        creator: &ParticipantId,
        template_id: &str,
        mode: Mode,
    ) -> Result<SessionSummary, MatchError> {
        self.create_session_with(creator, template_id, mode, self.defaults.clone())
    }

    pub fn create_session_with(
        &self,
        creator: &ParticipantId,
        template_id: &str,
        mode: Mode,
        config: MatchConfig,
    ) -> Result<SessionSummary, MatchError> {
        let fleet = self.catalog.resolve(template_id)?;
        let id = SessionId::new();
        let game = Match::new(id, creator.clone(), fleet, mode, config)?;
        let summary = game.summary(Some(creator));
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        sessions.insert(id, Arc::new(Mutex::new(game)));
        Ok(summary)
    }

    pub fn join_session(
        &self,
        id: SessionId,
        participant: &ParticipantId,
    ) -> Result<SessionSummary, MatchError> {
        self.with_session(id, |game| {
            game.join(participant.clone())?;
            Ok(game.summary(Some(participant)))
        })
    }

    pub fn place_ship(
        &self,
        id: SessionId,
        participant: &ParticipantId,
        ship_type_id: &ShipTypeId,
        start: &str,
        orientation: Orientation,
    ) -> Result<ShipInstance, MatchError> {
        self.with_session(id, |game| {
            game.place_ship(participant, ship_type_id, start, orientation)
        })
    }

    pub fn fire_shot(
        &self,
        id: SessionId,
        participant: &ParticipantId,
        coordinate: &str,
    ) -> Result<FireReport, MatchError> {
        self.with_session(id, |game| game.fire(participant, coordinate))
    }

    pub fn board_view(
        &self,
        id: SessionId,
        participant: &ParticipantId,
    ) -> Result<BoardView, MatchError> {
        self.with_session(id, |game| game.board_view(participant))
    }

    pub fn statistics(
        &self,
        id: SessionId,
        participant: &ParticipantId,
    ) -> Result<Statistics, MatchError> {
        self.with_session(id, |game| game.statistics(participant))
    }

    pub fn shot_history(
        &self,
        id: SessionId,
        participant: &ParticipantId,
    ) -> Result<ShotHistory, MatchError> {
        self.with_session(id, |game| game.shot_history(participant))
    }

    /// Summary of `id` as seen by `viewer`.
    pub fn get_summary(
        &self,
        id: SessionId,
        viewer: Option<&ParticipantId>,
    ) -> Result<SessionSummary, MatchError> {
        self.with_session(id, |game| Ok(game.summary(viewer)))
    }

    /// Two-player sessions waiting for a second participant, excluding those
    /// created by `viewer`, newest first.
    pub fn available_sessions(&self, viewer: &ParticipantId, limit: usize) -> Vec<SessionSummary> {
        let mut open: Vec<SessionSummary> = self
            .handles()
            .iter()
            .filter_map(|handle| {
                let game = Self::lock(handle);
                (game.is_waiting() && game.side_of(viewer).is_none()).then(|| game.summary(None))
            })
            .collect();
        open.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        open.truncate(limit);
        open
    }

    /// Every session `participant` takes part in, newest first.
    pub fn sessions_for(&self, participant: &ParticipantId) -> Vec<SessionSummary> {
        let mut mine: Vec<SessionSummary> = self
            .handles()
            .iter()
            .filter_map(|handle| {
                let game = Self::lock(handle);
                game.side_of(participant)
                    .map(|_| game.summary(Some(participant)))
            })
            .collect();
        mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        mine
    }

    /// Remove a session. Only a participant may delete it.
    pub fn delete_session(&self, id: SessionId, participant: &ParticipantId) -> Result<(), MatchError> {
        self.with_session(id, |game| {
            game.side_of(participant)
                .map(|_| ())
                .ok_or(MatchError::NotAParticipant)
        })?;
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        sessions.remove(&id).ok_or(MatchError::SessionNotFound)?;
        info!("session {id} deleted by {participant}");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
