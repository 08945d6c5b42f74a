//! Match state machine: setup, turn alternation and win detection for one
//! session.
//!
//! Every public operation validates completely before it mutates anything,
//! so a returned error always leaves the match unchanged.

use core::fmt;
use core::str::FromStr;
use std::collections::HashSet;

use chrono::{DateTime, Utc};
use log::{debug, info};
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    ai::ScriptedOpponent,
    board::{BoardIndex, BoardStatistics},
    catalog::ResolvedFleet,
    common::{BoardError, MatchError, ShotResult},
    config::{fits_cell_budget, Difficulty, MatchConfig},
    coord::Coordinate,
    fleet::{FleetTree, ShipInstance, ShipRef, ShotResolution},
    player::{FleetLayout, Opponent},
    ship::{validate_placement, Orientation, ShipType, ShipTypeId},
};

/// Identifier of a match session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        SessionId(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for SessionId {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(SessionId)
            .map_err(|_| MatchError::SessionNotFound)
    }
}

/// Opaque participant identifier issued by the account system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ParticipantId(pub String);

impl From<&str> for ParticipantId {
    fn from(s: &str) -> Self {
        ParticipantId(s.to_string())
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the two sides of a match. Side one is always the creator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SideId {
    One,
    Two,
}

impl SideId {
    pub fn opponent(self) -> Self {
        match self {
            SideId::One => SideId::Two,
            SideId::Two => SideId::One,
        }
    }
}

/// Who controls side two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    VsScripted,
    TwoPlayer,
}

/// Lifecycle phase of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Vs-scripted: the human places ships, the scripted side waits.
    SettingUpSide1Only,
    /// Two-player: waiting for a second participant to join.
    AwaitingSide2,
    /// Two-player: both participants place ships.
    BothSettingUp,
    Side1Turn,
    Side2Turn,
    Finished,
}

impl Phase {
    /// Side whose turn it is, if the match is in play.
    pub fn turn(self) -> Option<SideId> {
        match self {
            Phase::Side1Turn => Some(SideId::One),
            Phase::Side2Turn => Some(SideId::Two),
            _ => None,
        }
    }

    fn turn_of(side: SideId) -> Self {
        match side {
            SideId::One => Phase::Side1Turn,
            SideId::Two => Phase::Side2Turn,
        }
    }

    /// Whether `side` may place ships in this phase.
    fn allows_placement(self, side: SideId) -> bool {
        match self {
            Phase::SettingUpSide1Only | Phase::AwaitingSide2 => side == SideId::One,
            Phase::BothSettingUp => true,
            _ => false,
        }
    }
}

/// Entry in a side's shot log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShotRecord {
    pub coordinate: String,
    pub key: u32,
    pub result: ShotResult,
    pub timestamp: DateTime<Utc>,
}

/// What a single shot did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShotOutcome {
    pub coordinate: String,
    pub key: u32,
    pub result: ShotResult,
    /// Display name of the ship hit, if any.
    pub ship_hit: Option<String>,
    pub ship_sunk: bool,
    /// Index of the ship hit within the defender's fleet.
    #[serde(skip)]
    pub ship_ref: Option<ShipRef>,
}

impl ShotOutcome {
    /// The fleet-level resolution this outcome reports.
    pub fn resolution(&self) -> ShotResolution {
        ShotResolution {
            hit: self.result.is_hit(),
            ship: self.ship_ref,
            sunk: self.ship_sunk,
        }
    }
}

/// Result of [`Match::fire`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FireReport {
    pub outcome: ShotOutcome,
    pub match_finished: bool,
    pub winner: Option<SideId>,
    /// Reply shot of the scripted side, vs-scripted mode only.
    pub scripted_counter_shot: Option<ShotOutcome>,
    /// Side to move next; `None` once the match is over.
    pub next_turn: Option<SideId>,
}

/// A ship still owed by a side during setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShipToPlace {
    /// Position of this ship in the fleet template.
    pub index: usize,
    pub ship_type_id: ShipTypeId,
    pub name: String,
    pub length: u8,
}

/// Participant-facing view of a match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardView {
    pub session_id: SessionId,
    pub board_size: u8,
    pub phase: Phase,
    pub my_side: SideId,
    pub is_my_turn: bool,
    pub current_turn: Option<SideId>,
    pub winner: Option<SideId>,
    pub fleet: Vec<ShipInstance>,
    pub shots_fired: Vec<ShotRecord>,
    pub shots_received: Vec<ShotRecord>,
    pub ships_to_place: Vec<ShipToPlace>,
}

/// Per-participant match statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub shot_count: usize,
    pub hits: usize,
    pub misses: usize,
    /// Hit percentage rounded to two decimals.
    pub accuracy: f64,
    pub ships_total: usize,
    /// Own ships sunk by the enemy.
    pub ships_sunk: usize,
    pub ships_remaining: usize,
    /// Enemy ships sunk by this participant.
    pub enemy_ships_sunk: usize,
    pub enemy_shot_count: usize,
    pub enemy_hits: usize,
    pub enemy_misses: usize,
    /// Cells of the enemy board not yet fired at.
    pub target_cells_remaining: usize,
    pub duration_seconds: i64,
}

/// Shots fired by and at a participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShotHistory {
    pub fired: Vec<ShotRecord>,
    pub received: Vec<ShotRecord>,
}

/// Listing entry for a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub id: SessionId,
    pub template_id: String,
    pub board_size: u8,
    pub mode: Mode,
    pub difficulty: Difficulty,
    pub phase: Phase,
    pub side1: Option<ParticipantId>,
    pub side2: Option<ParticipantId>,
    pub winner: Option<SideId>,
    pub created_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    /// Ships the viewer still has to place.
    pub ships_to_place: Vec<ShipToPlace>,
}

#[derive(Debug, Clone)]
struct Side {
    /// `None` for the scripted side.
    participant: Option<ParticipantId>,
    board: BoardIndex,
    fleet: FleetTree,
    occupied: HashSet<u32>,
    /// Shots this side has fired.
    shots: Vec<ShotRecord>,
}

impl Side {
    fn new(participant: Option<ParticipantId>, board_size: u8) -> Self {
        Self {
            participant,
            board: BoardIndex::new(board_size),
            fleet: FleetTree::new(),
            occupied: HashSet::new(),
            shots: Vec::new(),
        }
    }

    fn install(&mut self, ship_type: ShipType, cells: &[Coordinate]) -> Result<ShipRef, BoardError> {
        let size = self.board.board_size();
        let ship = self.fleet.add_ship(ship_type, cells, size);
        for cell in cells {
            let key = cell.key(size);
            self.board.mark_occupied(key, ship)?;
            self.occupied.insert(key);
        }
        Ok(ship)
    }

    fn shot_keys(&self) -> HashSet<u32> {
        self.shots.iter().map(|s| s.key).collect()
    }
}

/// A single match between two sides.
#[derive(Debug)]
pub struct Match {
    id: SessionId,
    template_id: String,
    board_size: u8,
    mode: Mode,
    phase: Phase,
    config: MatchConfig,
    /// Ships each side must place, in template order.
    required: Vec<ShipType>,
    side1: Side,
    side2: Option<Side>,
    scripted: Option<ScriptedOpponent>,
    /// Scripted fleet, generated at creation and installed when the human
    /// finishes setup.
    scripted_layout: Option<FleetLayout>,
    rng: SmallRng,
    winner: Option<SideId>,
    created_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl Match {
    /// Create a match owned by `creator`.
    ///
    /// In vs-scripted mode the scripted fleet is laid out immediately, so a
    /// fleet that cannot fit the board fails here.
    pub fn new(
        id: SessionId,
        creator: ParticipantId,
        fleet: ResolvedFleet,
        mode: Mode,
        config: MatchConfig,
    ) -> Result<Self, MatchError> {
        if config.enforce_cell_budget {
            fits_cell_budget(fleet.board_size, &fleet.lengths())?;
        }
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        };

        let (phase, scripted, scripted_layout) = match mode {
            Mode::TwoPlayer => (Phase::AwaitingSide2, None, None),
            Mode::VsScripted => {
                let mut opponent = ScriptedOpponent::from_config(&config);
                let layout = opponent.place_fleet(&mut rng, fleet.board_size, &fleet.ships)?;
                (Phase::SettingUpSide1Only, Some(opponent), Some(layout))
            }
        };

        info!(
            "session {id} created by {creator}: {:?}, template {}, {}x{}",
            mode, fleet.template_id, fleet.board_size, fleet.board_size
        );

        Ok(Self {
            id,
            template_id: fleet.template_id,
            board_size: fleet.board_size,
            mode,
            phase,
            config,
            side1: Side::new(Some(creator), fleet.board_size),
            side2: None,
            required: fleet.ships,
            scripted,
            scripted_layout,
            rng,
            winner: None,
            created_at: Utc::now(),
            finished_at: None,
        })
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board_size(&self) -> u8 {
        self.board_size
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    pub fn winner(&self) -> Option<SideId> {
        self.winner
    }

    pub fn current_turn(&self) -> Option<SideId> {
        self.phase.turn()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Human participant controlling `side`, if any.
    pub fn participant(&self, side: SideId) -> Option<&ParticipantId> {
        self.side(side).and_then(|s| s.participant.as_ref())
    }

    /// Side controlled by `participant`.
    pub fn side_of(&self, participant: &ParticipantId) -> Option<SideId> {
        if self.side1.participant.as_ref() == Some(participant) {
            Some(SideId::One)
        } else if self
            .side2
            .as_ref()
            .is_some_and(|s| s.participant.as_ref() == Some(participant))
        {
            Some(SideId::Two)
        } else {
            None
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.mode == Mode::TwoPlayer && self.side2.is_none()
    }

    fn side(&self, side: SideId) -> Option<&Side> {
        match side {
            SideId::One => Some(&self.side1),
            SideId::Two => self.side2.as_ref(),
        }
    }

    fn side_mut(&mut self, side: SideId) -> Option<&mut Side> {
        match side {
            SideId::One => Some(&mut self.side1),
            SideId::Two => self.side2.as_mut(),
        }
    }

    fn is_complete(&self, side: SideId) -> bool {
        self.side(side)
            .is_some_and(|s| s.fleet.len() == self.required.len())
    }

    /// Add a second participant to a waiting two-player match.
    pub fn join(&mut self, participant: ParticipantId) -> Result<(), MatchError> {
        if self.mode != Mode::TwoPlayer {
            return Err(MatchError::NotMultiplayer);
        }
        if !self.is_waiting() {
            return Err(MatchError::NotWaiting);
        }
        if self.side1.participant.as_ref() == Some(&participant) {
            return Err(MatchError::SelfJoin);
        }
        info!("session {}: {participant} joined", self.id);
        self.side2 = Some(Side::new(Some(participant), self.board_size));
        self.phase = Phase::BothSettingUp;
        Ok(())
    }

    /// Ships `side` still has to place, in template order.
    fn ships_to_place(&self, side: SideId) -> Vec<ShipToPlace> {
        let Some(fleet) = self.side(side).map(|s| &s.fleet) else {
            return Vec::new();
        };
        let mut placed: Vec<(ShipTypeId, usize)> = Vec::new();
        let mut owed = Vec::new();
        for (index, ship) in self.required.iter().enumerate() {
            let seen = match placed.iter_mut().find(|(id, _)| *id == ship.id) {
                Some((_, n)) => {
                    *n += 1;
                    *n
                }
                None => {
                    placed.push((ship.id.clone(), 1));
                    1
                }
            };
            if seen > fleet.count_of(&ship.id) {
                owed.push(ShipToPlace {
                    index,
                    ship_type_id: ship.id.clone(),
                    name: ship.name.clone(),
                    length: ship.length,
                });
            }
        }
        owed
    }

    /// Place one ship for `participant`.
    ///
    /// `start` is a cell label such as `"B3"`; the ship extends to the right
    /// (horizontal) or downwards (vertical).
    pub fn place_ship(
        &mut self,
        participant: &ParticipantId,
        ship_type_id: &ShipTypeId,
        start: &str,
        orientation: Orientation,
    ) -> Result<ShipInstance, MatchError> {
        let side_id = self.side_of(participant).ok_or(MatchError::NotAParticipant)?;
        if !self.phase.allows_placement(side_id) {
            return Err(MatchError::WrongPhase(self.phase));
        }
        if self.is_complete(side_id) {
            return Err(MatchError::AlreadyComplete);
        }
        let start = Coordinate::parse(start, self.board_size)?;

        let owed = self.required.iter().filter(|s| &s.id == ship_type_id).count();
        let ship_type = self
            .required
            .iter()
            .find(|s| &s.id == ship_type_id)
            .cloned()
            .ok_or_else(|| MatchError::UnknownShipType(ship_type_id.0.clone()))?;
        let (id, board_size) = (self.id, self.board_size);
        let side = self.side_mut(side_id).ok_or(MatchError::NotAParticipant)?;
        if side.fleet.count_of(ship_type_id) >= owed {
            return Err(MatchError::ShipTypeExhausted(ship_type_id.0.clone()));
        }
        let cells = validate_placement(
            board_size,
            start,
            orientation,
            ship_type.length,
            &side.occupied,
        )?;

        debug!(
            "session {id}: {participant} placed {} at {start} {orientation}",
            ship_type.name
        );
        let ship = side.install(ship_type, &cells)?;
        let instance = side
            .fleet
            .instance(ship)
            .ok_or(BoardError::UnknownKey(start.key(board_size)))?;

        if self.is_complete(side_id) {
            self.on_side_complete(side_id)?;
        }
        Ok(instance)
    }

    fn on_side_complete(&mut self, side: SideId) -> Result<(), MatchError> {
        match self.mode {
            Mode::TwoPlayer => {
                if self.is_complete(side.opponent()) {
                    self.start();
                }
            }
            Mode::VsScripted => {
                let mut scripted = Side::new(None, self.board_size);
                for (ship_type, cells) in self.scripted_layout.take().unwrap_or_default() {
                    scripted.install(ship_type, &cells)?;
                }
                self.side2 = Some(scripted);
                self.start();
            }
        }
        Ok(())
    }

    fn start(&mut self) {
        info!("session {}: all fleets placed, side one to move", self.id);
        self.phase = Phase::Side1Turn;
    }

    /// Fire at `coordinate` on behalf of `participant`.
    ///
    /// In vs-scripted mode a shot that does not end the match is answered by
    /// the scripted side before this returns.
    pub fn fire(
        &mut self,
        participant: &ParticipantId,
        coordinate: &str,
    ) -> Result<FireReport, MatchError> {
        let turn = self.phase.turn().ok_or(MatchError::WrongPhase(self.phase))?;
        let shooter = self.side_of(participant).ok_or(MatchError::NotAParticipant)?;
        if shooter != turn {
            return Err(MatchError::NotYourTurn);
        }
        let target = Coordinate::parse(coordinate, self.board_size)?;
        let defender = self
            .side(shooter.opponent())
            .ok_or(MatchError::WrongPhase(self.phase))?;
        if defender.board.is_shot(target.key(self.board_size)) {
            return Err(MatchError::AlreadyShot(target));
        }

        let (outcome, _) = self.apply_shot(shooter, target)?;

        let scripted_counter_shot = if self.mode == Mode::VsScripted && self.phase != Phase::Finished {
            Some(self.scripted_turn()?)
        } else {
            None
        };

        Ok(FireReport {
            outcome,
            match_finished: self.phase == Phase::Finished,
            winner: self.winner,
            scripted_counter_shot,
            next_turn: self.phase.turn(),
        })
    }

    /// Let the scripted side pick a target and fire.
    fn scripted_turn(&mut self) -> Result<ShotOutcome, MatchError> {
        let already_shot = self
            .side2
            .as_ref()
            .map(Side::shot_keys)
            .unwrap_or_default();
        let opponent = self
            .scripted
            .as_mut()
            .ok_or(MatchError::NotMultiplayer)?;
        let target = opponent.select_target(&mut self.rng, self.board_size, &already_shot)?;
        let (outcome, resolution) = self.apply_shot(SideId::Two, target)?;
        if let Some(opponent) = self.scripted.as_mut() {
            opponent.handle_shot_result(target, resolution);
        }
        Ok(outcome)
    }

    /// Mutate the defender's board and fleet, log the shot and advance the
    /// phase. Callers have already validated the shot.
    fn apply_shot(
        &mut self,
        shooter: SideId,
        target: Coordinate,
    ) -> Result<(ShotOutcome, ShotResolution), MatchError> {
        let key = target.key(self.board_size);
        let defender = self
            .side_mut(shooter.opponent())
            .ok_or(MatchError::WrongPhase(Phase::AwaitingSide2))?;
        defender.board.mark_shot(key)?;
        let resolution = defender.fleet.resolve_shot(key);
        let ship_hit = resolution
            .ship
            .and_then(|s| defender.fleet.ship_type(s))
            .map(|t| t.name.clone());
        let fleet_destroyed = defender.fleet.status().all_sunk;

        let result = if resolution.sunk {
            ShotResult::Sunk
        } else if resolution.hit {
            ShotResult::Hit
        } else {
            ShotResult::Water
        };
        let label = target.label();
        let attacker = self
            .side_mut(shooter)
            .ok_or(MatchError::WrongPhase(Phase::AwaitingSide2))?;
        attacker.shots.push(ShotRecord {
            coordinate: label.clone(),
            key,
            result,
            timestamp: Utc::now(),
        });
        debug!("session {}: {:?} fired at {label}: {:?}", self.id, shooter, result);

        if fleet_destroyed {
            self.phase = Phase::Finished;
            self.winner = Some(shooter);
            self.finished_at = Some(Utc::now());
            info!("session {}: {:?} wins", self.id, shooter);
        } else {
            self.phase = Phase::turn_of(shooter.opponent());
        }

        Ok((
            ShotOutcome {
                coordinate: label,
                key,
                result,
                ship_hit,
                ship_sunk: resolution.sunk,
                ship_ref: resolution.ship,
            },
            resolution,
        ))
    }

    /// View of the match from `participant`'s side.
    pub fn board_view(&self, participant: &ParticipantId) -> Result<BoardView, MatchError> {
        let my_side = self.side_of(participant).ok_or(MatchError::NotAParticipant)?;
        let mine = self.side(my_side).ok_or(MatchError::NotAParticipant)?;
        let received = self
            .side(my_side.opponent())
            .map(|s| s.shots.clone())
            .unwrap_or_default();
        Ok(BoardView {
            session_id: self.id,
            board_size: self.board_size,
            phase: self.phase,
            my_side,
            is_my_turn: self.phase.turn() == Some(my_side),
            current_turn: self.phase.turn(),
            winner: self.winner,
            fleet: mine.fleet.instances(),
            shots_fired: mine.shots.clone(),
            shots_received: received,
            ships_to_place: self.ships_to_place(my_side),
        })
    }

    /// Shot and fleet statistics for `participant`.
    pub fn statistics(&self, participant: &ParticipantId) -> Result<Statistics, MatchError> {
        let my_side = self.side_of(participant).ok_or(MatchError::NotAParticipant)?;
        let mine = self.side(my_side).ok_or(MatchError::NotAParticipant)?;
        let enemy = self.side(my_side.opponent());

        let hits = mine.shots.iter().filter(|s| s.result.is_hit()).count();
        let shot_count = mine.shots.len();
        let accuracy = if shot_count == 0 {
            0.0
        } else {
            (hits as f64 / shot_count as f64 * 10_000.0).round() / 100.0
        };
        let own = mine.fleet.status();
        let (enemy_ships_sunk, enemy_shots) = match enemy {
            Some(e) => (e.fleet.status().sunk_ships, e.shots.as_slice()),
            None => (0, &[][..]),
        };
        let enemy_hits = enemy_shots.iter().filter(|s| s.result.is_hit()).count();
        let target_cells_remaining = self
            .board_statistics(my_side.opponent())
            .map_or(0, |b| b.remaining_cells);
        let end = self.finished_at.unwrap_or_else(Utc::now);

        Ok(Statistics {
            shot_count,
            hits,
            misses: shot_count - hits,
            accuracy,
            ships_total: own.total_ships,
            ships_sunk: own.sunk_ships,
            ships_remaining: own.total_ships - own.sunk_ships,
            enemy_ships_sunk,
            enemy_shot_count: enemy_shots.len(),
            enemy_hits,
            enemy_misses: enemy_shots.len() - enemy_hits,
            target_cells_remaining,
            duration_seconds: (end - self.created_at).num_seconds(),
        })
    }

    /// Shot logs fired by and at `participant`.
    pub fn shot_history(&self, participant: &ParticipantId) -> Result<ShotHistory, MatchError> {
        let my_side = self.side_of(participant).ok_or(MatchError::NotAParticipant)?;
        let fired = self
            .side(my_side)
            .map(|s| s.shots.clone())
            .unwrap_or_default();
        let received = self
            .side(my_side.opponent())
            .map(|s| s.shots.clone())
            .unwrap_or_default();
        Ok(ShotHistory { fired, received })
    }

    /// Listing summary; `ships_to_place` is filled for `viewer` if they take part.
    pub fn summary(&self, viewer: Option<&ParticipantId>) -> SessionSummary {
        let ships_to_place = viewer
            .and_then(|p| self.side_of(p))
            .map(|side| self.ships_to_place(side))
            .unwrap_or_default();
        SessionSummary {
            id: self.id,
            template_id: self.template_id.clone(),
            board_size: self.board_size,
            mode: self.mode,
            difficulty: self.config.difficulty,
            phase: self.phase,
            side1: self.side1.participant.clone(),
            side2: self.side2.as_ref().and_then(|s| s.participant.clone()),
            winner: self.winner,
            created_at: self.created_at,
            finished_at: self.finished_at,
            ships_to_place,
        }
    }

    /// Board statistics of `side`'s own board.
    pub fn board_statistics(&self, side: SideId) -> Option<BoardStatistics> {
        self.side(side).map(|s| s.board.statistics())
    }
}
