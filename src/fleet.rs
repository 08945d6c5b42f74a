//! Per-side fleet tree: root → ships → segments.
//!
//! Ships and segments are stored in flat arenas; a ship node owns a
//! contiguous run of segment indices. After setup only the `hit` and `sunk`
//! flags change.

use serde::Serialize;

use crate::coord::Coordinate;
use crate::ship::{ShipType, ShipTypeId};

/// Index of a ship node inside its fleet tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ShipRef(pub usize);

#[derive(Debug, Clone)]
struct ShipNode {
    ship_type: ShipType,
    first_segment: usize,
    segment_count: usize,
    sunk: bool,
}

#[derive(Debug, Clone)]
struct SegmentNode {
    coordinate: Coordinate,
    key: u32,
    hit: bool,
}

/// Snapshot of one ship segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub coordinate: String,
    pub coordinate_key: u32,
    pub hit: bool,
}

/// Snapshot of a placed ship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShipInstance {
    pub ship_type_id: ShipTypeId,
    pub display_name: String,
    pub length: u8,
    pub segments: Vec<Segment>,
    pub sunk: bool,
}

/// What a shot did to a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotResolution {
    pub hit: bool,
    pub ship: Option<ShipRef>,
    /// `true` only when this shot sank `ship`.
    pub sunk: bool,
}

impl ShotResolution {
    const MISS: Self = Self {
        hit: false,
        ship: None,
        sunk: false,
    };
}

/// Roll-up of a fleet's health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FleetStatus {
    pub total_ships: usize,
    pub sunk_ships: usize,
    pub all_sunk: bool,
}

/// The fleet of one side.
#[derive(Debug, Clone, Default)]
pub struct FleetTree {
    ships: Vec<ShipNode>,
    segments: Vec<SegmentNode>,
}

impl FleetTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a ship under the root with one intact segment per cell.
    pub fn add_ship(&mut self, ship_type: ShipType, cells: &[Coordinate], board_size: u8) -> ShipRef {
        let first_segment = self.segments.len();
        self.segments.extend(cells.iter().map(|&coordinate| SegmentNode {
            coordinate,
            key: coordinate.key(board_size),
            hit: false,
        }));
        self.ships.push(ShipNode {
            ship_type,
            first_segment,
            segment_count: cells.len(),
            sunk: false,
        });
        ShipRef(self.ships.len() - 1)
    }

    fn segment_range(&self, ship: &ShipNode) -> core::ops::Range<usize> {
        ship.first_segment..ship.first_segment + ship.segment_count
    }

    /// Mark the segment at `key` as hit and re-evaluate its ship.
    pub fn resolve_shot(&mut self, key: u32) -> ShotResolution {
        for (i, ship) in self.ships.iter_mut().enumerate() {
            let range = ship.first_segment..ship.first_segment + ship.segment_count;
            let segments = &mut self.segments[range];
            let Some(segment) = segments.iter_mut().find(|s| s.key == key) else {
                continue;
            };
            segment.hit = true;
            let was_sunk = ship.sunk;
            ship.sunk = segments.iter().all(|s| s.hit);
            return ShotResolution {
                hit: true,
                ship: Some(ShipRef(i)),
                sunk: ship.sunk && !was_sunk,
            };
        }
        ShotResolution::MISS
    }

    pub fn status(&self) -> FleetStatus {
        let sunk_ships = self.ships.iter().filter(|s| s.sunk).count();
        FleetStatus {
            total_ships: self.ships.len(),
            sunk_ships,
            all_sunk: !self.ships.is_empty() && sunk_ships == self.ships.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn is_sunk(&self, ship: ShipRef) -> bool {
        self.ships.get(ship.0).is_some_and(|s| s.sunk)
    }

    pub fn ship_type(&self, ship: ShipRef) -> Option<&ShipType> {
        self.ships.get(ship.0).map(|s| &s.ship_type)
    }

    /// Number of placed ships of the given type.
    pub fn count_of(&self, id: &ShipTypeId) -> usize {
        self.ships.iter().filter(|s| &s.ship_type.id == id).count()
    }

    pub fn instance(&self, ship: ShipRef) -> Option<ShipInstance> {
        let node = self.ships.get(ship.0)?;
        let segments = self.segments[self.segment_range(node)]
            .iter()
            .map(|s| Segment {
                coordinate: s.coordinate.label(),
                coordinate_key: s.key,
                hit: s.hit,
            })
            .collect();
        Some(ShipInstance {
            ship_type_id: node.ship_type.id.clone(),
            display_name: node.ship_type.name.clone(),
            length: node.ship_type.length,
            segments,
            sunk: node.sunk,
        })
    }

    /// Snapshots of every ship, in placement order.
    pub fn instances(&self) -> Vec<ShipInstance> {
        (0..self.ships.len())
            .filter_map(|i| self.instance(ShipRef(i)))
            .collect()
    }
}
