//! Read-only view of the ship-type and fleet-template catalogs.
//!
//! Catalog management lives outside this crate; sessions only need to look
//! up a template by id and the lengths of the ship types it lists.

use std::collections::HashMap;

use serde::Serialize;

use crate::common::MatchError;
use crate::config::{
    CLASSIC_BOARD_SIZE, CLASSIC_SHIPS, CLASSIC_TEMPLATE_ID, MAX_BOARD_SIZE, MAX_SHIP_LENGTH,
    MIN_BOARD_SIZE, MIN_SHIP_LENGTH,
};
use crate::ship::{ShipType, ShipTypeId};

/// A fleet template: board size plus the ordered ship types to place.
/// The same ship type may appear more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FleetTemplate {
    pub id: String,
    pub name: String,
    pub board_size: u8,
    pub ship_type_ids: Vec<ShipTypeId>,
}

/// A template with every ship type looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFleet {
    pub template_id: String,
    pub board_size: u8,
    pub ships: Vec<ShipType>,
}

impl ResolvedFleet {
    pub fn lengths(&self) -> Vec<u8> {
        self.ships.iter().map(|s| s.length).collect()
    }
}

/// Source of ship types and fleet templates.
pub trait Catalog {
    fn ship_type(&self, id: &ShipTypeId) -> Option<&ShipType>;

    fn fleet_template(&self, id: &str) -> Option<&FleetTemplate>;

    /// Every template, for listing to players.
    fn fleet_templates(&self) -> Vec<&FleetTemplate>;

    /// Look up a template and each ship type it lists.
    fn resolve(&self, template_id: &str) -> Result<ResolvedFleet, MatchError> {
        let template = self
            .fleet_template(template_id)
            .ok_or_else(|| MatchError::TemplateNotFound(template_id.to_string()))?;
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&template.board_size) {
            return Err(MatchError::InvalidTemplate(format!(
                "board size {} outside {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}",
                template.board_size
            )));
        }
        if template.ship_type_ids.is_empty() {
            return Err(MatchError::InvalidTemplate("template lists no ships".into()));
        }
        let ships = template
            .ship_type_ids
            .iter()
            .map(|id| {
                self.ship_type(id)
                    .cloned()
                    .ok_or_else(|| MatchError::UnknownShipType(id.0.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(bad) = ships
            .iter()
            .find(|s| !(MIN_SHIP_LENGTH..=MAX_SHIP_LENGTH).contains(&s.length) || s.length > template.board_size)
        {
            return Err(MatchError::InvalidTemplate(format!(
                "ship {:?} has unusable length {}",
                bad.name, bad.length
            )));
        }
        Ok(ResolvedFleet {
            template_id: template.id.clone(),
            board_size: template.board_size,
            ships,
        })
    }
}

/// In-memory catalog, preloaded with the classic fleet by [`MemoryCatalog::classic`].
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    ship_types: HashMap<ShipTypeId, ShipType>,
    templates: HashMap<String, FleetTemplate>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the five classic ships on a 10x10 template.
    pub fn classic() -> Self {
        let mut catalog = Self::new();
        for (id, name, length) in CLASSIC_SHIPS {
            catalog.add_ship_type(ShipType::new(id, name, length));
        }
        catalog.add_template(FleetTemplate {
            id: CLASSIC_TEMPLATE_ID.to_string(),
            name: "Classic".to_string(),
            board_size: CLASSIC_BOARD_SIZE,
            ship_type_ids: CLASSIC_SHIPS.iter().map(|(id, _, _)| ShipTypeId::from(*id)).collect(),
        });
        catalog
    }

    pub fn add_ship_type(&mut self, ship_type: ShipType) -> &mut Self {
        self.ship_types.insert(ship_type.id.clone(), ship_type);
        self
    }

    pub fn add_template(&mut self, template: FleetTemplate) -> &mut Self {
        self.templates.insert(template.id.clone(), template);
        self
    }
}

impl Catalog for MemoryCatalog {
    fn ship_type(&self, id: &ShipTypeId) -> Option<&ShipType> {
        self.ship_types.get(id)
    }

    fn fleet_template(&self, id: &str) -> Option<&FleetTemplate> {
        self.templates.get(id)
    }

    fn fleet_templates(&self) -> Vec<&FleetTemplate> {
        let mut all: Vec<_> = self.templates.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }
}
