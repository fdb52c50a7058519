// © 2023-2024 ETH Zurich
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// any later version.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

#[cfg(test)]
mod tests;

use std::sync::Arc;

use im::OrdMap;
use model::base_types::{FleetTypeId, LineId, UnitCount, UnitId};
use model::fleet::Fleet;
use model::routing::LineRouting;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("all {quantity} units of fleet type {fleet_type} are in use")]
pub struct PoolExhausted {
    pub fleet_type: FleetTypeId,
    pub quantity: UnitCount,
}

/// Hands out unit numbers per fleet type: the n-th allocation of a type returns `first_unit + n`.
/// Cloning is cheap, a clone taken before a line is dispatched is the state to roll back to.
#[derive(Debug, Clone)]
pub struct FleetPool {
    fleet: Arc<Fleet>,
    routing: Arc<LineRouting>,
    used: OrdMap<FleetTypeId, UnitCount>,
}

// methods
impl FleetPool {
    pub fn allocate(&mut self, fleet_type: &FleetTypeId) -> Result<UnitId, PoolExhausted> {
        let used = self.used(fleet_type);
        let unit = self
            .fleet
            .get(fleet_type)
            .and_then(|ft| ft.unit(used))
            .ok_or_else(|| PoolExhausted {
                fleet_type: fleet_type.clone(),
                quantity: self.quantity(fleet_type),
            })?;
        self.used.insert(fleet_type.clone(), used + 1);
        Ok(unit)
    }

    /// The fleet type the next unit of `line` is taken from: the routed type of the line, else the
    /// first preferred type with units left, else the fallback.
    pub fn type_for(&self, line: &LineId) -> &FleetTypeId {
        self.routing
            .fleet_type_for(line, |fleet_type| self.has_units_left(fleet_type))
    }

    /// None if the unit lies outside all numbering ranges.
    pub fn material_of(&self, unit: UnitId) -> Option<&FleetTypeId> {
        self.fleet.fleet_type_of(unit).map(|ft| ft.id())
    }

    pub fn used(&self, fleet_type: &FleetTypeId) -> UnitCount {
        self.used.get(fleet_type).copied().unwrap_or(0)
    }

    pub fn quantity(&self, fleet_type: &FleetTypeId) -> UnitCount {
        self.fleet.get(fleet_type).map(|ft| ft.quantity()).unwrap_or(0)
    }

    pub fn has_units_left(&self, fleet_type: &FleetTypeId) -> bool {
        self.used(fleet_type) < self.quantity(fleet_type)
    }
}

// static functions
impl FleetPool {
    pub fn new(fleet: Arc<Fleet>, routing: Arc<LineRouting>) -> FleetPool {
        FleetPool {
            fleet,
            routing,
            used: OrdMap::new(),
        }
    }
}
