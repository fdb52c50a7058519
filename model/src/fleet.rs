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


use std::collections::BTreeMap;

use crate::base_types::{FleetTypeId, Number, SeatCount, StationId, UnitCount, UnitId};

/// A rolling-stock type with its block of unit numbers `[first_unit, first_unit + quantity)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetType {
    id: FleetTypeId,
    model: String,
    first_unit: Number,
    quantity: UnitCount,
    seats: SeatCount,
    home_station: StationId, // where unused units are parked
}

// methods
impl FleetType {
    pub fn id(&self) -> &FleetTypeId {
        &self.id
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn first_unit(&self) -> UnitId {
        UnitId(self.first_unit)
    }

    pub fn quantity(&self) -> UnitCount {
        self.quantity
    }

    pub fn seats(&self) -> SeatCount {
        self.seats
    }

    pub fn home_station(&self) -> &StationId {
        &self.home_station
    }

    /// the unit with the given offset in the numbering range, if the range is large enough and
    /// the number stays representable.
    pub fn unit(&self, offset: UnitCount) -> Option<UnitId> {
        if offset < self.quantity {
            self.first_unit.checked_add(offset).map(UnitId)
        } else {
            None
        }
    }

    pub fn contains(&self, unit: UnitId) -> bool {
        self.first_unit <= unit.number() && unit.number() < self.end_of_range()
    }

    /// all configured units in ascending order.
    pub fn units(&self) -> impl Iterator<Item = UnitId> {
        (self.first_unit..self.end_of_range()).map(UnitId)
    }

    fn end_of_range(&self) -> Number {
        self.first_unit.saturating_add(self.quantity)
    }

    pub(crate) fn overlaps(&self, other: &FleetType) -> bool {
        self.first_unit < other.end_of_range() && other.first_unit < self.end_of_range()
    }
}

// static functions
impl FleetType {
    pub fn new(
        id: FleetTypeId,
        model: String,
        first_unit: Number,
        quantity: UnitCount,
        seats: SeatCount,
        home_station: StationId,
    ) -> FleetType {
        FleetType {
            id,
            model,
            first_unit,
            quantity,
            seats,
            home_station,
        }
    }
}

/// The configured fleet. Fleet types are kept sorted by id; numbering ranges never overlap.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    fleet_types: BTreeMap<FleetTypeId, FleetType>,
}

impl Fleet {
    pub fn new(fleet_types: Vec<FleetType>) -> Fleet {
        Fleet {
            fleet_types: fleet_types
                .into_iter()
                .map(|fleet_type| (fleet_type.id().clone(), fleet_type))
                .collect(),
        }
    }

    pub fn get(&self, id: &FleetTypeId) -> Option<&FleetType> {
        self.fleet_types.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FleetType> + '_ {
        self.fleet_types.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &FleetTypeId> + '_ {
        self.fleet_types.keys()
    }

    /// resolves a unit number back to its fleet type via the numbering ranges.
    pub fn fleet_type_of(&self, unit: UnitId) -> Option<&FleetType> {
        self.fleet_types
            .values()
            .find(|fleet_type| fleet_type.contains(unit))
    }

    pub fn seats_of(&self, unit: UnitId) -> Option<SeatCount> {
        self.fleet_type_of(unit).map(FleetType::seats)
    }
}
