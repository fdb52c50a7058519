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

use std::fmt;

use model::base_types::{FleetTypeId, LineId, StationId, TripId, UnitId};
use model::maintenance::MaintenanceSlot;
use model::trip::Trip;
use time::{Duration, Time};

/// What a unit does during one entry of its diagram.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Movement {
    Trip(TripId),
    /// from the depot-access station to the first trip of the day
    MorningDeadhead,
    /// back to the depot-access station after the last trip
    EveningDeadhead,
    /// to the depot during a long idle gap
    EvolutionToDepot,
    /// back from the depot before the next trip
    EvolutionFromDepot,
    Maintenance(FleetTypeId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    unit: UnitId,
    movement: Movement,
    origin: StationId,
    departure: Time,
    destination: StationId,
    arrival: Time,
    is_deadhead: bool,
    line: Option<LineId>,
}

// methods
impl Assignment {
    pub fn unit(&self) -> UnitId {
        self.unit
    }

    pub fn movement(&self) -> &Movement {
        &self.movement
    }

    pub fn origin(&self) -> &StationId {
        &self.origin
    }

    pub fn departure(&self) -> Time {
        self.departure
    }

    pub fn destination(&self) -> &StationId {
        &self.destination
    }

    pub fn arrival(&self) -> Time {
        self.arrival
    }

    pub fn is_deadhead(&self) -> bool {
        self.is_deadhead
    }

    /// None for maintenance blocks, which do not belong to a line.
    pub fn line(&self) -> Option<&LineId> {
        self.line.as_ref()
    }

    pub fn trip(&self) -> Option<TripId> {
        match self.movement {
            Movement::Trip(id) => Some(id),
            _ => None,
        }
    }

    /// a trip of the timetable that carries passengers.
    pub fn is_commercial(&self) -> bool {
        matches!(self.movement, Movement::Trip(_)) && !self.is_deadhead
    }

    pub fn is_maintenance(&self) -> bool {
        matches!(self.movement, Movement::Maintenance(_))
    }

    pub fn duration(&self) -> Duration {
        self.arrival - self.departure
    }

    /// The identifier shown in diagrams: the trip number for trips, a generated code otherwise.
    pub fn code(&self) -> String {
        match &self.movement {
            Movement::Trip(id) => id.to_string(),
            Movement::MorningDeadhead => format!("EVM{}", self.unit),
            Movement::EveningDeadhead => format!("EVS{}", self.unit),
            Movement::EvolutionToDepot => {
                format!("EVI{}-{}", self.unit, self.departure.as_compact())
            }
            Movement::EvolutionFromDepot => {
                format!("EVO{}-{}", self.unit, self.departure.as_compact())
            }
            Movement::Maintenance(fleet_type) => {
                format!("MAINT-{}-{}", fleet_type, self.departure.as_compact())
            }
        }
    }
}

// static functions
impl Assignment {
    pub fn for_trip(unit: UnitId, trip: &Trip, line: &LineId) -> Assignment {
        Assignment {
            unit,
            movement: Movement::Trip(trip.id()),
            origin: trip.origin().clone(),
            departure: trip.departure(),
            destination: trip.destination().clone(),
            arrival: trip.arrival(),
            is_deadhead: trip.is_deadhead(),
            line: Some(line.clone()),
        }
    }

    /// An empty movement generated by the dispatcher.
    pub fn deadhead(
        unit: UnitId,
        movement: Movement,
        origin: StationId,
        departure: Time,
        destination: StationId,
        arrival: Time,
        line: &LineId,
    ) -> Assignment {
        Assignment {
            unit,
            movement,
            origin,
            departure,
            destination,
            arrival,
            is_deadhead: true,
            line: Some(line.clone()),
        }
    }

    pub fn maintenance(unit: UnitId, slot: &MaintenanceSlot, start: Time) -> Assignment {
        Assignment {
            unit,
            movement: Movement::Maintenance(slot.fleet_type().clone()),
            origin: slot.location().clone(),
            departure: start,
            destination: slot.location().clone(),
            arrival: start + slot.duration(),
            is_deadhead: false,
            line: None,
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} {} -> {} {}",
            self.code(),
            self.unit,
            self.origin,
            self.departure,
            self.destination,
            self.arrival
        )
    }
}
