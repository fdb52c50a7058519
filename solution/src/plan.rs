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

use model::base_types::{Distance, FleetTypeId, LineId, StationId, UnitId};

use crate::assignment::Assignment;
use crate::roster::Roster;
use crate::rotation::{Rotation, RotationEntry};
use crate::statistics::{CapacityProfile, FlowBalance};
use crate::warnings::PlanningWarning;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineStatus {
    /// `fleet_types` in the order their first unit was allocated
    Dispatched {
        fleet_types: Vec<FleetTypeId>,
        units: Vec<UnitId>,
    },
    Aborted {
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineReport {
    pub line: LineId,
    pub label: String,
    pub status: LineStatus,
    pub distance: Distance,
    pub flow_balance: FlowBalance,
    pub capacity: CapacityProfile,
}

impl LineReport {
    pub fn is_dispatched(&self) -> bool {
        matches!(self.status, LineStatus::Dispatched { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnitReport {
    pub unit: UnitId,
    pub fleet_type: FleetTypeId,
    /// home station of an unused unit; None for units with a diagram
    pub parked_at: Option<StationId>,
    pub distance: Distance,
    /// percent of the utilisation window spent in commercial service
    pub utilisation: f64,
    pub rotation: Option<RotationEntry>,
}

impl UnitReport {
    pub fn is_used(&self) -> bool {
        self.parked_at.is_none()
    }
}

/// The outcome of a planning run: the diagrams of all units plus everything derived from them.
#[derive(Debug, Clone)]
pub struct Plan {
    roster: Roster,
    lines: Vec<LineReport>,
    units: Vec<UnitReport>,
    rotations: Vec<Rotation>,
    warnings: Vec<PlanningWarning>,
}

// methods
impl Plan {
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineReport> + '_ {
        self.lines.iter()
    }

    pub fn line_report(&self, line: &LineId) -> Option<&LineReport> {
        self.lines.iter().find(|report| &report.line == line)
    }

    /// used and unused units in ascending id order.
    pub fn units(&self) -> impl Iterator<Item = &UnitReport> + '_ {
        self.units.iter()
    }

    pub fn unit_report(&self, unit: UnitId) -> Option<&UnitReport> {
        self.units.iter().find(|report| report.unit == unit)
    }

    pub fn number_of_used_units(&self) -> usize {
        self.roster.number_of_units()
    }

    pub fn assignments_of(&self, unit: UnitId) -> impl Iterator<Item = &Assignment> + '_ {
        self.roster
            .timeline_of(unit)
            .into_iter()
            .flat_map(|timeline| timeline.iter())
    }

    pub fn rotations(&self) -> impl Iterator<Item = &Rotation> + '_ {
        self.rotations.iter()
    }

    pub fn rotation_of(&self, fleet_type: &FleetTypeId) -> Option<&Rotation> {
        self.rotations
            .iter()
            .find(|rotation| rotation.fleet_type() == fleet_type)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &PlanningWarning> + '_ {
        self.warnings.iter()
    }

    pub fn total_distance(&self) -> Distance {
        self.lines.iter().map(|report| report.distance).sum()
    }
}

// static functions
impl Plan {
    pub fn new(
        roster: Roster,
        lines: Vec<LineReport>,
        units: Vec<UnitReport>,
        rotations: Vec<Rotation>,
        warnings: Vec<PlanningWarning>,
    ) -> Plan {
        Plan {
            roster,
            lines,
            units,
            rotations,
            warnings,
        }
    }
}
