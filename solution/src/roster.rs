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

use im::OrdMap;
use model::base_types::{LineId, UnitId};
use model::fleet::FleetType;

use crate::assignment::Assignment;
use crate::timeline::UnitTimeline;

/// All diagrams of a planning run, keyed by unit.
/// It should be an immutable object. So whenever an assignment is added a copy of the roster is
/// created (cheap, the underlying maps are shared).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    timelines: OrdMap<UnitId, UnitTimeline>,
}

// methods
impl Roster {
    pub fn number_of_units(&self) -> usize {
        self.timelines.len()
    }

    pub fn number_of_assignments(&self) -> usize {
        self.timelines.values().map(UnitTimeline::len).sum()
    }

    pub fn contains(&self, unit: UnitId) -> bool {
        self.timelines.contains_key(&unit)
    }

    /// units in ascending id order.
    pub fn units(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.timelines.keys().copied()
    }

    pub fn timelines(&self) -> impl Iterator<Item = &UnitTimeline> + '_ {
        self.timelines.values()
    }

    pub fn timeline_of(&self, unit: UnitId) -> Option<&UnitTimeline> {
        self.timelines.get(&unit)
    }

    /// the used units whose number lies in the range of `fleet_type`, ascending.
    pub fn units_of_type<'a>(
        &'a self,
        fleet_type: &'a FleetType,
    ) -> impl Iterator<Item = UnitId> + 'a {
        self.units().filter(|unit| fleet_type.contains(*unit))
    }

    /// every assignment belonging to `line`, unit by unit.
    pub fn line_assignments<'a>(
        &'a self,
        line: &'a LineId,
    ) -> impl Iterator<Item = &'a Assignment> + 'a {
        self.timelines
            .values()
            .flat_map(|timeline| timeline.iter())
            .filter(move |a| a.line() == Some(line))
    }

    pub fn add_assignment(&self, assignment: Assignment) -> Roster {
        let unit = assignment.unit();
        let timeline = match self.timelines.get(&unit) {
            Some(timeline) => timeline.with_assignment(assignment),
            None => UnitTimeline::from_assignments(unit, vec![assignment]),
        };
        let mut new_roster = self.clone();
        new_roster.timelines.insert(unit, timeline);
        new_roster
    }
}

// static functions
impl Roster {
    pub fn empty() -> Roster {
        Roster::default()
    }

    /// Groups the assignments by unit; each unit keeps the relative order of its assignments
    /// among equal departures.
    pub fn from_assignments(assignments: impl IntoIterator<Item = Assignment>) -> Roster {
        let mut grouped: BTreeMap<UnitId, Vec<Assignment>> = BTreeMap::new();
        for assignment in assignments {
            grouped
                .entry(assignment.unit())
                .or_default()
                .push(assignment);
        }
        Roster {
            timelines: grouped
                .into_iter()
                .map(|(unit, assignments)| {
                    (unit, UnitTimeline::from_assignments(unit, assignments))
                })
                .collect(),
        }
    }
}
