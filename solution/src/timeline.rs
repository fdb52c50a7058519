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

use im::Vector;
use itertools::Itertools;
use model::base_types::{StationId, UnitId};
use time::{Duration, Time};

use crate::assignment::Assignment;

/// The diagram of one unit for the day: its assignments sorted by departure.
/// Immutable, every modification returns a new timeline sharing most of its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitTimeline {
    unit: UnitId,
    assignments: Vector<Assignment>,
}

// methods
impl UnitTimeline {
    pub fn unit(&self) -> UnitId {
        self.unit
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Assignment> + '_ {
        self.assignments.iter()
    }

    /// earliest departure.
    pub fn first(&self) -> Option<&Assignment> {
        self.assignments.front()
    }

    /// latest arrival; on ties the later entry of the diagram.
    pub fn last(&self) -> Option<&Assignment> {
        self.assignments.iter().max_by_key(|a| a.arrival())
    }

    pub fn start_station(&self) -> Option<&StationId> {
        self.first().map(Assignment::origin)
    }

    pub fn end_station(&self) -> Option<&StationId> {
        self.last().map(Assignment::destination)
    }

    /// Where the unit stands at `time`: the destination of the last assignment that has arrived
    /// by then, or the origin of its first assignment if none has.
    pub fn station_at(&self, time: Time) -> Option<&StationId> {
        self.assignments
            .iter()
            .filter(|a| a.arrival().is_at_most(time))
            .max_by_key(|a| a.arrival())
            .map(Assignment::destination)
            .or_else(|| self.start_station())
    }

    /// Inserts the assignment after all assignments departing no later than it does.
    pub fn with_assignment(&self, assignment: Assignment) -> UnitTimeline {
        let position = self
            .assignments
            .iter()
            .take_while(|a| a.departure() <= assignment.departure())
            .count();
        let mut new_timeline = self.clone();
        new_timeline.assignments.insert(position, assignment);
        new_timeline
    }

    /// Descriptions of every pair of consecutive assignments that is not chained in space or
    /// leaves less than `min_turnaround` in between. Empty for a valid diagram.
    pub fn chaining_violations(&self, min_turnaround: Duration) -> Vec<String> {
        self.assignments
            .iter()
            .tuple_windows()
            .filter_map(|(current, next)| {
                if current.destination() != next.origin() {
                    Some(format!(
                        "{} ends at {} but {} starts at {}",
                        current.code(),
                        current.destination(),
                        next.code(),
                        next.origin()
                    ))
                } else if !(current.arrival() + min_turnaround).is_at_most(next.departure()) {
                    Some(format!(
                        "{} arrives at {}, {} departs at {} (turnaround {} required)",
                        current.code(),
                        current.arrival(),
                        next.code(),
                        next.departure(),
                        min_turnaround
                    ))
                } else {
                    None
                }
            })
            .collect()
    }
}

// static functions
impl UnitTimeline {
    pub fn new(unit: UnitId) -> UnitTimeline {
        UnitTimeline {
            unit,
            assignments: Vector::new(),
        }
    }

    /// Sorts the assignments by departure; equal departures keep their given order.
    pub fn from_assignments(unit: UnitId, assignments: Vec<Assignment>) -> UnitTimeline {
        let sorted: Vector<Assignment> = assignments
            .into_iter()
            .sorted_by_key(|a| a.departure())
            .collect();
        UnitTimeline {
            unit,
            assignments: sorted,
        }
    }
}
