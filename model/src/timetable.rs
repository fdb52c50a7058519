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

use crate::base_types::LineId;
use crate::trip::Trip;

/// The trips of one line for one operating day, in input order.
#[derive(Debug, Clone)]
pub struct Line {
    id: LineId,
    trips: Vec<Trip>,
}

impl Line {
    pub fn new(id: LineId, trips: Vec<Trip>) -> Line {
        Line { id, trips }
    }

    pub fn id(&self) -> &LineId {
        &self.id
    }

    /// human readable name of the line ("marseille-avignon" -> "marseille – avignon").
    pub fn label(&self) -> String {
        self.id.name().replace('-', " – ")
    }

    pub fn trips(&self) -> impl Iterator<Item = &Trip> + '_ {
        self.trips.iter()
    }

    pub fn number_of_trips(&self) -> usize {
        self.trips.len()
    }

    /// trips by non-decreasing departure time; ties keep their input order.
    pub fn trips_by_departure(&self) -> Vec<&Trip> {
        let mut sorted: Vec<&Trip> = self.trips.iter().collect();
        sorted.sort_by_key(|trip| trip.departure()); // stable
        sorted
    }
}

/// All lines of the planning day, ordered by line id.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    lines: BTreeMap<LineId, Line>,
}

impl Timetable {
    pub fn new(lines: Vec<Line>) -> Timetable {
        Timetable {
            lines: lines
                .into_iter()
                .map(|line| (line.id().clone(), line))
                .collect(),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> + '_ {
        self.lines.values()
    }

    pub fn line(&self, id: &LineId) -> Option<&Line> {
        self.lines.get(id)
    }

    pub fn number_of_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn number_of_trips(&self) -> usize {
        self.lines.values().map(Line::number_of_trips).sum()
    }
}
