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

use model::base_types::SeatCount;
use model::config::ConfigCapacity;
use model::fleet::Fleet;
use tracing::debug;

use crate::assignment::Assignment;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityRow {
    pub hour: i64,
    pub direction: String,
    pub seats: SeatCount,
}

/// Places per hour per direction (PPHPD), hour by hour, directions in configured order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapacityProfile {
    rows: Vec<CapacityRow>,
}

impl CapacityProfile {
    pub fn rows(&self) -> impl Iterator<Item = &CapacityRow> + '_ {
        self.rows.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn seats_at(&self, hour: i64, direction: &str) -> SeatCount {
        self.rows
            .iter()
            .find(|row| row.hour == hour && row.direction == direction)
            .map(|row| row.seats)
            .unwrap_or(0)
    }

    /// the busiest hour of the direction; the earliest one on ties.
    pub fn peak(&self, direction: &str) -> Option<&CapacityRow> {
        self.rows
            .iter()
            .filter(|row| row.direction == direction)
            .rev()
            .max_by_key(|row| row.seats)
    }
}

pub struct CapacityEstimator<'a> {
    fleet: &'a Fleet,
    config: &'a ConfigCapacity,
}

impl<'a> CapacityEstimator<'a> {
    pub fn new(fleet: &'a Fleet, config: &'a ConfigCapacity) -> CapacityEstimator<'a> {
        CapacityEstimator { fleet, config }
    }

    /// Each commercial trip counts with the seats of its unit in the hour of its reference time.
    /// Hours between the earliest and the latest reference hour without trips are listed with 0.
    pub fn estimate<'b>(
        &self,
        assignments: impl IntoIterator<Item = &'b Assignment>,
    ) -> CapacityProfile {
        let mut seats: BTreeMap<(i64, &str), SeatCount> = BTreeMap::new();
        let mut hours: Option<(i64, i64)> = None;

        for assignment in assignments.into_iter().filter(|a| a.is_commercial()) {
            let trip = match assignment.trip() {
                Some(trip) => trip,
                None => continue,
            };
            let hour = self
                .config
                .reference_time(assignment.departure(), assignment.arrival())
                .hour();
            let unit_seats = self.fleet.seats_of(assignment.unit()).unwrap_or_else(|| {
                debug!("unit {} belongs to no fleet type, no seats", assignment.unit());
                0
            });
            *seats
                .entry((hour, self.config.direction_of(trip)))
                .or_insert(0) += unit_seats;
            hours = Some(match hours {
                None => (hour, hour),
                Some((first, last)) => (first.min(hour), last.max(hour)),
            });
        }

        let rows = match hours {
            None => Vec::new(),
            Some((first, last)) => (first..=last)
                .flat_map(|hour| {
                    self.config
                        .directions()
                        .into_iter()
                        .map(move |direction| (hour, direction))
                })
                .map(|(hour, direction)| CapacityRow {
                    hour,
                    direction: direction.to_string(),
                    seats: seats.get(&(hour, direction)).copied().unwrap_or(0),
                })
                .collect(),
        };
        CapacityProfile { rows }
    }
}
