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

use model::base_types::StationId;
use model::config::Config;
use model::fleet::FleetType;
use model::maintenance::{MaintenanceRequirements, MaintenanceSlot};
use solution::{Assignment, Roster, UnitTimeline};
use time::Time;
use tracing::{info, warn};

/// Packs the maintenance slots of a fleet type into the idle time of its units, longest slot
/// first, first unit and first gap that fit.
pub struct MaintenanceScheduler {
    requirements: Arc<MaintenanceRequirements>,
    config: Arc<Config>,
}

impl MaintenanceScheduler {
    pub fn initialize(
        requirements: Arc<MaintenanceRequirements>,
        config: Arc<Config>,
    ) -> MaintenanceScheduler {
        MaintenanceScheduler {
            requirements,
            config,
        }
    }

    /// Returns the roster with the placed maintenance blocks and the slots that found no gap.
    pub fn schedule(
        &self,
        roster: &Roster,
        fleet_type: &FleetType,
    ) -> (Roster, Vec<MaintenanceSlot>) {
        let mut roster = roster.clone();
        let mut unplaced = Vec::new();
        let units: Vec<_> = roster.units_of_type(fleet_type).collect();

        for slot in self.requirements.slots_longest_first(fleet_type.id()) {
            let placement = units.iter().find_map(|unit| {
                roster
                    .timeline_of(*unit)
                    .and_then(|timeline| self.find_start(timeline, slot))
                    .map(|start| (*unit, start))
            });
            match placement {
                Some((unit, start)) => {
                    info!("{} placed on unit {} at {}", slot, unit, start);
                    roster = roster.add_assignment(Assignment::maintenance(unit, slot, start));
                }
                None => {
                    warn!("no feasible gap for {}", slot);
                    unplaced.push(slot.clone());
                }
            }
        }
        (roster, unplaced)
    }

    /// The earliest start of the slot in the first gap of the timeline that lies within the
    /// window, keeps the buffer to the adjacent assignments, is long enough and has the unit
    /// standing at the slot's location.
    pub fn find_start(&self, timeline: &UnitTimeline, slot: &MaintenanceSlot) -> Option<Time> {
        let buffer = self.config.durations.maintenance_buffer;
        let window_start = slot.window_start();
        let window_end = slot.window_end();

        let fits = |station: Option<&StationId>, free_from: Time, free_until: Time| {
            station == Some(slot.location())
                && (free_from + slot.duration()).is_at_most(free_until)
        };

        // window start and end act as events of zero length, buffered like any other
        let latest_end = window_end - buffer;
        let mut free_from = window_start + buffer;
        let mut station = timeline.station_at(window_start);

        for assignment in timeline.iter().filter(|a| {
            a.departure().is_at_most(window_end + buffer)
                && (window_start - buffer).is_at_most(a.arrival())
        }) {
            let free_until = (assignment.departure() - buffer).min(latest_end);
            if fits(station, free_from, free_until) {
                return Some(free_from);
            }
            let busy_until = assignment.arrival() + buffer;
            if free_from <= busy_until {
                free_from = busy_until;
                station = Some(assignment.destination());
            }
        }

        if fits(station, free_from, latest_end) {
            Some(free_from)
        } else {
            None
        }
    }
}
