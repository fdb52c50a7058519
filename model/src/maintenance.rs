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
use std::fmt;

use time::{Duration, Time};

use crate::base_types::{FleetTypeId, StationId};

/// A mandatory out-of-service block: some unit of `fleet_type` has to stand at `location` for
/// `duration` somewhere inside `[window_start, window_end]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceSlot {
    fleet_type: FleetTypeId,
    duration: Duration,
    window_start: Time,
    window_end: Time,
    location: StationId,
}

impl MaintenanceSlot {
    pub fn new(
        fleet_type: FleetTypeId,
        duration: Duration,
        window_start: Time,
        window_end: Time,
        location: StationId,
    ) -> MaintenanceSlot {
        MaintenanceSlot {
            fleet_type,
            duration,
            window_start,
            window_end,
            location,
        }
    }

    pub fn fleet_type(&self) -> &FleetTypeId {
        &self.fleet_type
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn window_start(&self) -> Time {
        self.window_start
    }

    pub fn window_end(&self) -> Time {
        self.window_end
    }

    pub fn location(&self) -> &StationId {
        &self.location
    }
}

impl fmt::Display for MaintenanceSlot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} maintenance ({}h) at {} within {}-{}",
            self.fleet_type, self.duration, self.location, self.window_start, self.window_end
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct MaintenanceRequirements {
    slots: BTreeMap<FleetTypeId, Vec<MaintenanceSlot>>,
}

impl MaintenanceRequirements {
    pub fn new(slots: Vec<MaintenanceSlot>) -> MaintenanceRequirements {
        let mut grouped: BTreeMap<FleetTypeId, Vec<MaintenanceSlot>> = BTreeMap::new();
        for slot in slots {
            grouped
                .entry(slot.fleet_type().clone())
                .or_default()
                .push(slot);
        }
        MaintenanceRequirements { slots: grouped }
    }

    pub fn slots_of(&self, fleet_type: &FleetTypeId) -> &[MaintenanceSlot] {
        self.slots
            .get(fleet_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// the slots of the fleet type, longest first (equal durations keep their configured order).
    pub fn slots_longest_first(&self, fleet_type: &FleetTypeId) -> Vec<&MaintenanceSlot> {
        let mut slots: Vec<&MaintenanceSlot> = self.slots_of(fleet_type).iter().collect();
        slots.sort_by(|a, b| b.duration().cmp(&a.duration()));
        slots
    }

    pub fn fleet_types(&self) -> impl Iterator<Item = &FleetTypeId> + '_ {
        self.slots.keys()
    }

    pub fn number_of_slots(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }
}
