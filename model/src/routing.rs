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

use std::collections::HashMap;

use crate::base_types::{FleetTypeId, LineId};

/// Static rule deciding which fleet type serves a line.
///
/// Listed lines always get their fleet type. Unlisted lines take the first type of the preference
/// list that still has units available, and the fallback type otherwise.
#[derive(Debug, Clone)]
pub struct LineRouting {
    assigned: HashMap<LineId, FleetTypeId>,
    preference: Vec<FleetTypeId>,
    fallback: FleetTypeId,
}

impl LineRouting {
    pub fn new(
        assigned: HashMap<LineId, FleetTypeId>,
        preference: Vec<FleetTypeId>,
        fallback: FleetTypeId,
    ) -> LineRouting {
        LineRouting {
            assigned,
            preference,
            fallback,
        }
    }

    /// Every line is served by `fleet_type`.
    pub fn single(fleet_type: FleetTypeId) -> LineRouting {
        LineRouting::new(HashMap::new(), Vec::new(), fleet_type)
    }

    pub fn assigned_fleet_type(&self, line: &LineId) -> Option<&FleetTypeId> {
        self.assigned.get(line)
    }

    pub fn fleet_type_for(
        &self,
        line: &LineId,
        has_units_left: impl Fn(&FleetTypeId) -> bool,
    ) -> &FleetTypeId {
        if let Some(fleet_type) = self.assigned.get(line) {
            return fleet_type;
        }
        self.preference
            .iter()
            .find(|fleet_type| has_units_left(fleet_type))
            .unwrap_or(&self.fallback)
    }

    /// every fleet type this routing can hand out.
    pub fn referenced_fleet_types(&self) -> impl Iterator<Item = &FleetTypeId> + '_ {
        self.assigned
            .values()
            .chain(self.preference.iter())
            .chain(std::iter::once(&self.fallback))
    }
}
