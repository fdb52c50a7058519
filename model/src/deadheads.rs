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

use crate::base_types::StationId;

/// Maps a service station to the depot-access station its empty shuttles run to and from
/// (e.g. "MSC" is served from the depot side "MBC"). Pure lookup.
#[derive(Debug, Clone, Default)]
pub struct DeadheadCatalog {
    depot_access: HashMap<StationId, StationId>,
}

impl DeadheadCatalog {
    pub fn new(depot_access: HashMap<StationId, StationId>) -> DeadheadCatalog {
        DeadheadCatalog { depot_access }
    }

    /// None means the station has no depot-access mapping; no shuttle is generated for it.
    pub fn depot_access_of(&self, station: &StationId) -> Option<&StationId> {
        self.depot_access.get(station)
    }

    pub fn len(&self) -> usize {
        self.depot_access.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depot_access.is_empty()
    }
}
