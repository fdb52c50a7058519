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

use model::base_types::{LineId, StationId};

use crate::roster::Roster;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StationFlow {
    pub starting: u32,
    pub ending: u32,
}

impl StationFlow {
    /// positive: more units start their day here than end it here.
    pub fn balance(&self) -> i64 {
        self.starting as i64 - self.ending as i64
    }
}

/// Per station, how many units of a line start and end their day there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowBalance {
    stations: BTreeMap<StationId, StationFlow>,
}

impl FlowBalance {
    pub fn stations(&self) -> impl Iterator<Item = (&StationId, &StationFlow)> + '_ {
        self.stations.iter()
    }

    pub fn flow_at(&self, station: &StationId) -> StationFlow {
        self.stations.get(station).copied().unwrap_or_default()
    }

    pub fn is_balanced(&self) -> bool {
        self.stations.values().all(|flow| flow.balance() == 0)
    }
}

impl FlowBalance {
    /// Uses, per unit, the first origin and the last destination among its assignments on `line`.
    pub fn of_line(roster: &Roster, line: &LineId) -> FlowBalance {
        let mut stations: BTreeMap<StationId, StationFlow> = BTreeMap::new();
        for timeline in roster.timelines() {
            let on_line = move || timeline.iter().filter(move |a| a.line() == Some(line));
            let first = on_line().next();
            let last = on_line().max_by_key(|a| a.arrival());
            if let (Some(first), Some(last)) = (first, last) {
                stations.entry(first.origin().clone()).or_default().starting += 1;
                stations.entry(last.destination().clone()).or_default().ending += 1;
            }
        }
        FlowBalance { stations }
    }
}
