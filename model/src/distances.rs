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

use crate::base_types::{Distance, StationId};

/// Track distances keyed by unordered station pairs.
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    distances: HashMap<(StationId, StationId), Distance>,
}

impl DistanceTable {
    pub fn new(entries: Vec<(StationId, StationId, Distance)>) -> DistanceTable {
        DistanceTable {
            distances: entries
                .into_iter()
                .map(|(a, b, distance)| (DistanceTable::key(a, b), distance))
                .collect(),
        }
    }

    /// None if the pair is unknown; the caller decides on a default.
    pub fn distance(&self, a: &StationId, b: &StationId) -> Option<Distance> {
        self.distances
            .get(&DistanceTable::key(a.clone(), b.clone()))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    fn key(a: StationId, b: StationId) -> (StationId, StationId) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}
