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

use std::collections::BTreeSet;

use model::base_types::{Distance, StationId};
use model::distances::DistanceTable;

use crate::assignment::Assignment;
use crate::warnings::PlanningWarning;

/// Kilometres run in commercial service; empty movements and maintenance count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistanceTally {
    total: Distance,
    unknown_pairs: BTreeSet<(StationId, StationId)>,
}

impl DistanceTally {
    pub fn total(&self) -> Distance {
        self.total
    }

    /// station pairs missing from the table (each pair once, ordered), counted as zero.
    pub fn unknown_pairs(&self) -> impl Iterator<Item = &(StationId, StationId)> + '_ {
        self.unknown_pairs.iter()
    }

    pub fn warnings(&self) -> impl Iterator<Item = PlanningWarning> + '_ {
        self.unknown_pairs
            .iter()
            .map(|(origin, destination)| PlanningWarning::UnknownDistance {
                origin: origin.clone(),
                destination: destination.clone(),
            })
    }
}

impl DistanceTally {
    pub fn of<'a>(
        assignments: impl IntoIterator<Item = &'a Assignment>,
        table: &DistanceTable,
    ) -> DistanceTally {
        let mut tally = DistanceTally::default();
        for assignment in assignments.into_iter().filter(|a| a.is_commercial()) {
            match table.distance(assignment.origin(), assignment.destination()) {
                Some(distance) => tally.total = tally.total + distance,
                None => {
                    let (a, b) = (assignment.origin(), assignment.destination());
                    let pair = if a <= b {
                        (a.clone(), b.clone())
                    } else {
                        (b.clone(), a.clone())
                    };
                    tally.unknown_pairs.insert(pair);
                }
            }
        }
        tally
    }
}
