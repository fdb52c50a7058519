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


use model::base_types::StationId;
use model::fleet::FleetType;
use solution::rotation::{RotationError, RotationIndex};
use solution::{Roster, Rotation};
use tracing::debug;

/// Links the diagrams of one fleet type into a cyclic rotation: unit i is followed by a unit
/// starting where i ends, as many as a maximum matching allows; the rest is closed up in order.
pub struct RotationChainer;

impl RotationChainer {
    pub fn initialize() -> RotationChainer {
        RotationChainer
    }

    /// All configured units of the fleet type take part, unused ones start and end at the home
    /// station.
    pub fn chain(
        &self,
        roster: &Roster,
        fleet_type: &FleetType,
    ) -> Result<Rotation, RotationError> {
        let units: Vec<_> = fleet_type.units().collect();
        let endpoints: Vec<(StationId, StationId)> = units
            .iter()
            .map(|unit| {
                let timeline = roster.timeline_of(*unit);
                let start = timeline.and_then(|t| t.start_station());
                let end = timeline.and_then(|t| t.end_station());
                (
                    start.unwrap_or(fleet_type.home_station()).clone(),
                    end.unwrap_or(fleet_type.home_station()).clone(),
                )
            })
            .collect();
        let successors = successors_for(&endpoints);
        Rotation::new(fleet_type.id().clone(), units, successors)
    }
}

/// `endpoints[i]` is the (start, end) station of the i-th diagram. Returns the 1-based successor
/// index of every diagram; the result is a permutation.
pub fn successors_for(endpoints: &[(StationId, StationId)]) -> Vec<RotationIndex> {
    let n = endpoints.len();
    let candidates: Vec<Vec<usize>> = endpoints
        .iter()
        .enumerate()
        .map(|(i, (_, end))| {
            (0..n)
                .filter(|&j| j != i && &endpoints[j].0 == end)
                .collect()
        })
        .collect();

    // matched_left[j] = i: diagram j follows diagram i
    let mut matched_left: Vec<Option<usize>> = vec![None; n];
    for root in 0..n {
        augment(root, &candidates, &mut matched_left);
    }

    let mut successors: Vec<Option<usize>> = vec![None; n];
    for (j, i) in matched_left.iter().enumerate() {
        if let Some(i) = i {
            successors[*i] = Some(j);
        }
    }
    let matched = successors.iter().flatten().count();
    debug!("{} of {} diagrams chained by matching", matched, n);

    // close up the unmatched diagrams: default successor, else self-loop, else the next free one
    let mut has_predecessor: Vec<bool> = matched_left.iter().map(Option::is_some).collect();
    for i in 0..n {
        if successors[i].is_some() {
            continue;
        }
        let default = (i + 1) % n;
        let successor = if !has_predecessor[default] {
            default
        } else if !has_predecessor[i] {
            i
        } else {
            match (0..n)
                .map(|offset| (default + offset) % n)
                .find(|&k| !has_predecessor[k])
            {
                Some(k) => k,
                // unreachable: as many diagrams lack a successor as lack a predecessor
                None => default,
            }
        };
        has_predecessor[successor] = true;
        successors[i] = Some(successor);
    }

    successors
        .into_iter()
        .enumerate()
        .map(|(i, successor)| successor.unwrap_or(i) + 1)
        .collect()
}

/// Kuhn's augmenting path search from `root`, iterative with an explicit stack. Each right node
/// is visited at most once per root.
fn augment(root: usize, candidates: &[Vec<usize>], matched_left: &mut [Option<usize>]) -> bool {
    let mut seen = vec![false; matched_left.len()];
    // (left node, index of its next candidate)
    let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
    // path[k] is the right node through which stack[k + 1] was reached
    let mut path: Vec<usize> = Vec::new();

    loop {
        let (left, position) = match stack.last_mut() {
            Some(top) => {
                let current = *top;
                top.1 += 1;
                current
            }
            None => return false,
        };
        let right = match candidates[left].get(position) {
            Some(right) => *right,
            None => {
                stack.pop();
                path.pop();
                continue;
            }
        };
        if seen[right] {
            continue;
        }
        seen[right] = true;
        path.push(right);
        match matched_left[right] {
            None => {
                for (k, (l, _)) in stack.iter().enumerate() {
                    matched_left[path[k]] = Some(*l);
                }
                return true;
            }
            Some(other) => stack.push((other, 0)),
        }
    }
}
