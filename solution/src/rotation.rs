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


use std::fmt;

use model::base_types::{FleetTypeId, UnitId};
use thiserror::Error;

/// 1-based position of a unit within the rotation of its fleet type.
pub type RotationIndex = usize;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RotationError {
    #[error("{units} units but {successors} successors")]
    LengthMismatch { units: usize, successors: usize },
    #[error("successor {0} is out of range")]
    OutOfRange(RotationIndex),
    #[error("index {0} is the successor of more than one unit")]
    NotAPermutation(RotationIndex),
}

/// The position of one unit in the rotation: the diagram it takes over from (yesterday), its own
/// (today) and the one it continues with (tomorrow).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationEntry {
    pub unit: UnitId,
    pub yesterday: RotationIndex,
    pub today: RotationIndex,
    pub tomorrow: RotationIndex,
}

/// A cyclic successor relation over the units of one fleet type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    fleet_type: FleetTypeId,
    units: Vec<UnitId>,
    successors: Vec<RotationIndex>,
    predecessors: Vec<RotationIndex>,
}

// methods
impl Rotation {
    pub fn fleet_type(&self) -> &FleetTypeId {
        &self.fleet_type
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn units(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.units.iter().copied()
    }

    pub fn index_of(&self, unit: UnitId) -> Option<RotationIndex> {
        self.units
            .iter()
            .position(|u| *u == unit)
            .map(|position| position + 1)
    }

    pub fn unit_at(&self, index: RotationIndex) -> Option<UnitId> {
        index
            .checked_sub(1)
            .and_then(|position| self.units.get(position))
            .copied()
    }

    pub fn successor_of(&self, unit: UnitId) -> Option<UnitId> {
        let index = self.index_of(unit)?;
        self.unit_at(self.successors[index - 1])
    }

    pub fn predecessor_of(&self, unit: UnitId) -> Option<UnitId> {
        let index = self.index_of(unit)?;
        self.unit_at(self.predecessors[index - 1])
    }

    pub fn entries(&self) -> impl Iterator<Item = RotationEntry> + '_ {
        self.units.iter().enumerate().map(|(position, unit)| RotationEntry {
            unit: *unit,
            yesterday: self.predecessors[position],
            today: position + 1,
            tomorrow: self.successors[position],
        })
    }

    pub fn entry_of(&self, unit: UnitId) -> Option<RotationEntry> {
        let index = self.index_of(unit)?;
        self.entries().nth(index - 1)
    }

    /// The cycles of the permutation, each starting at its smallest index.
    pub fn cycles(&self) -> Vec<Vec<UnitId>> {
        let mut visited = vec![false; self.units.len()];
        let mut cycles = Vec::new();
        for start in 0..self.units.len() {
            if visited[start] {
                continue;
            }
            let mut cycle = Vec::new();
            let mut position = start;
            while !visited[position] {
                visited[position] = true;
                cycle.push(self.units[position]);
                position = self.successors[position] - 1;
            }
            cycles.push(cycle);
        }
        cycles
    }
}

// static functions
impl Rotation {
    /// `successors[i]` is the index of the unit following `units[i]`. Fails unless the successors
    /// form a permutation of `1..=units.len()`.
    pub fn new(
        fleet_type: FleetTypeId,
        units: Vec<UnitId>,
        successors: Vec<RotationIndex>,
    ) -> Result<Rotation, RotationError> {
        if units.len() != successors.len() {
            return Err(RotationError::LengthMismatch {
                units: units.len(),
                successors: successors.len(),
            });
        }
        let mut predecessors: Vec<Option<RotationIndex>> = vec![None; units.len()];
        for (position, successor) in successors.iter().enumerate() {
            if *successor == 0 || *successor > units.len() {
                return Err(RotationError::OutOfRange(*successor));
            }
            if predecessors[successor - 1].replace(position + 1).is_some() {
                return Err(RotationError::NotAPermutation(*successor));
            }
        }
        Ok(Rotation {
            fleet_type,
            units,
            successors,
            // n successors, pairwise distinct, all in range: every index has a predecessor
            predecessors: predecessors.into_iter().flatten().collect(),
        })
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "rotation {}:", self.fleet_type)?;
        for cycle in self.cycles() {
            write!(
                f,
                " ({})",
                cycle
                    .iter()
                    .map(|unit| unit.to_string())
                    .collect::<Vec<_>>()
                    .join(" -> ")
            )?;
        }
        Ok(())
    }
}
