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

use derive_more::Display;
use derive_more::From;

pub mod distance;

pub use distance::Distance;

/// Short alphanumeric station code, e.g. "MSC".
#[derive(Display, From, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(String);

impl From<&str> for StationId {
    fn from(code: &str) -> Self {
        StationId(code.to_string())
    }
}

impl StationId {
    pub fn code(&self) -> &str {
        &self.0
    }
}

/// Rolling-stock type code, e.g. "R2N".
#[derive(Display, From, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FleetTypeId(String);

impl From<&str> for FleetTypeId {
    fn from(code: &str) -> Self {
        FleetTypeId(code.to_string())
    }
}

impl FleetTypeId {
    pub fn code(&self) -> &str {
        &self.0
    }
}

/// Identifier of a line (one timetable file of the source data).
#[derive(Display, From, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineId(String);

impl From<&str> for LineId {
    fn from(name: &str) -> Self {
        LineId(name.to_string())
    }
}

impl LineId {
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Trip number; unique within a line. Its parity encodes the running direction.
#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TripId(pub Number);

impl TripId {
    pub fn is_even(&self) -> bool {
        self.0 % 2 == 0
    }
}

/// Physical unit number, drawn from the numbering range of its fleet type.
#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnitId(pub Number);

impl UnitId {
    pub fn number(&self) -> Number {
        self.0
    }
}

pub type Number = u32;
pub type UnitCount = u32;
pub type SeatCount = u32;
pub type Meter = u64;
