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

use model::base_types::{LineId, StationId};
use model::maintenance::MaintenanceSlot;
use thiserror::Error;

/// Conditions that degrade a plan without stopping the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanningWarning {
    #[error("no distance known between {origin} and {destination}, counted as 0km")]
    UnknownDistance {
        origin: StationId,
        destination: StationId,
    },
    #[error("no feasible gap for {slot}, slot omitted")]
    UnplaceableMaintenance { slot: MaintenanceSlot },
    #[error("line {line} aborted: {reason}")]
    LineAborted { line: LineId, reason: String },
}
