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

pub mod dispatcher;
pub mod fleet_pool;
pub mod maintenance_scheduler;
pub mod planner;
pub mod rotation_chainer;

#[cfg(test)]
pub(crate) mod test_utilities;

pub use dispatcher::{DispatchError, TripDispatcher};
pub use fleet_pool::{FleetPool, PoolExhausted};
pub use maintenance_scheduler::MaintenanceScheduler;
pub use planner::Planner;
pub use rotation_chainer::RotationChainer;
