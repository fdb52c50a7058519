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

pub mod base_types;
pub mod config;
pub mod deadheads;
pub mod distances;
pub mod fleet;
pub mod json_serialisation;
pub mod maintenance;
pub mod routing;
pub mod timetable;
pub mod trip;

use std::sync::Arc;

use config::Config;
use deadheads::DeadheadCatalog;
use distances::DistanceTable;
use fleet::Fleet;
use maintenance::MaintenanceRequirements;
use routing::LineRouting;
use timetable::Timetable;

/// Everything a planning run needs. All parts are immutable and shared via `Arc`.
#[derive(Clone)]
pub struct Instance {
    pub timetable: Arc<Timetable>,
    pub fleet: Arc<Fleet>,
    pub routing: Arc<LineRouting>,
    pub deadheads: Arc<DeadheadCatalog>,
    pub distances: Arc<DistanceTable>,
    pub maintenance: Arc<MaintenanceRequirements>,
    pub config: Arc<Config>,
}
