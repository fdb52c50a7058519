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
use std::sync::Arc;

use model::base_types::{FleetTypeId, LineId, StationId, TripId};
use model::config::Config;
use model::deadheads::DeadheadCatalog;
use model::fleet::{Fleet, FleetType};
use model::routing::LineRouting;
use model::timetable::Line;
use model::trip::Trip;
use time::{Duration, Time};

pub(crate) fn station(code: &str) -> StationId {
    StationId::from(code)
}

pub(crate) fn trip(id: u32, origin: &str, departure: f64, destination: &str, arrival: f64) -> Trip {
    Trip::new(
        TripId(id),
        station(origin),
        Time::from_hours(departure),
        station(destination),
        Time::from_hours(arrival),
        false,
    )
}

pub(crate) fn line(name: &str, trips: Vec<Trip>) -> Line {
    Line::new(LineId::from(name), trips)
}

pub(crate) fn fleet_type(id: &str, first_unit: u32, quantity: u32, home: &str) -> FleetType {
    FleetType::new(
        FleetTypeId::from(id),
        id.to_string(),
        first_unit,
        quantity,
        200,
        station(home),
    )
}

pub(crate) fn fleet(fleet_types: Vec<FleetType>) -> Arc<Fleet> {
    Arc::new(Fleet::new(fleet_types))
}

pub(crate) fn single_routing(fleet_type: &str) -> Arc<LineRouting> {
    Arc::new(LineRouting::single(FleetTypeId::from(fleet_type)))
}

pub(crate) fn depot_access(pairs: &[(&str, &str)]) -> Arc<DeadheadCatalog> {
    Arc::new(DeadheadCatalog::new(
        pairs
            .iter()
            .map(|(s, d)| (station(s), station(d)))
            .collect::<HashMap<_, _>>(),
    ))
}

pub(crate) fn config_with_turnaround(hours: f64) -> Arc<Config> {
    let mut config = Config::default();
    config.durations.min_turnaround = Duration::from_hours(hours);
    Arc::new(config)
}

pub(crate) fn assert_time(actual: Time, expected_hours: f64) {
    assert!(
        (actual.as_hours() - expected_hours).abs() < 1e-9,
        "expected {}h, got {}",
        expected_hours,
        actual
    );
}
