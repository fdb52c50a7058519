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

use model::base_types::{LineId, StationId, TripId, UnitId};
use model::trip::Trip;
use time::Time;

use crate::assignment::{Assignment, Movement};

pub(crate) fn station(code: &str) -> StationId {
    StationId::from(code)
}

pub(crate) fn trip_assignment(
    unit: u32,
    trip: u32,
    (origin, departure): (&str, f64),
    (destination, arrival): (&str, f64),
    line: &str,
) -> Assignment {
    let trip = Trip::new(
        TripId(trip),
        station(origin),
        Time::from_hours(departure),
        station(destination),
        Time::from_hours(arrival),
        false,
    );
    Assignment::for_trip(UnitId(unit), &trip, &LineId::from(line))
}

pub(crate) fn deadhead_assignment(
    unit: u32,
    movement: Movement,
    (origin, departure): (&str, f64),
    (destination, arrival): (&str, f64),
    line: &str,
) -> Assignment {
    Assignment::deadhead(
        UnitId(unit),
        movement,
        station(origin),
        Time::from_hours(departure),
        station(destination),
        Time::from_hours(arrival),
        &LineId::from(line),
    )
}
