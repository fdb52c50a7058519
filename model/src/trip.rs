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

use time::{Duration, Time};

use crate::base_types::{StationId, TripId};

/// A scheduled movement of the timetable. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    id: TripId,
    origin: StationId,
    destination: StationId,
    departure: Time,
    arrival: Time,
    is_deadhead: bool, // empty run already present in the timetable
}

// methods
impl Trip {
    pub fn id(&self) -> TripId {
        self.id
    }

    pub fn origin(&self) -> &StationId {
        &self.origin
    }

    pub fn destination(&self) -> &StationId {
        &self.destination
    }

    pub fn departure(&self) -> Time {
        self.departure
    }

    pub fn arrival(&self) -> Time {
        self.arrival
    }

    pub fn is_deadhead(&self) -> bool {
        self.is_deadhead
    }

    pub fn travel_time(&self) -> Duration {
        self.arrival - self.departure
    }
}

// static functions
impl Trip {
    pub fn new(
        id: TripId,
        origin: StationId,
        departure: Time,
        destination: StationId,
        arrival: Time,
        is_deadhead: bool,
    ) -> Trip {
        Trip {
            id,
            origin,
            destination,
            departure,
            arrival,
            is_deadhead,
        }
    }
}
