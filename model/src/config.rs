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

use crate::base_types::TripId;

#[derive(Debug, Clone)]
pub struct Config {
    pub durations: ConfigDurations,
    pub capacity: ConfigCapacity,
    pub utilisation_window: ConfigWindow,
    pub day_wrap: DayWrapRule,
}

#[derive(Debug, Clone)]
pub struct ConfigDurations {
    pub min_turnaround: Duration,
    pub workshop_threshold: Duration, // idle time above which the unit goes to the depot
    pub deadhead_buffer: Duration,
    pub deadhead_travel: Duration,
    pub maintenance_buffer: Duration,
}

/// Rules of the places-per-hour-per-direction estimation.
#[derive(Debug, Clone)]
pub struct ConfigCapacity {
    pub reference_switch: Time,
    pub even_direction: String,
    pub odd_direction: String,
}

#[derive(Debug, Clone)]
pub struct ConfigWindow {
    pub start: Time,
    pub end: Time,
}

/// How a trip whose arrival is earlier than its departure is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayWrapRule {
    /// times are taken as given
    Keep,
    /// the arrival belongs to the following day (+24h)
    RollOverMidnight,
}

impl DayWrapRule {
    pub fn apply(&self, departure: Time, arrival: Time) -> (Time, Time) {
        match self {
            DayWrapRule::RollOverMidnight if arrival < departure => {
                (departure, arrival + Duration::from_hours(24.0))
            }
            _ => (departure, arrival),
        }
    }
}

impl ConfigCapacity {
    /// the time a trip is counted at: before the switch its arrival, afterwards its departure.
    pub fn reference_time(&self, departure: Time, arrival: Time) -> Time {
        if arrival < self.reference_switch {
            arrival
        } else {
            departure
        }
    }

    pub fn direction_of(&self, trip: TripId) -> &str {
        if trip.is_even() {
            self.even_direction.as_str()
        } else {
            self.odd_direction.as_str()
        }
    }

    pub fn directions(&self) -> [&str; 2] {
        [self.even_direction.as_str(), self.odd_direction.as_str()]
    }
}

impl ConfigWindow {
    pub fn length(&self) -> Duration {
        self.end - self.start
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            durations: ConfigDurations {
                min_turnaround: Duration::from_hours(0.21),
                workshop_threshold: Duration::from_hours(1.25),
                deadhead_buffer: Duration::from_hours(0.25),
                deadhead_travel: Duration::from_hours(0.083),
                maintenance_buffer: Duration::from_hours(1.0),
            },
            capacity: ConfigCapacity {
                reference_switch: Time::NOON,
                even_direction: String::from("Paris"),
                odd_direction: String::from("Province"),
            },
            utilisation_window: ConfigWindow {
                start: Time::from_hours(5.5),
                end: Time::from_hours(22.5),
            },
            day_wrap: DayWrapRule::Keep,
        }
    }
}
