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

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::{format_clock, parse_clock, Duration, ParseTimeError, TOLERANCE};

/// A point in time of the operating day, in decimal hours since midnight.
#[derive(Copy, Clone, Debug)]
pub struct Time {
    hours: f64,
}

// static functions
impl Time {
    pub const MIDNIGHT: Time = Time { hours: 0.0 };
    pub const NOON: Time = Time { hours: 12.0 };

    pub fn from_hours(hours: f64) -> Time {
        Time { hours }
    }

    /// "hh:mm" or "hh:mm:ss" (hours may exceed 23); panics on a malformed string, use
    /// `str::parse` for input data.
    pub fn new(string: &str) -> Time {
        match string.parse() {
            Ok(time) => time,
            Err(error) => panic!("{}", error),
        }
    }
}

// methods
impl Time {
    pub fn as_hours(&self) -> f64 {
        self.hours
    }

    /// the full hour this time falls into (14.25 -> 14).
    pub fn hour(&self) -> i64 {
        self.hours.floor() as i64
    }

    /// "hhmm", used inside movement codes.
    pub fn as_compact(&self) -> String {
        self.to_string().replace(':', "")
    }

    /// `self <= other` up to [`TOLERANCE`].
    pub fn is_at_most(&self, other: Time) -> bool {
        self.hours <= other.hours + TOLERANCE
    }

    /// `self < other` by more than [`TOLERANCE`].
    pub fn is_before(&self, other: Time) -> bool {
        self.hours + TOLERANCE < other.hours
    }

    pub fn clamp_to(&self, lower: Time, upper: Time) -> Time {
        Time::from_hours(self.hours.clamp(lower.hours, upper.hours))
    }

    pub fn is_finite(&self) -> bool {
        self.hours.is_finite()
    }
}

impl FromStr for Time {
    type Err = ParseTimeError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        parse_clock(string).map(Time::from_hours)
    }
}

impl PartialEq for Time {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Time {}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Time {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hours.total_cmp(&other.hours)
    }
}

impl Add<Duration> for Time {
    type Output = Self;

    fn add(self, other: Duration) -> Self {
        Time::from_hours(self.hours + other.in_hours())
    }
}

impl Sub<Duration> for Time {
    type Output = Self;

    fn sub(self, other: Duration) -> Self {
        Time::from_hours(self.hours - other.in_hours())
    }
}

impl Sub for Time {
    type Output = Duration;

    fn sub(self, other: Self) -> Duration {
        Duration::from_hours(self.hours - other.hours)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format_clock(self.hours, f)
    }
}
