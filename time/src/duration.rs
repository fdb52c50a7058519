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
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use crate::{format_clock, parse_clock, ParseTimeError, TOLERANCE};

/// A signed length of time in decimal hours.
#[derive(Copy, Clone, Debug)]
pub struct Duration {
    hours: f64,
}

// static functions
impl Duration {
    pub const ZERO: Duration = Duration { hours: 0.0 };

    pub fn from_hours(hours: f64) -> Duration {
        Duration { hours }
    }

    pub fn from_minutes(minutes: f64) -> Duration {
        Duration {
            hours: minutes / 60.0,
        }
    }

    /// "hh:mm" or "hh:mm:ss"; panics on a malformed string, use `str::parse` for input data.
    pub fn new(string: &str) -> Duration {
        match string.parse() {
            Ok(duration) => duration,
            Err(error) => panic!("{}", error),
        }
    }
}

// methods
impl Duration {
    pub fn in_hours(&self) -> f64 {
        self.hours
    }

    pub fn in_minutes(&self) -> f64 {
        self.hours * 60.0
    }

    pub fn is_negative(&self) -> bool {
        self.hours < -TOLERANCE
    }

    /// `self >= other` up to [`TOLERANCE`].
    pub fn covers(&self, other: Duration) -> bool {
        self.hours + TOLERANCE >= other.hours
    }
}

impl FromStr for Duration {
    type Err = ParseTimeError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        parse_clock(string).map(Duration::from_hours)
    }
}

impl PartialEq for Duration {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Duration {}

impl PartialOrd for Duration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Duration {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hours.total_cmp(&other.hours)
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Duration::from_hours(self.hours + other.hours)
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Duration::from_hours(self.hours - other.hours)
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self {
        Duration::from_hours(-self.hours)
    }
}

impl Sum<Self> for Duration {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Duration::ZERO, |a, b| a + b)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format_clock(self.hours, f)
    }
}
