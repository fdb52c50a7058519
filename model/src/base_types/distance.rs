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

use crate::base_types::Meter;
use std::fmt;
use std::ops::Add;

#[derive(Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Default)]
pub struct Distance {
    meter: Meter,
}

// methods:
impl Distance {
    pub fn in_meter(&self) -> Meter {
        self.meter
    }

    pub fn in_km(&self) -> f64 {
        self.meter as f64 / 1000.0
    }
}

// static functions:
impl Distance {
    pub const ZERO: Distance = Distance { meter: 0 };

    pub fn from_meter(meter: Meter) -> Distance {
        Distance { meter }
    }

    /// negative or non-finite values are clamped to zero.
    pub fn from_km(km: f64) -> Distance {
        if km.is_finite() && km > 0.0 {
            Distance::from_meter((km * 1000.0).round() as Meter)
        } else {
            Distance::ZERO
        }
    }
}

impl Add for Distance {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Distance::from_meter(self.meter + other.meter)
    }
}

impl std::iter::Sum<Self> for Distance {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Distance::ZERO, |a, b| a + b)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let m = self.meter % 1000;
        let km = (self.meter - m) / 1000;
        write!(f, "{}.{:03}km", km, m)
    }
}
