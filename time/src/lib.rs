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

//! Time values of a single operating day, counted in decimal hours.
//!
//! `14.25` is 14:15. Values past `24.0` stand for the early hours of the following day, values are
//! never wrapped around midnight by this crate.

pub mod duration;
pub mod time_of_day;

pub use duration::Duration;
pub use time_of_day::Time;

use thiserror::Error;

/// Two time values closer than this (in hours, about 4 milliseconds) are considered equal by the
/// tolerant comparisons.
pub const TOLERANCE: f64 = 1e-6;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseTimeError {
    #[error("wrong time format: '{0}' (expected hh:mm or hh:mm:ss)")]
    Format(String),
    #[error("minutes or seconds out of range in '{0}'")]
    OutOfRange(String),
}

/// splits "hh:mm" or "hh:mm:ss" into fractional hours.
fn parse_clock(string: &str) -> Result<f64, ParseTimeError> {
    let trimmed = string.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let splitted: Vec<&str> = unsigned.split(':').collect();
    if splitted.len() < 2 || splitted.len() > 3 {
        return Err(ParseTimeError::Format(string.to_string()));
    }
    let parse = |s: &str| {
        s.parse::<u32>()
            .map_err(|_| ParseTimeError::Format(string.to_string()))
    };
    let hours = parse(splitted[0])?;
    let minutes = parse(splitted[1])?;
    let seconds = match splitted.get(2) {
        Some(s) => parse(s)?,
        None => 0,
    };
    if minutes >= 60 || seconds >= 60 {
        return Err(ParseTimeError::OutOfRange(string.to_string()));
    }
    let value = hours as f64 + minutes as f64 / 60.0 + seconds as f64 / 3600.0;
    Ok(if negative { -value } else { value })
}

/// formats fractional hours as "hh:mm", rounded to the closest minute.
fn format_clock(hours: f64, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    let total_minutes = (hours.abs() * 60.0).round() as u64;
    let sign = if hours < 0.0 && total_minutes > 0 {
        "-"
    } else {
        ""
    };
    write!(f, "{}{:02}:{:02}", sign, total_minutes / 60, total_minutes % 60)
}
