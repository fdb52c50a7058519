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

use model::config::ConfigWindow;
use time::Duration;

use crate::timeline::UnitTimeline;

/// Share of the window (in percent) the unit spends in commercial service.
pub fn utilisation_rate(timeline: &UnitTimeline, window: &ConfigWindow) -> f64 {
    let length = window.length();
    if !length.in_hours().is_finite() || length.in_hours() <= 0.0 {
        return 0.0;
    }
    let in_service: Duration = timeline
        .iter()
        .filter(|a| a.is_commercial())
        .map(|a| {
            let start = a.departure().clamp_to(window.start, window.end);
            let end = a.arrival().clamp_to(window.start, window.end);
            if start < end {
                end - start
            } else {
                Duration::ZERO
            }
        })
        .sum();
    in_service.in_hours() / length.in_hours() * 100.0
}
