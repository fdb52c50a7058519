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

use model::json_serialisation::{load_instance_from_json, LoadError};
use solution::Plan;
use solver::Planner;

use std::time as stdtime;
use tracing::info;

pub fn run(input_data: serde_json::Value) -> Result<serde_json::Value, LoadError> {
    let instance = load_instance_from_json(input_data)?;
    let start_time = stdtime::Instant::now();

    let plan = Planner::initialize(instance).plan();

    let runtime_duration = start_time.elapsed();

    log_diagrams(&plan);
    for warning in plan.warnings() {
        info!("warning: {}", warning);
    }
    info!(
        "{} of {} units in service, total distance {}",
        plan.number_of_used_units(),
        plan.units().count(),
        plan.total_distance()
    );
    info!("Running time: {:0.2}sec", runtime_duration.as_secs_f32());

    Ok(server::create_output_json(&plan, runtime_duration))
}

/// One log line per unit: its fleet type and the codes of its assignments in order.
fn log_diagrams(plan: &Plan) {
    for report in plan.units() {
        let codes: Vec<String> = plan
            .assignments_of(report.unit)
            .map(|assignment| assignment.code())
            .collect();
        match &report.parked_at {
            Some(station) => info!(
                "{} ({}): parked at {}",
                report.unit,
                report.fleet_type,
                station
            ),
            None => info!(
                "{} ({}): {}",
                report.unit,
                report.fleet_type,
                codes.join(" ")
            ),
        }
    }
}
