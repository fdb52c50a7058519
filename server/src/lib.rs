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
use solution::json_serialisation::plan_to_json;
use solution::Plan;
use solver::Planner;

use gethostname::gethostname;
use std::time as stdtime;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs the log output of the binaries; the filter is read from `RUST_LOG` (default `info`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // a second call (e.g. from tests) keeps the subscriber already installed
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub fn plan_instance(input_data: serde_json::Value) -> Result<serde_json::Value, LoadError> {
    let start_time = stdtime::Instant::now();
    let instance = load_instance_from_json(input_data)?;
    info!(
        "instance with {} fleet types and {} lines ({} trips) loaded (elapsed time: {:0.2}sec)",
        instance.fleet.iter().count(),
        instance.timetable.number_of_lines(),
        instance.timetable.number_of_trips(),
        start_time.elapsed().as_secs_f32()
    );

    let plan = Planner::initialize(instance).plan();

    let runtime_duration = start_time.elapsed();
    info!("planned in {:0.2}sec", runtime_duration.as_secs_f32());

    Ok(create_output_json(&plan, runtime_duration))
}

pub fn create_output_json(plan: &Plan, runtime_duration: stdtime::Duration) -> serde_json::Value {
    serde_json::json!({
        "info": {
            "runningTime": format!("{:0.2}sec", runtime_duration.as_secs_f32()),
            "numberOfThreads": rayon::current_num_threads(),
            "hostname": gethostname().into_string().unwrap_or_else(|_| "unknown".to_string()),
        },
        "plan": plan_to_json(plan),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_instance_json() -> serde_json::Value {
        let input = std::fs::read_to_string("../model/resources/small_instance.json")
            .expect("fixture not found");
        serde_json::from_str(&input).expect("fixture is not valid json")
    }

    #[test]
    fn output_carries_info_and_plan_test() {
        let output = plan_instance(small_instance_json()).unwrap();

        assert!(output["info"]["runningTime"].as_str().unwrap().ends_with("sec"));
        assert!(output["info"]["numberOfThreads"].as_u64().unwrap() >= 1);
        assert_eq!(output["plan"]["lines"].as_array().unwrap().len(), 2);
        assert_eq!(output["plan"]["units"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn malformed_instance_rejected_test() {
        let result = plan_instance(serde_json::json!({"fleetTypes": []}));

        assert!(result.is_err());
    }
}
