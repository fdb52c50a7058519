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


use serde::{Deserialize, Serialize};

use crate::assignment::{Assignment, Movement};
use crate::plan::{LineReport, LineStatus, Plan, UnitReport};
use crate::rotation::{Rotation, RotationEntry};

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonPlan {
    lines: Vec<JsonLine>,
    units: Vec<JsonUnit>,
    rotations: Vec<JsonRotation>,
    warnings: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonLine {
    id: String,
    label: String,
    #[serde(flatten)]
    status: JsonLineStatus,
    distance_km: f64,
    flow_balance: Vec<JsonStationFlow>,
    capacity: Vec<JsonCapacityRow>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", tag = "status")]
enum JsonLineStatus {
    #[serde(rename_all = "camelCase")]
    Dispatched {
        fleet_types: Vec<String>,
        units: Vec<u32>,
    },
    #[serde(rename_all = "camelCase")]
    Aborted { reason: String },
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonStationFlow {
    station: String,
    starting: u32,
    ending: u32,
    balance: i64,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonCapacityRow {
    hour: i64,
    direction: String,
    seats: u32,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonUnit {
    unit: u32,
    fleet_type: String,
    used: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    parked_at: Option<String>,
    distance_km: f64,
    utilisation_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    rotation: Option<JsonRotationEntry>,
    assignments: Vec<JsonAssignment>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonRotationEntry {
    yesterday: usize,
    today: usize,
    tomorrow: usize,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
enum JsonMovement {
    Trip,
    MorningDeadhead,
    EveningDeadhead,
    EvolutionToDepot,
    EvolutionFromDepot,
    Maintenance,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonAssignment {
    code: String,
    movement: JsonMovement,
    origin: String,
    departure: String,
    destination: String,
    arrival: String,
    is_deadhead: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonRotation {
    fleet_type: String,
    cycles: Vec<Vec<u32>>,
    entries: Vec<JsonRotationRow>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonRotationRow {
    unit: u32,
    yesterday: usize,
    today: usize,
    tomorrow: usize,
}

pub fn plan_to_json(plan: &Plan) -> serde_json::Value {
    let json_plan = JsonPlan {
        lines: plan.lines().map(line_to_json).collect(),
        units: plan
            .units()
            .map(|report| unit_to_json(plan, report))
            .collect(),
        rotations: plan.rotations().map(rotation_to_json).collect(),
        warnings: plan.warnings().map(|warning| warning.to_string()).collect(),
    };
    // plain structs of strings and numbers (non-finite floats become null)
    serde_json::to_value(json_plan).unwrap_or(serde_json::Value::Null)
}

pub fn write_plan_to_json(plan: &Plan, path: &str) -> Result<(), std::io::Error> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, &plan_to_json(plan))?;
    Ok(())
}

fn line_to_json(report: &LineReport) -> JsonLine {
    JsonLine {
        id: report.line.to_string(),
        label: report.label.clone(),
        status: match &report.status {
            LineStatus::Dispatched { fleet_types, units } => JsonLineStatus::Dispatched {
                fleet_types: fleet_types.iter().map(|ft| ft.to_string()).collect(),
                units: units.iter().map(|unit| unit.number()).collect(),
            },
            LineStatus::Aborted { reason } => JsonLineStatus::Aborted {
                reason: reason.clone(),
            },
        },
        distance_km: report.distance.in_km(),
        flow_balance: report
            .flow_balance
            .stations()
            .map(|(station, flow)| JsonStationFlow {
                station: station.to_string(),
                starting: flow.starting,
                ending: flow.ending,
                balance: flow.balance(),
            })
            .collect(),
        capacity: report
            .capacity
            .rows()
            .map(|row| JsonCapacityRow {
                hour: row.hour,
                direction: row.direction.clone(),
                seats: row.seats,
            })
            .collect(),
    }
}

fn unit_to_json(plan: &Plan, report: &UnitReport) -> JsonUnit {
    JsonUnit {
        unit: report.unit.number(),
        fleet_type: report.fleet_type.to_string(),
        used: report.is_used(),
        parked_at: report.parked_at.as_ref().map(|station| station.to_string()),
        distance_km: report.distance.in_km(),
        utilisation_percent: (report.utilisation * 100.0).round() / 100.0,
        rotation: report.rotation.map(|entry: RotationEntry| JsonRotationEntry {
            yesterday: entry.yesterday,
            today: entry.today,
            tomorrow: entry.tomorrow,
        }),
        assignments: plan.assignments_of(report.unit).map(assignment_to_json).collect(),
    }
}

fn assignment_to_json(assignment: &Assignment) -> JsonAssignment {
    JsonAssignment {
        code: assignment.code(),
        movement: match assignment.movement() {
            Movement::Trip(_) => JsonMovement::Trip,
            Movement::MorningDeadhead => JsonMovement::MorningDeadhead,
            Movement::EveningDeadhead => JsonMovement::EveningDeadhead,
            Movement::EvolutionToDepot => JsonMovement::EvolutionToDepot,
            Movement::EvolutionFromDepot => JsonMovement::EvolutionFromDepot,
            Movement::Maintenance(_) => JsonMovement::Maintenance,
        },
        origin: assignment.origin().to_string(),
        departure: assignment.departure().to_string(),
        destination: assignment.destination().to_string(),
        arrival: assignment.arrival().to_string(),
        is_deadhead: assignment.is_deadhead(),
        line: assignment.line().map(|line| line.to_string()),
    }
}

fn rotation_to_json(rotation: &Rotation) -> JsonRotation {
    JsonRotation {
        fleet_type: rotation.fleet_type().to_string(),
        cycles: rotation
            .cycles()
            .into_iter()
            .map(|cycle| cycle.into_iter().map(|unit| unit.number()).collect())
            .collect(),
        entries: rotation
            .entries()
            .map(|entry| JsonRotationRow {
                unit: entry.unit.number(),
                yesterday: entry.yesterday,
                today: entry.today,
                tomorrow: entry.tomorrow,
            })
            .collect(),
    }
}
