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


use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{Duration, ParseTimeError, Time};
use tracing::{info, warn};

use crate::base_types::{Distance, FleetTypeId, LineId, StationId, TripId};
use crate::config::{Config, ConfigCapacity, ConfigDurations, ConfigWindow, DayWrapRule};
use crate::deadheads::DeadheadCatalog;
use crate::distances::DistanceTable;
use crate::fleet::{Fleet, FleetType};
use crate::maintenance::{MaintenanceRequirements, MaintenanceSlot};
use crate::routing::LineRouting;
use crate::timetable::{Line, Timetable};
use crate::trip::Trip;
use crate::Instance;

type Integer = u32;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("malformed instance: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid time: {0}")]
    Time(#[from] ParseTimeError),
    #[error("time value of {0} is not a finite number")]
    NonFiniteTime(String),
    #[error("the instance defines no fleet type")]
    EmptyFleet,
    #[error("fleet type {0} is defined twice")]
    DuplicateFleetType(String),
    #[error("numbering ranges of fleet types {0} and {1} overlap")]
    OverlappingNumbering(String, String),
    #[error("unknown fleet type {fleet_type} referenced by {context}")]
    UnknownFleetType { fleet_type: String, context: String },
    #[error("line {0} is defined twice")]
    DuplicateLine(String),
    #[error("trip {trip} appears twice on line {line}")]
    DuplicateTrip { line: String, trip: Integer },
    #[error("maintenance slot of {fleet_type} at {location}: {reason}")]
    InvalidMaintenanceSlot {
        fleet_type: String,
        location: String,
        reason: String,
    },
    #[error("parameter {name} must be a finite, non-negative number of hours")]
    InvalidParameter { name: String },
}

/// decimal hours (14.25) or a clock string ("14:15")
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
enum JsonTime {
    Hours(f64),
    Clock(String),
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonFleetType {
    id: String,
    #[serde(default)]
    model: Option<String>,
    first_unit: Integer,
    quantity: Integer,
    #[serde(default)]
    seats: Integer,
    home_station: String,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct JsonRouting {
    #[serde(default)]
    lines: BTreeMap<String, String>,
    #[serde(default)]
    default: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonDistance {
    #[serde(alias = "origine")]
    origin: String,
    destination: String,
    #[serde(alias = "distance")]
    km: f64,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonMaintenanceSlot {
    #[serde(alias = "duration_minutes")]
    duration_minutes: f64,
    window: [JsonTime; 2],
    location: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonMaintenance {
    slots: Vec<JsonMaintenanceSlot>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonTrip {
    #[serde(alias = "marche")]
    id: Integer,
    #[serde(alias = "gare_depart")]
    origin: String,
    #[serde(alias = "depart")]
    departure: JsonTime,
    #[serde(alias = "gare_arrivee")]
    destination: String,
    #[serde(alias = "arrivee")]
    arrival: JsonTime,
    #[serde(default, alias = "vide_voyageur")]
    is_deadhead: bool,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonLine {
    id: String,
    trips: Vec<JsonTrip>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct JsonCapacity {
    reference_switch: Option<JsonTime>,
    even_direction: Option<String>,
    odd_direction: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
enum JsonDayWrap {
    Keep,
    RollOverMidnight,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct JsonParameters {
    min_turnaround_hours: Option<f64>,
    workshop_threshold_hours: Option<f64>,
    deadhead_buffer_hours: Option<f64>,
    deadhead_travel_hours: Option<f64>,
    maintenance_buffer_hours: Option<f64>,
    #[serde(default)]
    capacity: JsonCapacity,
    utilisation_window: Option<[JsonTime; 2]>,
    day_wrap: Option<JsonDayWrap>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonInput {
    fleet_types: Vec<JsonFleetType>,
    #[serde(default)]
    routing: JsonRouting,
    #[serde(default)]
    depot_access: BTreeMap<String, String>,
    #[serde(default)]
    distances: Vec<JsonDistance>,
    #[serde(default)]
    maintenance: BTreeMap<String, JsonMaintenance>,
    lines: Vec<JsonLine>,
    #[serde(default)]
    parameters: JsonParameters,
}

pub fn load_instance_from_json(input_data: serde_json::Value) -> Result<Instance, LoadError> {
    let json_input: JsonInput = serde_json::from_value(input_data)?;

    let config = Arc::new(create_config(&json_input.parameters)?);
    let fleet = Arc::new(create_fleet(&json_input)?);
    let routing = Arc::new(create_routing(&json_input, &fleet)?);
    let deadheads = Arc::new(create_deadhead_catalog(&json_input));
    let distances = Arc::new(create_distance_table(&json_input));
    let maintenance = Arc::new(create_maintenance_requirements(&json_input, &fleet)?);
    let timetable = Arc::new(create_timetable(&json_input, &config)?);

    info!(
        "instance loaded: {} fleet types, {} lines, {} trips, {} maintenance slots",
        fleet.iter().count(),
        timetable.number_of_lines(),
        timetable.number_of_trips(),
        maintenance.number_of_slots()
    );

    Ok(Instance {
        timetable,
        fleet,
        routing,
        deadheads,
        distances,
        maintenance,
        config,
    })
}

fn to_time(json_time: &JsonTime, context: &str) -> Result<Time, LoadError> {
    let time = match json_time {
        JsonTime::Hours(hours) => Time::from_hours(*hours),
        JsonTime::Clock(clock) => clock.parse()?,
    };
    if time.is_finite() {
        Ok(time)
    } else {
        Err(LoadError::NonFiniteTime(context.to_string()))
    }
}

fn to_duration(hours: Option<f64>, default: Duration, name: &str) -> Result<Duration, LoadError> {
    match hours {
        None => Ok(default),
        Some(h) if h.is_finite() && h >= 0.0 => Ok(Duration::from_hours(h)),
        Some(_) => Err(LoadError::InvalidParameter {
            name: name.to_string(),
        }),
    }
}

fn create_config(parameters: &JsonParameters) -> Result<Config, LoadError> {
    let default = Config::default();

    let durations = ConfigDurations {
        min_turnaround: to_duration(
            parameters.min_turnaround_hours,
            default.durations.min_turnaround,
            "minTurnaroundHours",
        )?,
        workshop_threshold: to_duration(
            parameters.workshop_threshold_hours,
            default.durations.workshop_threshold,
            "workshopThresholdHours",
        )?,
        deadhead_buffer: to_duration(
            parameters.deadhead_buffer_hours,
            default.durations.deadhead_buffer,
            "deadheadBufferHours",
        )?,
        deadhead_travel: to_duration(
            parameters.deadhead_travel_hours,
            default.durations.deadhead_travel,
            "deadheadTravelHours",
        )?,
        maintenance_buffer: to_duration(
            parameters.maintenance_buffer_hours,
            default.durations.maintenance_buffer,
            "maintenanceBufferHours",
        )?,
    };

    if durations.deadhead_buffer < durations.min_turnaround {
        warn!(
            "deadhead buffer ({}) is shorter than the minimal turnaround ({}); synthetic movements will not respect it",
            durations.deadhead_buffer, durations.min_turnaround
        );
    }

    let capacity = ConfigCapacity {
        reference_switch: match &parameters.capacity.reference_switch {
            Some(switch) => to_time(switch, "capacity.referenceSwitch")?,
            None => default.capacity.reference_switch,
        },
        even_direction: parameters
            .capacity
            .even_direction
            .clone()
            .unwrap_or(default.capacity.even_direction),
        odd_direction: parameters
            .capacity
            .odd_direction
            .clone()
            .unwrap_or(default.capacity.odd_direction),
    };

    let utilisation_window = match &parameters.utilisation_window {
        Some([start, end]) => {
            let start = to_time(start, "utilisationWindow")?;
            let end = to_time(end, "utilisationWindow")?;
            if !start.is_before(end) {
                return Err(LoadError::InvalidParameter {
                    name: "utilisationWindow".to_string(),
                });
            }
            ConfigWindow { start, end }
        }
        None => default.utilisation_window,
    };

    let day_wrap = match parameters.day_wrap {
        Some(JsonDayWrap::Keep) => DayWrapRule::Keep,
        Some(JsonDayWrap::RollOverMidnight) => DayWrapRule::RollOverMidnight,
        None => default.day_wrap,
    };

    Ok(Config {
        durations,
        capacity,
        utilisation_window,
        day_wrap,
    })
}

fn create_fleet(json_input: &JsonInput) -> Result<Fleet, LoadError> {
    if json_input.fleet_types.is_empty() {
        return Err(LoadError::EmptyFleet);
    }

    let mut fleet_types: Vec<FleetType> = Vec::new();
    for json_fleet_type in &json_input.fleet_types {
        let fleet_type = FleetType::new(
            FleetTypeId::from(json_fleet_type.id.as_str()),
            json_fleet_type
                .model
                .clone()
                .unwrap_or_else(|| json_fleet_type.id.clone()),
            json_fleet_type.first_unit,
            json_fleet_type.quantity,
            json_fleet_type.seats,
            StationId::from(json_fleet_type.home_station.as_str()),
        );
        for other in &fleet_types {
            if other.id() == fleet_type.id() {
                return Err(LoadError::DuplicateFleetType(fleet_type.id().to_string()));
            }
            if other.overlaps(&fleet_type) {
                return Err(LoadError::OverlappingNumbering(
                    other.id().to_string(),
                    fleet_type.id().to_string(),
                ));
            }
        }
        fleet_types.push(fleet_type);
    }
    Ok(Fleet::new(fleet_types))
}

fn create_routing(json_input: &JsonInput, fleet: &Fleet) -> Result<LineRouting, LoadError> {
    let known = |fleet_type: &str, context: String| {
        let id = FleetTypeId::from(fleet_type);
        if fleet.get(&id).is_some() {
            Ok(id)
        } else {
            Err(LoadError::UnknownFleetType {
                fleet_type: fleet_type.to_string(),
                context,
            })
        }
    };

    let mut assigned: HashMap<LineId, FleetTypeId> = HashMap::new();
    for (line, fleet_type) in &json_input.routing.lines {
        let id = known(fleet_type, format!("routing of line {}", line))?;
        assigned.insert(LineId::from(line.as_str()), id);
    }

    let mut preference: Vec<FleetTypeId> = json_input
        .routing
        .default
        .iter()
        .map(|fleet_type| known(fleet_type, "default routing".to_string()))
        .collect::<Result<_, _>>()?;
    if preference.is_empty() {
        preference = fleet.ids().cloned().collect();
    }
    // the last preferred type is the fallback once every preferred type is exhausted
    let fallback = preference.pop().ok_or(LoadError::EmptyFleet)?;

    Ok(LineRouting::new(assigned, preference, fallback))
}

fn create_deadhead_catalog(json_input: &JsonInput) -> DeadheadCatalog {
    DeadheadCatalog::new(
        json_input
            .depot_access
            .iter()
            .map(|(station, depot_access)| {
                (
                    StationId::from(station.as_str()),
                    StationId::from(depot_access.as_str()),
                )
            })
            .collect(),
    )
}

fn create_distance_table(json_input: &JsonInput) -> DistanceTable {
    DistanceTable::new(
        json_input
            .distances
            .iter()
            .map(|d| {
                (
                    StationId::from(d.origin.as_str()),
                    StationId::from(d.destination.as_str()),
                    Distance::from_km(d.km),
                )
            })
            .collect(),
    )
}

fn create_maintenance_requirements(
    json_input: &JsonInput,
    fleet: &Fleet,
) -> Result<MaintenanceRequirements, LoadError> {
    let mut slots: Vec<MaintenanceSlot> = Vec::new();
    for (fleet_type, json_maintenance) in &json_input.maintenance {
        let fleet_type_id = FleetTypeId::from(fleet_type.as_str());
        if fleet.get(&fleet_type_id).is_none() {
            return Err(LoadError::UnknownFleetType {
                fleet_type: fleet_type.clone(),
                context: "maintenance requirements".to_string(),
            });
        }
        for json_slot in &json_maintenance.slots {
            let invalid = |reason: &str| LoadError::InvalidMaintenanceSlot {
                fleet_type: fleet_type.clone(),
                location: json_slot.location.clone(),
                reason: reason.to_string(),
            };
            if !json_slot.duration_minutes.is_finite() || json_slot.duration_minutes <= 0.0 {
                return Err(invalid("duration must be positive"));
            }
            let window_start = to_time(&json_slot.window[0], "maintenance window")?;
            let window_end = to_time(&json_slot.window[1], "maintenance window")?;
            if window_end < window_start {
                return Err(invalid("window ends before it starts"));
            }
            slots.push(MaintenanceSlot::new(
                fleet_type_id.clone(),
                Duration::from_minutes(json_slot.duration_minutes),
                window_start,
                window_end,
                StationId::from(json_slot.location.as_str()),
            ));
        }
    }
    Ok(MaintenanceRequirements::new(slots))
}

fn create_timetable(json_input: &JsonInput, config: &Config) -> Result<Timetable, LoadError> {
    let mut line_ids: HashSet<&str> = HashSet::new();
    let mut lines: Vec<Line> = Vec::new();

    for json_line in &json_input.lines {
        if !line_ids.insert(json_line.id.as_str()) {
            return Err(LoadError::DuplicateLine(json_line.id.clone()));
        }
        let mut trip_ids: HashSet<Integer> = HashSet::new();
        let mut trips: Vec<Trip> = Vec::with_capacity(json_line.trips.len());
        for json_trip in &json_line.trips {
            if !trip_ids.insert(json_trip.id) {
                return Err(LoadError::DuplicateTrip {
                    line: json_line.id.clone(),
                    trip: json_trip.id,
                });
            }
            let context = format!("trip {} of line {}", json_trip.id, json_line.id);
            let (departure, arrival) = config.day_wrap.apply(
                to_time(&json_trip.departure, &context)?,
                to_time(&json_trip.arrival, &context)?,
            );
            if arrival < departure {
                warn!(
                    "{} arrives ({}) before it departs ({})",
                    context, arrival, departure
                );
            }
            trips.push(Trip::new(
                TripId(json_trip.id),
                StationId::from(json_trip.origin.as_str()),
                departure,
                StationId::from(json_trip.destination.as_str()),
                arrival,
                json_trip.is_deadhead,
            ));
        }
        lines.push(Line::new(LineId::from(json_line.id.as_str()), trips));
    }
    Ok(Timetable::new(lines))
}
