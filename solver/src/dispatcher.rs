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


use std::sync::Arc;

use model::base_types::{FleetTypeId, LineId, StationId, TripId, UnitCount, UnitId};
use model::config::Config;
use model::deadheads::DeadheadCatalog;
use model::timetable::Line;
use solution::{Assignment, Movement};
use thiserror::Error;
use time::Time;
use tracing::{debug, info};

use crate::fleet_pool::FleetPool;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error(
        "line {line}: no unit of fleet type {fleet_type} left for trip {trip} (all {quantity} in use)"
    )]
    PoolExhausted {
        line: LineId,
        trip: TripId,
        fleet_type: FleetTypeId,
        quantity: UnitCount,
    },
}

/// Where a unit stands and from when on it is available, while a line is dispatched.
struct UnitState {
    unit: UnitId,
    station: StationId,
    available: Time,
}

/// The greedy first-fit assignment of units to the trips of a line.
pub struct TripDispatcher {
    deadheads: Arc<DeadheadCatalog>,
    config: Arc<Config>,
}

impl TripDispatcher {
    pub fn initialize(deadheads: Arc<DeadheadCatalog>, config: Arc<Config>) -> TripDispatcher {
        TripDispatcher { deadheads, config }
    }

    /// Covers every trip of the line and adds the empty movements around them. Returns the pool
    /// after all allocations of this line, the given pool is left untouched (so on an error it is
    /// still the state before the line).
    pub fn dispatch(
        &self,
        line: &Line,
        pool: &FleetPool,
    ) -> Result<(FleetPool, Vec<Assignment>), DispatchError> {
        let durations = &self.config.durations;
        let mut pool = pool.clone();
        let mut states: Vec<UnitState> = Vec::new();
        let mut assignments: Vec<Assignment> = Vec::new();

        for trip in line.trips_by_departure() {
            let found = states.iter().position(|state| {
                &state.station == trip.origin()
                    && (state.available + durations.min_turnaround).is_at_most(trip.departure())
            });

            let index = match found {
                Some(index) => {
                    let state = &states[index];
                    let idle = trip.departure() - state.available;
                    if !durations.workshop_threshold.covers(idle) {
                        self.add_evolution(state, trip.departure(), line.id(), &mut assignments);
                    }
                    index
                }
                None => {
                    let fleet_type = pool.type_for(line.id()).clone();
                    let unit = pool.allocate(&fleet_type).map_err(|exhausted| {
                        DispatchError::PoolExhausted {
                            line: line.id().clone(),
                            trip: trip.id(),
                            fleet_type: exhausted.fleet_type,
                            quantity: exhausted.quantity,
                        }
                    })?;
                    debug!(
                        "line {}: unit {} ({}) starts with trip {}",
                        line.id(),
                        unit,
                        fleet_type,
                        trip.id()
                    );
                    match self.deadheads.depot_access_of(trip.origin()) {
                        Some(depot_access) => {
                            let arrival = trip.departure() - durations.deadhead_buffer;
                            assignments.push(Assignment::deadhead(
                                unit,
                                Movement::MorningDeadhead,
                                depot_access.clone(),
                                arrival - durations.deadhead_travel,
                                trip.origin().clone(),
                                arrival,
                                line.id(),
                            ));
                        }
                        None => {
                            debug!("no depot access for {}, no morning deadhead", trip.origin())
                        }
                    }
                    states.push(UnitState {
                        unit,
                        station: trip.origin().clone(),
                        available: Time::MIDNIGHT,
                    });
                    states.len() - 1
                }
            };

            let state = &mut states[index];
            assignments.push(Assignment::for_trip(state.unit, trip, line.id()));
            state.station = trip.destination().clone();
            state.available = trip.arrival();
        }

        for state in &states {
            match self.deadheads.depot_access_of(&state.station) {
                Some(depot_access) => {
                    let departure = state.available + durations.deadhead_buffer;
                    assignments.push(Assignment::deadhead(
                        state.unit,
                        Movement::EveningDeadhead,
                        state.station.clone(),
                        departure,
                        depot_access.clone(),
                        departure + durations.deadhead_travel,
                        line.id(),
                    ));
                }
                None => debug!("no depot access for {}, no evening deadhead", state.station),
            }
        }

        info!(
            "line {}: {} trips served by {} units",
            line.id(),
            line.number_of_trips(),
            states.len()
        );
        Ok((pool, assignments))
    }

    /// Sends the unit to the depot during its idle time and brings it back before `next_departure`.
    fn add_evolution(
        &self,
        state: &UnitState,
        next_departure: Time,
        line: &LineId,
        assignments: &mut Vec<Assignment>,
    ) {
        let durations = &self.config.durations;
        let depot_access = match self.deadheads.depot_access_of(&state.station) {
            Some(depot_access) => depot_access,
            None => {
                debug!("no depot access for {}, unit {} waits", state.station, state.unit);
                return;
            }
        };
        let outbound_departure = state.available + durations.deadhead_buffer;
        let outbound_arrival = outbound_departure + durations.deadhead_travel;
        let return_arrival = next_departure - durations.deadhead_buffer;
        let return_departure = return_arrival - durations.deadhead_travel;
        if !outbound_arrival.is_at_most(return_departure) {
            debug!("idle time of unit {} too short for a depot evolution", state.unit);
            return;
        }
        assignments.push(Assignment::deadhead(
            state.unit,
            Movement::EvolutionToDepot,
            state.station.clone(),
            outbound_departure,
            depot_access.clone(),
            outbound_arrival,
            line,
        ));
        assignments.push(Assignment::deadhead(
            state.unit,
            Movement::EvolutionFromDepot,
            depot_access.clone(),
            return_departure,
            state.station.clone(),
            return_arrival,
            line,
        ));
    }
}
