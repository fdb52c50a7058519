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


use std::collections::BTreeSet;

use itertools::Itertools;
use model::base_types::{FleetTypeId, LineId, StationId, UnitId};
use model::fleet::FleetType;
use model::Instance;
use rayon::prelude::*;
use solution::plan::{LineReport, LineStatus, UnitReport};
use solution::statistics::{utilisation_rate, CapacityEstimator, DistanceTally, FlowBalance};
use solution::{Assignment, Plan, PlanningWarning, Roster, Rotation};
use tracing::{error, info, warn};

use crate::dispatcher::TripDispatcher;
use crate::fleet_pool::FleetPool;
use crate::maintenance_scheduler::MaintenanceScheduler;
use crate::rotation_chainer::RotationChainer;

/// Runs the whole pipeline: dispatch of every line, maintenance, rotations, statistics.
pub struct Planner {
    instance: Instance,
    dispatcher: TripDispatcher,
    maintenance_scheduler: MaintenanceScheduler,
    rotation_chainer: RotationChainer,
}

impl Planner {
    pub fn initialize(instance: Instance) -> Planner {
        Planner {
            dispatcher: TripDispatcher::initialize(
                instance.deadheads.clone(),
                instance.config.clone(),
            ),
            maintenance_scheduler: MaintenanceScheduler::initialize(
                instance.maintenance.clone(),
                instance.config.clone(),
            ),
            rotation_chainer: RotationChainer::initialize(),
            instance,
        }
    }

    /// Never fails: aborted lines, unknown distances and unplaced maintenance end up as warnings.
    pub fn plan(&self) -> Plan {
        let mut warnings: Vec<PlanningWarning> = Vec::new();

        let (roster, statuses) = self.dispatch_lines(&mut warnings);
        let roster = self.schedule_maintenance(roster, &mut warnings);
        let rotations = self.chain_rotations(&roster);

        let lines: Vec<LineReport> = statuses
            .into_par_iter()
            .map(|(line, status)| self.line_report(&roster, line, status))
            .collect();
        let units: Vec<(UnitId, &FleetType)> = self
            .instance
            .fleet
            .iter()
            .flat_map(|fleet_type| fleet_type.units().map(move |unit| (unit, fleet_type)))
            .sorted_by_key(|(unit, _)| *unit)
            .collect();
        let unit_reports: Vec<(UnitReport, DistanceTally)> = units
            .into_par_iter()
            .map(|(unit, fleet_type)| self.unit_report(&roster, &rotations, unit, fleet_type))
            .collect();

        let unknown_pairs: BTreeSet<(StationId, StationId)> = unit_reports
            .iter()
            .flat_map(|(_, tally)| tally.unknown_pairs().cloned())
            .collect();
        for (origin, destination) in unknown_pairs {
            let warning = PlanningWarning::UnknownDistance {
                origin,
                destination,
            };
            warn!("{}", warning);
            warnings.push(warning);
        }

        info!(
            "plan finished: {} units in service, {} assignments, {} warnings",
            roster.number_of_units(),
            roster.number_of_assignments(),
            warnings.len()
        );

        Plan::new(
            roster,
            lines,
            unit_reports.into_iter().map(|(report, _)| report).collect(),
            rotations,
            warnings,
        )
    }

    /// Lines in ascending id order, one pool threaded through all of them.
    fn dispatch_lines(
        &self,
        warnings: &mut Vec<PlanningWarning>,
    ) -> (Roster, Vec<(LineId, LineStatus)>) {
        let mut pool = FleetPool::new(self.instance.fleet.clone(), self.instance.routing.clone());
        let mut assignments: Vec<Assignment> = Vec::new();
        let mut statuses = Vec::new();

        for line in self.instance.timetable.lines() {
            match self.dispatcher.dispatch(line, &pool) {
                Ok((new_pool, line_assignments)) => {
                    let units: Vec<UnitId> = line_assignments
                        .iter()
                        .map(Assignment::unit)
                        .unique()
                        .collect();
                    let fleet_types: Vec<FleetTypeId> = units
                        .iter()
                        .filter_map(|unit| new_pool.material_of(*unit).cloned())
                        .unique()
                        .collect();
                    pool = new_pool;
                    assignments.extend(line_assignments);
                    statuses.push((
                        line.id().clone(),
                        LineStatus::Dispatched { fleet_types, units },
                    ));
                }
                Err(dispatch_error) => {
                    warn!("{}", dispatch_error);
                    warnings.push(PlanningWarning::LineAborted {
                        line: line.id().clone(),
                        reason: dispatch_error.to_string(),
                    });
                    statuses.push((
                        line.id().clone(),
                        LineStatus::Aborted {
                            reason: dispatch_error.to_string(),
                        },
                    ));
                }
            }
        }
        (Roster::from_assignments(assignments), statuses)
    }

    fn schedule_maintenance(&self, roster: Roster, warnings: &mut Vec<PlanningWarning>) -> Roster {
        let mut roster = roster;
        for fleet_type in self.instance.fleet.iter() {
            let (new_roster, unplaced) = self.maintenance_scheduler.schedule(&roster, fleet_type);
            roster = new_roster;
            warnings.extend(
                unplaced
                    .into_iter()
                    .map(|slot| PlanningWarning::UnplaceableMaintenance { slot }),
            );
        }
        roster
    }

    /// Fleet types without any unit in service get no rotation.
    fn chain_rotations(&self, roster: &Roster) -> Vec<Rotation> {
        self.instance
            .fleet
            .iter()
            .filter(|fleet_type| roster.units_of_type(fleet_type).next().is_some())
            .filter_map(|fleet_type| match self.rotation_chainer.chain(roster, fleet_type) {
                Ok(rotation) => {
                    info!("{}", rotation);
                    Some(rotation)
                }
                Err(rotation_error) => {
                    error!("no rotation for {}: {}", fleet_type.id(), rotation_error);
                    None
                }
            })
            .collect()
    }

    fn line_report(&self, roster: &Roster, line: LineId, status: LineStatus) -> LineReport {
        let label = self
            .instance
            .timetable
            .line(&line)
            .map(|l| l.label())
            .unwrap_or_else(|| line.to_string());
        let estimator =
            CapacityEstimator::new(&self.instance.fleet, &self.instance.config.capacity);
        LineReport {
            label,
            distance: DistanceTally::of(roster.line_assignments(&line), &self.instance.distances)
                .total(),
            flow_balance: FlowBalance::of_line(roster, &line),
            capacity: estimator.estimate(roster.line_assignments(&line)),
            status,
            line,
        }
    }

    fn unit_report(
        &self,
        roster: &Roster,
        rotations: &[Rotation],
        unit: UnitId,
        fleet_type: &FleetType,
    ) -> (UnitReport, DistanceTally) {
        let timeline = roster.timeline_of(unit);
        let tally = DistanceTally::of(
            timeline.into_iter().flat_map(|t| t.iter()),
            &self.instance.distances,
        );
        let report = UnitReport {
            unit,
            fleet_type: fleet_type.id().clone(),
            parked_at: match timeline {
                Some(_) => None,
                None => Some(fleet_type.home_station().clone()),
            },
            distance: tally.total(),
            utilisation: timeline
                .map(|t| utilisation_rate(t, &self.instance.config.utilisation_window))
                .unwrap_or(0.0),
            rotation: rotations
                .iter()
                .find(|rotation| rotation.fleet_type() == fleet_type.id())
                .and_then(|rotation| rotation.entry_of(unit)),
        };
        (report, tally)
    }
}
