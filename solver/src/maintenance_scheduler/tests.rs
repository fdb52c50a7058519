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

use model::base_types::{FleetTypeId, LineId, UnitId};
use model::maintenance::{MaintenanceRequirements, MaintenanceSlot};
use solution::{Assignment, Roster};
use time::{Duration, Time};

use crate::maintenance_scheduler::MaintenanceScheduler;
use crate::test_utilities::{assert_time, config_with_turnaround, fleet_type, station, trip};

fn slot(hours: f64, location: &str) -> MaintenanceSlot {
    MaintenanceSlot::new(
        FleetTypeId::from("X"),
        Duration::from_hours(hours),
        Time::from_hours(8.0),
        Time::from_hours(18.0),
        station(location),
    )
}

fn scheduler(slots: Vec<MaintenanceSlot>) -> MaintenanceScheduler {
    MaintenanceScheduler::initialize(
        Arc::new(MaintenanceRequirements::new(slots)),
        config_with_turnaround(0.2),
    )
}

/// unit 100 reaches S1 at 10:00 and leaves it again at `back_departure`.
fn roster_with_gap_until(back_departure: f64) -> Roster {
    let line = LineId::from("l");
    Roster::from_assignments(vec![
        Assignment::for_trip(UnitId(100), &trip(1, "S0", 9.0, "S1", 10.0), &line),
        Assignment::for_trip(
            UnitId(100),
            &trip(2, "S1", back_departure, "S0", back_departure + 1.0),
            &line,
        ),
    ])
}

#[test]
fn slot_placed_after_buffer_test() {
    // ARRANGE
    let slot = slot(1.0, "S1");
    let scheduler = scheduler(vec![slot.clone()]);
    let roster = roster_with_gap_until(13.0);

    // ACT
    let start = scheduler.find_start(roster.timeline_of(UnitId(100)).unwrap(), &slot);

    // ASSERT
    assert_time(start.unwrap(), 11.0);
}

#[test]
fn gap_shorter_than_slot_plus_buffers_test() {
    let slot = slot(1.0, "S1");
    let scheduler = scheduler(vec![slot.clone()]);
    let roster = roster_with_gap_until(12.5);

    let start = scheduler.find_start(roster.timeline_of(UnitId(100)).unwrap(), &slot);

    assert_eq!(start, None);
}

#[test]
fn schedule_adds_maintenance_assignment_test() {
    // ARRANGE
    let scheduler = scheduler(vec![slot(1.0, "S1")]);
    let roster = roster_with_gap_until(13.0);

    // ACT
    let (roster, unplaced) = scheduler.schedule(&roster, &fleet_type("X", 100, 2, "S0"));

    // ASSERT
    assert!(unplaced.is_empty());
    let timeline = roster.timeline_of(UnitId(100)).unwrap();
    assert_eq!(timeline.len(), 3);
    let maintenance: Vec<&Assignment> = timeline.iter().filter(|a| a.is_maintenance()).collect();
    assert_eq!(maintenance.len(), 1);
    assert_eq!(maintenance[0].code(), "MAINT-X-1100");
    assert_eq!(maintenance[0].origin(), &station("S1"));
    assert_eq!(maintenance[0].destination(), &station("S1"));
    assert_time(maintenance[0].arrival(), 12.0);
    assert!(!maintenance[0].is_deadhead());
    assert_eq!(maintenance[0].line(), None);
    assert!(timeline.chaining_violations(Duration::ZERO).is_empty());
}

#[test]
fn two_slots_do_not_overlap_test() {
    // ARRANGE
    let scheduler = scheduler(vec![slot(1.0, "S1"), slot(1.0, "S1")]);
    let roster = roster_with_gap_until(16.0);

    // ACT
    let (roster, unplaced) = scheduler.schedule(&roster, &fleet_type("X", 100, 1, "S0"));

    // ASSERT
    assert!(unplaced.is_empty());
    let starts: Vec<Time> = roster
        .timeline_of(UnitId(100))
        .unwrap()
        .iter()
        .filter(|a| a.is_maintenance())
        .map(|a| a.departure())
        .collect();
    assert_eq!(starts.len(), 2);
    assert_time(starts[0], 11.0);
    assert_time(starts[1], 13.0);
}

#[test]
fn slot_at_other_location_unplaced_test() {
    // ARRANGE
    let elsewhere = slot(1.0, "S2");
    let scheduler = scheduler(vec![elsewhere.clone()]);
    let roster = roster_with_gap_until(16.0);

    // ACT
    let (new_roster, unplaced) = scheduler.schedule(&roster, &fleet_type("X", 100, 1, "S0"));

    // ASSERT
    assert_eq!(unplaced, vec![elsewhere]);
    assert_eq!(new_roster, roster);
}

#[test]
fn longest_slot_served_first_test() {
    // ARRANGE
    let short = slot(0.5, "S1");
    let long = slot(1.0, "S1");
    let scheduler = scheduler(vec![short.clone(), long]);
    let roster = roster_with_gap_until(13.5);

    // ACT
    let (roster, unplaced) = scheduler.schedule(&roster, &fleet_type("X", 100, 1, "S0"));

    // ASSERT
    assert_eq!(unplaced, vec![short]);
    let maintenance: Vec<&Assignment> = roster
        .timeline_of(UnitId(100))
        .unwrap()
        .iter()
        .filter(|a| a.is_maintenance())
        .collect();
    assert_eq!(maintenance.len(), 1);
    assert_eq!(maintenance[0].duration(), Duration::from_hours(1.0));
}

#[test]
fn next_unit_used_when_first_is_busy_test() {
    // ARRANGE
    let scheduler = scheduler(vec![slot(1.0, "S1")]);
    let line = LineId::from("l");
    let roster = roster_with_gap_until(12.5).add_assignment(Assignment::for_trip(
        UnitId(101),
        &trip(3, "S1", 6.0, "S0", 7.0),
        &line,
    ));
    let roster = roster.add_assignment(Assignment::for_trip(
        UnitId(101),
        &trip(4, "S0", 7.5, "S1", 8.5),
        &line,
    ));

    // ACT
    let (roster, unplaced) = scheduler.schedule(&roster, &fleet_type("X", 100, 2, "S0"));

    // ASSERT
    assert!(unplaced.is_empty());
    let placed = roster
        .timelines()
        .flat_map(|timeline| timeline.iter())
        .find(|a| a.is_maintenance())
        .unwrap();
    assert_eq!(placed.unit(), UnitId(101));
    assert_time(placed.departure(), 9.5);
}

#[test]
fn idle_unit_never_hosts_maintenance_test() {
    let scheduler = scheduler(vec![slot(1.0, "S1")]);

    let (roster, unplaced) = scheduler.schedule(&Roster::empty(), &fleet_type("X", 100, 2, "S0"));

    assert_eq!(roster.number_of_assignments(), 0);
    assert_eq!(unplaced.len(), 1);
}

/// unit 100 stands at S1 from 05:00 to 22:00, across the whole window.
fn roster_idle_across_window() -> Roster {
    let line = LineId::from("l");
    Roster::from_assignments(vec![
        Assignment::for_trip(UnitId(100), &trip(1, "S0", 4.0, "S1", 5.0), &line),
        Assignment::for_trip(UnitId(100), &trip(2, "S1", 22.0, "S0", 23.0), &line),
    ])
}

#[test]
fn window_edges_keep_buffer_test() {
    // ARRANGE
    let slot = slot(1.0, "S1");
    let scheduler = scheduler(vec![slot.clone()]);
    let roster = roster_idle_across_window();

    // ACT
    let start = scheduler.find_start(roster.timeline_of(UnitId(100)).unwrap(), &slot);

    // ASSERT
    assert_time(start.unwrap(), 9.0);
}

#[test]
fn slot_longer_than_buffered_window_unplaced_test() {
    // ARRANGE
    let scheduler = scheduler(vec![slot(8.0, "S1"), slot(8.5, "S1")]);
    let roster = roster_idle_across_window();

    // ACT
    let (roster, unplaced) = scheduler.schedule(&roster, &fleet_type("X", 100, 1, "S0"));

    // ASSERT
    assert_eq!(
        unplaced,
        vec![slot(8.5, "S1")],
        "the window [8, 18] leaves 8h once both buffers are taken off"
    );
    let placed: Vec<&Assignment> = roster
        .timeline_of(UnitId(100))
        .unwrap()
        .iter()
        .filter(|a| a.is_maintenance())
        .collect();
    assert_eq!(placed.len(), 1);
    assert_time(placed[0].departure(), 9.0);
    assert_time(placed[0].arrival(), 17.0);
}

#[test]
fn slot_filling_whole_window_unplaced_test() {
    let slot = slot(10.0, "S1");
    let scheduler = scheduler(vec![slot.clone()]);
    let roster = roster_idle_across_window();

    let start = scheduler.find_start(roster.timeline_of(UnitId(100)).unwrap(), &slot);

    assert_eq!(start, None);
}
