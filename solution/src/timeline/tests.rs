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

use model::base_types::{FleetTypeId, StationId, UnitId};
use model::maintenance::MaintenanceSlot;
use time::{Duration, Time};

use crate::assignment::{Assignment, Movement};
use crate::test_utilities::{deadhead_assignment, station, trip_assignment};
use crate::timeline::UnitTimeline;

fn default_timeline() -> UnitTimeline {
    // given out of order on purpose
    UnitTimeline::from_assignments(
        UnitId(84501),
        vec![
            trip_assignment(84501, 802, ("AVI", 8.5), ("MRS", 10.5), "mrs-avi"),
            deadhead_assignment(
                84501,
                Movement::MorningDeadhead,
                ("BLA", 5.667),
                ("MRS", 5.75),
                "mrs-avi",
            ),
            trip_assignment(84501, 801, ("MRS", 6.0), ("AVI", 8.0), "mrs-avi"),
            deadhead_assignment(
                84501,
                Movement::EveningDeadhead,
                ("MRS", 10.75),
                ("BLA", 10.833),
                "mrs-avi",
            ),
        ],
    )
}

#[test]
fn basic_methods_test() {
    // ACT
    let timeline = default_timeline();

    // ASSERT
    assert_eq!(timeline.unit(), UnitId(84501));
    assert_eq!(timeline.len(), 4);
    assert!(!timeline.is_empty());
    assert_eq!(
        timeline.iter().map(Assignment::code).collect::<Vec<_>>(),
        vec!["EVM84501", "801", "802", "EVS84501"]
    );
    assert_eq!(timeline.first().unwrap().code(), "EVM84501");
    assert_eq!(timeline.last().unwrap().code(), "EVS84501");
    assert_eq!(timeline.start_station(), Some(&station("BLA")));
    assert_eq!(timeline.end_station(), Some(&station("BLA")));
    assert!(UnitTimeline::new(UnitId(1)).start_station().is_none());
}

#[test]
fn station_at_test() {
    let timeline = default_timeline();

    assert_eq!(timeline.station_at(Time::from_hours(4.0)), Some(&station("BLA")));
    assert_eq!(timeline.station_at(Time::from_hours(7.0)), Some(&station("MRS")));
    assert_eq!(timeline.station_at(Time::from_hours(8.0)), Some(&station("AVI")));
    assert_eq!(timeline.station_at(Time::from_hours(12.0)), Some(&station("BLA")));
    assert!(UnitTimeline::new(UnitId(1))
        .station_at(Time::NOON)
        .is_none());
}

#[test]
fn with_assignment_keeps_original_test() {
    // ARRANGE
    let timeline = default_timeline();
    let slot = MaintenanceSlot::new(
        FleetTypeId::from("REG"),
        Duration::from_hours(0.5),
        Time::from_hours(10.0),
        Time::from_hours(12.0),
        station("MRS"),
    );

    // ACT
    let shorter = UnitTimeline::from_assignments(
        UnitId(84501),
        timeline.iter().take(3).cloned().collect(),
    );
    let maintenance = Assignment::maintenance(UnitId(84501), &slot, Time::from_hours(11.5));
    let new_timeline = shorter.with_assignment(maintenance);

    // ASSERT
    assert_eq!(shorter.len(), 3);
    assert_eq!(new_timeline.len(), 4);
    assert_eq!(new_timeline.last().unwrap().code(), "MAINT-REG-1130");
    assert!(new_timeline.last().unwrap().is_maintenance());
    assert_eq!(new_timeline.last().unwrap().arrival(), Time::NOON);
    assert!(new_timeline.last().unwrap().line().is_none());
}

#[test]
fn movement_codes_test() {
    let unit = 22201;
    let evolution_out = deadhead_assignment(
        unit,
        Movement::EvolutionToDepot,
        ("MRS", 9.25),
        ("BLA", 9.333),
        "l",
    );
    let evolution_back = deadhead_assignment(
        unit,
        Movement::EvolutionFromDepot,
        ("BLA", 13.667),
        ("MRS", 13.75),
        "l",
    );

    assert_eq!(evolution_out.code(), "EVI22201-0915");
    assert_eq!(evolution_back.code(), "EVO22201-1340");
    assert!(evolution_out.is_deadhead());
    assert!(!evolution_out.is_commercial());
    assert!(evolution_out.trip().is_none());
}

#[test]
fn chaining_violations_test() {
    // ARRANGE
    let min_turnaround = Duration::from_hours(0.21);
    let valid = default_timeline();
    let broken = UnitTimeline::from_assignments(
        UnitId(1),
        vec![
            trip_assignment(1, 1, ("MRS", 6.0), ("AVI", 8.0), "l"),
            trip_assignment(1, 2, ("AVI", 8.1), ("MRS", 9.0), "l"),
            trip_assignment(1, 3, ("TLN", 10.0), ("MRS", 11.0), "l"),
        ],
    );

    // ACT
    let violations = broken.chaining_violations(min_turnaround);

    // ASSERT
    assert!(
        valid.chaining_violations(min_turnaround).is_empty(),
        "unexpected violations: {:?}",
        valid.chaining_violations(min_turnaround)
    );
    assert_eq!(violations.len(), 2);
    assert!(violations[0].contains("turnaround"));
    assert!(violations[1].contains("starts at TLN"));
    assert_eq!(
        valid.first().unwrap().origin(),
        &StationId::from("BLA"),
        "the morning deadhead comes first"
    );
}
