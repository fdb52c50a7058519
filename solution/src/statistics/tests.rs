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

use model::base_types::{Distance, FleetTypeId, LineId, StationId, UnitId};
use model::config::{ConfigCapacity, ConfigWindow};
use model::distances::DistanceTable;
use model::fleet::{Fleet, FleetType};
use time::Time;

use crate::assignment::Movement;
use crate::roster::Roster;
use crate::statistics::{utilisation_rate, CapacityEstimator, DistanceTally, FlowBalance};
use crate::test_utilities::{deadhead_assignment, station, trip_assignment};
use crate::timeline::UnitTimeline;
use crate::warnings::PlanningWarning;

fn default_config_capacity() -> ConfigCapacity {
    ConfigCapacity {
        reference_switch: Time::NOON,
        even_direction: String::from("Paris"),
        odd_direction: String::from("Province"),
    }
}

fn default_fleet() -> Fleet {
    Fleet::new(vec![
        FleetType::new(
            FleetTypeId::from("REG"),
            String::from("Regiolis"),
            84501,
            15,
            220,
            StationId::from("MRS"),
        ),
        FleetType::new(
            FleetTypeId::from("BGC"),
            String::from("AGC"),
            81501,
            22,
            200,
            StationId::from("AVI"),
        ),
    ])
}

#[test]
fn distance_tally_test() {
    // ARRANGE
    let table = DistanceTable::new(vec![(
        station("MRS"),
        station("AVI"),
        Distance::from_km(100.0),
    )]);
    let assignments = vec![
        deadhead_assignment(1, Movement::MorningDeadhead, ("BLA", 5.0), ("MRS", 5.1), "l"),
        trip_assignment(1, 1, ("MRS", 6.0), ("AVI", 7.0), "l"),
        trip_assignment(1, 2, ("AVI", 8.0), ("MRS", 9.0), "l"),
        trip_assignment(1, 3, ("TLN", 10.0), ("MRS", 11.0), "l"),
        trip_assignment(1, 5, ("MRS", 12.0), ("TLN", 13.0), "l"),
    ];

    // ACT
    let tally = DistanceTally::of(assignments.iter(), &table);

    // ASSERT
    assert_eq!(tally.total(), Distance::from_km(200.0));
    assert_eq!(
        tally.unknown_pairs().collect::<Vec<_>>(),
        vec![&(station("MRS"), station("TLN"))],
        "each missing pair is reported once"
    );
    assert_eq!(
        tally.warnings().collect::<Vec<_>>(),
        vec![PlanningWarning::UnknownDistance {
            origin: station("MRS"),
            destination: station("TLN"),
        }]
    );
    assert_eq!(DistanceTally::of(Vec::new(), &table).total(), Distance::ZERO);
}

#[test]
fn flow_balance_three_units_two_stations_test() {
    // ARRANGE
    let roster = Roster::from_assignments(vec![
        trip_assignment(1, 1, ("MRS", 6.0), ("AVI", 7.0), "l"),
        trip_assignment(2, 2, ("AVI", 6.5), ("MRS", 7.5), "l"),
        trip_assignment(3, 3, ("MRS", 8.0), ("AVI", 9.0), "l"),
        trip_assignment(3, 4, ("AVI", 9.5), ("MRS", 10.5), "l"),
        trip_assignment(4, 5, ("AVI", 9.5), ("ORA", 10.5), "other"),
    ]);

    // ACT
    let balance = FlowBalance::of_line(&roster, &LineId::from("l"));

    // ASSERT
    assert_eq!(balance.flow_at(&station("MRS")).starting, 2);
    assert_eq!(balance.flow_at(&station("MRS")).ending, 2);
    assert_eq!(balance.flow_at(&station("AVI")).starting, 1);
    assert_eq!(balance.flow_at(&station("AVI")).ending, 1);
    assert_eq!(balance.flow_at(&station("ORA")).starting, 0);
    assert_eq!(balance.stations().count(), 2);
    assert!(balance.is_balanced());

    let other = FlowBalance::of_line(&roster, &LineId::from("other"));
    assert_eq!(other.flow_at(&station("AVI")).balance(), 1);
    assert_eq!(other.flow_at(&station("ORA")).balance(), -1);
    assert!(!other.is_balanced());
}

#[test]
fn utilisation_rate_test() {
    // ARRANGE
    let window = ConfigWindow {
        start: Time::from_hours(5.5),
        end: Time::from_hours(22.5),
    };
    let timeline = UnitTimeline::from_assignments(
        UnitId(1),
        vec![
            trip_assignment(1, 1, ("MRS", 5.0), ("AVI", 6.5), "l"),
            deadhead_assignment(1, Movement::EvolutionToDepot, ("AVI", 7.0), ("DEP", 8.0), "l"),
            trip_assignment(1, 2, ("AVI", 22.0), ("MRS", 23.0), "l"),
        ],
    );

    // ACT
    let rate = utilisation_rate(&timeline, &window);

    // ASSERT
    assert!(
        (rate - 150.0 / 17.0).abs() < 1e-9,
        "1.5h of 17h expected, got {}%",
        rate
    );
    assert_eq!(utilisation_rate(&UnitTimeline::new(UnitId(2)), &window), 0.0);
}

#[test]
fn capacity_estimator_test() {
    // ARRANGE
    let fleet = default_fleet();
    let config = default_config_capacity();
    let estimator = CapacityEstimator::new(&fleet, &config);
    let assignments = vec![
        trip_assignment(84501, 802, ("MRS", 7.2), ("PAR", 8.4), "l"),
        trip_assignment(81501, 804, ("MRS", 7.5), ("PAR", 8.9), "l"),
        trip_assignment(84501, 806, ("MRS", 11.5), ("PAR", 12.3), "l"),
        trip_assignment(84502, 803, ("PAR", 13.2), ("MRS", 14.5), "l"),
        deadhead_assignment(84502, Movement::EveningDeadhead, ("MRS", 14.75), ("BLA", 14.833), "l"),
    ];

    // ACT
    let profile = estimator.estimate(assignments.iter());

    // ASSERT
    assert_eq!(profile.rows().count(), 12, "hours 8 to 13, two directions each");
    assert_eq!(profile.rows().next().unwrap().direction, "Paris");
    assert_eq!(profile.seats_at(8, "Paris"), 420);
    assert_eq!(profile.seats_at(8, "Province"), 0);
    assert_eq!(profile.seats_at(10, "Paris"), 0);
    assert_eq!(
        profile.seats_at(11, "Paris"),
        220,
        "arrival after noon: the departure hour counts"
    );
    assert_eq!(profile.seats_at(12, "Paris"), 0);
    assert_eq!(profile.seats_at(13, "Province"), 220);

    let peak = profile.peak("Paris").unwrap();
    assert_eq!((peak.hour, peak.seats), (8, 420));
    assert!(estimator.estimate(Vec::new()).is_empty());
}
