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

use std::collections::HashMap;
use std::sync::Arc;

use model::base_types::{FleetTypeId, LineId, UnitId};
use model::routing::LineRouting;

use crate::fleet_pool::{FleetPool, PoolExhausted};
use crate::test_utilities::{fleet, fleet_type, single_routing};

fn preference_pool() -> FleetPool {
    let routing = LineRouting::new(
        HashMap::from([(LineId::from("fixed"), FleetTypeId::from("A"))]),
        vec![FleetTypeId::from("A")],
        FleetTypeId::from("B"),
    );
    FleetPool::new(
        fleet(vec![fleet_type("A", 1, 1, "S1"), fleet_type("B", 10, 2, "S2")]),
        Arc::new(routing),
    )
}

#[test]
fn allocate_within_numbering_range_test() {
    // ARRANGE
    let mut pool = FleetPool::new(
        fleet(vec![fleet_type("X", 22201, 3, "S1")]),
        single_routing("X"),
    );
    let x = FleetTypeId::from("X");

    // ACT
    let units: Vec<_> = (0..3).map(|_| pool.allocate(&x).unwrap()).collect();
    let fourth = pool.allocate(&x);

    // ASSERT
    assert_eq!(units, vec![UnitId(22201), UnitId(22202), UnitId(22203)]);
    assert_eq!(
        fourth,
        Err(PoolExhausted {
            fleet_type: x.clone(),
            quantity: 3
        })
    );
    assert_eq!(pool.used(&x), 3, "a failed allocation does not count");
    assert!(!pool.has_units_left(&x));
}

#[test]
fn unknown_fleet_type_is_exhausted_test() {
    let mut pool = preference_pool();
    let unknown = FleetTypeId::from("TGV");

    assert_eq!(
        pool.allocate(&unknown),
        Err(PoolExhausted {
            fleet_type: unknown,
            quantity: 0
        })
    );
}

#[test]
fn type_for_prefers_until_quota_is_exhausted_test() {
    // ARRANGE
    let mut pool = preference_pool();
    let free_line = LineId::from("free");
    let fixed_line = LineId::from("fixed");
    let a = FleetTypeId::from("A");
    let b = FleetTypeId::from("B");

    // ACT & ASSERT
    assert_eq!(pool.type_for(&free_line), &a);
    assert_eq!(pool.allocate(&a), Ok(UnitId(1)));
    assert_eq!(pool.type_for(&free_line), &b, "A has no unit left");
    assert_eq!(pool.type_for(&fixed_line), &a, "routed lines stay with their type");
    assert_eq!(pool.allocate(&b), Ok(UnitId(10)));
    assert_eq!(pool.allocate(&b), Ok(UnitId(11)));
    assert!(pool.allocate(&b).is_err());
    assert_eq!(pool.used(&b), 2);
}

#[test]
fn material_of_test() {
    let pool = preference_pool();

    assert_eq!(pool.material_of(UnitId(1)), Some(&FleetTypeId::from("A")));
    assert_eq!(pool.material_of(UnitId(11)), Some(&FleetTypeId::from("B")));
    assert_eq!(pool.material_of(UnitId(12)), None);
    assert_eq!(pool.material_of(UnitId(2)), None);
}

#[test]
fn clone_is_a_snapshot_test() {
    // ARRANGE
    let mut pool = preference_pool();
    let a = FleetTypeId::from("A");
    pool.allocate(&a).unwrap();

    // ACT
    let snapshot = pool.clone();
    pool.allocate(&FleetTypeId::from("B")).unwrap();

    // ASSERT
    assert_eq!(snapshot.used(&a), 1);
    assert_eq!(snapshot.used(&FleetTypeId::from("B")), 0);
    assert_eq!(pool.used(&FleetTypeId::from("B")), 1);
    let fresh = preference_pool();
    assert_eq!(fresh.used(&a), 0);
}
