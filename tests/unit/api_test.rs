//! Tests for caller-facing api models

use std::time::Duration;

use carpark_allocator::core::ParkingAllocator;
use carpark_allocator::runtime::api::{
    inspect_lot, park_vehicle, unpark_vehicle, ParkRequest, UnparkRequest,
};
use carpark_allocator::util::{LotCapacity, ManualClock, VehicleCategory};

#[test]
fn test_park_and_unpark_through_api() {
    let clock = ManualClock::starting_at(0);
    let allocator = ParkingAllocator::with_clock(LotCapacity::new(1, 1), clock.clone());

    let req: ParkRequest =
        serde_json::from_str(r#"{"vehicle_id": "car-9", "category": "large"}"#).unwrap();
    let ticket = park_vehicle(&allocator, &req).unwrap();
    assert_eq!(ticket.space, VehicleCategory::Large);

    clock.advance(Duration::from_secs(7_200));
    let receipt = unpark_vehicle(
        &allocator,
        &UnparkRequest {
            vehicle_id: "car-9".into(),
        },
    )
    .unwrap();
    assert!((receipt.fee - 40.0).abs() < 1e-9);
}

#[test]
fn test_api_errors_are_display_strings() {
    let allocator = ParkingAllocator::new(LotCapacity::new(1, 0));
    let err = unpark_vehicle(
        &allocator,
        &UnparkRequest {
            vehicle_id: "nope".into(),
        },
    )
    .unwrap_err();
    assert_eq!(err, "vehicle not parked: nope");
}

#[test]
fn test_inspect_lot_snapshot() {
    let allocator = ParkingAllocator::new(LotCapacity::new(0, 2));
    let req = ParkRequest {
        vehicle_id: "hb-1".into(),
        category: VehicleCategory::Compact,
    };
    park_vehicle(&allocator, &req).unwrap();

    let snapshot = inspect_lot(&allocator);
    assert_eq!(snapshot.vehicles.len(), 1);
    assert_eq!(snapshot.occupancy.overflowed, 1);
    assert_eq!(snapshot.occupancy.large_free, 1);

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["vehicles"][0]["category"], "compact");
    assert_eq!(json["vehicles"][0]["space"], "large");
}
