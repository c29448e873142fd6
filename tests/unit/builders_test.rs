//! Tests for allocator builders

use carpark_allocator::builders::{build_allocator, build_allocator_with_clock};
use carpark_allocator::config::LotConfig;
use carpark_allocator::core::{AuditAction, ParkingError};
use carpark_allocator::util::{LotCapacity, ManualClock, VehicleCategory};

#[test]
fn test_build_allocator() {
    let allocator = build_allocator(&LotConfig::new(3, 2)).unwrap();
    assert_eq!(allocator.capacity(), LotCapacity::new(3, 2));
    assert_eq!(allocator.free_spaces(VehicleCategory::Compact), 3);
    assert_eq!(allocator.free_spaces(VehicleCategory::Large), 2);
}

#[test]
fn test_build_allocator_rejects_invalid_config() {
    let result = build_allocator(&LotConfig::new(0, 0));
    assert!(matches!(result, Err(ParkingError::InvalidConfig(_))));
}

#[test]
fn test_built_allocator_records_audit() {
    let mut cfg = LotConfig::new(1, 0);
    cfg.audit_capacity = 2;
    let allocator = build_allocator_with_clock(&cfg, ManualClock::starting_at(0)).unwrap();

    allocator.park("a", VehicleCategory::Compact).unwrap();
    let _ = allocator.park("b", VehicleCategory::Compact);
    allocator.unpark("a").unwrap();

    let events = allocator.audit_events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].action, AuditAction::Reject);
    assert_eq!(events[1].action, AuditAction::Unpark);
}
