//! Tests for audit sink

use carpark_allocator::core::{build_audit_event, AuditAction, AuditSink, InMemoryAuditSink};
use carpark_allocator::util::VehicleCategory;

#[test]
fn test_in_memory_audit_sink() {
    let mut sink = InMemoryAuditSink::new(10);

    sink.record(build_audit_event(
        "car-1",
        Some(VehicleCategory::Large),
        Some(VehicleCategory::Large),
        AuditAction::Park,
        42,
        None,
    ));

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].vehicle_id, "car-1");
    assert_eq!(events[0].action, AuditAction::Park);
    assert_eq!(events[0].created_at_ms, 42);
}

#[test]
fn test_audit_sink_overflow() {
    let mut sink = InMemoryAuditSink::new(2);

    for id in ["car-1", "car-2", "car-3"] {
        sink.record(build_audit_event(id, None, None, AuditAction::Reject, 0, None));
    }

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].vehicle_id, "car-2"); // First one popped
    assert_eq!(events[1].vehicle_id, "car-3");
}

#[test]
fn test_build_audit_event_ids_are_unique() {
    let a = build_audit_event("car-1", None, None, AuditAction::Unpark, 0, Some("5.00".into()));
    let b = build_audit_event("car-1", None, None, AuditAction::Unpark, 0, Some("5.00".into()));
    assert_ne!(a.event_id, b.event_id);
    assert_eq!(a.detail.as_deref(), Some("5.00"));
}

#[test]
fn test_audit_action_display() {
    assert_eq!(AuditAction::Park.to_string(), "park");
    assert_eq!(AuditAction::Unpark.to_string(), "unpark");
    assert_eq!(AuditAction::Reject.to_string(), "reject");
}
