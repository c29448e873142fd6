//! Core allocation logic, audit trail, and error types.

pub mod allocator;
pub mod audit;
pub mod error;

pub use allocator::{
    compute_fee, LotSnapshot, Occupancy, ParkedVehicle, ParkingAllocator, ParkingReceipt,
    ParkingTicket,
};
pub use audit::{build_audit_event, AuditAction, AuditEvent, AuditSink, InMemoryAuditSink};
pub use error::{AppResult, ParkingError};
