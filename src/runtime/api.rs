//! API-facing request/response models for a thin caller such as a CLI or
//! admission terminal. Errors are flattened to display strings.

use serde::{Deserialize, Serialize};

use crate::core::{LotSnapshot, ParkingAllocator, ParkingReceipt, ParkingTicket};
use crate::util::clock::Clock;
use crate::util::serde::{VehicleCategory, VehicleId};

/// Admission request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkRequest {
    /// Vehicle identifier.
    pub vehicle_id: VehicleId,
    /// Declared category.
    pub category: VehicleCategory,
}

/// Release request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnparkRequest {
    /// Vehicle identifier.
    pub vehicle_id: VehicleId,
}

/// Admit a vehicle.
///
/// # Errors
///
/// Returns the display text of the allocator error.
pub fn park_vehicle<C: Clock>(
    allocator: &ParkingAllocator<C>,
    req: &ParkRequest,
) -> Result<ParkingTicket, String> {
    allocator
        .park(&req.vehicle_id, req.category)
        .map_err(|e| e.to_string())
}

/// Release a vehicle and return its receipt.
///
/// # Errors
///
/// Returns the display text of the allocator error.
pub fn unpark_vehicle<C: Clock>(
    allocator: &ParkingAllocator<C>,
    req: &UnparkRequest,
) -> Result<ParkingReceipt, String> {
    allocator
        .unpark(&req.vehicle_id)
        .map_err(|e| e.to_string())
}

/// Build an operator snapshot.
#[must_use]
pub fn inspect_lot<C: Clock>(allocator: &ParkingAllocator<C>) -> LotSnapshot {
    allocator.snapshot()
}
