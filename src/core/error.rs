//! Error types for allocator operations.

use thiserror::Error;

use crate::util::serde::{VehicleCategory, VehicleId};

/// Errors produced by the parking allocator.
///
/// Every variant is recoverable; a rejected operation leaves the lot untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParkingError {
    /// The vehicle already occupies a space.
    #[error("vehicle already parked: {0}")]
    DuplicateVehicle(VehicleId),
    /// No eligible space remains for the category.
    #[error("lot full for {category} vehicles")]
    LotFull {
        /// Category that was refused.
        category: VehicleCategory,
    },
    /// Release requested for a vehicle that is not parked.
    #[error("vehicle not parked: {0}")]
    VehicleNotFound(VehicleId),
    /// Vehicle identifier was empty or whitespace.
    #[error("vehicle identifier must not be empty")]
    InvalidVehicleId,
    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
