//! Builders to construct a parking allocator from configuration.

use crate::config::LotConfig;
use crate::core::{InMemoryAuditSink, ParkingAllocator, ParkingError};
use crate::util::clock::{Clock, SystemClock};

/// Build an allocator on the system clock.
///
/// # Errors
///
/// `InvalidConfig` if the configuration fails validation.
pub fn build_allocator(cfg: &LotConfig) -> Result<ParkingAllocator<SystemClock>, ParkingError> {
    build_allocator_with_clock(cfg, SystemClock)
}

/// Build an allocator on the supplied clock, with an in-memory audit sink
/// sized from the configuration.
///
/// # Errors
///
/// `InvalidConfig` if the configuration fails validation.
pub fn build_allocator_with_clock<C: Clock>(
    cfg: &LotConfig,
    clock: C,
) -> Result<ParkingAllocator<C>, ParkingError> {
    cfg.validate().map_err(ParkingError::InvalidConfig)?;
    tracing::info!(
        "building lot with {} compact and {} large spaces",
        cfg.compact_spaces,
        cfg.large_spaces
    );
    Ok(ParkingAllocator::with_clock(cfg.capacity(), clock)
        .with_audit(Box::new(InMemoryAuditSink::new(cfg.audit_capacity))))
}
