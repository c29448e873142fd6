//! Parking allocator with overflow borrowing and time-based billing.
//!
//! All lot state lives behind a single `parking_lot::Mutex`, held for the
//! full duration of each operation, so admissions and releases are atomic
//! with respect to each other: a call either applies its whole state change
//! or is rejected without touching the lot.

use std::collections::HashMap;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::core::audit::{build_audit_event, AuditAction, AuditEvent, AuditSink};
use crate::core::error::ParkingError;
use crate::util::clock::{Clock, SystemClock};
use crate::util::serde::{LotCapacity, VehicleCategory, VehicleId};

const MS_PER_HOUR: f64 = 3_600_000.0;

/// A vehicle currently occupying a space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkedVehicle {
    /// Vehicle identifier.
    pub vehicle_id: VehicleId,
    /// Declared category; also the billing category.
    pub category: VehicleCategory,
    /// Space class physically occupied.
    pub space: VehicleCategory,
    /// Arrival time in milliseconds since epoch.
    pub arrived_at_ms: u128,
}

impl ParkedVehicle {
    /// Whether the vehicle borrowed a space of another class.
    #[must_use]
    pub fn is_overflow(&self) -> bool {
        self.space != self.category
    }
}

/// Issued on successful admission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingTicket {
    /// Vehicle identifier.
    pub vehicle_id: VehicleId,
    /// Declared category.
    pub category: VehicleCategory,
    /// Space class assigned.
    pub space: VehicleCategory,
    /// Arrival time in milliseconds since epoch.
    pub arrived_at_ms: u128,
    /// True when a compact vehicle was placed in a large space.
    pub overflow: bool,
}

/// Issued on successful release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkingReceipt {
    /// Vehicle identifier.
    pub vehicle_id: VehicleId,
    /// Billing category.
    pub category: VehicleCategory,
    /// Space class that was released.
    pub space: VehicleCategory,
    /// Arrival time in milliseconds since epoch.
    pub arrived_at_ms: u128,
    /// Departure time in milliseconds since epoch.
    pub departed_at_ms: u128,
    /// Billed duration in milliseconds, clamped at zero.
    pub elapsed_ms: u128,
    /// Amount due in currency units.
    pub fee: f64,
}

/// Point-in-time counters for operator display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    /// Configured spaces per class.
    pub capacity: LotCapacity,
    /// Free compact spaces.
    pub compact_free: u32,
    /// Free large spaces.
    pub large_free: u32,
    /// Parked vehicles declared compact, wherever they are parked.
    pub compact_parked: u32,
    /// Parked vehicles declared large.
    pub large_parked: u32,
    /// Compact vehicles occupying large spaces.
    pub overflowed: u32,
}

/// Operator view of the lot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotSnapshot {
    /// Counters.
    pub occupancy: Occupancy,
    /// Parked vehicles, ordered by arrival then identifier.
    pub vehicles: Vec<ParkedVehicle>,
}

struct LotState {
    compact_free: u32,
    large_free: u32,
    occupied: HashMap<VehicleId, ParkedVehicle>,
}

impl LotState {
    fn new(capacity: LotCapacity) -> Self {
        Self {
            compact_free: capacity.compact,
            large_free: capacity.large,
            occupied: HashMap::new(),
        }
    }

    const fn free(&self, space: VehicleCategory) -> u32 {
        match space {
            VehicleCategory::Compact => self.compact_free,
            VehicleCategory::Large => self.large_free,
        }
    }

    fn free_mut(&mut self, space: VehicleCategory) -> &mut u32 {
        match space {
            VehicleCategory::Compact => &mut self.compact_free,
            VehicleCategory::Large => &mut self.large_free,
        }
    }

    fn admit(
        &mut self,
        vehicle_id: &str,
        category: VehicleCategory,
        now_ms: u128,
    ) -> Result<ParkedVehicle, ParkingError> {
        if vehicle_id.trim().is_empty() {
            return Err(ParkingError::InvalidVehicleId);
        }
        if self.occupied.contains_key(vehicle_id) {
            return Err(ParkingError::DuplicateVehicle(vehicle_id.to_string()));
        }

        let space = category
            .eligible_spaces()
            .iter()
            .copied()
            .find(|space| self.free(*space) > 0)
            .ok_or(ParkingError::LotFull { category })?;
        *self.free_mut(space) -= 1;

        let entry = ParkedVehicle {
            vehicle_id: vehicle_id.to_string(),
            category,
            space,
            arrived_at_ms: now_ms,
        };
        self.occupied.insert(entry.vehicle_id.clone(), entry.clone());
        Ok(entry)
    }

    fn sorted_vehicles(&self) -> Vec<ParkedVehicle> {
        let mut vehicles: Vec<ParkedVehicle> = self.occupied.values().cloned().collect();
        vehicles.sort_by(|a, b| {
            a.arrived_at_ms
                .cmp(&b.arrived_at_ms)
                .then_with(|| a.vehicle_id.cmp(&b.vehicle_id))
        });
        vehicles
    }

    fn occupancy(&self, capacity: LotCapacity) -> Occupancy {
        let mut occupancy = Occupancy {
            capacity,
            compact_free: self.compact_free,
            large_free: self.large_free,
            compact_parked: 0,
            large_parked: 0,
            overflowed: 0,
        };
        for entry in self.occupied.values() {
            match entry.category {
                VehicleCategory::Compact => occupancy.compact_parked += 1,
                VehicleCategory::Large => occupancy.large_parked += 1,
            }
            if entry.is_overflow() {
                occupancy.overflowed += 1;
            }
        }
        occupancy
    }

    fn release(&mut self, vehicle_id: &str) -> Result<ParkedVehicle, ParkingError> {
        let entry = self
            .occupied
            .remove(vehicle_id)
            .ok_or_else(|| ParkingError::VehicleNotFound(vehicle_id.to_string()))?;
        *self.free_mut(entry.space) += 1;
        Ok(entry)
    }
}

/// Fee for a stay of `elapsed_ms` billed at the category's hourly rate.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn compute_fee(category: VehicleCategory, elapsed_ms: u128) -> f64 {
    let hours = elapsed_ms as f64 / MS_PER_HOUR;
    hours * f64::from(category.hourly_rate())
}

/// Tracks free spaces, admits and releases vehicles, and bills on release.
pub struct ParkingAllocator<C = SystemClock> {
    capacity: LotCapacity,
    state: Mutex<LotState>,
    clock: C,
    audit: Option<Mutex<Box<dyn AuditSink>>>,
}

impl ParkingAllocator<SystemClock> {
    /// Create an allocator reading time from the system clock.
    #[must_use]
    pub fn new(capacity: LotCapacity) -> Self {
        Self::with_clock(capacity, SystemClock)
    }
}

impl<C: Clock> ParkingAllocator<C> {
    /// Create an allocator reading time from the supplied clock.
    pub fn with_clock(capacity: LotCapacity, clock: C) -> Self {
        Self {
            capacity,
            state: Mutex::new(LotState::new(capacity)),
            clock,
            audit: None,
        }
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(Mutex::new(audit));
        self
    }

    /// Admit a vehicle.
    ///
    /// Compact vehicles take a compact space when one is free and otherwise
    /// borrow a large space, still billed at the compact rate.
    ///
    /// # Errors
    ///
    /// `InvalidVehicleId` for a blank identifier, `DuplicateVehicle` if the
    /// vehicle is already parked, `LotFull` if no eligible space is free.
    pub fn park(
        &self,
        vehicle_id: &str,
        category: VehicleCategory,
    ) -> Result<ParkingTicket, ParkingError> {
        let mut state = self.state.lock();
        let now = self.clock.now_ms();

        match state.admit(vehicle_id, category, now) {
            Ok(entry) => {
                if entry.is_overflow() {
                    tracing::debug!(
                        "no {} space free for {}, borrowing a {} space",
                        category,
                        vehicle_id,
                        entry.space
                    );
                }
                tracing::info!(
                    "parked {} ({}) in {} space, {} compact / {} large free",
                    vehicle_id,
                    category,
                    entry.space,
                    state.compact_free,
                    state.large_free
                );
                self.record_audit(build_audit_event(
                    vehicle_id,
                    Some(category),
                    Some(entry.space),
                    AuditAction::Park,
                    now,
                    None,
                ));
                Ok(ParkingTicket {
                    overflow: entry.is_overflow(),
                    vehicle_id: entry.vehicle_id,
                    category: entry.category,
                    space: entry.space,
                    arrived_at_ms: entry.arrived_at_ms,
                })
            }
            Err(e) => {
                tracing::warn!("park rejected for {}: {}", vehicle_id, e);
                self.record_audit(build_audit_event(
                    vehicle_id,
                    Some(category),
                    None,
                    AuditAction::Reject,
                    now,
                    Some(e.to_string()),
                ));
                Err(e)
            }
        }
    }

    /// Release a vehicle and compute its fee.
    ///
    /// The fee is the elapsed fractional hours times the hourly rate of the
    /// vehicle's own category. Elapsed time is clamped at zero if the clock
    /// reads earlier than the arrival time.
    ///
    /// # Errors
    ///
    /// `VehicleNotFound` if the vehicle is not parked.
    pub fn unpark(&self, vehicle_id: &str) -> Result<ParkingReceipt, ParkingError> {
        let mut state = self.state.lock();
        let now = self.clock.now_ms();

        let entry = match state.release(vehicle_id) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("unpark rejected for {}: {}", vehicle_id, e);
                self.record_audit(build_audit_event(
                    vehicle_id,
                    None,
                    None,
                    AuditAction::Reject,
                    now,
                    Some(e.to_string()),
                ));
                return Err(e);
            }
        };

        let elapsed_ms = now.saturating_sub(entry.arrived_at_ms);
        let fee = compute_fee(entry.category, elapsed_ms);
        tracing::info!(
            "unparked {} ({}) from {} space after {} ms, fee {:.2}",
            vehicle_id,
            entry.category,
            entry.space,
            elapsed_ms,
            fee
        );
        self.record_audit(build_audit_event(
            vehicle_id,
            Some(entry.category),
            Some(entry.space),
            AuditAction::Unpark,
            now,
            Some(format!("{fee:.2}")),
        ));

        Ok(ParkingReceipt {
            vehicle_id: entry.vehicle_id,
            category: entry.category,
            space: entry.space,
            arrived_at_ms: entry.arrived_at_ms,
            departed_at_ms: now,
            elapsed_ms,
            fee,
        })
    }

    /// Snapshot of all parked vehicles, ordered by arrival then identifier.
    #[must_use]
    pub fn inspect(&self) -> Vec<ParkedVehicle> {
        self.state.lock().sorted_vehicles()
    }

    /// Current free and parked counters.
    #[must_use]
    pub fn occupancy(&self) -> Occupancy {
        self.state.lock().occupancy(self.capacity)
    }

    /// Counters and vehicle list read under a single lock acquisition.
    #[must_use]
    pub fn snapshot(&self) -> LotSnapshot {
        let state = self.state.lock();
        LotSnapshot {
            occupancy: state.occupancy(self.capacity),
            vehicles: state.sorted_vehicles(),
        }
    }

    /// Free spaces of the given class.
    #[must_use]
    pub fn free_spaces(&self, space: VehicleCategory) -> u32 {
        self.state.lock().free(space)
    }

    /// Whether the vehicle currently occupies a space.
    #[must_use]
    pub fn is_parked(&self, vehicle_id: &str) -> bool {
        self.state.lock().occupied.contains_key(vehicle_id)
    }

    /// Configured capacity.
    #[must_use]
    pub const fn capacity(&self) -> LotCapacity {
        self.capacity
    }

    /// Retained audit events, oldest first. Empty when no sink is attached.
    #[must_use]
    pub fn audit_events(&self) -> Vec<AuditEvent> {
        self.audit
            .as_ref()
            .map(|sink| sink.lock().events())
            .unwrap_or_default()
    }

    fn record_audit(&self, event: AuditEvent) {
        if let Some(sink) = &self.audit {
            sink.lock().record(event);
        }
    }
}
