//! # Car Park Allocator
//!
//! A thread-safe space allocator for a car park with two space classes,
//! compact and large.
//!
//! The allocator admits and releases vehicles, bills each stay by the hour,
//! and gives an operator a read-only view of what is parked.
//!
//! ## Admission policy
//!
//! - **Large** vehicles only take large spaces.
//! - **Compact** vehicles prefer compact spaces and, when those run out,
//!   borrow a large space. They are still billed at the compact rate.
//!
//! | Category | Hourly rate | Eligible spaces  |
//! |----------|-------------|------------------|
//! | Compact  | 10          | compact, large   |
//! | Large    | 20          | large            |
//!
//! ## Usage
//!
//! ```rust
//! use carpark_allocator::core::ParkingAllocator;
//! use carpark_allocator::util::{LotCapacity, ManualClock, VehicleCategory};
//! use std::time::Duration;
//!
//! let clock = ManualClock::starting_at(0);
//! let lot = ParkingAllocator::with_clock(LotCapacity::new(0, 1), clock.clone());
//!
//! let ticket = lot.park("car-2", VehicleCategory::Compact).unwrap();
//! assert_eq!(ticket.space, VehicleCategory::Large);
//!
//! clock.advance(Duration::from_secs(1_800));
//! let receipt = lot.unpark("car-2").unwrap();
//! assert!((receipt.fee - 5.0).abs() < 1e-9);
//! ```
//!
//! Every operation holds one internal lock for its full duration, so a
//! shared `Arc<ParkingAllocator>` can serve several admission terminals.

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core allocation logic, audit trail, and error types.
pub mod core;
/// Configuration models for lot capacity and audit retention.
pub mod config;
/// Builders to construct allocators from configuration.
pub mod builders;
/// Caller-facing request/response surface.
pub mod runtime;
/// Shared utilities.
pub mod util;
