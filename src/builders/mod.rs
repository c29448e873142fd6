//! Builders to construct allocators from configuration.

pub mod lot_builder;

pub use lot_builder::{build_allocator, build_allocator_with_clock};
