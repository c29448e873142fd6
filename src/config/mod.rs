//! Configuration models for lot capacity and audit retention.

pub mod lot;

pub use lot::LotConfig;
