//! Caller-facing request/response surface.

pub mod api;
