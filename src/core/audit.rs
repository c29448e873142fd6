//! Audit trail of admissions, releases, and rejections.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::serde::VehicleCategory;

/// Kind of allocator action recorded in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// Vehicle admitted.
    Park,
    /// Vehicle released and billed.
    Unpark,
    /// Request refused.
    Reject,
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Park => "park",
            Self::Unpark => "unpark",
            Self::Reject => "reject",
        })
    }
}

/// Audit event structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Event identifier.
    pub event_id: String,
    /// Vehicle the event concerns.
    pub vehicle_id: String,
    /// Declared category, when known.
    pub category: Option<VehicleCategory>,
    /// Space class occupied or released, when one was involved.
    pub space: Option<VehicleCategory>,
    /// Action taken.
    pub action: AuditAction,
    /// Timestamp milliseconds.
    pub created_at_ms: u128,
    /// Additional context (fee on release, error text on rejection).
    pub detail: Option<String>,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: AuditEvent);

    /// Snapshot of retained events, oldest first.
    fn events(&self) -> Vec<AuditEvent>;
}

/// In-memory audit sink with a bounded buffer; the oldest event is dropped
/// once full.
pub struct InMemoryAuditSink {
    events: VecDeque<AuditEvent>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    #[must_use]
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events.min(1024)),
            max_events,
        }
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AuditEvent) {
        if self.max_events == 0 {
            return;
        }
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    fn events(&self) -> Vec<AuditEvent> {
        self.events.iter().cloned().collect()
    }
}

/// Helper to build an audit event with a fresh identifier.
pub fn build_audit_event(
    vehicle_id: impl Into<String>,
    category: Option<VehicleCategory>,
    space: Option<VehicleCategory>,
    action: AuditAction,
    created_at_ms: u128,
    detail: Option<String>,
) -> AuditEvent {
    AuditEvent {
        event_id: uuid::Uuid::new_v4().to_string(),
        vehicle_id: vehicle_id.into(),
        category,
        space,
        action,
        created_at_ms,
        detail,
    }
}
