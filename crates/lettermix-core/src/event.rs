//! Domain event abstractions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata attached to every domain event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Unique event identifier.
    pub event_id: Uuid,
    /// Type name for routing.
    pub event_type: String,
    /// Board this event belongs to.
    pub aggregate_id: Uuid,
    /// Monotonically increasing version within the board's stream.
    pub sequence_number: i64,
    /// Correlation ID of the command that produced this event.
    pub correlation_id: Uuid,
    /// Monotonic clock reading (milliseconds) at event creation.
    pub occurred_at_ms: f64,
}

/// Trait that all domain events implement.
pub trait DomainEvent: Send + Sync + std::fmt::Debug {
    /// Returns the event type name.
    fn event_type(&self) -> &'static str;

    /// Serializes the event payload to JSON.
    fn to_payload(&self) -> serde_json::Value;

    /// Returns the metadata for this event.
    fn metadata(&self) -> &EventMetadata;
}
