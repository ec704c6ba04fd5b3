//! Error types raised by the bus itself.
//!
//! Handler errors are deliberately not represented here: a failing handler
//! is reported through [`crate::PublishReport`] rather than raised, so one
//! misbehaving subscriber cannot mask the outcome of its siblings.

use thiserror::Error;

use crate::envelope::EventType;
use crate::schema::FieldViolation;

/// Errors that abort a publish before any subscriber is invoked.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The payload did not satisfy the schema registered for its type.
    #[error("payload for `{event_type}` failed schema validation: {}", join_violations(.violations))]
    SchemaViolation {
        /// The rejected event type.
        event_type: EventType,
        /// Every mismatch found, in schema order.
        violations: Vec<FieldViolation>,
    },

    /// No schema is registered for the event type and the bus runs a strict
    /// schema policy.
    #[error("no schema registered for event type `{event_type}`")]
    MissingSchema {
        /// The unregistered event type.
        event_type: EventType,
    },

    /// A typed payload could not be serialized to JSON.
    #[error("failed to serialize event payload")]
    PayloadSerialization(#[from] serde_json::Error),
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
