//! # Event Envelope
//!
//! Defines the identity types and the envelope that wraps every event
//! crossing the bus.
//!
//! Payloads travel as JSON values so that contexts never exchange concrete
//! types; each context declares its own typed view of the contracts it
//! publishes or consumes and converts at the boundary.

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::error::PublishError;
use crate::schema::EventSchema;

/// Name of an event type, e.g. `"CustomerCreated"`.
///
/// Event type names are compile-time constants owned by the publishing
/// context; consuming contexts redeclare the names they care about instead
/// of importing the publisher's crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventType(&'static str);

impl EventType {
    /// Create an event type from its wire name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The wire name of this event type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Name of a bounded context, e.g. `"customer"`.
///
/// Attached to every published event for logging and tracing. It carries no
/// authority: any context may subscribe to any other context's events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextName(&'static str);

impl ContextName {
    /// Create a context name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The plain name of this context.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ContextName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A concrete event payload with its schema kept in lock-step.
///
/// Implementors are plain `serde` structs, one per event type, owned by the
/// publishing context. `schema()` must describe exactly the shape that
/// serializing the struct produces, so that a payload built through the
/// typed surface can never fail validation.
pub trait EventPayload: Serialize {
    /// The event type this payload belongs to.
    const EVENT_TYPE: EventType;

    /// The runtime validator for this payload's JSON shape.
    fn schema() -> EventSchema;
}

/// An event as handed to the bus by a publisher: a type name plus the
/// payload to validate and deliver. The bus attaches source identity and
/// timing when it seals the envelope.
#[derive(Debug, Clone)]
pub struct DomainEvent {
    /// The event type, selecting the schema and the subscriber list.
    pub event_type: EventType,
    /// Free-form payload, constrained by the schema registered for the type.
    pub payload: Value,
}

impl DomainEvent {
    /// Build an event from a raw JSON payload.
    ///
    /// Publishers normally go through [`DomainEvent::from_payload`]; this
    /// constructor exists for callers outside the typed surface.
    #[must_use]
    pub fn new(event_type: EventType, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    /// Build an event from a typed payload.
    pub fn from_payload<P: EventPayload>(payload: &P) -> Result<Self, PublishError> {
        Ok(Self {
            event_type: P::EVENT_TYPE,
            payload: serde_json::to_value(payload)?,
        })
    }
}

/// The envelope delivered to every subscriber of an event type.
///
/// Immutable once published: handlers receive a shared reference and never
/// mutate what they were given.
#[derive(Debug, Clone)]
pub struct EventEnvelope {
    /// The event type.
    pub event_type: EventType,
    /// The validated (or, without a schema, unvalidated) payload.
    pub payload: Value,
    /// The context that published the event.
    pub source_context: ContextName,
    /// Unique id for this delivery, for correlation in logs.
    pub event_id: Uuid,
    /// Unix timestamp in milliseconds at publish time.
    pub occurred_at_ms: u64,
}

impl EventEnvelope {
    /// Seal an event into an envelope, stamping identity and time.
    pub(crate) fn seal(event: DomainEvent, source_context: ContextName) -> Self {
        Self {
            event_type: event.event_type,
            payload: event.payload,
            source_context,
            event_id: Uuid::new_v4(),
            occurred_at_ms: unix_millis(),
        }
    }
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}
