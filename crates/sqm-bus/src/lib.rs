//! # SQM Bus - Domain Event Bus for Cross-Context Integration
//!
//! In-process publish/subscribe hub that lets the platform's bounded
//! contexts (customer, inspection, audit, ...) react to each other's domain
//! events without compile-time coupling.
//!
//! ## Integration Pattern
//!
//! ```text
//! ┌──────────────┐                      ┌──────────────┐
//! │  inspection  │                      │   customer   │
//! │  (publisher) │  publish_from_       │  (handler)   │
//! │              │  context()           │              │
//! └──────┬───────┘                      └──────▲───────┘
//!        │            ┌──────────────┐         │
//!        └───────────▶│ DomainEvent  │─────────┘
//!                     │     Bus      │  subscribe()
//!                     └──────────────┘
//! ```
//!
//! Each context owns two bootstrap entry points: an
//! `initialize_*_event_publishers` function that registers the schemas for
//! the events it emits, and an `initialize_*_event_handlers` function that
//! subscribes to foreign events it reacts to. Both take the bus by
//! reference; the composition root owns the only instance.
//!
//! ## Contracts
//!
//! - Payloads are JSON objects validated against per-type required-field
//!   schemas ([`EventSchema`]) before any subscriber runs.
//! - Handlers run in registration order; a failing handler is isolated and
//!   reported via [`PublishReport`] rather than aborting its siblings.
//! - Delivery is at-most-once; there is no retry mechanism.

pub mod bus;
pub mod envelope;
pub mod error;
pub mod schema;

// Re-export main types
pub use bus::{DomainEventBus, EventHandler, HandlerFailure, PublishReport, SchemaPolicy};
pub use envelope::{ContextName, DomainEvent, EventEnvelope, EventPayload, EventType};
pub use error::PublishError;
pub use schema::{EventSchema, FieldKind, FieldViolation};
