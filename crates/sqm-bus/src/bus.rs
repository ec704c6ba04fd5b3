//! # Domain Event Bus
//!
//! Central dispatch hub for cross-context events. The bus holds two lookup
//! tables, schemas and subscriptions, both keyed by event type. It performs
//! no I/O of its own; handlers do the repository calls and logging.
//!
//! A bus is an explicit value owned by the composition root and handed to
//! each context's initializer. Tests get isolation by constructing a fresh
//! bus (or calling [`DomainEventBus::clear_subscriptions`]).
//!
//! ## Dispatch contract
//!
//! - Validation happens before delivery: a payload that violates its
//!   registered schema never reaches any subscriber.
//! - Subscribers for a type run in registration order, one at a time.
//! - A failing handler is logged and recorded in the returned
//!   [`PublishReport`]; its siblings still run.
//! - Delivery is at-most-once. There is no retry or redelivery.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, warn};

use crate::envelope::{ContextName, DomainEvent, EventEnvelope, EventType};
use crate::error::PublishError;
use crate::schema::EventSchema;

/// How the bus treats a publish for an event type with no registered schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaPolicy {
    /// Deliver the event unvalidated. Matches the permissive contract most
    /// callers expect, at the cost of hiding initialization-order bugs.
    #[default]
    Lenient,
    /// Reject the publish with [`PublishError::MissingSchema`], so a
    /// publisher that runs before its schemas are registered fails loudly.
    Strict,
}

/// A subscriber callback for one event type.
///
/// Handlers may await repository calls. Errors are isolated per handler by
/// the bus and surfaced through [`PublishReport::failures`].
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Stable name used in logs and failure reports.
    fn name(&self) -> &'static str;

    /// React to one delivered event.
    async fn handle(&self, event: &EventEnvelope) -> anyhow::Result<()>;
}

/// One handler's failure during dispatch.
#[derive(Debug)]
pub struct HandlerFailure {
    /// [`EventHandler::name`] of the failed handler.
    pub handler: &'static str,
    /// The error the handler returned.
    pub error: anyhow::Error,
}

/// Outcome of a successful publish.
///
/// "Successful" means the event cleared validation and was offered to every
/// subscriber; individual handlers may still have failed.
#[derive(Debug)]
#[must_use]
pub struct PublishReport {
    /// The published event type.
    pub event_type: EventType,
    /// How many handlers were invoked (including failed ones).
    pub handlers_invoked: usize,
    /// Failures collected during dispatch, in invocation order.
    pub failures: Vec<HandlerFailure>,
}

impl PublishReport {
    /// True when every invoked handler completed without error.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// The in-process publish/subscribe hub.
pub struct DomainEventBus {
    schemas: RwLock<HashMap<EventType, EventSchema>>,
    subscribers: RwLock<HashMap<EventType, Vec<Arc<dyn EventHandler>>>>,
    policy: SchemaPolicy,
    events_published: AtomicU64,
}

impl DomainEventBus {
    /// Create a bus with the lenient schema policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(SchemaPolicy::Lenient)
    }

    /// Create a bus that rejects publishes of unregistered event types.
    #[must_use]
    pub fn strict() -> Self {
        Self::with_policy(SchemaPolicy::Strict)
    }

    /// Create a bus with an explicit schema policy.
    #[must_use]
    pub fn with_policy(policy: SchemaPolicy) -> Self {
        Self {
            schemas: RwLock::new(HashMap::new()),
            subscribers: RwLock::new(HashMap::new()),
            policy,
            events_published: AtomicU64::new(0),
        }
    }

    /// Store the validator for an event type.
    ///
    /// Last write wins: re-registering a type replaces the previous schema
    /// entirely, so required fields from the old definition are no longer
    /// enforced.
    pub fn register_schema(&self, event_type: EventType, schema: EventSchema) {
        let mut schemas = self
            .schemas
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if schemas.insert(event_type, schema).is_some() {
            warn!(event_type = %event_type, "schema re-registered, previous definition replaced");
        }
    }

    /// Append a handler to the ordered subscriber list for an event type.
    ///
    /// Subscriptions are not deduplicated: subscribing the same handler
    /// twice runs it twice per publish.
    pub fn subscribe(&self, event_type: EventType, handler: Arc<dyn EventHandler>) {
        debug!(event_type = %event_type, handler = handler.name(), "subscriber registered");
        let mut subscribers = self
            .subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.entry(event_type).or_default().push(handler);
    }

    /// Validate an event and deliver it to every subscriber of its type.
    ///
    /// Returns an error only when the publish is rejected before dispatch
    /// (schema violation, or missing schema under the strict policy).
    /// Handler failures are aggregated in the returned report instead.
    pub async fn publish_from_context(
        &self,
        source_context: ContextName,
        event: DomainEvent,
    ) -> Result<PublishReport, PublishError> {
        let event_type = event.event_type;

        {
            let schemas = self
                .schemas
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            match schemas.get(&event_type) {
                Some(schema) => {
                    if let Err(violations) = schema.validate(&event.payload) {
                        return Err(PublishError::SchemaViolation {
                            event_type,
                            violations,
                        });
                    }
                }
                None => match self.policy {
                    SchemaPolicy::Strict => {
                        return Err(PublishError::MissingSchema { event_type });
                    }
                    SchemaPolicy::Lenient => {
                        debug!(
                            event_type = %event_type,
                            source = %source_context,
                            "no schema registered, delivering unvalidated"
                        );
                    }
                },
            }
        }

        self.events_published.fetch_add(1, Ordering::Relaxed);

        // Snapshot the subscriber list so the table lock is never held
        // across a handler await.
        let handlers: Vec<Arc<dyn EventHandler>> = {
            let subscribers = self
                .subscribers
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            subscribers.get(&event_type).cloned().unwrap_or_default()
        };

        let envelope = EventEnvelope::seal(event, source_context);

        if handlers.is_empty() {
            debug!(
                event_type = %event_type,
                source = %source_context,
                "event published with no subscribers"
            );
        }

        let mut failures = Vec::new();
        for handler in &handlers {
            if let Err(error) = handler.handle(&envelope).await {
                warn!(
                    event_type = %event_type,
                    handler = handler.name(),
                    error = %error,
                    "event handler failed"
                );
                failures.push(HandlerFailure {
                    handler: handler.name(),
                    error,
                });
            }
        }

        debug!(
            event_type = %event_type,
            source = %source_context,
            handlers = handlers.len(),
            failures = failures.len(),
            "event dispatched"
        );

        Ok(PublishReport {
            event_type,
            handlers_invoked: handlers.len(),
            failures,
        })
    }

    /// Reset both lookup tables to empty.
    ///
    /// Intended for test isolation; production code constructs a fresh bus
    /// instead of reusing one across lifecycles.
    pub fn clear_subscriptions(&self) {
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.schemas
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        debug!("event bus reset: subscriptions and schemas cleared");
    }

    /// Number of handlers currently subscribed to an event type.
    #[must_use]
    pub fn subscriber_count(&self, event_type: EventType) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&event_type)
            .map_or(0, Vec::len)
    }

    /// Whether a schema is registered for an event type.
    #[must_use]
    pub fn has_schema(&self, event_type: EventType) -> bool {
        self.schemas
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&event_type)
    }

    /// Total events accepted for dispatch since the bus was created.
    #[must_use]
    pub fn events_published(&self) -> u64 {
        self.events_published.load(Ordering::Relaxed)
    }
}

impl Default for DomainEventBus {
    fn default() -> Self {
        Self::new()
    }
}
