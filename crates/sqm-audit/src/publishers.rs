//! Outgoing event registration and publishing for the audit context.

use std::sync::Arc;

use sqm_bus::{DomainEvent, DomainEventBus, EventPayload, PublishError, PublishReport};
use tracing::debug;

use crate::domain::QualityAudit;
use crate::events::outgoing::AuditOpened;
use crate::CONTEXT;

/// Register the schemas for every event type the audit context emits.
///
/// Call once at bootstrap, before any domain action can publish.
pub fn initialize_audit_event_publishers(bus: &DomainEventBus) {
    bus.register_schema(AuditOpened::EVENT_TYPE, AuditOpened::schema());
    debug!(context = %CONTEXT, "audit event schemas registered");
}

/// Publishes audit domain events onto the shared bus.
#[derive(Clone)]
pub struct AuditEventPublisher {
    bus: Arc<DomainEventBus>,
}

impl AuditEventPublisher {
    /// Create a publisher bound to the application's bus.
    #[must_use]
    pub fn new(bus: Arc<DomainEventBus>) -> Self {
        Self { bus }
    }

    /// Announce a newly opened audit.
    pub async fn audit_opened(
        &self,
        audit: &QualityAudit,
    ) -> Result<PublishReport, PublishError> {
        let event = DomainEvent::from_payload(&AuditOpened::from_audit(audit))?;
        self.bus.publish_from_context(CONTEXT, event).await
    }
}
