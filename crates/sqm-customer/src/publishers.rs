//! Outgoing event registration and publishing for the customer context.

use std::sync::Arc;

use sqm_bus::{DomainEvent, DomainEventBus, EventPayload, PublishError, PublishReport};
use tracing::debug;

use crate::domain::{Customer, CustomerStatus};
use crate::events::outgoing::{CustomerCreated, CustomerStatusUpdated};
use crate::CONTEXT;

/// Register the schemas for every event type the customer context emits.
///
/// Call once at bootstrap, before any domain action can publish. Under a
/// lenient bus policy a publish that races ahead of this call is delivered
/// unvalidated; under the strict policy it fails.
pub fn initialize_customer_event_publishers(bus: &DomainEventBus) {
    bus.register_schema(CustomerCreated::EVENT_TYPE, CustomerCreated::schema());
    bus.register_schema(
        CustomerStatusUpdated::EVENT_TYPE,
        CustomerStatusUpdated::schema(),
    );
    debug!(context = %CONTEXT, "customer event schemas registered");
}

/// Publishes customer domain events onto the shared bus.
#[derive(Clone)]
pub struct CustomerEventPublisher {
    bus: Arc<DomainEventBus>,
}

impl CustomerEventPublisher {
    /// Create a publisher bound to the application's bus.
    #[must_use]
    pub fn new(bus: Arc<DomainEventBus>) -> Self {
        Self { bus }
    }

    /// Announce a newly created customer record.
    pub async fn customer_created(
        &self,
        customer: &Customer,
    ) -> Result<PublishReport, PublishError> {
        let event = DomainEvent::from_payload(&CustomerCreated::from_customer(customer))?;
        self.bus.publish_from_context(CONTEXT, event).await
    }

    /// Announce a status transition.
    ///
    /// `previous_status` is the status before the transition; consumers use
    /// it to react to specific transitions (e.g. active → inactive) only.
    pub async fn customer_status_updated(
        &self,
        customer: &Customer,
        previous_status: CustomerStatus,
    ) -> Result<PublishReport, PublishError> {
        let event = DomainEvent::from_payload(&CustomerStatusUpdated {
            customer_id: customer.id.clone(),
            status: customer.status,
            previous_status,
        })?;
        self.bus.publish_from_context(CONTEXT, event).await
    }
}
