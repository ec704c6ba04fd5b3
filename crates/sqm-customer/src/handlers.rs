//! Reactions to events originating in other contexts.

use std::sync::Arc;

use async_trait::async_trait;
use sqm_bus::{DomainEventBus, EventEnvelope, EventHandler};
use tracing::{debug, info};

use crate::error::CustomerEventError;
use crate::events::incoming::{self, InspectionCompleted};
use crate::ports::CustomerRepository;
use crate::CONTEXT;

/// Subscribe the customer context to the foreign events it reacts to.
///
/// Call once at bootstrap.
pub fn initialize_customer_event_handlers(
    bus: &DomainEventBus,
    customers: Arc<dyn CustomerRepository>,
) {
    bus.subscribe(
        incoming::INSPECTION_COMPLETED,
        Arc::new(InspectionCompletedHandler { customers }),
    );
    debug!(context = %CONTEXT, "customer event handlers subscribed");
}

/// Records inspection outcomes against the affected customer.
pub struct InspectionCompletedHandler {
    customers: Arc<dyn CustomerRepository>,
}

impl InspectionCompletedHandler {
    async fn run(&self, event: &EventEnvelope) -> Result<(), CustomerEventError> {
        let event_type = incoming::INSPECTION_COMPLETED.as_str();
        let completed: InspectionCompleted = serde_json::from_value(event.payload.clone())
            .map_err(|source| CustomerEventError::MalformedPayload { event_type, source })?;

        let customer = self
            .customers
            .find_by_id(&completed.customer_id)
            .await
            .map_err(CustomerEventError::Repository)?
            .ok_or_else(|| CustomerEventError::UnknownCustomer {
                customer_id: completed.customer_id.clone(),
                event_type,
            })?;

        info!(
            source = %event.source_context,
            "inspection {} for customer {} finished with result {} ({} defects)",
            completed.inspection_id,
            customer.id,
            completed.result,
            completed.defects.len(),
        );
        Ok(())
    }
}

#[async_trait]
impl EventHandler for InspectionCompletedHandler {
    fn name(&self) -> &'static str {
        "customer.inspection-completed"
    }

    async fn handle(&self, event: &EventEnvelope) -> anyhow::Result<()> {
        self.run(event).await.map_err(Into::into)
    }
}
