//! Reactions to events originating in other contexts.

use std::sync::Arc;

use async_trait::async_trait;
use sqm_bus::{DomainEventBus, EventEnvelope, EventHandler};
use tracing::{debug, warn};

use crate::domain::InspectionStatus;
use crate::error::InspectionEventError;
use crate::events::incoming::{self, CustomerCreated, CustomerStatus, CustomerStatusUpdated};
use crate::ports::InspectionRepository;
use crate::CONTEXT;

/// Subscribe the inspection context to the foreign events it reacts to.
///
/// Call once at bootstrap.
pub fn initialize_inspection_event_handlers(
    bus: &DomainEventBus,
    inspections: Arc<dyn InspectionRepository>,
) {
    bus.subscribe(incoming::CUSTOMER_CREATED, Arc::new(CustomerCreatedHandler));
    bus.subscribe(
        incoming::CUSTOMER_STATUS_UPDATED,
        Arc::new(CustomerStatusUpdatedHandler { inspections }),
    );
    debug!(context = %CONTEXT, "inspection event handlers subscribed");
}

/// Notes new customers as eligible for inspection scheduling.
pub struct CustomerCreatedHandler;

impl CustomerCreatedHandler {
    fn run(&self, event: &EventEnvelope) -> Result<(), InspectionEventError> {
        let created: CustomerCreated = serde_json::from_value(event.payload.clone()).map_err(
            |source| InspectionEventError::MalformedPayload {
                event_type: incoming::CUSTOMER_CREATED.as_str(),
                source,
            },
        )?;

        debug!(
            source = %event.source_context,
            "customer {} ({}) registered, eligible for inspection scheduling",
            created.customer_id,
            created.code,
        );
        Ok(())
    }
}

#[async_trait]
impl EventHandler for CustomerCreatedHandler {
    fn name(&self) -> &'static str {
        "inspection.customer-created"
    }

    async fn handle(&self, event: &EventEnvelope) -> anyhow::Result<()> {
        self.run(event).map_err(Into::into)
    }
}

/// Flags scheduled inspections whose customer was deactivated.
pub struct CustomerStatusUpdatedHandler {
    inspections: Arc<dyn InspectionRepository>,
}

impl CustomerStatusUpdatedHandler {
    async fn run(&self, event: &EventEnvelope) -> Result<(), InspectionEventError> {
        let update: CustomerStatusUpdated = serde_json::from_value(event.payload.clone())
            .map_err(|source| InspectionEventError::MalformedPayload {
                event_type: incoming::CUSTOMER_STATUS_UPDATED.as_str(),
                source,
            })?;

        if update.status != CustomerStatus::Inactive {
            debug!(
                source = %event.source_context,
                "customer {} status changed {} -> {}",
                update.customer_id,
                update.previous_status,
                update.status,
            );
            return Ok(());
        }

        let scheduled = self
            .inspections
            .find_by_customer_and_status(&update.customer_id, InspectionStatus::Scheduled)
            .await
            .map_err(InspectionEventError::Repository)?;

        if scheduled.is_empty() {
            debug!(
                "customer {} deactivated with no scheduled inspections",
                update.customer_id,
            );
        } else {
            warn!(
                "customer {} deactivated with {} scheduled inspection(s) pending review",
                update.customer_id,
                scheduled.len(),
            );
        }
        Ok(())
    }
}

#[async_trait]
impl EventHandler for CustomerStatusUpdatedHandler {
    fn name(&self) -> &'static str {
        "inspection.customer-status-updated"
    }

    async fn handle(&self, event: &EventEnvelope) -> anyhow::Result<()> {
        self.run(event).await.map_err(Into::into)
    }
}
