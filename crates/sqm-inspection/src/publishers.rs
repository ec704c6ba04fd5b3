//! Outgoing event registration and publishing for the inspection context.

use std::sync::Arc;

use sqm_bus::{DomainEvent, DomainEventBus, EventPayload, PublishReport};
use tracing::debug;

use crate::domain::Inspection;
use crate::error::InspectionEventError;
use crate::events::outgoing::{InspectionCompleted, InspectionScheduled};
use crate::CONTEXT;

/// Register the schemas for every event type the inspection context emits.
///
/// Call once at bootstrap, before any domain action can publish.
pub fn initialize_inspection_event_publishers(bus: &DomainEventBus) {
    bus.register_schema(
        InspectionScheduled::EVENT_TYPE,
        InspectionScheduled::schema(),
    );
    bus.register_schema(
        InspectionCompleted::EVENT_TYPE,
        InspectionCompleted::schema(),
    );
    debug!(context = %CONTEXT, "inspection event schemas registered");
}

/// Publishes inspection domain events onto the shared bus.
#[derive(Clone)]
pub struct InspectionEventPublisher {
    bus: Arc<DomainEventBus>,
}

impl InspectionEventPublisher {
    /// Create a publisher bound to the application's bus.
    #[must_use]
    pub fn new(bus: Arc<DomainEventBus>) -> Self {
        Self { bus }
    }

    /// Announce a newly booked inspection.
    pub async fn inspection_scheduled(
        &self,
        inspection: &Inspection,
    ) -> Result<PublishReport, InspectionEventError> {
        let event = DomainEvent::from_payload(&InspectionScheduled {
            inspection_id: inspection.id.clone(),
            customer_id: inspection.customer_id.clone(),
            supplier_id: inspection.supplier_id.clone(),
            scheduled_for_ms: inspection.scheduled_for_ms,
        })?;
        Ok(self.bus.publish_from_context(CONTEXT, event).await?)
    }

    /// Announce a completed inspection with its outcome and findings.
    ///
    /// The inspection must carry a recorded result.
    pub async fn inspection_completed(
        &self,
        inspection: &Inspection,
    ) -> Result<PublishReport, InspectionEventError> {
        let result =
            inspection
                .result
                .ok_or_else(|| InspectionEventError::ResultNotRecorded {
                    inspection_id: inspection.id.clone(),
                })?;

        let event = DomainEvent::from_payload(&InspectionCompleted {
            inspection_id: inspection.id.clone(),
            customer_id: inspection.customer_id.clone(),
            supplier_id: inspection.supplier_id.clone(),
            result,
            defects: inspection.defects.clone(),
        })?;
        Ok(self.bus.publish_from_context(CONTEXT, event).await?)
    }
}
