//! Reactions to events originating in other contexts.

use std::sync::Arc;

use async_trait::async_trait;
use sqm_bus::{DomainEventBus, EventEnvelope, EventHandler};
use tracing::{debug, info, warn};

use crate::domain::AuditStatus;
use crate::error::AuditEventError;
use crate::events::incoming::{self, InspectionCompleted, InspectionResult};
use crate::ports::AuditRepository;
use crate::CONTEXT;

/// Subscribe the audit context to the foreign events it reacts to.
///
/// Call once at bootstrap.
pub fn initialize_audit_event_handlers(bus: &DomainEventBus, audits: Arc<dyn AuditRepository>) {
    bus.subscribe(
        incoming::INSPECTION_COMPLETED,
        Arc::new(InspectionCompletedHandler { audits }),
    );
    debug!(context = %CONTEXT, "audit event handlers subscribed");
}

/// Checks whether a failed inspection is covered by an open supplier audit.
pub struct InspectionCompletedHandler {
    audits: Arc<dyn AuditRepository>,
}

impl InspectionCompletedHandler {
    async fn run(&self, event: &EventEnvelope) -> Result<(), AuditEventError> {
        let completed: InspectionCompleted = serde_json::from_value(event.payload.clone())
            .map_err(|source| AuditEventError::MalformedPayload {
                event_type: incoming::INSPECTION_COMPLETED.as_str(),
                source,
            })?;

        if completed.result != InspectionResult::Failed {
            debug!(
                source = %event.source_context,
                "inspection {} for supplier {} closed without audit impact",
                completed.inspection_id,
                completed.supplier_id,
            );
            return Ok(());
        }

        let open = self
            .audits
            .find_by_supplier_and_status(&completed.supplier_id, AuditStatus::Open)
            .await
            .map_err(AuditEventError::Repository)?;

        if open.is_empty() {
            warn!(
                "failed inspection {} for supplier {} has no open audit, escalation required ({} defects)",
                completed.inspection_id,
                completed.supplier_id,
                completed.defects.len(),
            );
        } else {
            info!(
                "failed inspection {} for supplier {} covered by {} open audit(s)",
                completed.inspection_id,
                completed.supplier_id,
                open.len(),
            );
        }
        Ok(())
    }
}

#[async_trait]
impl EventHandler for InspectionCompletedHandler {
    fn name(&self) -> &'static str {
        "audit.inspection-completed"
    }

    async fn handle(&self, event: &EventEnvelope) -> anyhow::Result<()> {
        self.run(event).await.map_err(Into::into)
    }
}
