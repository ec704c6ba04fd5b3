//! Events the audit context emits.

use serde::Serialize;
use sqm_bus::{EventPayload, EventSchema, EventType, FieldKind};

use crate::domain::{AuditTrigger, QualityAudit};

/// Published when a quality audit is opened for a supplier.
#[derive(Debug, Clone, Serialize)]
pub struct AuditOpened {
    /// Identifier of the new audit.
    pub audit_id: String,
    /// The supplier under audit.
    pub supplier_id: String,
    /// Why the audit was opened.
    pub trigger: AuditTrigger,
}

impl AuditOpened {
    /// Flatten a domain audit into the event payload.
    #[must_use]
    pub fn from_audit(audit: &QualityAudit) -> Self {
        Self {
            audit_id: audit.id.clone(),
            supplier_id: audit.supplier_id.clone(),
            trigger: audit.trigger,
        }
    }
}

impl EventPayload for AuditOpened {
    const EVENT_TYPE: EventType = EventType::new("AuditOpened");

    fn schema() -> EventSchema {
        EventSchema::new()
            .required_kind("audit_id", FieldKind::String)
            .required_kind("supplier_id", FieldKind::String)
            .required_kind("trigger", FieldKind::String)
    }
}
