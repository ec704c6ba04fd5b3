//! # Context Wiring
//!
//! The bootstrap sequence: construct the single bus instance, register
//! every context's event schemas, subscribe every context's handlers, and
//! hand the assembled application context back to the caller.
//!
//! ## Event Flow
//!
//! ```text
//! customer ──CustomerCreated──────────────▶ inspection
//! customer ──CustomerStatusUpdated────────▶ inspection
//! inspection ──InspectionCompleted───┬────▶ customer
//!                                    └────▶ audit
//! ```
//!
//! Contexts may be initialized in any order; schemas and subscriptions are
//! independent tables on the bus.

use std::sync::Arc;

use sqm_audit::{
    initialize_audit_event_handlers, initialize_audit_event_publishers, AuditEventPublisher,
};
use sqm_bus::DomainEventBus;
use sqm_customer::{
    initialize_customer_event_handlers, initialize_customer_event_publishers,
    CustomerEventPublisher,
};
use sqm_inspection::{
    initialize_inspection_event_handlers, initialize_inspection_event_publishers,
    InspectionEventPublisher,
};
use tracing::info;

use crate::adapters::{InMemoryAuditStore, InMemoryCustomerStore, InMemoryInspectionStore};
use crate::config::RuntimeConfig;

/// Everything the application needs after bootstrap.
pub struct AppContext {
    /// The single bus instance shared by all contexts.
    pub bus: Arc<DomainEventBus>,
    /// Customer records.
    pub customers: Arc<InMemoryCustomerStore>,
    /// Inspection records.
    pub inspections: Arc<InMemoryInspectionStore>,
    /// Audit records.
    pub audits: Arc<InMemoryAuditStore>,
    /// Publisher for customer domain events.
    pub customer_events: CustomerEventPublisher,
    /// Publisher for inspection domain events.
    pub inspection_events: InspectionEventPublisher,
    /// Publisher for audit domain events.
    pub audit_events: AuditEventPublisher,
}

/// Wire all bounded contexts onto a fresh bus.
#[must_use]
pub fn bootstrap(config: &RuntimeConfig) -> AppContext {
    let bus = Arc::new(DomainEventBus::with_policy(config.schema_policy));

    let customers = Arc::new(InMemoryCustomerStore::new());
    let inspections = Arc::new(InMemoryInspectionStore::new());
    let audits = Arc::new(InMemoryAuditStore::new());

    initialize_customer_event_publishers(&bus);
    initialize_inspection_event_publishers(&bus);
    initialize_audit_event_publishers(&bus);

    initialize_customer_event_handlers(
        &bus,
        Arc::clone(&customers) as Arc<dyn sqm_customer::CustomerRepository>,
    );
    initialize_inspection_event_handlers(
        &bus,
        Arc::clone(&inspections) as Arc<dyn sqm_inspection::InspectionRepository>,
    );
    initialize_audit_event_handlers(
        &bus,
        Arc::clone(&audits) as Arc<dyn sqm_audit::AuditRepository>,
    );

    info!(policy = ?config.schema_policy, "domain event wiring complete");

    AppContext {
        customer_events: CustomerEventPublisher::new(Arc::clone(&bus)),
        inspection_events: InspectionEventPublisher::new(Arc::clone(&bus)),
        audit_events: AuditEventPublisher::new(Arc::clone(&bus)),
        bus,
        customers,
        inspections,
        audits,
    }
}
