//! # Quality-Audit Context
//!
//! Owns supplier quality audits. On the bus this context:
//!
//! - **publishes** `AuditOpened`,
//! - **handles** `InspectionCompleted` from the inspection context,
//!   checking whether a failed inspection is already covered by an open
//!   audit for the supplier.

pub mod domain;
pub mod error;
pub mod events;
pub mod handlers;
pub mod ports;
pub mod publishers;

pub use domain::{AuditStatus, AuditTrigger, QualityAudit};
pub use error::AuditEventError;
pub use handlers::initialize_audit_event_handlers;
pub use ports::AuditRepository;
pub use publishers::{initialize_audit_event_publishers, AuditEventPublisher};

use sqm_bus::ContextName;

/// Context identity attached to every event this crate publishes.
pub const CONTEXT: ContextName = ContextName::new("audit");
