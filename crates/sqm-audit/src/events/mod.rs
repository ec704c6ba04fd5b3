//! Event contracts for the audit context.

pub mod incoming;
pub mod outgoing;

pub use incoming::InspectionCompleted;
pub use outgoing::AuditOpened;
