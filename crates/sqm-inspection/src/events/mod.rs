//! Event contracts for the inspection context.

pub mod incoming;
pub mod outgoing;

pub use incoming::{CustomerCreated, CustomerStatusUpdated};
pub use outgoing::{InspectionCompleted, InspectionScheduled};
