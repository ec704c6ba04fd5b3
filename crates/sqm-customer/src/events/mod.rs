//! Event contracts for the customer context.

pub mod incoming;
pub mod outgoing;

pub use incoming::InspectionCompleted;
pub use outgoing::{CustomerCreated, CustomerStatusUpdated};
