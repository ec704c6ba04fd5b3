//! # Customer Context
//!
//! Owns customer records and their lifecycle. On the bus this context:
//!
//! - **publishes** `CustomerCreated` and `CustomerStatusUpdated`,
//! - **handles** `InspectionCompleted` from the inspection context,
//!   recording the outcome against the affected customer.
//!
//! Foreign contracts are mirrored locally in [`events::incoming`]; this
//! crate never links against another context.

pub mod domain;
pub mod error;
pub mod events;
pub mod handlers;
pub mod ports;
pub mod publishers;

pub use domain::{Customer, CustomerStatus};
pub use error::CustomerEventError;
pub use handlers::initialize_customer_event_handlers;
pub use ports::CustomerRepository;
pub use publishers::{initialize_customer_event_publishers, CustomerEventPublisher};

use sqm_bus::ContextName;

/// Context identity attached to every event this crate publishes.
pub const CONTEXT: ContextName = ContextName::new("customer");
