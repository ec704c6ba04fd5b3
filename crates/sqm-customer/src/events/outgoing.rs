//! Events the customer context emits.
//!
//! Each payload struct is the single source of truth for its contract: the
//! schema returned by [`sqm_bus::EventPayload::schema`] describes exactly
//! the JSON shape serialization produces.

use serde::Serialize;
use sqm_bus::{EventPayload, EventSchema, EventType, FieldKind};

use crate::domain::{Customer, CustomerStatus};

/// Published when a customer record is first persisted.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerCreated {
    /// Identifier of the new customer.
    pub customer_id: String,
    /// Display name.
    pub name: String,
    /// Business code.
    pub code: String,
}

impl CustomerCreated {
    /// Flatten a domain customer into the event payload.
    #[must_use]
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            customer_id: customer.id.clone(),
            name: customer.name.clone(),
            code: customer.code.clone(),
        }
    }
}

impl EventPayload for CustomerCreated {
    const EVENT_TYPE: EventType = EventType::new("CustomerCreated");

    fn schema() -> EventSchema {
        EventSchema::new()
            .required_kind("customer_id", FieldKind::String)
            .required_kind("name", FieldKind::String)
            .required_kind("code", FieldKind::String)
    }
}

/// Published on every customer status transition, carrying the prior status
/// so consumers can react to specific transitions only.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerStatusUpdated {
    /// Identifier of the customer that changed.
    pub customer_id: String,
    /// Status after the transition.
    pub status: CustomerStatus,
    /// Status before the transition.
    pub previous_status: CustomerStatus,
}

impl EventPayload for CustomerStatusUpdated {
    const EVENT_TYPE: EventType = EventType::new("CustomerStatusUpdated");

    fn schema() -> EventSchema {
        EventSchema::new()
            .required_kind("customer_id", FieldKind::String)
            .required_kind("status", FieldKind::String)
            .required_kind("previous_status", FieldKind::String)
    }
}
