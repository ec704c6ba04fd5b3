//! Foreign events the inspection context consumes.
//!
//! Shapes are declared locally from the published contract so this crate
//! never links against the customer context.

use serde::Deserialize;
use sqm_bus::EventType;
use std::fmt;

/// Event type emitted by the customer context on record creation.
pub const CUSTOMER_CREATED: EventType = EventType::new("CustomerCreated");

/// Event type emitted by the customer context on status transitions.
pub const CUSTOMER_STATUS_UPDATED: EventType = EventType::new("CustomerStatusUpdated");

/// Local mirror of the `CustomerCreated` contract.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerCreated {
    /// Identifier of the new customer.
    pub customer_id: String,
    /// Display name.
    pub name: String,
    /// Business code.
    pub code: String,
}

/// Local mirror of the `CustomerStatusUpdated` contract.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerStatusUpdated {
    /// Identifier of the customer that changed.
    pub customer_id: String,
    /// Status after the transition.
    pub status: CustomerStatus,
    /// Status before the transition.
    pub previous_status: CustomerStatus,
}

/// Customer lifecycle status as published on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    /// Normal operating state.
    Active,
    /// Deactivated.
    Inactive,
    /// Temporarily blocked.
    Suspended,
}

impl CustomerStatus {
    /// The wire spelling of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Suspended => "suspended",
        }
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
