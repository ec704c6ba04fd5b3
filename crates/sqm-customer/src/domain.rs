//! Customer domain types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a customer account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    /// Normal operating state.
    Active,
    /// Deactivated; no new inspections may be scheduled.
    Inactive,
    /// Temporarily blocked pending review.
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

/// A customer record as this context sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Stable identifier, e.g. `"customer-1"`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short business code, unique per customer.
    pub code: String,
    /// Current lifecycle status.
    pub status: CustomerStatus,
}

impl Customer {
    /// Create a new active customer.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: code.into(),
            status: CustomerStatus::Active,
        }
    }

    /// Whether the customer may take on new work.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == CustomerStatus::Active
    }
}
