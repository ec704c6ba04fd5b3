//! Quality-audit domain types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a quality audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    /// Opened, findings still being collected.
    Open,
    /// Auditor actively working the case.
    InProgress,
    /// Closed with corrective actions recorded.
    Closed,
}

impl AuditStatus {
    /// The wire spelling of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What caused an audit to be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditTrigger {
    /// Opened because an inspection failed.
    FailedInspection,
    /// Opened on the routine audit calendar.
    Routine,
}

impl AuditTrigger {
    /// The wire spelling of this trigger.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FailedInspection => "failed_inspection",
            Self::Routine => "routine",
        }
    }
}

/// A supplier quality audit as this context sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityAudit {
    /// Stable identifier, e.g. `"audit-1"`.
    pub id: String,
    /// The supplier under audit.
    pub supplier_id: String,
    /// Lifecycle status.
    pub status: AuditStatus,
    /// Why the audit was opened.
    pub trigger: AuditTrigger,
}

impl QualityAudit {
    /// Open a new audit for a supplier.
    #[must_use]
    pub fn open(
        id: impl Into<String>,
        supplier_id: impl Into<String>,
        trigger: AuditTrigger,
    ) -> Self {
        Self {
            id: id.into(),
            supplier_id: supplier_id.into(),
            status: AuditStatus::Open,
            trigger,
        }
    }
}
