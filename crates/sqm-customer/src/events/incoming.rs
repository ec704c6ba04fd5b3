//! Foreign events the customer context consumes.
//!
//! Shapes are declared locally from the published contract so this crate
//! never links against the inspection context. Fields the customer context
//! does not use are simply omitted; unknown fields are ignored on parse.

use serde::Deserialize;
use sqm_bus::EventType;
use std::fmt;

/// Event type emitted by the inspection context when an inspection closes.
pub const INSPECTION_COMPLETED: EventType = EventType::new("InspectionCompleted");

/// Local mirror of the `InspectionCompleted` contract.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectionCompleted {
    /// Identifier of the completed inspection.
    pub inspection_id: String,
    /// The customer the inspection was performed for.
    pub customer_id: String,
    /// The supplier that was inspected.
    pub supplier_id: String,
    /// Final outcome.
    pub result: InspectionResult,
    /// Defects recorded during the inspection.
    #[serde(default)]
    pub defects: Vec<DefectRecord>,
}

/// Outcome of an inspection, as published on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InspectionResult {
    /// No blocking findings.
    Passed,
    /// Blocking findings; the lot is rejected.
    Failed,
    /// Passed with conditions attached.
    Conditional,
}

impl InspectionResult {
    /// The wire spelling of this result.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Conditional => "conditional",
        }
    }
}

impl fmt::Display for InspectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The slice of a defect this context cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct DefectRecord {
    /// Defect classification code.
    pub code: String,
    /// Severity as published.
    pub severity: String,
}
