//! Foreign events the audit context consumes.
//!
//! The mirror keeps only the fields this context acts on; the published
//! contract also carries `customer_id`, which audits do not use.

use serde::Deserialize;
use sqm_bus::EventType;

/// Event type emitted by the inspection context when an inspection closes.
pub const INSPECTION_COMPLETED: EventType = EventType::new("InspectionCompleted");

/// Local mirror of the `InspectionCompleted` contract.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectionCompleted {
    /// Identifier of the completed inspection.
    pub inspection_id: String,
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

/// The slice of a defect this context cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct DefectRecord {
    /// Defect classification code.
    pub code: String,
    /// Severity as published.
    pub severity: String,
}
