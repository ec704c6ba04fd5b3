//! Inspection domain types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an inspection sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InspectionStatus {
    /// Booked but not yet started.
    Scheduled,
    /// Inspector on site.
    InProgress,
    /// Finished with a recorded result.
    Completed,
    /// Called off before completion.
    Cancelled,
}

impl InspectionStatus {
    /// The wire spelling of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for InspectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final outcome of a completed inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
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

/// Severity of a recorded defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefectSeverity {
    /// Cosmetic or otherwise non-blocking.
    Minor,
    /// Functional impact, rework required.
    Major,
    /// Safety or compliance impact.
    Critical,
}

/// A single finding recorded during an inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defect {
    /// Defect classification code, e.g. `"SCRATCH"`.
    pub code: String,
    /// How severe the finding is.
    pub severity: DefectSeverity,
    /// Optional free-text note from the inspector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// An inspection record as this context sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inspection {
    /// Stable identifier, e.g. `"inspection-1"`.
    pub id: String,
    /// The customer the inspection is performed for.
    pub customer_id: String,
    /// The supplier being inspected.
    pub supplier_id: String,
    /// Lifecycle status.
    pub status: InspectionStatus,
    /// Outcome, present once the inspection completed.
    pub result: Option<InspectionResult>,
    /// Findings recorded so far.
    pub defects: Vec<Defect>,
    /// Planned start, unix milliseconds.
    pub scheduled_for_ms: u64,
}

impl Inspection {
    /// Book a new inspection.
    #[must_use]
    pub fn schedule(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        supplier_id: impl Into<String>,
        scheduled_for_ms: u64,
    ) -> Self {
        Self {
            id: id.into(),
            customer_id: customer_id.into(),
            supplier_id: supplier_id.into(),
            status: InspectionStatus::Scheduled,
            result: None,
            defects: Vec::new(),
            scheduled_for_ms,
        }
    }

    /// Close the inspection with a result and its findings.
    pub fn complete(&mut self, result: InspectionResult, defects: Vec<Defect>) {
        self.status = InspectionStatus::Completed;
        self.result = Some(result);
        self.defects = defects;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_then_complete() {
        let mut inspection = Inspection::schedule("inspection-1", "customer-1", "supplier-1", 1_000);
        assert_eq!(inspection.status, InspectionStatus::Scheduled);
        assert!(inspection.result.is_none());

        inspection.complete(
            InspectionResult::Failed,
            vec![Defect {
                code: "CRACK".to_string(),
                severity: DefectSeverity::Critical,
                note: None,
            }],
        );
        assert_eq!(inspection.status, InspectionStatus::Completed);
        assert_eq!(inspection.result, Some(InspectionResult::Failed));
        assert_eq!(inspection.defects.len(), 1);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_value(InspectionStatus::InProgress).unwrap();
        assert_eq!(json, serde_json::json!("in_progress"));
    }
}
