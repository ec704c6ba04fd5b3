//! Events the inspection context emits.

use serde::Serialize;
use sqm_bus::{EventPayload, EventSchema, EventType, FieldKind};

use crate::domain::{Defect, InspectionResult};

/// Published when an inspection is booked.
#[derive(Debug, Clone, Serialize)]
pub struct InspectionScheduled {
    /// Identifier of the new inspection.
    pub inspection_id: String,
    /// The customer the inspection is performed for.
    pub customer_id: String,
    /// The supplier being inspected.
    pub supplier_id: String,
    /// Planned start, unix milliseconds.
    pub scheduled_for_ms: u64,
}

impl EventPayload for InspectionScheduled {
    const EVENT_TYPE: EventType = EventType::new("InspectionScheduled");

    fn schema() -> EventSchema {
        EventSchema::new()
            .required_kind("inspection_id", FieldKind::String)
            .required_kind("customer_id", FieldKind::String)
            .required_kind("supplier_id", FieldKind::String)
            .required_kind("scheduled_for_ms", FieldKind::Number)
    }
}

/// Published when an inspection closes with a recorded result.
#[derive(Debug, Clone, Serialize)]
pub struct InspectionCompleted {
    /// Identifier of the completed inspection.
    pub inspection_id: String,
    /// The customer the inspection was performed for.
    pub customer_id: String,
    /// The supplier that was inspected.
    pub supplier_id: String,
    /// Final outcome.
    pub result: InspectionResult,
    /// Findings recorded during the inspection.
    pub defects: Vec<Defect>,
}

impl EventPayload for InspectionCompleted {
    const EVENT_TYPE: EventType = EventType::new("InspectionCompleted");

    fn schema() -> EventSchema {
        EventSchema::new()
            .required_kind("inspection_id", FieldKind::String)
            .required_kind("customer_id", FieldKind::String)
            .required_kind("supplier_id", FieldKind::String)
            .required_kind("result", FieldKind::String)
            .required_kind("defects", FieldKind::Array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DefectSeverity;

    #[test]
    fn test_scheduled_payload_satisfies_schema() {
        let payload = serde_json::to_value(InspectionScheduled {
            inspection_id: "inspection-1".to_string(),
            customer_id: "customer-1".to_string(),
            supplier_id: "supplier-1".to_string(),
            scheduled_for_ms: 1_700_000_000_000,
        })
        .unwrap();
        assert!(InspectionScheduled::schema().validate(&payload).is_ok());
    }

    #[test]
    fn test_completed_payload_satisfies_schema() {
        let payload = serde_json::to_value(InspectionCompleted {
            inspection_id: "inspection-1".to_string(),
            customer_id: "customer-1".to_string(),
            supplier_id: "supplier-1".to_string(),
            result: InspectionResult::Passed,
            defects: vec![Defect {
                code: "SCRATCH".to_string(),
                severity: DefectSeverity::Minor,
                note: Some("cosmetic".to_string()),
            }],
        })
        .unwrap();
        assert!(InspectionCompleted::schema().validate(&payload).is_ok());
        assert_eq!(payload["result"], "passed");
        assert_eq!(payload["defects"][0]["severity"], "minor");
    }
}
