//! Cross-context scenarios: each bounded context wired onto one bus with
//! counting fakes behind its ports, driven through the real publishers.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::{
        CountingAuditRepo, CountingCustomerRepo, CountingInspectionRepo, LogCapture, SpyHandler,
    };
    use serde_json::json;
    use sqm_audit::{initialize_audit_event_handlers, AuditStatus};
    use sqm_bus::{DomainEvent, DomainEventBus, EventType, PublishError};
    use sqm_customer::{
        initialize_customer_event_handlers, initialize_customer_event_publishers, Customer,
        CustomerEventPublisher, CustomerStatus,
    };
    use sqm_inspection::{
        initialize_inspection_event_handlers, initialize_inspection_event_publishers, Defect,
        DefectSeverity, Inspection, InspectionEventPublisher, InspectionResult, InspectionStatus,
    };
    use std::sync::Arc;

    const CUSTOMER_CREATED: EventType = EventType::new("CustomerCreated");

    fn failed_inspection() -> Inspection {
        let mut inspection =
            Inspection::schedule("inspection-1", "customer-1", "supplier-1", 1_000);
        inspection.complete(
            InspectionResult::Failed,
            vec![Defect {
                code: "CRACK".to_string(),
                severity: DefectSeverity::Critical,
                note: None,
            }],
        );
        inspection
    }

    #[tokio::test]
    async fn test_customer_deactivation_queries_scheduled_inspections_once() {
        let bus = Arc::new(DomainEventBus::new());
        initialize_customer_event_publishers(&bus);

        let inspections = CountingInspectionRepo::with_scheduled(vec![Inspection::schedule(
            "inspection-1",
            "customer-1",
            "supplier-1",
            1_000,
        )]);
        initialize_inspection_event_handlers(&bus, Arc::clone(&inspections));

        let mut customer = Customer::new("customer-1", "Acme Fabrication", "ACME-01");
        customer.status = CustomerStatus::Inactive;

        let report = CustomerEventPublisher::new(Arc::clone(&bus))
            .customer_status_updated(&customer, CustomerStatus::Active)
            .await
            .unwrap();

        assert!(report.is_clean());
        assert_eq!(
            *inspections.queries.lock().unwrap(),
            vec![("customer-1".to_string(), InspectionStatus::Scheduled)]
        );
    }

    #[tokio::test]
    async fn test_passed_inspection_reaches_customer_context_and_logs_outcome() {
        let (logs, _guard) = LogCapture::install();

        let bus = Arc::new(DomainEventBus::new());
        initialize_inspection_event_publishers(&bus);

        let customers =
            CountingCustomerRepo::with(Customer::new("customer-1", "Acme Fabrication", "ACME-01"));
        initialize_customer_event_handlers(&bus, Arc::clone(&customers));

        let mut inspection =
            Inspection::schedule("inspection-1", "customer-1", "supplier-1", 1_000);
        inspection.complete(InspectionResult::Passed, Vec::new());

        let report = InspectionEventPublisher::new(Arc::clone(&bus))
            .inspection_completed(&inspection)
            .await
            .unwrap();

        assert!(report.is_clean());
        assert_eq!(*customers.lookups.lock().unwrap(), vec!["customer-1"]);

        let output = logs.contents();
        assert!(output.contains("customer-1"), "log output: {output}");
        assert!(output.contains("passed"), "log output: {output}");
    }

    #[tokio::test]
    async fn test_customer_created_missing_code_never_reaches_subscribers() {
        let bus = Arc::new(DomainEventBus::new());
        initialize_customer_event_publishers(&bus);

        let spy = SpyHandler::new();
        bus.subscribe(CUSTOMER_CREATED, Arc::clone(&spy));

        let event = DomainEvent::new(
            CUSTOMER_CREATED,
            json!({ "customer_id": "customer-1", "name": "Acme Fabrication" }),
        );
        let result = bus
            .publish_from_context(sqm_customer::CONTEXT, event)
            .await;

        match result {
            Err(PublishError::SchemaViolation { violations, .. }) => {
                assert_eq!(violations.len(), 1);
            }
            other => panic!("expected schema violation, got {other:?}"),
        }
        assert_eq!(spy.count(), 0);
    }

    #[tokio::test]
    async fn test_failed_inspection_queries_open_audits_once() {
        let bus = Arc::new(DomainEventBus::new());
        initialize_inspection_event_publishers(&bus);

        let audits = CountingAuditRepo::with_open(Vec::new());
        initialize_audit_event_handlers(&bus, Arc::clone(&audits));

        let report = InspectionEventPublisher::new(Arc::clone(&bus))
            .inspection_completed(&failed_inspection())
            .await
            .unwrap();

        assert!(report.is_clean());
        assert_eq!(
            *audits.queries.lock().unwrap(),
            vec![("supplier-1".to_string(), AuditStatus::Open)]
        );
    }

    #[tokio::test]
    async fn test_unknown_customer_failure_is_isolated_from_audit_handler() {
        let bus = Arc::new(DomainEventBus::new());
        initialize_inspection_event_publishers(&bus);

        // Customer handler will fail (repository knows nobody); the audit
        // handler subscribed after it must still run.
        initialize_customer_event_handlers(&bus, CountingCustomerRepo::empty());
        let audits = CountingAuditRepo::with_open(Vec::new());
        initialize_audit_event_handlers(&bus, Arc::clone(&audits));

        let report = InspectionEventPublisher::new(Arc::clone(&bus))
            .inspection_completed(&failed_inspection())
            .await
            .unwrap();

        assert_eq!(report.handlers_invoked, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].handler, "customer.inspection-completed");
        assert!(report.failures[0].error.to_string().contains("customer-1"));
        assert_eq!(audits.queries.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_clear_subscriptions_silences_previously_wired_contexts() {
        let bus = Arc::new(DomainEventBus::new());
        initialize_customer_event_publishers(&bus);

        let spy = SpyHandler::new();
        bus.subscribe(CUSTOMER_CREATED, Arc::clone(&spy));

        bus.clear_subscriptions();

        // The payload that used to be invalid now passes (no schema) and
        // reaches nobody.
        let event = DomainEvent::new(CUSTOMER_CREATED, json!({ "customer_id": "customer-1" }));
        let report = bus
            .publish_from_context(sqm_customer::CONTEXT, event)
            .await
            .unwrap();

        assert_eq!(report.handlers_invoked, 0);
        assert_eq!(spy.count(), 0);
    }
}
