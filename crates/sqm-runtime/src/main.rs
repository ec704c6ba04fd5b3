//! Demo walkthrough of the domain event wiring.
//!
//! Runs the cross-context flow end to end against the in-memory adapters:
//! create a customer, schedule an inspection, complete it with a failed
//! result, then deactivate the customer. Each step publishes a domain event
//! and the foreign contexts react through their bus subscriptions.

use anyhow::{Context, Result};
use sqm_customer::{Customer, CustomerStatus};
use sqm_inspection::{Defect, DefectSeverity, Inspection, InspectionResult};
use sqm_runtime::{bootstrap, RuntimeConfig};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = RuntimeConfig::from_env();
    let app = bootstrap(&config);

    // Step 1: a customer comes on board.
    let customer = Customer::new("customer-1", "Acme Fabrication", "ACME-01");
    app.customers.insert(customer.clone());
    report_failures(&app.customer_events.customer_created(&customer).await?);

    // Step 2: an incoming-goods inspection is booked for them.
    let inspection = Inspection::schedule(
        "inspection-1",
        "customer-1",
        "supplier-1",
        1_767_225_600_000,
    );
    app.inspections.insert(inspection.clone());
    report_failures(&app.inspection_events.inspection_scheduled(&inspection).await?);

    // Step 3: the inspection fails; customer and audit contexts both react.
    let completed = app
        .inspections
        .complete(
            "inspection-1",
            InspectionResult::Failed,
            vec![Defect {
                code: "CRACK".to_string(),
                severity: DefectSeverity::Critical,
                note: Some("hairline crack on housing".to_string()),
            }],
        )
        .context("inspection-1 disappeared from the store")?;
    report_failures(&app.inspection_events.inspection_completed(&completed).await?);

    // Step 4: the customer is deactivated; inspection context flags the
    // remaining scheduled work.
    if let Some(updated) = app.customers.set_status("customer-1", CustomerStatus::Inactive) {
        report_failures(
            &app.customer_events
                .customer_status_updated(&updated, CustomerStatus::Active)
                .await?,
        );
    }

    info!(
        "demo flow complete, {} events published",
        app.bus.events_published()
    );
    Ok(())
}

fn report_failures(report: &sqm_bus::PublishReport) {
    for failure in &report.failures {
        error!(
            event_type = %report.event_type,
            handler = failure.handler,
            error = %failure.error,
            "handler failed during demo flow"
        );
    }
}
