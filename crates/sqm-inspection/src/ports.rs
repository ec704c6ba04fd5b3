//! Outbound dependencies of the inspection context.

use async_trait::async_trait;

use crate::domain::{Inspection, InspectionStatus};

/// Query surface the surrounding application provides for inspections.
#[async_trait]
pub trait InspectionRepository: Send + Sync {
    /// All inspections for a customer in a given status.
    async fn find_by_customer_and_status(
        &self,
        customer_id: &str,
        status: InspectionStatus,
    ) -> anyhow::Result<Vec<Inspection>>;
}
