//! Outbound dependencies of the audit context.

use async_trait::async_trait;

use crate::domain::{AuditStatus, QualityAudit};

/// Query surface the surrounding application provides for quality audits.
#[async_trait]
pub trait AuditRepository: Send + Sync {
    /// All audits for a supplier in a given status.
    async fn find_by_supplier_and_status(
        &self,
        supplier_id: &str,
        status: AuditStatus,
    ) -> anyhow::Result<Vec<QualityAudit>>;
}
