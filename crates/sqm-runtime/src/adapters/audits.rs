//! In-memory audit store.

use async_trait::async_trait;
use sqm_audit::{AuditRepository, AuditStatus, QualityAudit};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Audit records keyed by id.
#[derive(Default)]
pub struct InMemoryAuditStore {
    records: RwLock<HashMap<String, QualityAudit>>,
}

impl InMemoryAuditStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an audit record.
    pub fn insert(&self, audit: QualityAudit) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(audit.id.clone(), audit);
    }
}

#[async_trait]
impl AuditRepository for InMemoryAuditStore {
    async fn find_by_supplier_and_status(
        &self,
        supplier_id: &str,
        status: AuditStatus,
    ) -> anyhow::Result<Vec<QualityAudit>> {
        Ok(self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|audit| audit.supplier_id == supplier_id && audit.status == status)
            .cloned()
            .collect())
    }
}
