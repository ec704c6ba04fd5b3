//! In-memory inspection store.

use async_trait::async_trait;
use sqm_inspection::{Defect, Inspection, InspectionRepository, InspectionResult, InspectionStatus};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Inspection records keyed by id.
#[derive(Default)]
pub struct InMemoryInspectionStore {
    records: RwLock<HashMap<String, Inspection>>,
}

impl InMemoryInspectionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an inspection record.
    pub fn insert(&self, inspection: Inspection) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(inspection.id.clone(), inspection);
    }

    /// Record an inspection's completion, returning the updated record.
    pub fn complete(
        &self,
        inspection_id: &str,
        result: InspectionResult,
        defects: Vec<Defect>,
    ) -> Option<Inspection> {
        let mut records = self
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let inspection = records.get_mut(inspection_id)?;
        inspection.complete(result, defects);
        Some(inspection.clone())
    }
}

#[async_trait]
impl InspectionRepository for InMemoryInspectionStore {
    async fn find_by_customer_and_status(
        &self,
        customer_id: &str,
        status: InspectionStatus,
    ) -> anyhow::Result<Vec<Inspection>> {
        Ok(self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|inspection| {
                inspection.customer_id == customer_id && inspection.status == status
            })
            .cloned()
            .collect())
    }
}
