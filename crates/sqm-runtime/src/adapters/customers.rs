//! In-memory customer store.

use async_trait::async_trait;
use sqm_customer::{Customer, CustomerRepository, CustomerStatus};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Customer records keyed by id.
#[derive(Default)]
pub struct InMemoryCustomerStore {
    records: RwLock<HashMap<String, Customer>>,
}

impl InMemoryCustomerStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a customer record.
    pub fn insert(&self, customer: Customer) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(customer.id.clone(), customer);
    }

    /// Update a customer's status, returning the updated record.
    pub fn set_status(&self, customer_id: &str, status: CustomerStatus) -> Option<Customer> {
        let mut records = self
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let customer = records.get_mut(customer_id)?;
        customer.status = status;
        Some(customer.clone())
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerStore {
    async fn find_by_id(&self, customer_id: &str) -> anyhow::Result<Option<Customer>> {
        Ok(self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(customer_id)
            .cloned())
    }
}
