//! Outbound dependencies of the customer context.

use async_trait::async_trait;

use crate::domain::Customer;

/// Query surface the surrounding application provides for customer records.
///
/// Implementations live outside this context (REST-backed stores, in-memory
/// adapters in the runtime, counting fakes in tests).
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Look up a customer by its identifier.
    async fn find_by_id(&self, customer_id: &str) -> anyhow::Result<Option<Customer>>;
}
