//! Error types for the customer context's event integration.

use thiserror::Error;

/// Errors raised while publishing or handling customer-related events.
#[derive(Debug, Error)]
pub enum CustomerEventError {
    /// A foreign payload did not match the locally mirrored contract.
    #[error("malformed `{event_type}` payload")]
    MalformedPayload {
        /// The event type whose payload failed to parse.
        event_type: &'static str,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// An event referenced a customer this context does not know.
    #[error("customer `{customer_id}` referenced by `{event_type}` does not exist")]
    UnknownCustomer {
        /// The missing customer id.
        customer_id: String,
        /// The event type carrying the reference.
        event_type: &'static str,
    },

    /// The customer repository failed.
    #[error("customer lookup failed")]
    Repository(#[source] anyhow::Error),
}
