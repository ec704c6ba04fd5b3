//! Error types for the audit context's event integration.

use thiserror::Error;

/// Errors raised while handling audit-related events.
#[derive(Debug, Error)]
pub enum AuditEventError {
    /// A foreign payload did not match the locally mirrored contract.
    #[error("malformed `{event_type}` payload")]
    MalformedPayload {
        /// The event type whose payload failed to parse.
        event_type: &'static str,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// The audit repository failed.
    #[error("audit lookup failed")]
    Repository(#[source] anyhow::Error),
}
