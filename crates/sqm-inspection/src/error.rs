//! Error types for the inspection context's event integration.

use sqm_bus::PublishError;
use thiserror::Error;

/// Errors raised while publishing or handling inspection-related events.
#[derive(Debug, Error)]
pub enum InspectionEventError {
    /// Completion was published for an inspection that never recorded a
    /// result.
    #[error("inspection `{inspection_id}` has no recorded result to publish")]
    ResultNotRecorded {
        /// The offending inspection id.
        inspection_id: String,
    },

    /// A foreign payload did not match the locally mirrored contract.
    #[error("malformed `{event_type}` payload")]
    MalformedPayload {
        /// The event type whose payload failed to parse.
        event_type: &'static str,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// The inspection repository failed.
    #[error("inspection lookup failed")]
    Repository(#[source] anyhow::Error),

    /// The bus rejected the publish.
    #[error(transparent)]
    Publish(#[from] PublishError),
}
