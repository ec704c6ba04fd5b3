//! # Runtime Configuration
//!
//! Sane defaults with environment overrides, in keeping with the rest of
//! the platform's bootstrap code.

use sqm_bus::SchemaPolicy;

/// Complete runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// How the bus treats publishes of event types without a schema.
    pub schema_policy: SchemaPolicy,
}

impl RuntimeConfig {
    /// Load configuration from the environment.
    ///
    /// `SQM_STRICT_SCHEMAS=1` (or `true`) switches the bus to the strict
    /// schema policy, so an initialization-order bug fails loudly instead
    /// of producing unvalidated events.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var("SQM_STRICT_SCHEMAS") {
            if value == "1" || value.eq_ignore_ascii_case("true") {
                config.schema_policy = SchemaPolicy::Strict;
            }
        }
        config
    }
}
