//! # Event Schema Registry Types
//!
//! Required-field validators for event payloads, keyed by event type on the
//! bus. A schema is a list of required payload keys, each with an optional
//! value-kind predicate. Validation collects every violation rather than
//! stopping at the first, so a rejected publish reports the full mismatch.

use serde_json::Value;
use thiserror::Error;

/// The JSON value kind a payload field must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A JSON string.
    String,
    /// A JSON number.
    Number,
    /// A JSON boolean.
    Boolean,
    /// A JSON array.
    Array,
    /// A JSON object.
    Object,
}

impl FieldKind {
    /// Human-readable name used in violation messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
            Self::Array => value.is_array(),
            Self::Object => value.is_object(),
        }
    }

    fn kind_of(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

/// A single requirement on an event payload.
#[derive(Debug, Clone)]
struct FieldSpec {
    name: &'static str,
    kind: Option<FieldKind>,
}

/// A payload mismatch found during validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldViolation {
    /// The payload was not a JSON object at all.
    #[error("payload is not a JSON object")]
    NotAnObject,

    /// A required field was absent.
    #[error("missing required field `{field}`")]
    MissingField {
        /// The absent field.
        field: &'static str,
    },

    /// A required field was present with the wrong value kind.
    #[error("field `{field}` must be a {expected}, got {actual}")]
    WrongKind {
        /// The offending field.
        field: &'static str,
        /// The kind the schema demands.
        expected: &'static str,
        /// The kind the payload carried.
        actual: &'static str,
    },
}

/// Required-field descriptor for one event type.
///
/// Built up fluently by the publishing context:
///
/// ```
/// use sqm_bus::{EventSchema, FieldKind};
///
/// let schema = EventSchema::new()
///     .required_kind("customer_id", FieldKind::String)
///     .required("name");
/// assert!(schema.validate(&serde_json::json!({
///     "customer_id": "customer-1",
///     "name": "Acme",
/// })).is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventSchema {
    fields: Vec<FieldSpec>,
}

impl EventSchema {
    /// An empty schema (accepts any JSON object).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `name` to be present, with any value kind.
    #[must_use]
    pub fn required(mut self, name: &'static str) -> Self {
        self.fields.push(FieldSpec { name, kind: None });
        self
    }

    /// Require `name` to be present with the given value kind.
    #[must_use]
    pub fn required_kind(mut self, name: &'static str, kind: FieldKind) -> Self {
        self.fields.push(FieldSpec {
            name,
            kind: Some(kind),
        });
        self
    }

    /// Check a payload against this schema, collecting every violation.
    pub fn validate(&self, payload: &Value) -> Result<(), Vec<FieldViolation>> {
        let Some(object) = payload.as_object() else {
            return Err(vec![FieldViolation::NotAnObject]);
        };

        let mut violations = Vec::new();
        for required in &self.fields {
            match object.get(required.name) {
                None => violations.push(FieldViolation::MissingField {
                    field: required.name,
                }),
                Some(value) => {
                    if let Some(kind) = required.kind {
                        if !kind.matches(value) {
                            violations.push(FieldViolation::WrongKind {
                                field: required.name,
                                expected: kind.name(),
                                actual: FieldKind::kind_of(value),
                            });
                        }
                    }
                }
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
