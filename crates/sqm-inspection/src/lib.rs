//! # Inspection Context
//!
//! Owns incoming-goods inspections and their outcomes. On the bus this
//! context:
//!
//! - **publishes** `InspectionScheduled` and `InspectionCompleted`,
//! - **handles** `CustomerCreated` and `CustomerStatusUpdated` from the
//!   customer context, flagging scheduled inspections whose customer was
//!   deactivated.

pub mod domain;
pub mod error;
pub mod events;
pub mod handlers;
pub mod ports;
pub mod publishers;

pub use domain::{Defect, DefectSeverity, Inspection, InspectionResult, InspectionStatus};
pub use error::InspectionEventError;
pub use handlers::initialize_inspection_event_handlers;
pub use ports::InspectionRepository;
pub use publishers::{initialize_inspection_event_publishers, InspectionEventPublisher};

use sqm_bus::ContextName;

/// Context identity attached to every event this crate publishes.
pub const CONTEXT: ContextName = ContextName::new("inspection");
