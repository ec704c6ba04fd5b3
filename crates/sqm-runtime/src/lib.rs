//! # SQM Runtime
//!
//! Composition root for the supplier quality management core. Constructs
//! the one [`sqm_bus::DomainEventBus`] instance, wires every bounded
//! context's publishers and handlers onto it, and provides in-memory
//! repository adapters standing in for the application's persistence layer.
//!
//! ## Modular Structure
//!
//! - `config` - runtime configuration with environment overrides
//! - `adapters` - in-memory repository implementations per context
//! - `wiring` - the bootstrap sequence producing an [`wiring::AppContext`]

pub mod adapters;
pub mod config;
pub mod wiring;

pub use config::RuntimeConfig;
pub use wiring::{bootstrap, AppContext};
