//! # SQM Test Suite
//!
//! Unified test crate for cross-context scenarios that no single crate can
//! exercise on its own.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-context flows over the event bus
//!     ├── fixtures.rs   # Counting repositories, spy handlers, log capture
//!     ├── cross_context.rs
//!     └── flows.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sqm-tests
//! ```

#![allow(dead_code)]

pub mod integration;
