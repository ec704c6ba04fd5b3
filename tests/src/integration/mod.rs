//! Cross-context integration tests.

pub mod fixtures;

mod cross_context;
mod flows;
