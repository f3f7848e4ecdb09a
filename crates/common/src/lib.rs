//! Common types and utilities shared across all crates

pub mod config;
pub mod error;
pub mod tracing_setup;
pub mod types;

pub use config::*;
pub use error::{ObserverError, ObserverResult};
pub use types::*;
