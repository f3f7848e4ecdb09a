//! Form observer: aggregated validation state over a dynamic set of providers
//!
//! This crate provides:
//! - A registry of validation providers keyed by identifier
//! - Flag merging (AND/OR per flag) into one status record
//! - Concurrent validation and reset of every registered provider
//! - A rule-based field provider for plain string inputs
//! - Change notifications for subscribe/unsubscribe

pub mod aggregate;
pub mod context;
pub mod coordinator;
pub mod events;
pub mod field;
pub mod flags;
pub mod observer;
pub mod provider;
pub mod registry;
pub mod rules;

// Re-exports
pub use context::ObserverContext;
pub use events::{RegistryEvent, RegistryEventType};
pub use field::FieldProvider;
pub use flags::{Flag, Flags, MergeStrategy};
pub use observer::ValidationObserver;
pub use provider::{ValidationProvider, ValidationResult};
pub use registry::{ProviderHandle, ProviderRegistry};
pub use rules::Rule;

pub use form_observer_common::{ObserverError, ObserverResult, Vid};
