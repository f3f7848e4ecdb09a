//! Read-only view handed to consumers of an observer

use form_observer_common::{ObserverResult, Vid};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::aggregate::Aggregate;
use crate::flags::Flags;
use crate::observer::ValidationObserver;

/// Merged flags and per-provider messages, plus the observer's
/// `validate`/`reset` operations.
///
/// A context is a snapshot: it does not change when providers do. Ask the
/// observer for a new one to see later state.
#[derive(Debug, Clone, Serialize)]
pub struct ObserverContext {
    #[serde(flatten)]
    pub flags: Flags,

    pub errors: BTreeMap<Vid, Vec<String>>,

    /// Whether at least one provider contributed to `flags`
    #[serde(skip)]
    has_providers: bool,

    #[serde(skip)]
    observer: ValidationObserver,
}

impl ObserverContext {
    pub(crate) fn new(aggregate: Aggregate, observer: ValidationObserver) -> Self {
        Self {
            flags: aggregate.flags_or_default(),
            has_providers: aggregate.flags.is_some(),
            errors: aggregate.errors,
            observer,
        }
    }

    /// True when the context was computed from an empty registry, in which
    /// case every flag is `false`
    pub fn is_empty(&self) -> bool {
        !self.has_providers
    }

    /// Messages recorded for `vid`, if that provider was registered
    pub fn errors_for(&self, vid: &Vid) -> Option<&[String]> {
        self.errors.get(vid).map(Vec::as_slice)
    }

    /// First message of every provider that has one
    pub fn first_errors(&self) -> BTreeMap<Vid, String> {
        self.errors
            .iter()
            .filter_map(|(vid, messages)| messages.first().map(|m| (vid.clone(), m.clone())))
            .collect()
    }

    pub async fn validate(&self) -> ObserverResult<bool> {
        self.observer.validate().await
    }

    pub async fn reset(&self) -> ObserverResult<()> {
        self.observer.reset().await
    }

    pub fn to_json(&self) -> ObserverResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
