//! Flag aggregation across a provider snapshot

use form_observer_common::Vid;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::flags::Flags;
use crate::registry::ProviderHandle;

/// Merged state of every provider in a snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregate {
    /// `None` when the snapshot was empty
    pub flags: Option<Flags>,

    /// Messages of every visited provider, whatever its flags
    pub errors: BTreeMap<Vid, Vec<String>>,
}

impl Aggregate {
    pub async fn collect(providers: &[ProviderHandle]) -> Self {
        let mut flags = Vec::with_capacity(providers.len());
        let mut errors = BTreeMap::new();

        for provider in providers {
            flags.push(provider.flags().await);
            errors.insert(provider.vid().clone(), provider.messages().await);
        }

        Self {
            flags: Flags::merge_all(&flags),
            errors,
        }
    }

    /// Merged flags with an empty snapshot resolved to all `false`
    pub fn flags_or_default(&self) -> Flags {
        self.flags.unwrap_or_default()
    }
}
