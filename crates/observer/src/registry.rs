//! Provider registry keyed by identifier

use form_observer_common::Vid;
use std::collections::HashMap;
use std::sync::Arc;

use crate::provider::ValidationProvider;

pub type ProviderHandle = Arc<dyn ValidationProvider>;

/// Mapping of provider identifier to provider handle.
///
/// Iteration order is unspecified. Callers that await while walking the
/// providers should work on a [`snapshot`](Self::snapshot).
#[derive(Default, Clone)]
pub struct ProviderRegistry {
    providers: HashMap<Vid, ProviderHandle>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for `provider.vid()`.
    /// Returns the handle that was replaced, if any.
    pub fn subscribe(&mut self, provider: ProviderHandle) -> Option<ProviderHandle> {
        let vid = provider.vid().clone();
        self.providers.insert(vid, provider)
    }

    /// Remove the entry for `vid`. Absent identifiers are ignored.
    pub fn unsubscribe(&mut self, vid: &Vid) -> Option<ProviderHandle> {
        self.providers.remove(vid)
    }

    pub fn get(&self, vid: &Vid) -> Option<ProviderHandle> {
        self.providers.get(vid).cloned()
    }

    pub fn contains(&self, vid: &Vid) -> bool {
        self.providers.contains_key(vid)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Sorted identifiers of every registered provider
    pub fn vids(&self) -> Vec<Vid> {
        let mut vids: Vec<Vid> = self.providers.keys().cloned().collect();
        vids.sort();
        vids
    }

    /// Clone out the current handles
    pub fn snapshot(&self) -> Vec<ProviderHandle> {
        self.providers.values().cloned().collect()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("vids", &self.vids())
            .finish()
    }
}
