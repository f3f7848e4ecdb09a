//! Validation observer: owns the registry and hands out merged context

use form_observer_common::{ObserverConfig, ObserverResult, Vid};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, instrument};

use crate::aggregate::Aggregate;
use crate::context::ObserverContext;
use crate::coordinator;
use crate::events::{EventStream, RegistryEvent, RegistryEventType};
use crate::registry::{ProviderHandle, ProviderRegistry};

/// Aggregates validation state over a dynamic set of providers.
///
/// Cloning is cheap and every clone shares the same registry.
#[derive(Clone)]
pub struct ValidationObserver {
    /// Map of vid -> provider handle
    registry: Arc<RwLock<ProviderRegistry>>,

    /// Subscribe/unsubscribe notifications
    events: Arc<EventStream>,
}

impl ValidationObserver {
    pub fn new() -> Self {
        Self::with_config(&ObserverConfig::default())
    }

    pub fn with_config(config: &ObserverConfig) -> Self {
        Self {
            registry: Arc::new(RwLock::new(ProviderRegistry::new())),
            events: Arc::new(EventStream::new(config.event_capacity)),
        }
    }

    /// Attach a provider, replacing any provider with the same vid
    #[instrument(name = "observer_subscribe", skip_all, fields(vid = %provider.vid()))]
    pub async fn subscribe(&self, provider: ProviderHandle) {
        let vid = provider.vid().clone();
        let replaced = self.registry.write().await.subscribe(provider);

        let event_type = if replaced.is_some() {
            debug!("Provider replaced");
            RegistryEventType::Replaced
        } else {
            debug!("Provider subscribed");
            RegistryEventType::Subscribed
        };
        self.events.emit(event_type, vid);
    }

    /// Detach a provider. Unknown vids are ignored.
    #[instrument(name = "observer_unsubscribe", skip(self))]
    pub async fn unsubscribe(&self, vid: &Vid) {
        let removed = self.registry.write().await.unsubscribe(vid);

        if removed.is_some() {
            debug!("Provider unsubscribed");
            self.events.emit(RegistryEventType::Unsubscribed, vid.clone());
        }
    }

    /// Receive registry change events from now on
    pub fn events(&self) -> broadcast::Receiver<RegistryEvent> {
        self.events.subscribe()
    }

    /// Validate every provider registered at the time of the call
    #[instrument(name = "observer_validate", skip(self))]
    pub async fn validate(&self) -> ObserverResult<bool> {
        let providers = self.snapshot().await;
        coordinator::validate_all(&providers).await
    }

    /// Reset every provider registered at the time of the call
    #[instrument(name = "observer_reset", skip(self))]
    pub async fn reset(&self) -> ObserverResult<()> {
        let providers = self.snapshot().await;
        coordinator::reset_all(&providers).await
    }

    /// Compute a fresh context from the current registry
    pub async fn context(&self) -> ObserverContext {
        let providers = self.snapshot().await;
        let aggregate = Aggregate::collect(&providers).await;
        ObserverContext::new(aggregate, self.clone())
    }

    pub async fn get(&self, vid: &Vid) -> Option<ProviderHandle> {
        self.registry.read().await.get(vid)
    }

    pub async fn len(&self) -> usize {
        self.registry.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.registry.read().await.is_empty()
    }

    pub async fn vids(&self) -> Vec<Vid> {
        self.registry.read().await.vids()
    }

    // The read lock is released before any provider is awaited.
    async fn snapshot(&self) -> Vec<ProviderHandle> {
        self.registry.read().await.snapshot()
    }
}

impl Default for ValidationObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ValidationObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationObserver").finish_non_exhaustive()
    }
}
