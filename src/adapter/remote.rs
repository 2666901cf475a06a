use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::error;

use crate::store::{ConfigService, PushHandler};

use super::dynamic::INTERNAL_FETCH_TIMEOUT;
use super::{ChangeRelay, ConfigListener, DEFAULT_GROUP, DynConfigError, DynamicConfig};

/// Composite key indexing the relay registry.
///
/// A structured pair rather than a concatenated string, so keys and
/// groups can never collide across the delimiter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ConfigKey {
    data_id: String,
    group: String,
}

impl ConfigKey {
    fn new(data_id: &str, group: &str) -> Self {
        Self {
            data_id: data_id.to_string(),
            group: group.to_string(),
        }
    }
}

/// Dynamic configuration backed by a remote push-based store.
///
/// Holds at most one [`ChangeRelay`] (and therefore at most one remote
/// subscription) per (key, group) pair, no matter how many local
/// listeners register or how many tasks subscribe concurrently. Relays
/// stay resident for the adapter's lifetime even after their last
/// listener is removed.
///
/// The adapter is passive: fetches block the caller for up to the given
/// timeout, and change delivery runs on the store client's own tasks.
/// Cloning is cheap and clones share the same registry.
#[derive(Clone)]
pub struct RemoteConfigAdapter {
    service: Arc<dyn ConfigService>,
    relays: Arc<DashMap<ConfigKey, Arc<ChangeRelay>>>,
}

impl RemoteConfigAdapter {
    /// Creates an adapter over the given store client.
    pub fn new(service: Arc<dyn ConfigService>) -> Self {
        Self {
            service,
            relays: Arc::new(DashMap::new()),
        }
    }

    /// Fetches the content of `data_id` in `group`, waiting at most
    /// `timeout`.
    ///
    /// # Errors
    /// Returns [`DynConfigError::StoreUnavailable`] when the store
    /// client errors or times out; the cause is logged and wrapped.
    pub async fn get_config(
        &self,
        data_id: &str,
        group: &str,
        timeout: Duration,
    ) -> Result<Option<String>, DynConfigError> {
        self.service
            .get_config(data_id, group, timeout)
            .await
            .map_err(|source| {
                error!(data_id, group, %source, "failed to fetch config from the remote store");
                DynConfigError::StoreUnavailable {
                    data_id: data_id.to_string(),
                    source,
                }
            })
    }

    /// Fetches a framework-internal property under [`DEFAULT_GROUP`]
    /// with a fixed 5000 ms bound.
    ///
    /// # Errors
    /// Returns [`DynConfigError::StoreUnavailable`] when the store
    /// client errors or times out.
    pub async fn get_internal_property(
        &self,
        data_id: &str,
    ) -> Result<Option<String>, DynConfigError> {
        self.get_config(data_id, DEFAULT_GROUP, INTERNAL_FETCH_TIMEOUT)
            .await
    }

    /// Subscribes `listener` to changes of `data_id` in `group`.
    ///
    /// The relay for the pair is created atomically on first use; only
    /// the creating call registers it with the store client, so the
    /// remote subscription happens exactly once per pair. A registration
    /// failure is logged and not surfaced: the relay and the local
    /// registration stay in place, but no updates will arrive until the
    /// store is subscribed by other means.
    pub async fn add_listener(
        &self,
        data_id: &str,
        group: &str,
        listener: Arc<dyn ConfigListener>,
    ) {
        let mut created = false;
        let relay = self
            .relays
            .entry(ConfigKey::new(data_id, group))
            .or_insert_with(|| {
                created = true;
                Arc::new(ChangeRelay::new(data_id, group))
            })
            .clone();

        relay.add_subscriber(listener);

        if created {
            let handler: Arc<dyn PushHandler> = relay;
            if let Err(err) = self.service.add_listener(data_id, group, handler).await {
                error!(
                    data_id,
                    group,
                    %err,
                    "failed to register remote config listener; local subscribers will not receive updates"
                );
            }
        }
    }

    /// Unsubscribes `listener` from changes of `data_id` in `group`.
    ///
    /// A silent no-op when no relay exists for the pair or the listener
    /// is not registered. The relay itself is never torn down.
    pub fn remove_listener(&self, data_id: &str, group: &str, listener: &Arc<dyn ConfigListener>) {
        if let Some(relay) = self.relays.get(&ConfigKey::new(data_id, group)) {
            relay.remove_subscriber(listener);
        }
    }

    #[cfg(test)]
    pub(crate) fn subscriber_count(&self, data_id: &str, group: &str) -> usize {
        self.relays
            .get(&ConfigKey::new(data_id, group))
            .map_or(0, |relay| relay.subscriber_count())
    }

    #[cfg(test)]
    pub(crate) fn relay(&self, data_id: &str, group: &str) -> Option<Arc<ChangeRelay>> {
        self.relays
            .get(&ConfigKey::new(data_id, group))
            .map(|relay| Arc::clone(&relay))
    }
}

#[async_trait]
impl DynamicConfig for RemoteConfigAdapter {
    async fn get_config(
        &self,
        data_id: &str,
        group: &str,
        timeout: Duration,
    ) -> Result<Option<String>, DynConfigError> {
        RemoteConfigAdapter::get_config(self, data_id, group, timeout).await
    }

    async fn get_internal_property(&self, data_id: &str) -> Result<Option<String>, DynConfigError> {
        RemoteConfigAdapter::get_internal_property(self, data_id).await
    }

    async fn add_listener(&self, data_id: &str, group: &str, listener: Arc<dyn ConfigListener>) {
        RemoteConfigAdapter::add_listener(self, data_id, group, listener).await;
    }

    fn remove_listener(&self, data_id: &str, group: &str, listener: &Arc<dyn ConfigListener>) {
        RemoteConfigAdapter::remove_listener(self, data_id, group, listener);
    }
}

impl std::fmt::Debug for RemoteConfigAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteConfigAdapter")
            .field("relays", &self.relays.len())
            .finish()
    }
}
