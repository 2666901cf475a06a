use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::{ConfigListener, DynConfigError};

/// Group used when the caller does not scope a key to one.
pub const DEFAULT_GROUP: &str = "DEFAULT_GROUP";

/// Fixed bound for framework-internal single-key lookups.
pub(crate) const INTERNAL_FETCH_TIMEOUT: Duration = Duration::from_millis(5000);

/// Uniform dynamic-configuration abstraction consumed by a host framework.
///
/// Implementations expose a configuration source that can be fetched
/// with a bounded wait and observed for changes. The crate ships
/// [`RemoteConfigAdapter`](super::RemoteConfigAdapter), which backs this
/// trait with a remote push-based store.
#[async_trait]
pub trait DynamicConfig: Send + Sync {
    /// Fetches the content of `data_id` in `group`, waiting at most
    /// `timeout`.
    ///
    /// `Ok(None)` means the store holds no value for the key, which is a
    /// normal result rather than a failure.
    ///
    /// # Errors
    /// Returns [`DynConfigError::StoreUnavailable`] when the store
    /// client errors or times out. The failure is never retried here.
    async fn get_config(
        &self,
        data_id: &str,
        group: &str,
        timeout: Duration,
    ) -> Result<Option<String>, DynConfigError>;

    /// Fetches a framework-internal property.
    ///
    /// Equivalent to [`get_config`](DynamicConfig::get_config) with
    /// [`DEFAULT_GROUP`] and a fixed 5000 ms bound.
    ///
    /// # Errors
    /// Returns [`DynConfigError::StoreUnavailable`] when the store
    /// client errors or times out.
    async fn get_internal_property(&self, data_id: &str) -> Result<Option<String>, DynConfigError>;

    /// Subscribes `listener` to changes of `data_id` in `group`.
    ///
    /// Adding an already-registered listener handle is a no-op. The call
    /// always succeeds locally; a failure to establish the remote
    /// subscription is logged and not reported, so a listener may
    /// receive no updates even though this call returned. Callers that
    /// need delivery guarantees must watch the logs.
    async fn add_listener(&self, data_id: &str, group: &str, listener: Arc<dyn ConfigListener>);

    /// Unsubscribes `listener` from changes of `data_id` in `group`.
    ///
    /// Removing a listener that was never registered, or for a key that
    /// was never subscribed, is a silent no-op.
    fn remove_listener(&self, data_id: &str, group: &str, listener: &Arc<dyn ConfigListener>);
}
