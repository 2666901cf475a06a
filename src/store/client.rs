use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

/// Errors a store client implementation may raise.
///
/// The adapter treats these as opaque beyond their display text; retry
/// and backoff, if any, live inside the client.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or rejected the request.
    #[error("remote config store unavailable: {details}")]
    Unavailable {
        /// Transport-level failure description.
        details: String,
    },

    /// The store did not answer within the caller's deadline.
    #[error("remote config store did not respond within {elapsed:?}")]
    Timeout {
        /// How long the client waited before giving up.
        elapsed: Duration,
    },

    /// The store rejected the configured credentials.
    #[error("remote config store rejected credentials: {details}")]
    Auth {
        /// Authentication failure description.
        details: String,
    },
}

/// Receiver of raw push notifications from the store client.
///
/// Registered once per (key, group) pair via
/// [`ConfigService::add_listener`]; the crate's relay implements it.
pub trait PushHandler: Send + Sync {
    /// Invoked by the client whenever the remote value changes.
    ///
    /// `None` and blank content both signal that the key was deleted.
    /// Runs on the client's own delivery task; the handler must not
    /// assume any particular thread.
    fn on_remote_change(&self, data_id: &str, group: &str, content: Option<String>);
}

/// Contract the adapter requires from a remote store client.
///
/// Implementations own transport, authentication, connection pooling,
/// and whatever retry policy the store calls for.
#[async_trait]
pub trait ConfigService: Send + Sync {
    /// Fetches the current content of `data_id` in `group`, waiting at
    /// most `timeout`.
    ///
    /// `Ok(None)` reports an absent value without treating it as a
    /// failure.
    ///
    /// # Errors
    /// Returns a [`StoreError`] when the store cannot be reached, the
    /// deadline elapses, or the request is rejected.
    async fn get_config(
        &self,
        data_id: &str,
        group: &str,
        timeout: Duration,
    ) -> Result<Option<String>, StoreError>;

    /// Registers `handler` for pushes on `data_id` in `group`.
    ///
    /// Called at most once per distinct pair by the adapter. After a
    /// successful registration the client invokes
    /// [`PushHandler::on_remote_change`] zero or more times with the
    /// latest content.
    ///
    /// # Errors
    /// Returns a [`StoreError`] when the subscription cannot be
    /// established; the adapter logs this without failing the caller.
    async fn add_listener(
        &self,
        data_id: &str,
        group: &str,
        handler: Arc<dyn PushHandler>,
    ) -> Result<(), StoreError>;
}
