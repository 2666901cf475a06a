use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, RwLock};

use tracing::error;

use crate::store::PushHandler;

use super::ConfigChangeEvent;

/// A local subscriber to configuration changes.
///
/// Listeners are registered as `Arc<dyn ConfigListener>`; the `Arc`
/// pointer is their identity, so registering the same handle twice keeps
/// a single entry and a single delivery per change.
pub trait ConfigListener: Send + Sync {
    /// Called once for each change pushed for the subscribed key.
    ///
    /// Runs synchronously on whatever task the store client delivers
    /// from; a panic here is caught and logged without affecting
    /// delivery to other listeners.
    fn on_change(&self, event: &ConfigChangeEvent);
}

/// The single remote subscription endpoint for one (key, group) pair.
///
/// Holds the set of local listeners and fans each raw push from the
/// store client out to all of them as one typed [`ConfigChangeEvent`].
/// Created lazily on first subscribe and kept for the adapter's lifetime
/// even when its listener set empties.
pub(crate) struct ChangeRelay {
    data_id: String,
    group: String,
    subscribers: RwLock<Vec<Arc<dyn ConfigListener>>>,
}

impl ChangeRelay {
    pub(crate) fn new(data_id: &str, group: &str) -> Self {
        Self {
            data_id: data_id.to_string(),
            group: group.to_string(),
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// Adds a listener; inserting an already-present handle is a no-op.
    pub(crate) fn add_subscriber(&self, listener: Arc<dyn ConfigListener>) {
        let mut subscribers = match self.subscribers.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if !subscribers.iter().any(|existing| Arc::ptr_eq(existing, &listener)) {
            subscribers.push(listener);
        }
    }

    /// Removes a listener; removing a non-member is a no-op.
    pub(crate) fn remove_subscriber(&self, listener: &Arc<dyn ConfigListener>) {
        let mut subscribers = match self.subscribers.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        subscribers.retain(|existing| !Arc::ptr_eq(existing, listener));
    }

    pub(crate) fn subscriber_count(&self) -> usize {
        self.snapshot().len()
    }

    /// Current listeners, cloned out so delivery never holds the lock.
    fn snapshot(&self) -> Vec<Arc<dyn ConfigListener>> {
        match self.subscribers.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl PushHandler for ChangeRelay {
    fn on_remote_change(&self, data_id: &str, group: &str, content: Option<String>) {
        let event = ConfigChangeEvent::new(data_id.to_string(), content);

        for subscriber in self.snapshot() {
            let delivery = catch_unwind(AssertUnwindSafe(|| subscriber.on_change(&event)));
            if delivery.is_err() {
                error!(
                    data_id,
                    group,
                    kind = ?event.kind,
                    "config listener panicked during change delivery"
                );
            }
        }
    }
}

impl std::fmt::Debug for ChangeRelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeRelay")
            .field("data_id", &self.data_id)
            .field("group", &self.group)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
