use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

use super::{ConfigChangeEvent, ConfigListener, RemoteConfigAdapter};

/// Bridges the listener callback into a channel for stream consumers.
struct ForwardingListener {
    sender: mpsc::UnboundedSender<ConfigChangeEvent>,
}

impl ConfigListener for ForwardingListener {
    fn on_change(&self, event: &ConfigChangeEvent) {
        // Receiver gone means the stream was dropped mid-delivery.
        let _ = self.sender.send(event.clone());
    }
}

/// A stream of change events for one (key, group) pair.
///
/// Obtained from [`RemoteConfigAdapter::changes`]. The backing listener
/// is removed from the relay when the stream is dropped, so no events
/// accumulate for abandoned subscriptions.
pub struct ChangeStream {
    data_id: String,
    group: String,
    adapter: RemoteConfigAdapter,
    listener: Arc<dyn ConfigListener>,
    receiver: UnboundedReceiverStream<ConfigChangeEvent>,
}

impl RemoteConfigAdapter {
    /// Subscribes to changes of `data_id` in `group` as a stream.
    ///
    /// Events are buffered unbounded between pushes and polls. The same
    /// lenient registration policy as
    /// [`add_listener`](RemoteConfigAdapter::add_listener) applies: if
    /// the remote subscription cannot be established the stream stays
    /// open but never yields.
    pub async fn changes(&self, data_id: &str, group: &str) -> ChangeStream {
        let (sender, receiver) = mpsc::unbounded_channel();
        let listener: Arc<dyn ConfigListener> = Arc::new(ForwardingListener { sender });

        self.add_listener(data_id, group, Arc::clone(&listener))
            .await;

        ChangeStream {
            data_id: data_id.to_string(),
            group: group.to_string(),
            adapter: self.clone(),
            listener,
            receiver: UnboundedReceiverStream::new(receiver),
        }
    }
}

impl Stream for ChangeStream {
    type Item = ConfigChangeEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.receiver).poll_next(cx)
    }
}

impl Drop for ChangeStream {
    fn drop(&mut self) {
        self.adapter
            .remove_listener(&self.data_id, &self.group, &self.listener);
    }
}

impl std::fmt::Debug for ChangeStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeStream")
            .field("data_id", &self.data_id)
            .field("group", &self.group)
            .finish()
    }
}
