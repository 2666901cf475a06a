use crate::store::StoreError;

/// Classification of a configuration change, derived from the new content.
///
/// There is no distinct "added" kind: the first push for a key is
/// indistinguishable from a later update at this layer, so both surface
/// as [`ChangeKind::Modified`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// The key now carries non-blank content.
    Modified,
    /// The key was removed; the push carried absent or blank content.
    Deleted,
}

impl ChangeKind {
    /// Derives the change kind from the pushed content.
    ///
    /// Absent content and content that is empty or whitespace-only both
    /// mean the key was deleted on the remote store.
    pub fn from_content(content: Option<&str>) -> Self {
        match content {
            Some(text) if !text.trim().is_empty() => ChangeKind::Modified,
            _ => ChangeKind::Deleted,
        }
    }
}

/// A configuration change pushed by the remote store.
///
/// Exactly one event is built per raw remote notification and the same
/// event is delivered to every listener registered for the (key, group)
/// pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigChangeEvent {
    /// Key of the configuration entry that changed.
    pub data_id: String,
    /// The new raw content, if any. `None` and blank strings both signal
    /// deletion.
    pub content: Option<String>,
    /// Whether the entry was modified or deleted.
    pub kind: ChangeKind,
}

impl ConfigChangeEvent {
    /// Creates a change event, deriving the kind from the content.
    pub fn new(data_id: String, content: Option<String>) -> Self {
        let kind = ChangeKind::from_content(content.as_deref());
        Self {
            data_id,
            content,
            kind,
        }
    }
}

/// Errors surfaced by the dynamic configuration adapter.
#[derive(Debug, thiserror::Error)]
pub enum DynConfigError {
    /// The remote store errored or timed out while serving a fetch.
    ///
    /// Carries the underlying client error; never retried by the adapter.
    #[error("failed to fetch config '{data_id}' from the remote store: {source}")]
    StoreUnavailable {
        /// Key whose fetch failed.
        data_id: String,
        /// The client error that caused the failure.
        #[source]
        source: StoreError,
    },
}
