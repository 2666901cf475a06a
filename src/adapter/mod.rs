//! Dynamic configuration adapter with listener multiplexing.
//!
//! Exposes a remote push-based configuration store through the
//! [`DynamicConfig`] abstraction. One remote subscription is held per
//! distinct (key, group) pair and fanned out to all locally registered
//! listeners, with raw push payloads translated into typed change events.

mod changes;
mod dynamic;
mod relay;
mod remote;
mod stream;


pub use changes::{ChangeKind, ConfigChangeEvent, DynConfigError};
pub use dynamic::{DEFAULT_GROUP, DynamicConfig};
pub use relay::ConfigListener;
pub(crate) use relay::ChangeRelay;
pub use remote::RemoteConfigAdapter;
pub use stream::ChangeStream;
