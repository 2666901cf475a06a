//! Dynconf - dynamic configuration over remote push-based stores.
//!
//! Dynconf adapts a remote configuration/coordination store (a config
//! center in the Nacos/Apollo mold) into a uniform dynamic-configuration
//! abstraction that a host framework can consume. The main features
//! include:
//!
//! - Bounded-wait fetch of configuration values by key and group
//! - Change subscriptions multiplexed over one remote registration per
//!   (key, group) pair, fanned out to any number of local listeners
//! - Typed change events classifying each push as modified or deleted
//! - Stream-style subscriptions with RAII cleanup
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::{sync::Arc, time::Duration};
//!
//! use dynconf::{
//!     ConfigService, DynamicConfig, PushHandler, RemoteConfigAdapter, StoreError,
//! };
//!
//! struct MyStoreClient;
//!
//! #[async_trait::async_trait]
//! impl ConfigService for MyStoreClient {
//!     async fn get_config(
//!         &self,
//!         _data_id: &str,
//!         _group: &str,
//!         _timeout: Duration,
//!     ) -> Result<Option<String>, StoreError> {
//!         Ok(None)
//!     }
//!
//!     async fn add_listener(
//!         &self,
//!         _data_id: &str,
//!         _group: &str,
//!         _handler: Arc<dyn PushHandler>,
//!     ) -> Result<(), StoreError> {
//!         Ok(())
//!     }
//! }
//!
//! # async fn run() -> Result<(), dynconf::DynConfigError> {
//! let adapter: Arc<dyn DynamicConfig> =
//!     Arc::new(RemoteConfigAdapter::new(Arc::new(MyStoreClient)));
//! let value = adapter
//!     .get_config("db.url", "app", Duration::from_secs(3))
//!     .await?;
//! println!("db.url = {value:?}");
//! # Ok(())
//! # }
//! ```

/// Dynamic configuration adapter with listener multiplexing.
pub mod adapter;

/// Remote store client contract and connection glue.
pub mod store;

/// Tracing setup for host applications embedding the adapter.
pub mod tracing_config;

pub use adapter::{
    ChangeKind, ChangeStream, ConfigChangeEvent, ConfigListener, DEFAULT_GROUP, DynConfigError,
    DynamicConfig, RemoteConfigAdapter,
};
pub use store::{ConfigService, ConnectConfig, ConnectError, PushHandler, StoreError};
