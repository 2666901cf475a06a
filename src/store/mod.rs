//! Remote store client contract and connection glue.
//!
//! The adapter never talks to a store directly; it consumes the
//! [`ConfigService`] contract, implemented elsewhere over the store's
//! actual transport. [`ConnectConfig`] carries the connection properties
//! such an implementation needs, resolved from a configuration URL.

mod client;
mod connect;

#[cfg(test)]
mod tests;

pub use client::{ConfigService, PushHandler, StoreError};
pub use connect::{ConnectConfig, ConnectError};
