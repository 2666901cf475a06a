//! Unit tests for the store contract glue.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use url::Url;

use crate::store::{ConnectConfig, ConnectError, StoreError};

#[test]
fn from_url_resolves_host_port_and_properties() {
    let url = Url::parse(
        "store://config.example.com:8848/?namespace=prod&access_key=ak&secret_key=sk\
         &cluster_name=edge&endpoint=addr.example.com&log_name=dynconf",
    )
    .unwrap();

    let config = ConnectConfig::from_url(&url).unwrap();

    assert_eq!(config.host, "config.example.com");
    assert_eq!(config.port, 8848);
    assert_eq!(config.namespace.as_deref(), Some("prod"));
    assert_eq!(config.access_key.as_deref(), Some("ak"));
    assert_eq!(config.secret_key.as_deref(), Some("sk"));
    assert_eq!(config.cluster_name.as_deref(), Some("edge"));
    assert_eq!(config.endpoint.as_deref(), Some("addr.example.com"));
    assert_eq!(config.log_name.as_deref(), Some("dynconf"));
}

#[test]
fn from_url_splits_backup_addresses() {
    let url =
        Url::parse("store://10.0.0.1:8848/?backup=10.0.0.2:8848,10.0.0.3:8848").unwrap();

    let config = ConnectConfig::from_url(&url).unwrap();

    assert_eq!(config.backup, ["10.0.0.2:8848", "10.0.0.3:8848"]);
    assert_eq!(
        config.server_addr(),
        "10.0.0.1:8848,10.0.0.2:8848,10.0.0.3:8848"
    );
}

#[test]
fn from_url_ignores_empty_and_unknown_parameters() {
    let url = Url::parse("store://10.0.0.1:8848/?namespace=&flavor=spicy").unwrap();

    let config = ConnectConfig::from_url(&url).unwrap();

    assert_eq!(config.namespace, None);
    assert_eq!(config.server_addr(), "10.0.0.1:8848");
}

#[test]
fn from_url_requires_a_port() {
    let url = Url::parse("store://config.example.com/").unwrap();

    let error = ConnectConfig::from_url(&url).unwrap_err();

    assert!(matches!(error, ConnectError::MissingPort { .. }));
    assert!(error.to_string().contains("config.example.com"));
}

#[test]
fn store_error_display_carries_details() {
    let unavailable = StoreError::Unavailable {
        details: "connection reset".to_string(),
    };
    assert!(unavailable.to_string().contains("connection reset"));

    let timeout = StoreError::Timeout {
        elapsed: Duration::from_millis(500),
    };
    assert!(timeout.to_string().contains("500"));
}
