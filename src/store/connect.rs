use serde::{Deserialize, Serialize};
use url::Url;

/// Errors raised while resolving connection properties from a URL.
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    /// The configuration URL carries no host.
    #[error("config store URL '{url}' has no host")]
    MissingHost {
        /// The offending URL.
        url: String,
    },

    /// The configuration URL carries no port.
    #[error("config store URL '{url}' has no port")]
    MissingPort {
        /// The offending URL.
        url: String,
    },
}

/// Connection properties for a remote config store client.
///
/// Resolved from a generic configuration URL by
/// [`from_url`](ConnectConfig::from_url) or embedded directly in a host
/// application's configuration file. Constructing an actual client from
/// these properties is up to the store integration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectConfig {
    /// Primary server host.
    pub host: String,
    /// Primary server port.
    pub port: u16,
    /// Additional server addresses tried when the primary is down.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub backup: Vec<String>,
    /// Namespace/tenant isolating this application's keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Access key credential.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    /// Secret key credential.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
    /// Server cluster to pin requests to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    /// Address-server endpoint for dynamic server discovery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Log file name the client should write under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_name: Option<String>,
}

impl ConnectConfig {
    /// Resolves connection properties from a configuration URL.
    ///
    /// Host and port come from the URL authority; everything else from
    /// query parameters (`backup` as a comma-separated list, plus
    /// `namespace`, `access_key`, `secret_key`, `cluster_name`,
    /// `endpoint`, `log_name`). Empty parameter values and unknown
    /// parameters are ignored.
    ///
    /// # Errors
    /// Returns [`ConnectError`] when the URL lacks a host or a port.
    pub fn from_url(url: &Url) -> Result<Self, ConnectError> {
        let host = url
            .host_str()
            .ok_or_else(|| ConnectError::MissingHost {
                url: url.to_string(),
            })?
            .to_string();
        let port = url.port().ok_or_else(|| ConnectError::MissingPort {
            url: url.to_string(),
        })?;

        let mut config = Self {
            host,
            port,
            ..Self::default()
        };

        for (name, value) in url.query_pairs() {
            if value.is_empty() {
                continue;
            }
            let value = value.into_owned();
            match name.as_ref() {
                "backup" => config.backup = value.split(',').map(str::to_string).collect(),
                "namespace" => config.namespace = Some(value),
                "access_key" => config.access_key = Some(value),
                "secret_key" => config.secret_key = Some(value),
                "cluster_name" => config.cluster_name = Some(value),
                "endpoint" => config.endpoint = Some(value),
                "log_name" => config.log_name = Some(value),
                _ => {}
            }
        }

        Ok(config)
    }

    /// Renders the server address list as `host:port[,backup...]`.
    pub fn server_addr(&self) -> String {
        let mut addr = format!("{}:{}", self.host, self.port);
        for backup in &self.backup {
            addr.push(',');
            addr.push_str(backup);
        }
        addr
    }
}
