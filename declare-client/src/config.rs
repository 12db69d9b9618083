use crate::error::{DeclareError, Result};
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

/// Default API base URL used when no override is provided
pub const DEFAULT_BASE_URL: &str = "https://21391hr.shop/api";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Configuration for the health declaration API client
///
/// An explicit value injected at construction rather than ambient state, so
/// tests can point the service at a local mock server.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL all endpoint paths are joined onto
    pub base_url: String,
    /// Request timeout applied uniformly to all requests
    pub timeout_seconds: u64,
    /// Default headers sent with every request
    pub headers: HashMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            headers,
        }
    }
}

impl ClientConfig {
    /// Start building a configuration from the defaults
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Join an endpoint path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(DeclareError::invalid_config("base URL must not be empty"));
        }

        Url::parse(&self.base_url)
            .map_err(|e| DeclareError::invalid_config(format!("invalid base URL: {}", e)))?;

        if self.timeout_seconds == 0 {
            return Err(DeclareError::invalid_config("timeout must be at least 1 second"));
        }

        Ok(())
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    timeout_seconds: Option<u64>,
    headers: HashMap<String, String>,
}

impl ClientConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the API base URL
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Override the request timeout in seconds
    pub fn timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// Add a default header sent with every request
    pub fn header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ClientConfig> {
        let defaults = ClientConfig::default();

        let mut headers = defaults.headers;
        headers.extend(self.headers);

        let config = ClientConfig {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            timeout_seconds: self.timeout_seconds.unwrap_or(defaults.timeout_seconds),
            headers,
        };

        config.validate()?;
        Ok(config)
    }
}
