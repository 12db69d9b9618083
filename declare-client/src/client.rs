use crate::config::ClientConfig;
use crate::error::{DeclareError, Result};
use crate::types::ApiErrorPayload;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// HTTP client wrapper for the health declaration API
///
/// Applies the configured base URL, timeout and default headers uniformly to
/// every request and converts non-2xx responses into structured errors.
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        for (key, value) in &config.headers {
            let name = key
                .parse::<HeaderName>()
                .map_err(|_| DeclareError::invalid_config(format!("invalid header name: {}", key)))?;
            let value = value
                .parse::<HeaderValue>()
                .map_err(|_| DeclareError::invalid_config(format!("invalid header value for {}", key)))?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Execute a GET request and decode the JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.client.get(self.config.endpoint(path)).send().await?;
        Self::decode(response).await
    }

    /// Execute a POST request with a JSON body and decode the JSON response
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .client
            .post(self.config.endpoint(path))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Decode a response, converting non-2xx statuses into `Api` errors
    ///
    /// The error body is kept as a structured payload when it parses; a body
    /// in any other shape leaves the payload empty and the classifier falls
    /// back to the status table.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let payload = serde_json::from_str::<ApiErrorPayload>(&body).ok();
            return Err(DeclareError::api(status.as_u16(), payload));
        }

        serde_json::from_str(&body).map_err(Into::into)
    }
}
