use crate::error::Result;
use declare_client::ClientConfig;

/// Build the client configuration from the global CLI overrides
pub fn client_config(base_url: Option<String>, timeout: Option<u64>) -> Result<ClientConfig> {
    let mut builder = ClientConfig::builder();

    if let Some(base_url) = base_url {
        builder = builder.base_url(base_url);
    }
    if let Some(timeout) = timeout {
        builder = builder.timeout_seconds(timeout);
    }

    Ok(builder.build()?)
}
