use crate::classifier::handle_api_error;
use crate::client::HttpClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::notify::Notifier;
use crate::types::{CreateResponse, Declaration, DeclarationInput, ListResponse};
use std::sync::Arc;

const ENDPOINT: &str = "/health-declaration";

/// Data service for health declarations
///
/// Both operations delegate to the HTTP client and, on failure, run the
/// classifier with an operation-specific default before re-raising the
/// original error unchanged. Whether a failure is fatal is the caller's
/// decision.
pub struct DeclarationService {
    client: HttpClient,
    notifier: Arc<dyn Notifier>,
}

impl DeclarationService {
    pub fn new(config: ClientConfig, notifier: Arc<dyn Notifier>) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new(config)?,
            notifier,
        })
    }

    /// The notification sink this service reports failures to
    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    /// Fetch every submitted declaration
    pub async fn list(&self) -> Result<Vec<Declaration>> {
        match self.client.get_json::<ListResponse>(ENDPOINT).await {
            Ok(response) => Ok(response.into_declarations()),
            Err(error) => {
                handle_api_error(
                    &error,
                    "Failed to fetch health declarations",
                    self.notifier.as_ref(),
                );
                Err(error)
            }
        }
    }

    /// Submit a new declaration and return the stored record
    pub async fn create(&self, input: &DeclarationInput) -> Result<Declaration> {
        match self
            .client
            .post_json::<_, CreateResponse>(ENDPOINT, input)
            .await
        {
            Ok(response) => Ok(response.data),
            Err(error) => {
                handle_api_error(
                    &error,
                    "Failed to create health declaration",
                    self.notifier.as_ref(),
                );
                Err(error)
            }
        }
    }
}
