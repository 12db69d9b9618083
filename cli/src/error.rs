use declare_client::DeclareError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Client error: {0}")]
    Client(#[from] DeclareError),

    #[error("Dialoguer error: {0}")]
    DialoguerError(#[from] dialoguer::Error),

    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::Client(err) => match err {
                DeclareError::Api { status, .. } => {
                    format!("The server rejected the request (status {status})")
                }
                DeclareError::Http(err) if err.is_timeout() => {
                    "The request timed out. Check your connection and try again".to_string()
                }
                DeclareError::Http(_) => {
                    "Could not reach the health declaration service".to_string()
                }
                other => other.to_string(),
            },
            Self::DialoguerError(err) => format!("UI interaction error: {err}"),
            Self::Other(msg) => msg.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
