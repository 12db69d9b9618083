//! Failure classification: maps any operation failure to the user-facing
//! messages to display. Pure message derivation is kept separate from the
//! notification dispatch so both can be tested without a terminal.

use crate::error::DeclareError;
use crate::notify::Notifier;

/// Fallback used when callers have no operation-specific default
pub const DEFAULT_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Fixed messages for well-known HTTP status codes
fn status_message(status: u16, default_message: &str) -> String {
    match status {
        400 => "Invalid request. Please check your input.".to_string(),
        401 => "Unauthorized. Please login again.".to_string(),
        403 => "Access denied.".to_string(),
        404 => "Resource not found.".to_string(),
        500 => "Server error. Please try again later.".to_string(),
        _ => default_message.to_string(),
    }
}

/// Derive the display messages for a failure
///
/// Total over the error space and never returns an empty list. Priority:
/// structured per-entry errors, then the payload message, then the status
/// table, then the caller's default.
pub fn classify(error: &DeclareError, default_message: &str) -> Vec<String> {
    if let DeclareError::Api { status, payload } = error {
        if let Some(payload) = payload {
            if let Some(errors) = &payload.errors {
                if !errors.is_empty() {
                    return errors.iter().map(|entry| entry.to_string()).collect();
                }
            }

            if let Some(message) = &payload.message {
                if !message.is_empty() {
                    return vec![message.clone()];
                }
            }
        }

        return vec![status_message(*status, default_message)];
    }

    // Transport failures, decode failures, anything without a response
    vec![default_message.to_string()]
}

/// Classify a failure and emit one error notification per derived message
pub fn handle_api_error(error: &DeclareError, default_message: &str, notifier: &dyn Notifier) {
    for message in classify(error, default_message) {
        notifier.error(&message);
    }
}
