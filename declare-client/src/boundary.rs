//! Top-level containment for unexpected failures.
//!
//! Re-expressed as an explicit state machine: pure transitions decide what
//! state the boundary is in, a separate dispatch step decides what
//! notifications fire, and rendering is a read-only view of the state. The
//! special case is a raised message that is actually a serialized API error
//! payload, which gets a dedicated validation panel instead of the generic
//! fallback.

use crate::notify::Notifier;
use crate::types::ApiErrorPayload;

/// Message shown for failures with no recognizable structure
pub const GENERIC_FAILURE_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// State of the view boundary
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryState {
    /// No failure captured; the wrapped view renders normally
    Clean,
    /// A failure with no structured payload
    FailedGeneric { detail: String },
    /// A failure whose message was a serialized validation payload
    FailedValidation { payload: ApiErrorPayload },
}

/// Re-enterable failure boundary
#[derive(Debug, Clone, Default)]
pub struct ViewBoundary {
    state: BoundaryState,
}

impl Default for BoundaryState {
    fn default() -> Self {
        Self::Clean
    }
}

impl ViewBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &BoundaryState {
        &self.state
    }

    pub fn is_clean(&self) -> bool {
        self.state == BoundaryState::Clean
    }

    /// Pure transition from a raised error message
    ///
    /// A message containing `"success":false` that parses as an error
    /// payload enters the validation sub-state; anything else is generic.
    pub fn derive_state(message: &str) -> BoundaryState {
        if message.contains("\"success\":false") {
            if let Ok(payload) = serde_json::from_str::<ApiErrorPayload>(message) {
                if !payload.success {
                    return BoundaryState::FailedValidation { payload };
                }
            }
        }

        BoundaryState::FailedGeneric {
            detail: message.to_string(),
        }
    }

    /// Capture a failure, replacing any previously captured state
    pub fn catch(&mut self, message: &str) {
        self.state = Self::derive_state(message);
    }

    /// Emit the notifications for the current state
    ///
    /// Isolated from the transition so tests can assert on state and
    /// side effects independently. Clean emits nothing.
    pub fn dispatch(&self, notifier: &dyn Notifier) {
        match &self.state {
            BoundaryState::Clean => {}
            BoundaryState::FailedValidation { payload } => {
                if let Some(message) = &payload.message {
                    notifier.error(message);
                }
                if let Some(errors) = &payload.errors {
                    for entry in errors {
                        notifier.error(&entry.to_string());
                    }
                }
            }
            BoundaryState::FailedGeneric { .. } => {
                notifier.error(GENERIC_FAILURE_MESSAGE);
            }
        }
    }

    /// Render the fallback panel, or nothing when clean
    ///
    /// Internal failure detail is included only when `show_detail` is set,
    /// the terminal equivalent of a development-only diagnostics block.
    pub fn render(&self, show_detail: bool) -> Option<String> {
        match &self.state {
            BoundaryState::Clean => None,
            BoundaryState::FailedValidation { payload } => {
                let mut panel = String::new();
                let title = payload.message.as_deref().unwrap_or("Validation failed");
                panel.push_str(&format!("═══ {} ═══\n", title));
                if let Some(errors) = &payload.errors {
                    for entry in errors {
                        panel.push_str(&format!("  • {}\n", entry));
                    }
                }
                panel.push_str("\nFix the issues above and try again.");
                Some(panel)
            }
            BoundaryState::FailedGeneric { detail } => {
                let mut panel = String::from("═══ Oops! Something went wrong ═══\n");
                panel.push_str(
                    "Something unexpected happened. Please try again or contact support if the problem persists.",
                );
                if show_detail {
                    panel.push_str(&format!("\n\nDetail: {}", detail));
                }
                Some(panel)
            }
        }
    }

    /// Discard captured failure state, returning to clean
    pub fn reset(&mut self) {
        self.state = BoundaryState::Clean;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{MemoryNotifier, Severity};
    use crate::types::ErrorDetail;

    const VALIDATION_MESSAGE: &str =
        r#"{"success":false,"message":"Validation failed","errors":["Name is required"]}"#;

    #[test]
    fn test_starts_clean_and_renders_nothing() {
        let boundary = ViewBoundary::new();
        assert!(boundary.is_clean());
        assert_eq!(boundary.render(false), None);

        let notifier = MemoryNotifier::new();
        boundary.dispatch(&notifier);
        assert!(notifier.entries().is_empty());
    }

    #[test]
    fn test_serialized_payload_enters_validation_state() {
        let state = ViewBoundary::derive_state(VALIDATION_MESSAGE);
        match state {
            BoundaryState::FailedValidation { payload } => {
                assert_eq!(payload.message.as_deref(), Some("Validation failed"));
                assert_eq!(
                    payload.errors,
                    Some(vec![ErrorDetail::Text("Name is required".to_string())])
                );
            }
            other => panic!("expected validation state, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_message_is_generic() {
        let state = ViewBoundary::derive_state("\"success\":false but not json");
        assert!(matches!(state, BoundaryState::FailedGeneric { .. }));

        let state = ViewBoundary::derive_state("plain panic message");
        assert!(matches!(state, BoundaryState::FailedGeneric { .. }));
    }

    #[test]
    fn test_successful_payload_is_not_special_cased() {
        // success:true never marks a validation failure
        let state = ViewBoundary::derive_state(r#"{"success":true,"message":"fine"}"#);
        assert!(matches!(state, BoundaryState::FailedGeneric { .. }));
    }

    #[test]
    fn test_validation_panel_and_notifications() {
        let mut boundary = ViewBoundary::new();
        boundary.catch(VALIDATION_MESSAGE);

        let panel = boundary.render(false).unwrap();
        assert!(panel.contains("Validation failed"));
        assert!(panel.contains("• Name is required"));

        let notifier = MemoryNotifier::new();
        boundary.dispatch(&notifier);
        assert_eq!(
            notifier.entries(),
            vec![
                (Severity::Error, "Validation failed".to_string()),
                (Severity::Error, "Name is required".to_string()),
            ]
        );
    }

    #[test]
    fn test_generic_panel_hides_detail_by_default() {
        let mut boundary = ViewBoundary::new();
        boundary.catch("index out of bounds");

        let panel = boundary.render(false).unwrap();
        assert!(!panel.contains("index out of bounds"));

        let panel = boundary.render(true).unwrap();
        assert!(panel.contains("index out of bounds"));

        let notifier = MemoryNotifier::new();
        boundary.dispatch(&notifier);
        assert_eq!(
            notifier.entries(),
            vec![(Severity::Error, GENERIC_FAILURE_MESSAGE.to_string())]
        );
    }

    #[test]
    fn test_reset_is_reenterable() {
        let mut boundary = ViewBoundary::new();

        boundary.catch("first failure");
        assert!(!boundary.is_clean());

        boundary.reset();
        assert!(boundary.is_clean());
        assert_eq!(boundary.render(true), None);

        boundary.catch(VALIDATION_MESSAGE);
        assert!(matches!(
            boundary.state(),
            BoundaryState::FailedValidation { .. }
        ));
    }
}
