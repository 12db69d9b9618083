//! Shared helpers for integration tests

use declare_client::{ClientConfig, DeclarationService, MemoryNotifier};
use serde_json::json;
use std::sync::Arc;

/// Build a service pointed at a mock server, with a recording notifier
pub fn test_service(base_url: &str) -> (DeclarationService, Arc<MemoryNotifier>) {
    test_service_with_timeout(base_url, 5)
}

pub fn test_service_with_timeout(
    base_url: &str,
    timeout_seconds: u64,
) -> (DeclarationService, Arc<MemoryNotifier>) {
    let notifier = Arc::new(MemoryNotifier::new());
    let config = ClientConfig::builder()
        .base_url(base_url)
        .timeout_seconds(timeout_seconds)
        .build()
        .expect("test config should be valid");

    let service = DeclarationService::new(config, notifier.clone())
        .expect("service construction should succeed");

    (service, notifier)
}

/// A declaration record in the backend's wire shape
pub fn record_json(name: &str, temperature: f64, symptoms: &[&str], contact: bool) -> serde_json::Value {
    json!({
        "_id": format!("id-{}", name.to_lowercase().replace(' ', "-")),
        "name": name,
        "temperature": temperature,
        "symptoms": symptoms,
        "contactWithInfected": contact,
        "createdAt": "2024-03-01T10:00:00Z",
        "updatedAt": "2024-03-01T10:00:00Z"
    })
}
