use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed vocabulary the symptoms field draws from
pub const SYMPTOM_OPTIONS: [&str; 10] = [
    "Cough",
    "Smell/taste impairment",
    "Fever",
    "Breathing difficulties",
    "Body aches",
    "Headaches",
    "Fatigue",
    "Sore throat",
    "Diarrhea",
    "Runny nose",
];

/// One submitted health-screening record as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    /// Backend-assigned identifier
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub temperature: f64,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub contact_with_infected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request body for creating a declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationInput {
    pub name: String,
    pub temperature: f64,
    pub symptoms: Vec<String>,
    pub contact_with_infected: bool,
}

/// One entry in an API error payload's `errors` list
///
/// The backend mixes plain strings and field-qualified objects in the same
/// list, so this is untagged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Field { field: String, message: String },
    Text(String),
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(message) => write!(f, "{}", message),
            Self::Field { field, message } => write!(f, "{}: {}", field, message),
        }
    }
}

/// Structured error body the backend sends on failed requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorPayload {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorDetail>>,
}

/// Response to `GET /health-declaration`
///
/// The backend normally wraps the records in a success envelope, but older
/// deployments returned the bare array, so both shapes are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListResponse {
    Envelope {
        success: bool,
        #[serde(default)]
        message: Option<String>,
        data: Vec<Declaration>,
    },
    Bare(Vec<Declaration>),
}

impl ListResponse {
    /// Unwrap to the record list regardless of envelope shape
    pub fn into_declarations(self) -> Vec<Declaration> {
        match self {
            Self::Envelope { data, .. } => data,
            Self::Bare(data) => data,
        }
    }
}

/// Response to `POST /health-declaration`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Declaration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_wire_format() {
        let json = r#"{
            "_id": "abc123",
            "name": "John Doe",
            "temperature": 36.5,
            "symptoms": ["Cough", "Fever"],
            "contactWithInfected": true,
            "createdAt": "2024-03-01T10:00:00Z"
        }"#;

        let declaration: Declaration = serde_json::from_str(json).unwrap();
        assert_eq!(declaration.id.as_deref(), Some("abc123"));
        assert_eq!(declaration.name, "John Doe");
        assert_eq!(declaration.temperature, 36.5);
        assert_eq!(declaration.symptoms, vec!["Cough", "Fever"]);
        assert!(declaration.contact_with_infected);
        assert!(declaration.created_at.is_some());
        assert!(declaration.updated_at.is_none());
    }

    #[test]
    fn test_input_serializes_camel_case() {
        let input = DeclarationInput {
            name: "John Doe".to_string(),
            temperature: 36.5,
            symptoms: vec!["Cough".to_string()],
            contact_with_infected: true,
        };

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "John Doe",
                "temperature": 36.5,
                "symptoms": ["Cough"],
                "contactWithInfected": true
            })
        );
    }

    #[test]
    fn test_error_payload_with_plain_entries() {
        let json = r#"{"success":false,"message":"Validation failed","errors":["Name is required"]}"#;
        let payload: ApiErrorPayload = serde_json::from_str(json).unwrap();

        assert!(!payload.success);
        assert_eq!(payload.message.as_deref(), Some("Validation failed"));
        let errors = payload.errors.unwrap();
        assert_eq!(errors, vec![ErrorDetail::Text("Name is required".to_string())]);
    }

    #[test]
    fn test_error_payload_with_field_entries() {
        let json = r#"{"success":false,"message":"Validation failed","errors":[{"field":"name","message":"Name is required"}]}"#;
        let payload: ApiErrorPayload = serde_json::from_str(json).unwrap();

        let errors = payload.errors.unwrap();
        assert_eq!(errors[0].to_string(), "name: Name is required");
    }

    #[test]
    fn test_list_response_envelope_and_bare() {
        let envelope = r#"{"success":true,"message":"ok","data":[{"name":"A","temperature":36.0,"symptoms":[],"contactWithInfected":false}]}"#;
        let parsed: ListResponse = serde_json::from_str(envelope).unwrap();
        assert_eq!(parsed.into_declarations().len(), 1);

        let bare = r#"[{"name":"A","temperature":36.0,"symptoms":[],"contactWithInfected":false}]"#;
        let parsed: ListResponse = serde_json::from_str(bare).unwrap();
        assert_eq!(parsed.into_declarations().len(), 1);
    }
}
