use crate::error::Result;
use crate::service::DeclarationService;
use crate::types::{Declaration, DeclarationInput};
use std::fmt;

/// Accepted temperature range in degrees Celsius
pub const TEMPERATURE_MIN: f64 = 34.0;
pub const TEMPERATURE_MAX: f64 = 42.0;

/// A field-scoped validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Outcome of a submission attempt that did not fail at the network layer
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The backend accepted the declaration
    Created(Declaration),
    /// Local validation rejected the form; nothing was sent
    Invalid(Vec<FieldError>),
}

/// Local state of the declaration form
///
/// Temperature is held as raw text so validation owns the numeric parse; the
/// contact answer has no unanswered representation and defaults to "No".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub name: String,
    pub temperature: String,
    pub symptoms: Vec<String>,
    pub contact_with_infected: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return every field to its initial default
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validate the form, producing a request body or the full list of
    /// field errors
    pub fn validate(&self) -> std::result::Result<DeclarationInput, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::new("name", "Name is required"));
        }

        let raw_temperature = self.temperature.trim();
        let temperature = if raw_temperature.is_empty() {
            errors.push(FieldError::new("temperature", "Temperature is required"));
            None
        } else {
            match raw_temperature.parse::<f64>() {
                Ok(value) if (TEMPERATURE_MIN..=TEMPERATURE_MAX).contains(&value) => Some(value),
                Ok(_) => {
                    errors.push(FieldError::new(
                        "temperature",
                        "Temperature must be between 34°C and 42°C",
                    ));
                    None
                }
                Err(_) => {
                    errors.push(FieldError::new("temperature", "Temperature must be a number"));
                    None
                }
            }
        };

        match temperature {
            Some(temperature) if errors.is_empty() => Ok(DeclarationInput {
                name: name.to_string(),
                temperature,
                symptoms: self.symptoms.clone(),
                contact_with_infected: self.contact_with_infected,
            }),
            _ => Err(errors),
        }
    }

    /// Run the full submission flow against the service
    ///
    /// Validation failure emits one error notification per field and issues
    /// no network call. A successful create emits a success notification and
    /// resets the form. A network-layer failure is re-raised (the service
    /// has already classified and notified) and the form keeps its state.
    pub async fn submit(&mut self, service: &DeclarationService) -> Result<SubmitOutcome> {
        let input = match self.validate() {
            Ok(input) => input,
            Err(errors) => {
                for error in &errors {
                    service.notifier().error(&error.message);
                }
                return Ok(SubmitOutcome::Invalid(errors));
            }
        };

        let declaration = service.create(&input).await?;
        service
            .notifier()
            .success("Health declaration submitted successfully!");
        self.reset();

        Ok(SubmitOutcome::Created(declaration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.message.as_str()).collect()
    }

    #[test]
    fn test_empty_form_reports_both_required_fields() {
        let form = FormState::new();
        let errors = form.validate().unwrap_err();

        assert_eq!(
            messages(&errors),
            vec!["Name is required", "Temperature is required"]
        );
    }

    #[test]
    fn test_whitespace_name_is_rejected() {
        let form = FormState {
            name: "   ".to_string(),
            temperature: "36.5".to_string(),
            ..FormState::default()
        };

        let errors = form.validate().unwrap_err();
        assert_eq!(messages(&errors), vec!["Name is required"]);
    }

    #[test]
    fn test_non_numeric_temperature() {
        let form = FormState {
            name: "John Doe".to_string(),
            temperature: "warm".to_string(),
            ..FormState::default()
        };

        let errors = form.validate().unwrap_err();
        assert_eq!(messages(&errors), vec!["Temperature must be a number"]);
    }

    #[test]
    fn test_out_of_range_temperature() {
        for raw in ["33.9", "42.1", "0", "100"] {
            let form = FormState {
                name: "John Doe".to_string(),
                temperature: raw.to_string(),
                ..FormState::default()
            };

            let errors = form.validate().unwrap_err();
            assert_eq!(
                messages(&errors),
                vec!["Temperature must be between 34°C and 42°C"],
                "temperature {raw}"
            );
        }
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        for raw in ["34", "42", "36.5"] {
            let form = FormState {
                name: "John Doe".to_string(),
                temperature: raw.to_string(),
                ..FormState::default()
            };
            assert!(form.validate().is_ok(), "temperature {raw}");
        }
    }

    #[test]
    fn test_valid_form_builds_input() {
        let form = FormState {
            name: " John Doe ".to_string(),
            temperature: "36.5".to_string(),
            symptoms: vec!["Cough".to_string(), "Fever".to_string()],
            contact_with_infected: true,
        };

        let input = form.validate().unwrap();
        assert_eq!(input.name, "John Doe");
        assert_eq!(input.temperature, 36.5);
        assert_eq!(input.symptoms, vec!["Cough", "Fever"]);
        assert!(input.contact_with_infected);
    }

    #[test]
    fn test_contact_defaults_to_no() {
        let form = FormState {
            name: "John Doe".to_string(),
            temperature: "36.5".to_string(),
            ..FormState::default()
        };

        let input = form.validate().unwrap();
        assert!(!input.contact_with_infected);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = FormState {
            name: "John Doe".to_string(),
            temperature: "36.5".to_string(),
            symptoms: vec!["Cough".to_string()],
            contact_with_infected: true,
        };

        form.reset();
        assert_eq!(form, FormState::default());
    }
}
