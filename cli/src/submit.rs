use crate::context;
use crate::error::{CliError, Result};
use crate::ui;
use declare_client::{DeclarationService, FormState, SubmitOutcome, SYMPTOM_OPTIONS};
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use std::sync::Arc;
use tokio::runtime::Runtime;

#[derive(Debug, Clone)]
pub struct SubmitArgs {
    pub name: Option<String>,
    pub temperature: Option<String>,
    pub symptoms: Vec<String>,
    pub contact: bool,
    pub base_url: Option<String>,
    pub timeout: Option<u64>,
    pub verbose: bool,
}

pub fn execute(args: SubmitArgs) -> Result<()> {
    // Fully specified on the command line means no prompts; validation still
    // runs on whatever was given, so empty values surface field errors
    // instead of prompting again.
    let mut form = match (&args.name, &args.temperature) {
        (Some(name), Some(temperature)) => FormState {
            name: name.clone(),
            temperature: temperature.clone(),
            symptoms: args.symptoms.clone(),
            contact_with_infected: args.contact,
        },
        _ => prompt_form(&args)?,
    };

    let config = context::client_config(args.base_url, args.timeout)?;
    if args.verbose {
        ui::info_message(&format!(
            "Submitting to {}",
            config.endpoint("/health-declaration")
        ));
    }
    let service = DeclarationService::new(config, Arc::new(ui::ConsoleNotifier))?;

    let rt = Runtime::new()?;
    let outcome = rt.block_on(form.submit(&service))?;

    match outcome {
        SubmitOutcome::Created(declaration) => {
            if args.verbose {
                if let Some(id) = declaration.id {
                    ui::info_message(&format!("Stored with id {}", id));
                }
            }
            Ok(())
        }
        SubmitOutcome::Invalid(_) => Err(CliError::Other(
            "Declaration was not submitted; fix the reported fields and try again".to_string(),
        )),
    }
}

/// Interactive form in the terminal, mirroring the declaration page
fn prompt_form(args: &SubmitArgs) -> Result<FormState> {
    let theme = ColorfulTheme::default();
    ui::section_header("Health Declaration Form");

    let name = match &args.name {
        Some(name) => name.clone(),
        None => Input::<String>::with_theme(&theme)
            .with_prompt("Name")
            .allow_empty(true)
            .interact_text()?,
    };

    let temperature = match &args.temperature {
        Some(temperature) => temperature.clone(),
        None => Input::<String>::with_theme(&theme)
            .with_prompt("Temperature (°C)")
            .allow_empty(true)
            .interact_text()?,
    };

    let symptoms = if args.symptoms.is_empty() {
        let selected = MultiSelect::with_theme(&theme)
            .with_prompt("Do you have any of the following symptoms now or within the last 14 days?")
            .items(&SYMPTOM_OPTIONS)
            .interact()?;
        selected
            .into_iter()
            .map(|idx| SYMPTOM_OPTIONS[idx].to_string())
            .collect()
    } else {
        args.symptoms.clone()
    };

    let contact_with_infected = if args.contact {
        true
    } else {
        // No unanswered state: confirming through the prompt declares "No"
        let choices = ["No", "Yes"];
        let choice = Select::with_theme(&theme)
            .with_prompt(
                "Have you been in contact with anyone suspected to have or diagnosed with Covid-19 within the last 14 days?",
            )
            .items(&choices)
            .default(0)
            .interact()?;
        choice == 1
    };

    Ok(FormState {
        name,
        temperature,
        symptoms,
        contact_with_infected,
    })
}
