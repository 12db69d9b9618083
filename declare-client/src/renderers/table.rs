use super::OutputRenderer;
use crate::types::Declaration;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

/// Placeholder for records that declared no symptoms
const NO_SYMPTOMS: &str = "None";

/// Terminal table renderer for declaration records
#[derive(Debug, Default)]
pub struct TableRenderer;

impl TableRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl OutputRenderer for TableRenderer {
    fn render(&self, declarations: &[Declaration]) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                "Name",
                "Temperature",
                "Symptoms",
                "Contact with F0",
                "Created At",
            ]);

        for declaration in declarations {
            table.add_row(vec![
                Cell::new(&declaration.name),
                Cell::new(format_temperature(declaration.temperature))
                    .set_alignment(CellAlignment::Right),
                Cell::new(format_symptoms(&declaration.symptoms)),
                Cell::new(if declaration.contact_with_infected {
                    "Yes"
                } else {
                    "No"
                })
                .set_alignment(CellAlignment::Center),
                Cell::new(format_created_at(declaration)),
            ]);
        }

        table.to_string()
    }
}

fn format_temperature(temperature: f64) -> String {
    format!("{}°C", temperature)
}

fn format_symptoms(symptoms: &[String]) -> String {
    if symptoms.is_empty() {
        NO_SYMPTOMS.to_string()
    } else {
        symptoms.join(", ")
    }
}

fn format_created_at(declaration: &Declaration) -> String {
    declaration
        .created_at
        .map(|created| created.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}
