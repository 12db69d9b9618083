use crate::context;
use crate::error::Result;
use crate::ui;
use declare_client::{DeclarationService, OutputRenderer, TableRenderer};
use indicatif::ProgressBar;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

pub fn execute(base_url: Option<String>, timeout: Option<u64>, verbose: bool) -> Result<()> {
    let config = context::client_config(base_url, timeout)?;
    if verbose {
        ui::info_message(&format!(
            "Fetching from {}",
            config.endpoint("/health-declaration")
        ));
    }
    let service = DeclarationService::new(config, Arc::new(ui::ConsoleNotifier))?;

    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner.set_message("Fetching health declarations...");

    let rt = Runtime::new()?;
    let result = rt.block_on(service.list());
    spinner.finish_and_clear();

    // Failures were already classified and notified by the service
    let declarations = result?;

    if declarations.is_empty() {
        ui::info_message("No health declarations submitted yet");
        return Ok(());
    }

    println!("{}", TableRenderer::new().render(&declarations));
    Ok(())
}
