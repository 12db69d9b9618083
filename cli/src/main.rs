mod cli;
mod context;
mod error;
mod list;
mod submit;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use declare_client::ViewBoundary;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::process;

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    // Keep internal panic detail out of the output unless asked for it;
    // the boundary decides what the user sees.
    if !verbose {
        panic::set_hook(Box::new(|_| {}));
    }

    match panic::catch_unwind(AssertUnwindSafe(|| dispatch(cli))) {
        Ok(Ok(())) => {}
        Ok(Err(err)) => {
            eprintln!("{} {}", "Error:".bold().red(), err.user_message());
            process::exit(1);
        }
        Err(payload) => {
            let mut boundary = ViewBoundary::new();
            boundary.catch(&panic_message(payload));
            boundary.dispatch(&ui::ConsoleNotifier);
            if let Some(panel) = boundary.render(verbose) {
                eprintln!("\n{}", panel);
            }
            process::exit(2);
        }
    }
}

fn dispatch(cli: Cli) -> error::Result<()> {
    let Cli {
        base_url,
        timeout,
        verbose,
        command,
    } = cli;

    match command {
        Commands::Submit {
            name,
            temperature,
            symptoms,
            contact,
        } => submit::execute(submit::SubmitArgs {
            name,
            temperature,
            symptoms,
            contact,
            base_url,
            timeout,
            verbose,
        }),
        Commands::List => list::execute(base_url, timeout, verbose),
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown failure".to_string()
    }
}
