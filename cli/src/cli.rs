use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "declare")]
#[command(
    author,
    version,
    about = "Health declaration client for submitting and reviewing screening records"
)]
pub struct Cli {
    /// Override the API base URL
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[clap(long, global = true)]
    pub timeout: Option<u64>,

    /// Enable verbose output with additional information
    #[clap(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a health declaration (missing fields are prompted for)
    Submit {
        /// Full name of the declarant
        #[clap(long)]
        name: Option<String>,

        /// Body temperature in degrees Celsius
        #[clap(long)]
        temperature: Option<String>,

        /// Symptom to declare (repeat for multiple)
        #[clap(long = "symptom")]
        symptoms: Vec<String>,

        /// Declare contact with a suspected or confirmed case
        #[clap(long, default_value_t = false)]
        contact: bool,
    },

    /// List submitted health declarations in a table
    List,
}
