//! CLI argument parsing

use clap::Parser;

use crate::driver::{RunConfig, DEFAULT_COUNT, DEFAULT_NAME};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "itemlist")]
#[command(author, version, about = "Build a named list of items and print it", long_about = None)]
pub struct Args {
    /// Name of the container
    #[arg(long, default_value = DEFAULT_NAME)]
    pub name: String,

    /// Number of items to generate
    #[arg(long, short, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Output format as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            name: self.name.clone(),
            count: self.count,
            output_format: if self.json { OutputFormat::Json } else { OutputFormat::Human },
        }
    }
}
