use clap::Parser;

use crate::{engine::DEFAULT_ROSTER, entry::OutputFormat};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Comma-separated user names allowed to post and follow.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_ROSTER.map(String::from))]
    pub users: Vec<String>,

    /// How transcript entries are written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
