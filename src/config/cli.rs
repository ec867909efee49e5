use clap::Parser;

use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{validate_non_empty_string, Validate};

#[derive(Debug, Clone, Parser)]
#[command(name = "got-roster")]
#[command(about = "Query and report over an in-memory member roster")]
pub struct CliConfig {
    /// TOML roster file; the built-in roster is used when omitted.
    #[arg(long)]
    pub roster: Option<String>,

    /// Report to produce: summary, members, or houses.
    #[arg(long, default_value = "summary")]
    pub report: String,

    /// Output format for tabular reports: csv or json.
    #[arg(long, default_value = "csv")]
    pub format: String,

    /// Restrict member reports to a single house (e.g. STARK).
    #[arg(long)]
    pub house: Option<String>,

    /// Write the report to this file instead of stdout.
    #[arg(long)]
    pub output: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.roster {
            validate_non_empty_string("roster", path)?;
            if !path.ends_with(".toml") {
                return Err(RosterError::ConfigError {
                    message: format!("roster file must be a .toml file, got: {path}"),
                });
            }
        }
        if let Some(out) = &self.output {
            validate_non_empty_string("output", out)?;
        }
        Ok(())
    }
}
