use std::path::PathBuf;

use clap::{Args, ValueEnum};
use anyhow::Context;
use title_warden_core::config::load_title_rules_config;
use title_warden_core::issues::ValidationReport;
use title_warden_core::TitleWarden;
use tracing::{debug, instrument};

use crate::config::AppConfig;
use crate::errors::CliError;
use crate::providers::select_provider;

#[cfg(test)]
#[path = "check_title_tests.rs"]
mod tests;

/// Output formats for validation results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `- issue` line per issue
    #[default]
    Text,

    /// The full validation report as JSON
    Json,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckTitleArgs {
    /// The pull request title to validate
    pub title: String,

    /// Alternate config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Standalone rules file, replacing the `[rules]` table of the config
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// JSON file with the known node display names
    #[arg(long, conflicts_with = "names_command")]
    pub names_file: Option<PathBuf>,

    /// Shell command printing the known node display names as JSON
    #[arg(long)]
    pub names_command: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the check command
///
/// Prints the issues found and returns [`CliError::ValidationFailed`] when
/// there are any.
#[instrument(skip(args), fields(title = %args.title))]
pub async fn execute(args: CheckTitleArgs) -> Result<(), CliError> {
    let mut config = AppConfig::load_or_default(args.config.as_deref())?;
    if let Some(rules_path) = &args.rules {
        debug!("Loading rules from {:?}", rules_path);
        config.rules = load_title_rules_config(rules_path)?;
    }
    let warden = TitleWarden::from_config(&config.rules)?;
    let provider = select_provider(args.names_file, args.names_command, &config.display_names)?;

    debug!("Validating PR title");
    let report = warden.report(&args.title, provider.as_ref()).await;

    if let Some(output) = render_report(&report, args.format)? {
        println!("{}", output);
    }

    if report.is_valid() {
        return Ok(());
    }

    Err(CliError::ValidationFailed(format!(
        "{} issue(s) found in PR title",
        report.issues.len()
    )))
}

/// Renders a report, returning `None` when there is nothing to print.
fn render_report(report: &ValidationReport, format: OutputFormat) -> anyhow::Result<Option<String>> {
    match format {
        OutputFormat::Text if report.is_valid() => Ok(None),
        OutputFormat::Text => Ok(Some(report.to_bullet_list())),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(report).context("Failed to serialize report")?;
            Ok(Some(json))
        }
    }
}
