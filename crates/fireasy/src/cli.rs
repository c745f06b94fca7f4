//! Command line interface
//!
//! Reports are built as plain text so they can be asserted on; `run` prints
//! them.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use fireasy_application::DeployerDiscovery;
use fireasy_application::ports::registry::{list_database_providers, list_type_descriptors};
use fireasy_domain::error::Result;
use fireasy_infrastructure::logging::init_logging;
use fireasy_infrastructure::{AppContext, ConfigLoader, init_app};

/// Command line interface for Fireasy
#[derive(Parser, Debug)]
#[command(name = "fireasy")]
#[command(about = "Fireasy - provider registry and configuration checks")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List linked providers, deployers and types
    Providers,
    /// Load configuration, boot and resolve every data instance
    Check {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the configured log level
        #[arg(long)]
        log_level: Option<String>,
    },
}

/// Resolution outcome for one data instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceReport {
    /// Instance name
    pub name: String,
    /// Configured provider name
    pub provider_name: String,
    /// Whether this is the default instance
    pub is_default: bool,
    /// Resolved provider name and feature, or the resolution error
    pub resolved: std::result::Result<(String, Option<String>), String>,
}

/// Execute a parsed command line
pub fn run(cli: &Cli) -> Result<ExitCode> {
    match &cli.command {
        Command::Providers => {
            println!("{}", providers_report()?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { config, log_level } => {
            let mut loader = ConfigLoader::new();
            if let Some(path) = config {
                loader = loader.with_config_path(path);
            }
            let mut app_config = loader.load()?;
            if let Some(level) = log_level {
                app_config.logging.level.clone_from(level);
            }
            init_logging(&app_config.logging)?;

            let context = init_app(app_config)?;
            let reports = check_instances(&context);
            println!("{}", render_check(&context, &reports));
            if reports.iter().any(|report| report.resolved.is_err()) {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

/// Linked providers, deployers in run order, and type descriptors
pub fn providers_report() -> Result<String> {
    let mut lines = vec!["Providers:".to_string()];
    let mut providers = list_database_providers();
    providers.sort_unstable();
    lines.extend(
        providers
            .into_iter()
            .map(|(name, description)| format!("  {name:<12} {description}")),
    );

    lines.push("Deployers:".to_string());
    lines.extend(
        DeployerDiscovery::from_registry()
            .ordered()?
            .iter()
            .map(|deployer| format!("  {:<12} priority {}", deployer.name(), deployer.priority())),
    );

    lines.push("Types:".to_string());
    let mut types = list_type_descriptors();
    types.sort_unstable();
    lines.extend(
        types
            .into_iter()
            .map(|(name, description)| format!("  {name} - {description}")),
    );
    Ok(lines.join("\n"))
}

/// Resolve every configured data instance
pub fn check_instances(context: &AppContext) -> Vec<InstanceReport> {
    context
        .data_instances()
        .iter()
        .map(|instance| InstanceReport {
            name: instance.name.clone(),
            provider_name: instance.provider_name.clone(),
            is_default: instance.is_default,
            resolved: context
                .defined_provider(instance)
                .map(|provider| {
                    (
                        provider.provider_name().to_string(),
                        provider.feature().map(str::to_string),
                    )
                })
                .map_err(|e| e.to_string()),
        })
        .collect()
}

/// Text summary of a check run
pub fn render_check(context: &AppContext, reports: &[InstanceReport]) -> String {
    let mut lines = vec![format!(
        "Deployers: {}",
        context.deployment().deployed.join(", ")
    )];
    if reports.is_empty() {
        lines.push("No data instances configured".to_string());
    }
    for report in reports {
        let marker = if report.is_default { " (default)" } else { "" };
        let outcome = match &report.resolved {
            Ok((provider, Some(feature))) => format!("{provider} [{feature}]"),
            Ok((provider, None)) => provider.clone(),
            Err(error) => format!("ERROR {error}"),
        };
        lines.push(format!(
            "  {}{marker}: {} -> {outcome}",
            report.name, report.provider_name
        ));
    }
    lines.join("\n")
}
