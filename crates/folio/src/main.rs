mod cli;
mod color;
mod commands;
mod config;
mod logging;
mod output;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands, ConfigCommands};
use config::Config;
use folio_core::SimulatedSender;
use github_feed::GitHubClient;
use output::output_error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    color::init(cli.color);
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        output_error(&e, cli.format);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<()> {
    // Commands that don't need configuration
    match &cli.command {
        Commands::Completions { shell } => {
            clap_complete::generate(*shell, &mut Cli::command(), "folio", &mut std::io::stdout());
            return Ok(());
        }
        Commands::Profile { section } => {
            return commands::profile::handle_profile(*section, cli.format);
        }
        Commands::Config {
            action: ConfigCommands::Path,
        } => return handle_config_path(cli),
        _ => {}
    }

    let mut config = Config::load(cli.config.clone())?;
    config.merge_with_cli(cli.user.clone(), cli.api_url.clone());
    config.validate()?;
    tracing::debug!(?config, "configuration loaded");

    match &cli.command {
        Commands::Projects { action } => {
            let client = GitHubClient::with_timeout(&config.api_url, config.timeout());
            commands::projects::handle_projects(
                &client,
                &config.username,
                config.default_filter,
                action,
                cli.format,
            )
        }
        Commands::Contact {
            name,
            email,
            message,
        } => {
            let sender = SimulatedSender::new(config.submit_delay());
            commands::contact::handle_contact(&sender, name, email, message, cli.format)
        }
        Commands::Config {
            action: ConfigCommands::Show,
        } => handle_config_show(&config, cli.format),
        // Handled before configuration is loaded
        Commands::Completions { .. }
        | Commands::Profile { .. }
        | Commands::Config {
            action: ConfigCommands::Path,
        } => unreachable!("handled before configuration is loaded"),
    }
}

fn handle_config_show(config: &Config, format: cli::OutputFormat) -> Result<()> {
    match format {
        cli::OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        cli::OutputFormat::Text => {
            print!("{}", toml::to_string_pretty(config)?);
        }
    }
    Ok(())
}

fn handle_config_path(cli: &Cli) -> Result<()> {
    let path = config::active_config_path(cli.config.as_deref())
        .or_else(config::default_config_path)
        .ok_or_else(|| anyhow::anyhow!("Could not determine a config file location"))?;
    println!("{}", path.display());
    Ok(())
}
