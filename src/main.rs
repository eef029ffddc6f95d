//! pagesmith - landing page builder toolkit
//!
//! Binary entry point: loads configuration, installs logging and dispatches
//! to the command handlers in `cli`.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use pagesmith_core::config::ConfigManager;
use pagesmith_core::config::constants::env;
use pagesmith_core::settings::load_dotenv;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::*;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let workspace = match args.workspace {
        Some(path) => path,
        None => std::env::current_dir().context("cannot determine current dir")?,
    };
    let manager = load_config(&workspace, args.config)?;

    init_tracing(args.log_level.as_deref(), &manager.config().logging.level)?;
    load_dotenv();
    if let Some(path) = manager.config_path() {
        tracing::debug!(path = %path.display(), "using configuration file");
    }

    let config = manager.config();
    match args.command {
        Commands::Prompt {
            section,
            campaign,
            json,
        } => handle_prompt_command(config, section, &campaign, json),
        Commands::Prompts {
            campaign,
            output_dir,
        } => handle_prompts_command(config, &campaign, output_dir.as_deref()),
        Commands::Check {
            section,
            response,
            funnel_stage,
        } => handle_check_command(
            section,
            &response,
            funnel_stage.unwrap_or(config.campaign.funnel_stage),
        ),
        Commands::Themes { action } => handle_themes_command(config, action),
        Commands::Settings { action } => handle_settings_command(&manager, action),
        Commands::Init { force } => handle_init_command(&workspace, force),
    }
}

fn load_config(workspace: &Path, explicit: Option<PathBuf>) -> Result<ConfigManager> {
    match explicit {
        Some(path) => Ok(ConfigManager::load_from_file(&path)?.with_workspace(workspace)),
        None => ConfigManager::load_from_workspace(workspace),
    }
}

/// Install the stderr log subscriber.
///
/// Precedence: `--log-level`, then PAGESMITH_LOG, then RUST_LOG, then the
/// configured level.
fn init_tracing(flag: Option<&str>, configured: &str) -> Result<()> {
    let filter = match flag {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("Invalid log level: {directive}"))?,
        None => EnvFilter::try_from_env(env::LOG_FILTER)
            .or_else(|_| EnvFilter::try_from_default_env())
            .or_else(|_| EnvFilter::try_new(configured))
            .with_context(|| format!("Invalid log level: {configured}"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize tracing: {e}"))
}
