//! CLI argument parsing and configuration

use clap::{Parser, Subcommand};
use pagesmith_core::campaign::FunnelStage;
use pagesmith_core::prompts::SectionKind;
use pagesmith_core::settings::AiProvider;
use std::path::PathBuf;

/// Main CLI structure for pagesmith
#[derive(Parser, Debug)]
#[command(
    name = "pagesmith",
    version,
    about = "Campaign-driven landing page copy prompts and themes"
)]
pub struct Cli {
    /// Workspace root directory; defaults to current directory
    #[arg(long, global = true)]
    pub workspace: Option<PathBuf>,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter (error, warn, info, debug, trace or a full directive);
    /// overrides PAGESMITH_LOG and RUST_LOG
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Disable color output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the generation prompt for one landing page section
    Prompt {
        /// Section kind (hero, features, how-it-works, testimonials, faq, comparison, cta)
        section: SectionKind,

        /// Campaign file (TOML or JSON)
        #[arg(long)]
        campaign: PathBuf,

        /// Emit the prompt as a JSON object
        #[arg(long)]
        json: bool,
    },

    /// Print or write the prompts for every section
    Prompts {
        /// Campaign file (TOML or JSON)
        #[arg(long)]
        campaign: PathBuf,

        /// Directory to write one `<section>.txt` file per prompt
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Validate a model response against a section's expected shape
    Check {
        /// Section kind the response was generated for
        section: SectionKind,

        /// File holding the raw model response
        #[arg(long)]
        response: PathBuf,

        /// Funnel stage whose CTA vocabulary the response must use; defaults to `[campaign]`
        #[arg(long)]
        funnel_stage: Option<FunnelStage>,
    },

    /// Browse and apply landing page themes
    Themes {
        #[command(subcommand)]
        action: ThemeCommands,
    },

    /// Manage AI provider settings
    Settings {
        #[command(subcommand)]
        action: SettingsCommands,
    },

    /// Write a default pagesmith.toml into the workspace
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ThemeCommands {
    /// List the theme gallery in display order
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one theme's colors, fonts and style classes
    Show { id: String },

    /// Apply a theme and print the generated style sheet
    Apply {
        /// Theme id; defaults to the configured default theme
        id: Option<String>,

        /// Write the style sheet to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show provider, model and masked API key
    Show,

    /// Store an API key for the current provider
    SetApiKey { key: String },

    /// Remove the stored API key
    ClearApiKey,

    /// Switch AI provider (openai, anthropic, gemini)
    SetProvider { provider: AiProvider },

    /// Override the model for the current provider
    SetModel { model: String },
}
