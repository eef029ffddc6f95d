//! Pagesmith Configuration Module
//!
//! Loads `pagesmith.toml` and exposes the defaults the wizard, theme gallery
//! and settings panel start from.

pub mod constants;
pub mod loader;

pub use loader::{ConfigManager, PagesmithConfig};

use crate::campaign::{BrandVoice, CopywritingStrategy, FunnelStage};
use crate::settings::AiProvider;
use crate::themes::DEFAULT_THEME_ID;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Defaults applied to enumerated wizard fields the user leaves empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CampaignDefaults {
    #[serde(default)]
    pub funnel_stage: FunnelStage,

    #[serde(default)]
    pub copywriting_strategy: CopywritingStrategy,

    #[serde(default)]
    pub brand_voice: BrandVoice,
}

/// Theme gallery settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemesConfig {
    /// Theme preselected in the gallery and used when none is given
    #[serde(default = "default_theme")]
    pub default_theme: String,
}

impl Default for ThemesConfig {
    fn default() -> Self {
        Self {
            default_theme: default_theme(),
        }
    }
}

/// Provider preferences used until the settings panel stores its own
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AiConfig {
    #[serde(default)]
    pub provider: AiProvider,

    /// Model override; empty means the provider default
    #[serde(default)]
    pub model: Option<String>,
}

/// Where the settings store keeps its file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Settings file, relative to the workspace unless absolute
    #[serde(default = "default_settings_file")]
    pub settings_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            settings_file: default_settings_file(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter directive when neither the CLI flag nor the
    /// environment sets one
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_theme() -> String {
    DEFAULT_THEME_ID.to_string()
}
fn default_settings_file() -> PathBuf {
    PathBuf::from(constants::paths::SETTINGS_FILE)
}
fn default_log_level() -> String {
    constants::defaults::LOG_LEVEL.to_string()
}
