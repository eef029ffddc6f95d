use crate::config::constants::paths;
use crate::config::{AiConfig, CampaignDefaults, LoggingConfig, StorageConfig, ThemesConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure for Pagesmith
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PagesmithConfig {
    /// Wizard defaults for enumerated campaign fields
    #[serde(default)]
    pub campaign: CampaignDefaults,

    /// Theme gallery settings
    #[serde(default)]
    pub themes: ThemesConfig,

    /// AI provider preferences
    #[serde(default)]
    pub ai: AiConfig,

    /// Settings store location
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PagesmithConfig {
    /// Write the default configuration into `workspace`.
    ///
    /// Returns the names of the files created; an existing config is only
    /// replaced when `force` is set.
    pub fn bootstrap_project<P: AsRef<Path>>(workspace: P, force: bool) -> Result<Vec<String>> {
        let workspace = workspace.as_ref();
        let mut created_files = Vec::new();

        let config_path = workspace.join(paths::CONFIG_FILE_NAME);
        if !config_path.exists() || force {
            Self::create_sample_config(&config_path)?;
            created_files.push(paths::CONFIG_FILE_NAME.to_string());
        }

        Ok(created_files)
    }

    /// Create sample configuration file
    pub fn create_sample_config<P: AsRef<Path>>(output: P) -> Result<()> {
        let output = output.as_ref();
        let default_config = PagesmithConfig::default();
        let config_content = toml::to_string_pretty(&default_config)
            .context("Failed to serialize default configuration")?;

        fs::write(output, config_content)
            .with_context(|| format!("Failed to write config file: {}", output.display()))?;

        Ok(())
    }
}

/// Configuration manager for loading configurations
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: PagesmithConfig,
    config_path: Option<PathBuf>,
    workspace: PathBuf,
}

impl ConfigManager {
    /// Load configuration from a specific workspace
    pub fn load_from_workspace(workspace: impl AsRef<Path>) -> Result<Self> {
        let workspace = workspace.as_ref();

        let candidates = [
            Some(workspace.join(paths::CONFIG_FILE_NAME)),
            Some(
                workspace
                    .join(paths::CONFIG_DIR_NAME)
                    .join(paths::CONFIG_FILE_NAME),
            ),
            dirs::home_dir().map(|home| {
                home.join(paths::CONFIG_DIR_NAME)
                    .join(paths::CONFIG_FILE_NAME)
            }),
        ];

        for path in candidates.into_iter().flatten() {
            if path.exists() {
                return Ok(Self::load_from_file(&path)?.with_workspace(workspace));
            }
        }

        tracing::debug!(workspace = %workspace.display(), "no config file found, using defaults");
        Ok(Self {
            config: PagesmithConfig::default(),
            config_path: None,
            workspace: workspace.to_path_buf(),
        })
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: PagesmithConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        let workspace = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Ok(Self {
            config,
            config_path: Some(path.to_path_buf()),
            workspace,
        })
    }

    /// Resolve relative paths in the configuration against `workspace`
    pub fn with_workspace(mut self, workspace: impl Into<PathBuf>) -> Self {
        self.workspace = workspace.into();
        self
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &PagesmithConfig {
        &self.config
    }

    /// Get the configuration file path (if loaded from file)
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Settings store file resolved against the workspace
    pub fn settings_file(&self) -> PathBuf {
        let file = &self.config.storage.settings_file;
        if file.is_absolute() {
            file.clone()
        } else {
            self.workspace.join(file)
        }
    }
}
