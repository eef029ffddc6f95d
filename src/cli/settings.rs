use crate::cli::SettingsCommands;
use anyhow::{Context, Result};
use console::style;
use pagesmith_core::config::ConfigManager;
use pagesmith_core::settings::{ApiKeySource, SettingsManager, mask_api_key};
use pagesmith_core::storage::JsonFileStore;

/// Handle the settings command
pub fn handle_settings_command(manager: &ConfigManager, action: SettingsCommands) -> Result<()> {
    let settings_file = manager.settings_file();
    let store = JsonFileStore::open(&settings_file)
        .with_context(|| format!("Failed to open settings: {}", settings_file.display()))?;
    let ai = &manager.config().ai;
    let settings = SettingsManager::new(store)
        .with_fallback_provider(ai.provider)
        .with_fallback_model(ai.model.clone());

    match action {
        SettingsCommands::Show => {
            let snapshot = settings.snapshot()?;
            println!("{}", style("AI settings").blue().bold());
            println!("Provider:  {}", snapshot.provider);
            println!("Model:     {}", snapshot.model);
            match settings.resolve_api_key()? {
                Some((key, ApiKeySource::Environment(var))) => {
                    println!("API key:   {} (from {var})", mask_api_key(&key));
                }
                Some((key, ApiKeySource::Store)) => {
                    println!("API key:   {} (stored)", mask_api_key(&key));
                }
                None => println!("API key:   {}", style("not set").yellow()),
            }
            println!("Store:     {}", settings.store().path().display());
        }
        SettingsCommands::SetApiKey { key } => {
            settings.set_api_key(&key)?;
            println!("{} API key saved", style("ok").green().bold());
        }
        SettingsCommands::ClearApiKey => {
            if settings.clear_api_key()? {
                println!("{} API key removed", style("ok").green().bold());
            } else {
                println!("No stored API key");
            }
        }
        SettingsCommands::SetProvider { provider } => {
            settings.set_provider(provider)?;
            println!(
                "{} provider set to {provider} (model {})",
                style("ok").green().bold(),
                settings.model()?
            );
        }
        SettingsCommands::SetModel { model } => {
            settings.set_model(&model)?;
            println!("{} model set to {}", style("ok").green().bold(), model.trim());
        }
    }
    Ok(())
}
