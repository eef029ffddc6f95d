//! AI provider settings panel
//!
//! Provider, model and API key are kept in an injected [`KeyValueStore`].
//! API keys are resolved with environment variables taking priority over the
//! stored value, so a key exported in the shell or a `.env` file always wins.

use crate::config::constants::{defaults, env, storage_keys};
use crate::storage::{KeyValueStore, StoreError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text generation providers the hosting application can send prompts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    OpenAi,
    Anthropic,
    Gemini,
}

impl AiProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AiProvider::OpenAi => "openai",
            AiProvider::Anthropic => "anthropic",
            AiProvider::Gemini => "gemini",
        }
    }

    /// Environment variable checked before the stored key
    pub fn api_key_env(&self) -> &'static str {
        match self {
            AiProvider::OpenAi => env::OPENAI_API_KEY,
            AiProvider::Anthropic => env::ANTHROPIC_API_KEY,
            AiProvider::Gemini => env::GEMINI_API_KEY,
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            AiProvider::OpenAi => defaults::OPENAI_MODEL,
            AiProvider::Anthropic => defaults::ANTHROPIC_MODEL,
            AiProvider::Gemini => defaults::GEMINI_MODEL,
        }
    }
}

impl fmt::Display for AiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported provider: {0}")]
pub struct UnknownProvider(pub String);

impl FromStr for AiProvider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(AiProvider::OpenAi),
            "anthropic" => Ok(AiProvider::Anthropic),
            "gemini" | "google" => Ok(AiProvider::Gemini),
            _ => Err(UnknownProvider(s.to_string())),
        }
    }
}

/// Where a resolved API key came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeySource {
    Environment(&'static str),
    Store,
}

/// Snapshot of the settings panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AiSettings {
    pub provider: AiProvider,
    pub model: String,
    /// Masked key for display; the raw key is never part of the snapshot
    pub api_key: Option<String>,
}

/// Load environment variables from a .env file.
///
/// A missing file is fine; a malformed one is logged and ignored.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded environment variables"),
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!("Failed to load .env file: {e}"),
    }
}

/// Mask all but the last four characters of a key
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{visible}", "*".repeat(chars.len() - 4))
}

/// Reads an environment variable, `None` when unset
pub type EnvLookup = fn(&str) -> Option<String>;

fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

pub struct SettingsManager<S: KeyValueStore> {
    store: S,
    fallback_provider: AiProvider,
    fallback_model: Option<String>,
    env_lookup: EnvLookup,
}

impl<S: KeyValueStore> SettingsManager<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            fallback_provider: AiProvider::default(),
            fallback_model: None,
            env_lookup: process_env,
        }
    }

    /// Provider used when nothing is stored yet
    pub fn with_fallback_provider(mut self, provider: AiProvider) -> Self {
        self.fallback_provider = provider;
        self
    }

    /// Model used for the fallback provider when nothing is stored yet
    pub fn with_fallback_model(mut self, model: Option<String>) -> Self {
        self.fallback_model = model.filter(|m| !m.trim().is_empty());
        self
    }

    /// Replace the process environment as the source of provider keys
    pub fn with_env_lookup(mut self, lookup: EnvLookup) -> Self {
        self.env_lookup = lookup;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn provider(&self) -> Result<AiProvider, StoreError> {
        let stored = self.store.get(storage_keys::PROVIDER)?;
        Ok(match stored.as_deref().map(str::parse::<AiProvider>) {
            Some(Ok(provider)) => provider,
            Some(Err(err)) => {
                tracing::warn!("{err}; using {}", self.fallback_provider);
                self.fallback_provider
            }
            None => self.fallback_provider,
        })
    }

    /// Switch provider. The stored model is cleared because model names are
    /// provider specific.
    pub fn set_provider(&self, provider: AiProvider) -> Result<(), StoreError> {
        self.store.set(storage_keys::PROVIDER, provider.as_str())?;
        self.store.delete(storage_keys::MODEL)?;
        tracing::info!(%provider, "AI provider updated");
        Ok(())
    }

    pub fn model(&self) -> Result<String, StoreError> {
        if let Some(model) = self.store.get(storage_keys::MODEL)? {
            if !model.trim().is_empty() {
                return Ok(model);
            }
        }
        let provider = self.provider()?;
        match &self.fallback_model {
            Some(model) if provider == self.fallback_provider => Ok(model.clone()),
            _ => Ok(provider.default_model().to_string()),
        }
    }

    pub fn set_model(&self, model: &str) -> Result<(), StoreError> {
        self.store.set(storage_keys::MODEL, model.trim())
    }

    pub fn set_api_key(&self, key: &str) -> Result<(), StoreError> {
        self.store.set(storage_keys::API_KEY, key.trim())?;
        tracing::info!("API key saved");
        Ok(())
    }

    /// Remove the stored key; returns whether one was present
    pub fn clear_api_key(&self) -> Result<bool, StoreError> {
        let removed = self.store.delete(storage_keys::API_KEY)?;
        if removed {
            tracing::info!("API key removed");
        }
        Ok(removed)
    }

    /// Resolve the API key for the current provider.
    ///
    /// Checks the provider's environment variable first, then the store.
    pub fn resolve_api_key(&self) -> Result<Option<(String, ApiKeySource)>, StoreError> {
        let provider = self.provider()?;
        let env_var = provider.api_key_env();
        if let Some(key) = (self.env_lookup)(env_var) {
            if !key.trim().is_empty() {
                return Ok(Some((key, ApiKeySource::Environment(env_var))));
            }
        }

        Ok(self
            .store
            .get(storage_keys::API_KEY)?
            .filter(|key| !key.trim().is_empty())
            .map(|key| (key, ApiKeySource::Store)))
    }

    pub fn snapshot(&self) -> Result<AiSettings, StoreError> {
        Ok(AiSettings {
            provider: self.provider()?,
            model: self.model()?,
            api_key: self
                .resolve_api_key()?
                .map(|(key, _)| mask_api_key(&key)),
        })
    }
}
