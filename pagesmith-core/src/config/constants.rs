/// File and directory names used to locate configuration
pub mod paths {
    pub const CONFIG_FILE_NAME: &str = "pagesmith.toml";
    pub const CONFIG_DIR_NAME: &str = ".pagesmith";
    pub const SETTINGS_FILE: &str = ".pagesmith/settings.json";
}

/// Environment variable names
pub mod env {
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    pub const LOG_FILTER: &str = "PAGESMITH_LOG";
}

/// Keys written to the settings store
pub mod storage_keys {
    pub const PROVIDER: &str = "ai.provider";
    pub const MODEL: &str = "ai.model";
    pub const API_KEY: &str = "ai.api_key";
}

/// Default values shared by config and settings
pub mod defaults {
    pub const OPENAI_MODEL: &str = "gpt-4o-mini";
    pub const ANTHROPIC_MODEL: &str = "claude-3-5-haiku-latest";
    pub const GEMINI_MODEL: &str = "gemini-2.5-flash";
    pub const LOG_LEVEL: &str = "warn";
}
