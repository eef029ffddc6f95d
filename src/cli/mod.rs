//! Command-line interface module
//!
//! This module handles all CLI argument parsing and command definitions.

pub mod args;
pub mod campaign;
pub mod check;
pub mod init;
pub mod prompt;
pub mod settings;
pub mod themes;

pub use args::*;
pub use check::handle_check_command;
pub use init::handle_init_command;
pub use prompt::{handle_prompt_command, handle_prompts_command};
pub use settings::handle_settings_command;
pub use themes::handle_themes_command;
