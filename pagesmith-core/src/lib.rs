//! # pagesmith-core - Landing page builder runtime
//!
//! `pagesmith-core` turns a marketing campaign description into section-level
//! copywriting prompts and applies a curated visual theme to a landing page.
//!
//! ## Highlights
//!
//! - **Guideline Resolution**: funnel stage and copywriting strategy map to
//!   fixed guideline tables, with conversion and a generic sentence as the
//!   fallbacks for unknown values.
//! - **Prompt Composition**: seven section kinds share one data-driven
//!   template shape; each prompt ends with the exact JSON the model must return.
//! - **Response Schema**: typed records for every section plus a structural
//!   audit of counts and ratings.
//! - **Theme Catalog**: seven ordered themes with brand colors, fonts and
//!   style descriptors, rendered into a CSS custom-property style sheet.
//! - **Configuration-First**: defaults come from `pagesmith.toml`, with names
//!   and environment variables centralized in `config::constants`.
//!
//! ## Architecture Overview
//!
//! - `campaign/`: wizard draft, validated configuration and enumerations.
//! - `prompts/`: guideline tables, section templates, composer and response records.
//! - `themes/`: catalog and style sheet generation.
//! - `page/`: page state store that theme application merges into.
//! - `storage/`: injected key-value store backends.
//! - `settings/`: AI provider, model and API key management.
//! - `config/`: configuration loader and constants.
//!
//! ## Quickstart
//!
//! ```rust,ignore
//! use pagesmith_core::{CampaignConfig, FunnelStage, SectionKind, compose};
//!
//! let campaign = CampaignConfig::new(
//!     "Freelance designers",
//!     "Invoicing app",
//!     "Drive trial signups",
//! )
//! .with_funnel_stage(FunnelStage::Conversion);
//!
//! let prompt = compose(SectionKind::Hero, &campaign);
//! println!("{prompt}");
//! ```

pub mod campaign;
pub mod config;
pub mod page;
pub mod prompts;
pub mod settings;
pub mod storage;
pub mod themes;

pub use campaign::{
    BrandVoice, CampaignConfig, CampaignDraft, CampaignError, CopywritingStrategy, FunnelStage,
    WizardStep,
};
pub use config::{ConfigManager, PagesmithConfig};
pub use page::{BrandSettingsUpdate, InMemoryPageStore, PageState, PageStore, apply_theme};
pub use prompts::{
    GuidelineSet, PromptComposer, SectionContent, SectionKind, compose, compose_all,
    parse_section_response, resolve_funnel_guidelines, resolve_strategy_guidance,
};
pub use settings::{AiProvider, AiSettings, SettingsManager};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
pub use themes::{
    AppliedTheme, BrandSettings, LandingPageTheme, apply_theme_to_page, available_themes,
    get_theme_by_id,
};
