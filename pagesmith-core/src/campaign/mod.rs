//! Campaign configuration collected by the setup wizard
//!
//! [`CampaignDraft`] holds what the user typed, [`CampaignConfig`] is the
//! validated record the prompt composer consumes.

pub mod draft;
pub mod types;

pub use draft::{CampaignDraft, WizardStep};
pub use types::{BrandVoice, CampaignConfig, CopywritingStrategy, FunnelStage};

/// Errors raised while turning wizard input into a [`CampaignConfig`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CampaignError {
    #[error("Required field '{0}' is empty")]
    MissingField(&'static str),
    #[error("Unknown funnel stage: {0}")]
    UnknownFunnelStage(String),
    #[error("Unknown copywriting strategy: {0}")]
    UnknownStrategy(String),
    #[error("Unknown brand voice: {0}")]
    UnknownBrandVoice(String),
}
