use super::{BrandVoice, CampaignConfig, CampaignError, CopywritingStrategy, FunnelStage};
use serde::{Deserialize, Serialize};

/// Steps of the campaign setup wizard, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStep {
    AudienceAndOffer,
    FunnelAndGoal,
    Messaging,
    StrategyAndVoice,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::AudienceAndOffer,
        WizardStep::FunnelAndGoal,
        WizardStep::Messaging,
        WizardStep::StrategyAndVoice,
    ];

    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::AudienceAndOffer => Some(WizardStep::FunnelAndGoal),
            WizardStep::FunnelAndGoal => Some(WizardStep::Messaging),
            WizardStep::Messaging => Some(WizardStep::StrategyAndVoice),
            WizardStep::StrategyAndVoice => None,
        }
    }
}

/// Raw wizard input. Every field is optional text until [`finalize`] runs.
///
/// [`finalize`]: CampaignDraft::finalize
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignDraft {
    #[serde(alias = "targetAudience")]
    pub target_audience: Option<String>,
    #[serde(alias = "productOffer")]
    pub product_offer: Option<String>,
    #[serde(alias = "funnelStage")]
    pub funnel_stage: Option<String>,
    #[serde(alias = "campaignGoal")]
    pub campaign_goal: Option<String>,
    #[serde(alias = "keyBenefits")]
    pub key_benefits: Option<String>,
    #[serde(alias = "painPoints")]
    pub pain_points: Option<String>,
    #[serde(alias = "copywritingStrategy")]
    pub copywriting_strategy: Option<String>,
    #[serde(alias = "brandVoice")]
    pub brand_voice: Option<String>,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

impl CampaignDraft {
    /// Fill the enumerated fields the user left empty
    pub fn fill_defaults(
        &mut self,
        stage: FunnelStage,
        strategy: CopywritingStrategy,
        voice: BrandVoice,
    ) {
        if is_blank(&self.funnel_stage) {
            self.funnel_stage = Some(stage.as_str().to_string());
        }
        if is_blank(&self.copywriting_strategy) {
            self.copywriting_strategy = Some(strategy.as_str().to_string());
        }
        if is_blank(&self.brand_voice) {
            self.brand_voice = Some(voice.as_str().to_string());
        }
    }

    /// Required fields still empty on the given step
    pub fn missing_fields(&self, step: WizardStep) -> Vec<&'static str> {
        let checks: Vec<(&'static str, &Option<String>)> = match step {
            WizardStep::AudienceAndOffer => vec![
                ("targetAudience", &self.target_audience),
                ("productOffer", &self.product_offer),
            ],
            WizardStep::FunnelAndGoal => vec![("campaignGoal", &self.campaign_goal)],
            WizardStep::Messaging | WizardStep::StrategyAndVoice => Vec::new(),
        };

        checks
            .into_iter()
            .filter(|(_, value)| is_blank(value))
            .map(|(name, _)| name)
            .collect()
    }

    /// Whether the wizard may move past `step`
    pub fn can_advance(&self, step: WizardStep) -> bool {
        self.missing_fields(step).is_empty()
    }

    /// Validate the draft into a [`CampaignConfig`].
    ///
    /// Unset funnel stage, strategy and voice take their defaults. Unknown
    /// enum values are rejected here rather than inside the composer.
    pub fn finalize(self) -> Result<CampaignConfig, CampaignError> {
        for step in WizardStep::ALL {
            if let Some(field) = self.missing_fields(step).first() {
                return Err(CampaignError::MissingField(*field));
            }
        }

        let funnel_stage = match non_blank(self.funnel_stage) {
            Some(value) => value.parse::<FunnelStage>()?,
            None => FunnelStage::default(),
        };
        let copywriting_strategy = match non_blank(self.copywriting_strategy) {
            Some(value) => value.parse::<CopywritingStrategy>()?,
            None => CopywritingStrategy::default(),
        };
        let brand_voice = match non_blank(self.brand_voice) {
            Some(value) => value.parse::<BrandVoice>()?,
            None => BrandVoice::default(),
        };

        Ok(CampaignConfig {
            target_audience: non_blank(self.target_audience).unwrap_or_default(),
            product_offer: non_blank(self.product_offer).unwrap_or_default(),
            funnel_stage,
            campaign_goal: non_blank(self.campaign_goal).unwrap_or_default(),
            key_benefits: non_blank(self.key_benefits),
            pain_points: non_blank(self.pain_points),
            copywriting_strategy,
            brand_voice,
        })
    }
}
