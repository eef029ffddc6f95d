use super::CampaignError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marketing lifecycle phase the page is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunnelStage {
    Awareness,
    Consideration,
    #[default]
    Conversion,
    Retention,
}

impl FunnelStage {
    pub const ALL: [FunnelStage; 4] = [
        FunnelStage::Awareness,
        FunnelStage::Consideration,
        FunnelStage::Conversion,
        FunnelStage::Retention,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FunnelStage::Awareness => "awareness",
            FunnelStage::Consideration => "consideration",
            FunnelStage::Conversion => "conversion",
            FunnelStage::Retention => "retention",
        }
    }
}

impl fmt::Display for FunnelStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FunnelStage {
    type Err = CampaignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "awareness" => Ok(FunnelStage::Awareness),
            "consideration" => Ok(FunnelStage::Consideration),
            "conversion" => Ok(FunnelStage::Conversion),
            "retention" => Ok(FunnelStage::Retention),
            _ => Err(CampaignError::UnknownFunnelStage(s.to_string())),
        }
    }
}

/// Rhetorical approach used to frame benefits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CopywritingStrategy {
    #[default]
    DirectResponse,
    StoryDriven,
    ProblemSolution,
    BenefitFocused,
    SocialProof,
}

impl CopywritingStrategy {
    pub const ALL: [CopywritingStrategy; 5] = [
        CopywritingStrategy::DirectResponse,
        CopywritingStrategy::StoryDriven,
        CopywritingStrategy::ProblemSolution,
        CopywritingStrategy::BenefitFocused,
        CopywritingStrategy::SocialProof,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CopywritingStrategy::DirectResponse => "direct-response",
            CopywritingStrategy::StoryDriven => "story-driven",
            CopywritingStrategy::ProblemSolution => "problem-solution",
            CopywritingStrategy::BenefitFocused => "benefit-focused",
            CopywritingStrategy::SocialProof => "social-proof",
        }
    }
}

impl fmt::Display for CopywritingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CopywritingStrategy {
    type Err = CampaignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "direct-response" => Ok(CopywritingStrategy::DirectResponse),
            "story-driven" => Ok(CopywritingStrategy::StoryDriven),
            "problem-solution" => Ok(CopywritingStrategy::ProblemSolution),
            "benefit-focused" => Ok(CopywritingStrategy::BenefitFocused),
            "social-proof" => Ok(CopywritingStrategy::SocialProof),
            _ => Err(CampaignError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Voice the generated copy should speak in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandVoice {
    #[default]
    Professional,
    Friendly,
    Urgent,
    Casual,
    Authoritative,
}

impl BrandVoice {
    pub const ALL: [BrandVoice; 5] = [
        BrandVoice::Professional,
        BrandVoice::Friendly,
        BrandVoice::Urgent,
        BrandVoice::Casual,
        BrandVoice::Authoritative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BrandVoice::Professional => "professional",
            BrandVoice::Friendly => "friendly",
            BrandVoice::Urgent => "urgent",
            BrandVoice::Casual => "casual",
            BrandVoice::Authoritative => "authoritative",
        }
    }
}

impl fmt::Display for BrandVoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrandVoice {
    type Err = CampaignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "professional" => Ok(BrandVoice::Professional),
            "friendly" => Ok(BrandVoice::Friendly),
            "urgent" => Ok(BrandVoice::Urgent),
            "casual" => Ok(BrandVoice::Casual),
            "authoritative" => Ok(BrandVoice::Authoritative),
            _ => Err(CampaignError::UnknownBrandVoice(s.to_string())),
        }
    }
}

/// Validated campaign configuration handed to the prompt composer.
///
/// Construct through [`super::CampaignDraft::finalize`] when the values come
/// from user input. Building the struct directly skips the required-field
/// gate, and the composer will render whatever it is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignConfig {
    pub target_audience: String,
    pub product_offer: String,
    #[serde(default)]
    pub funnel_stage: FunnelStage,
    pub campaign_goal: String,
    #[serde(default)]
    pub key_benefits: Option<String>,
    #[serde(default)]
    pub pain_points: Option<String>,
    #[serde(default)]
    pub copywriting_strategy: CopywritingStrategy,
    #[serde(default)]
    pub brand_voice: BrandVoice,
}

impl CampaignConfig {
    /// Create a config with the required fields and default enums
    pub fn new(
        target_audience: impl Into<String>,
        product_offer: impl Into<String>,
        campaign_goal: impl Into<String>,
    ) -> Self {
        Self {
            target_audience: target_audience.into(),
            product_offer: product_offer.into(),
            funnel_stage: FunnelStage::default(),
            campaign_goal: campaign_goal.into(),
            key_benefits: None,
            pain_points: None,
            copywriting_strategy: CopywritingStrategy::default(),
            brand_voice: BrandVoice::default(),
        }
    }

    pub fn with_funnel_stage(mut self, stage: FunnelStage) -> Self {
        self.funnel_stage = stage;
        self
    }

    pub fn with_strategy(mut self, strategy: CopywritingStrategy) -> Self {
        self.copywriting_strategy = strategy;
        self
    }

    pub fn with_brand_voice(mut self, voice: BrandVoice) -> Self {
        self.brand_voice = voice;
        self
    }

    pub fn with_key_benefits(mut self, benefits: impl Into<String>) -> Self {
        self.key_benefits = Some(benefits.into());
        self
    }

    pub fn with_pain_points(mut self, pain_points: impl Into<String>) -> Self {
        self.pain_points = Some(pain_points.into());
        self
    }

    /// Check the required free-text fields are filled in.
    ///
    /// The funnel stage is the fourth required field; the typed enum makes it
    /// always present here.
    pub fn validate(&self) -> Result<(), CampaignError> {
        let required = [
            ("targetAudience", &self.target_audience),
            ("productOffer", &self.product_offer),
            ("campaignGoal", &self.campaign_goal),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CampaignError::MissingField(field));
            }
        }
        Ok(())
    }

    /// Benefit statements split on newlines and commas, blanks dropped
    pub fn key_benefit_list(&self) -> Vec<&str> {
        self.key_benefits
            .as_deref()
            .map(|text| {
                text.split(['\n', ','])
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_parse_their_wire_names() {
        for stage in FunnelStage::ALL {
            assert_eq!(stage.as_str().parse::<FunnelStage>().ok(), Some(stage));
        }
        for strategy in CopywritingStrategy::ALL {
            assert_eq!(
                strategy.as_str().parse::<CopywritingStrategy>().ok(),
                Some(strategy)
            );
        }
        for voice in BrandVoice::ALL {
            assert_eq!(voice.as_str().parse::<BrandVoice>().ok(), Some(voice));
        }
    }

    #[test]
    fn unknown_enum_values_are_rejected() {
        assert!(matches!(
            "evangelism".parse::<FunnelStage>(),
            Err(CampaignError::UnknownFunnelStage(_))
        ));
        assert!(matches!(
            "clickbait".parse::<CopywritingStrategy>(),
            Err(CampaignError::UnknownStrategy(_))
        ));
        assert!(matches!(
            "sarcastic".parse::<BrandVoice>(),
            Err(CampaignError::UnknownBrandVoice(_))
        ));
    }

    #[test]
    fn defaults_match_documented_values() {
        assert_eq!(FunnelStage::default(), FunnelStage::Conversion);
        assert_eq!(
            CopywritingStrategy::default(),
            CopywritingStrategy::DirectResponse
        );
        assert_eq!(BrandVoice::default(), BrandVoice::Professional);
    }

    #[test]
    fn key_benefits_split_on_newlines_and_commas() {
        let config = CampaignConfig::new("founders", "analytics", "sign up")
            .with_key_benefits("Saves time, cuts costs\n\nReal-time dashboards,");
        assert_eq!(
            config.key_benefit_list(),
            vec!["Saves time", "cuts costs", "Real-time dashboards"]
        );
    }

    #[test]
    fn validate_reports_first_missing_field() {
        let config = CampaignConfig::new("founders", "  ", "");
        assert!(matches!(
            config.validate(),
            Err(CampaignError::MissingField("productOffer"))
        ));
    }

    #[test]
    fn serde_uses_kebab_and_camel_case() {
        let config =
            CampaignConfig::new("a", "b", "c").with_strategy(CopywritingStrategy::SocialProof);
        let json = serde_json::to_value(&config).expect("serialize config");
        assert_eq!(json["copywritingStrategy"], "social-proof");
        assert_eq!(json["funnelStage"], "conversion");
        assert_eq!(json["targetAudience"], "a");
    }
}
