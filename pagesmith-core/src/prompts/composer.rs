use super::guidelines::GuidelineSet;
use super::sections::{CTA_OPTIONS_PLACEHOLDER, PRIMARY_CTA_PLACEHOLDER, SectionKind};
use crate::campaign::CampaignConfig;

const NOT_SPECIFIED: &str = "Not specified";

/// Builds section prompts for one campaign
pub struct PromptComposer<'a> {
    config: &'a CampaignConfig,
    guidelines: &'static GuidelineSet,
    strategy_guidance: &'static str,
}

impl<'a> PromptComposer<'a> {
    pub fn new(config: &'a CampaignConfig) -> Self {
        Self {
            config,
            guidelines: config.funnel_stage.guidelines(),
            strategy_guidance: config.copywriting_strategy.guidance(),
        }
    }

    /// Guidelines resolved for the campaign's funnel stage
    pub fn guidelines(&self) -> &'static GuidelineSet {
        self.guidelines
    }

    /// Compose the complete prompt for one section
    pub fn compose(&self, kind: SectionKind) -> String {
        let template = kind.template();
        let mut prompt_parts = Vec::with_capacity(7);

        prompt_parts.push(format!(
            "You are an expert conversion copywriter writing the {} section of a landing page.",
            kind.label()
        ));
        prompt_parts.push(self.campaign_block());
        prompt_parts.push(self.funnel_block());
        prompt_parts.push(format!(
            "COPYWRITING STRATEGY ({}):\n{}",
            self.config.copywriting_strategy, self.strategy_guidance
        ));
        prompt_parts.push(format!("TASK:\n{}", template.task));

        let mut rules: Vec<String> = template
            .requirements
            .iter()
            .map(|rule| self.fill_placeholders(rule))
            .collect();
        rules.push(format!(
            "Write in a {} brand voice throughout.",
            self.config.brand_voice
        ));
        rules.push("Return only valid JSON, with no markdown fences or commentary.".to_string());
        let numbered = rules
            .iter()
            .enumerate()
            .map(|(index, rule)| format!("{}. {rule}", index + 1))
            .collect::<Vec<_>>()
            .join("\n");
        prompt_parts.push(format!("REQUIREMENTS:\n{numbered}"));

        prompt_parts.push(format!(
            "Respond with JSON in exactly this format:\n{}",
            self.fill_placeholders(template.example)
        ));

        tracing::debug!(
            section = %kind,
            stage = %self.config.funnel_stage,
            "composed section prompt"
        );
        prompt_parts.join("\n\n")
    }

    fn campaign_block(&self) -> String {
        let config = self.config;
        let benefits = config.key_benefit_list();
        let benefits = if benefits.is_empty() {
            NOT_SPECIFIED.to_string()
        } else {
            benefits.join("; ")
        };
        let pain_points = config
            .pain_points
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .unwrap_or(NOT_SPECIFIED);

        format!(
            "CAMPAIGN DETAILS:\n\
             - Target audience: {}\n\
             - Product/offer: {}\n\
             - Campaign goal: {}\n\
             - Funnel stage: {}\n\
             - Key benefits: {benefits}\n\
             - Pain points: {pain_points}\n\
             - Brand voice: {}",
            config.target_audience,
            config.product_offer,
            config.campaign_goal,
            config.funnel_stage,
            config.brand_voice,
        )
    }

    fn funnel_block(&self) -> String {
        let guidelines = self.guidelines;
        format!(
            "FUNNEL GUIDELINES:\n\
             - Focus: {}\n\
             - Tone: {}\n\
             - Call-to-action options: {}\n\
             - Content length: {}",
            guidelines.focus, guidelines.tone, guidelines.cta, guidelines.length
        )
    }

    fn fill_placeholders(&self, text: &str) -> String {
        text.replace(PRIMARY_CTA_PLACEHOLDER, self.guidelines.primary_cta())
            .replace(CTA_OPTIONS_PLACEHOLDER, self.guidelines.cta)
    }
}

/// Compose the prompt for `kind` from a campaign configuration
pub fn compose(kind: SectionKind, config: &CampaignConfig) -> String {
    PromptComposer::new(config).compose(kind)
}

/// Compose every section prompt in page order
pub fn compose_all(config: &CampaignConfig) -> Vec<(SectionKind, String)> {
    let composer = PromptComposer::new(config);
    SectionKind::ALL
        .iter()
        .map(|kind| (*kind, composer.compose(*kind)))
        .collect()
}

pub fn compose_hero_prompt(config: &CampaignConfig) -> String {
    compose(SectionKind::Hero, config)
}

pub fn compose_features_prompt(config: &CampaignConfig) -> String {
    compose(SectionKind::Features, config)
}

pub fn compose_how_it_works_prompt(config: &CampaignConfig) -> String {
    compose(SectionKind::HowItWorks, config)
}

pub fn compose_testimonials_prompt(config: &CampaignConfig) -> String {
    compose(SectionKind::Testimonials, config)
}

pub fn compose_faq_prompt(config: &CampaignConfig) -> String {
    compose(SectionKind::Faq, config)
}

pub fn compose_comparison_prompt(config: &CampaignConfig) -> String {
    compose(SectionKind::Comparison, config)
}

pub fn compose_cta_prompt(config: &CampaignConfig) -> String {
    compose(SectionKind::Cta, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::{BrandVoice, FunnelStage};

    fn sample_config() -> CampaignConfig {
        CampaignConfig::new(
            "Independent bakery owners",
            "Inventory planning app",
            "Start a free trial",
        )
        .with_brand_voice(BrandVoice::Friendly)
        .with_key_benefits("Less waste\nFewer stockouts")
    }

    #[test]
    fn prompt_lists_campaign_and_guidance() {
        let prompt = compose_hero_prompt(&sample_config());
        assert!(prompt.contains("- Target audience: Independent bakery owners"));
        assert!(prompt.contains("- Key benefits: Less waste; Fewer stockouts"));
        assert!(prompt.contains("- Pain points: Not specified"));
        assert!(prompt.contains("Write in a friendly brand voice throughout."));
        assert!(prompt.contains(FunnelStage::Conversion.guidelines().focus));
    }

    #[test]
    fn cta_placeholders_are_filled() {
        let config = sample_config().with_funnel_stage(FunnelStage::Retention);
        let prompt = compose_cta_prompt(&config);
        assert!(!prompt.contains(PRIMARY_CTA_PLACEHOLDER));
        assert!(!prompt.contains(CTA_OPTIONS_PLACEHOLDER));
        assert!(prompt.contains("\"cta\": \"Upgrade Now\""));
        assert!(prompt.contains("use \"Upgrade Now\" unless"));
    }

    #[test]
    fn rules_are_numbered_sequentially() {
        let prompt = compose_faq_prompt(&sample_config());
        let rule_count = SectionKind::Faq.template().requirements.len() + 2;
        assert!(prompt.contains(&format!("{rule_count}. Return only valid JSON")));
    }

    #[test]
    fn empty_required_fields_still_render() {
        let config = CampaignConfig::new("", "", "");
        let prompt = compose_features_prompt(&config);
        assert!(prompt.contains("- Target audience: \n"));
        assert!(prompt.ends_with('}'));
    }

    #[test]
    fn compose_all_covers_every_section_in_order() {
        let prompts = compose_all(&sample_config());
        let kinds: Vec<SectionKind> = prompts.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(kinds, SectionKind::ALL.to_vec());
        assert_eq!(prompts[2].1, compose_how_it_works_prompt(&sample_config()));
    }
}
