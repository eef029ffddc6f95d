use anyhow::{Context, Result};
use pagesmith_core::campaign::{CampaignConfig, CampaignDraft};
use pagesmith_core::config::CampaignDefaults;
use std::fs;
use std::path::Path;

/// Read a campaign draft from a TOML or JSON file and validate it.
///
/// Enumerated fields left empty take the configured defaults.
pub fn load_campaign(path: &Path, defaults: &CampaignDefaults) -> Result<CampaignConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read campaign file: {}", path.display()))?;

    let mut draft = parse_draft(path, &content)?;
    draft.fill_defaults(
        defaults.funnel_stage,
        defaults.copywriting_strategy,
        defaults.brand_voice,
    );

    draft
        .finalize()
        .with_context(|| format!("Invalid campaign in {}", path.display()))
}

fn parse_draft(path: &Path, content: &str) -> Result<CampaignDraft> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(content)
            .with_context(|| format!("Failed to parse campaign JSON: {}", path.display()))
    } else {
        toml::from_str(content)
            .with_context(|| format!("Failed to parse campaign TOML: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesmith_core::campaign::{BrandVoice, FunnelStage};
    use tempfile::TempDir;

    #[test]
    fn toml_campaign_takes_configured_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("campaign.toml");
        fs::write(
            &path,
            r#"
target_audience = "Freelance designers"
product_offer = "Invoicing app"
campaign_goal = "Drive trial signups"
"#,
        )
        .expect("write campaign");

        let defaults = CampaignDefaults {
            funnel_stage: FunnelStage::Awareness,
            brand_voice: BrandVoice::Friendly,
            ..Default::default()
        };
        let config = load_campaign(&path, &defaults).expect("valid campaign");
        assert_eq!(config.funnel_stage, FunnelStage::Awareness);
        assert_eq!(config.brand_voice, BrandVoice::Friendly);
    }

    #[test]
    fn json_campaign_accepts_camel_case() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("campaign.json");
        fs::write(
            &path,
            r#"{"targetAudience":"Clinics","productOffer":"Booking tool","funnelStage":"consideration","campaignGoal":"Book demos"}"#,
        )
        .expect("write campaign");

        let config = load_campaign(&path, &CampaignDefaults::default()).expect("valid campaign");
        assert_eq!(config.funnel_stage, FunnelStage::Consideration);
        assert_eq!(config.target_audience, "Clinics");
    }

    #[test]
    fn missing_required_field_is_reported() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("campaign.toml");
        fs::write(&path, "target_audience = \"Clinics\"\n").expect("write campaign");

        let err = load_campaign(&path, &CampaignDefaults::default()).expect_err("must fail");
        assert!(format!("{err:#}").contains("productOffer"));
    }
}
