//! Wizard draft validation

use pagesmith_core::campaign::{
    BrandVoice, CampaignDraft, CampaignError, CopywritingStrategy, FunnelStage, WizardStep,
};

fn complete_draft() -> CampaignDraft {
    CampaignDraft {
        target_audience: Some("Small bakery owners".to_string()),
        product_offer: Some("Online ordering widget".to_string()),
        funnel_stage: Some("consideration".to_string()),
        campaign_goal: Some("Book a product demo".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_complete_draft_finalizes_with_defaults() {
    let config = complete_draft().finalize().expect("draft is complete");
    assert_eq!(config.funnel_stage, FunnelStage::Consideration);
    assert_eq!(config.copywriting_strategy, CopywritingStrategy::default());
    assert_eq!(config.brand_voice, BrandVoice::default());
}

#[test]
fn test_blank_required_fields_block_each_step() {
    let mut draft = complete_draft();
    draft.product_offer = Some("   ".to_string());
    draft.funnel_stage = None;

    assert_eq!(
        draft.missing_fields(WizardStep::AudienceAndOffer),
        vec!["productOffer"]
    );
    assert!(draft.missing_fields(WizardStep::FunnelAndGoal).is_empty());
    assert!(draft.can_advance(WizardStep::Messaging));
    assert_eq!(
        draft.finalize(),
        Err(CampaignError::MissingField("productOffer"))
    );
}

#[test]
fn test_unknown_enum_values_are_rejected() {
    let mut draft = complete_draft();
    draft.funnel_stage = Some("viral".to_string());
    assert_eq!(
        draft.finalize(),
        Err(CampaignError::UnknownFunnelStage("viral".to_string()))
    );

    let mut draft = complete_draft();
    draft.brand_voice = Some("sarcastic".to_string());
    assert_eq!(
        draft.finalize(),
        Err(CampaignError::UnknownBrandVoice("sarcastic".to_string()))
    );
}

#[test]
fn test_free_text_fields_alone_finalize_with_conversion_stage() {
    let draft = CampaignDraft {
        target_audience: Some("Small bakery owners".to_string()),
        product_offer: Some("Online ordering widget".to_string()),
        campaign_goal: Some("Book a product demo".to_string()),
        ..Default::default()
    };
    let config = draft.finalize().expect("funnel stage defaults");
    assert_eq!(config.funnel_stage, FunnelStage::Conversion);
}
