//! Contract tests for the section prompts and their embedded JSON examples

use pagesmith_core::campaign::{BrandVoice, CampaignConfig, CopywritingStrategy, FunnelStage};
use pagesmith_core::prompts::response::{
    ComparisonContent, HowItWorksContent, TestimonialsContent,
};
use pagesmith_core::prompts::{
    SectionContent, SectionKind, compose, compose_all, compose_comparison_prompt,
    compose_hero_prompt, compose_how_it_works_prompt, compose_testimonials_prompt,
    parse_section_response,
};

const FORMAT_MARKER: &str = "Respond with JSON in exactly this format:\n";

fn sample_campaign() -> CampaignConfig {
    CampaignConfig::new(
        "Independent fitness coaches",
        "CoachBook scheduling platform",
        "Get coaches to start a free trial",
    )
    .with_funnel_stage(FunnelStage::Conversion)
    .with_strategy(CopywritingStrategy::ProblemSolution)
    .with_brand_voice(BrandVoice::Friendly)
    .with_key_benefits("Automated reminders\nOnline payments, Client progress tracking")
    .with_pain_points("No-shows and chasing invoices")
}

fn example_json(prompt: &str) -> &str {
    let (_, example) = prompt
        .split_once(FORMAT_MARKER)
        .expect("prompt ends with the JSON format block");
    example
}

#[test]
fn test_hero_prompt_carries_campaign_and_length_limits() {
    let campaign = sample_campaign();
    let prompt = compose_hero_prompt(&campaign);

    assert!(prompt.contains("Independent fitness coaches"));
    assert!(prompt.contains("CoachBook scheduling platform"));
    assert!(prompt.contains("Get coaches to start a free trial"));
    assert!(prompt.contains("friendly"));
    assert!(prompt.contains("8 words"));
    assert!(prompt.contains("12-15 words"));
    assert!(prompt.contains("25-35 words"));
}

#[test]
fn test_hero_prompt_uses_conversion_call_to_action() {
    let prompt = compose_hero_prompt(&sample_campaign());
    assert!(prompt.contains("\"cta\": \"Get Started\""));
    assert!(!prompt.contains("{primary_cta}"));
    assert!(!prompt.contains("{cta_options}"));
}

#[test]
fn test_how_it_works_prompt_specifies_three_steps() {
    let prompt = compose_how_it_works_prompt(&sample_campaign());
    assert!(prompt.contains("exactly 3 steps"));
    assert!(prompt.matches("18-22 words").count() >= 3);

    let content: HowItWorksContent =
        serde_json::from_str(example_json(&prompt)).expect("example parses");
    let numbers: Vec<u32> = content.steps.iter().map(|step| step.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn test_comparison_example_has_two_competitors_and_enough_rows() {
    let prompt = compose_comparison_prompt(&sample_campaign());
    let content: ComparisonContent =
        serde_json::from_str(example_json(&prompt)).expect("example parses");

    assert_eq!(content.competitors.len(), 2);
    assert!((5..=6).contains(&content.features.len()));
    assert_eq!(content.highlight_column, "ourProduct");
}

#[test]
fn test_testimonials_example_uses_five_star_ratings() {
    let prompt = compose_testimonials_prompt(&sample_campaign());
    let content: TestimonialsContent =
        serde_json::from_str(example_json(&prompt)).expect("example parses");

    assert_eq!(content.testimonials.len(), 3);
    assert!(content.testimonials.iter().all(|t| t.rating == 5));
}

#[test]
fn test_every_example_parses_into_its_section_record() {
    let campaign = sample_campaign();
    for (kind, prompt) in compose_all(&campaign) {
        let content = parse_section_response(kind, example_json(&prompt))
            .unwrap_or_else(|err| panic!("{kind} example failed to parse: {err}"));
        assert_eq!(content.kind(), kind);

        // Example strings describe their length instead of meeting it, so only
        // word-range findings are expected here.
        let issues = content.structural_issues();
        assert!(
            issues.iter().all(|issue| issue.contains(" words, expected ")),
            "{kind} example has structural issues: {issues:?}"
        );
    }
}

#[test]
fn test_composition_is_deterministic() {
    let campaign = sample_campaign();
    for kind in SectionKind::ALL {
        assert_eq!(compose(kind, &campaign), compose(kind, &campaign));
    }
}

#[test]
fn test_funnel_stage_changes_call_to_action_vocabulary() {
    let awareness = sample_campaign().with_funnel_stage(FunnelStage::Awareness);
    let prompt = compose(SectionKind::Cta, &awareness);
    assert!(prompt.contains("\"cta\": \"Learn More\""));
}

#[test]
fn test_fenced_response_is_accepted() {
    let raw = "```json\n{\"headline\":\"Ready when you are\",\"body\":\"Short body\",\"cta\":\"Get Started\"}\n```";
    let content = parse_section_response(SectionKind::Cta, raw).expect("fenced JSON parses");
    match content {
        SectionContent::Cta(cta) => assert_eq!(cta.cta, "Get Started"),
        other => panic!("unexpected section: {other:?}"),
    }
}

#[test]
fn test_oversized_headline_is_reported_for_short_headline_sections() {
    let campaign = sample_campaign();
    let headline = "Every single word of this headline keeps going long after a visitor \
                    has already stopped reading it twice";
    for kind in [
        SectionKind::HowItWorks,
        SectionKind::Testimonials,
        SectionKind::Faq,
        SectionKind::Comparison,
    ] {
        let prompt = compose(kind, &campaign);
        let mut example: serde_json::Value =
            serde_json::from_str(example_json(&prompt)).expect("example parses");
        example["headline"] = serde_json::Value::String(headline.to_string());

        let content = parse_section_response(kind, &example.to_string())
            .unwrap_or_else(|err| panic!("{kind} response failed to parse: {err}"));
        let issues = content.structural_issues();
        assert!(
            issues.contains(&"headline has 18 words, expected 4-6".to_string()),
            "{kind} missed the oversized headline: {issues:?}"
        );
    }
}
