//! Expected response shapes for each section prompt
//!
//! Field names mirror the example literal embedded at the end of every
//! prompt. Parsing is offered to consumers; the composer never calls it.

use super::guidelines::GuidelineSet;
use super::sections::SectionKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("Response for {kind} section is empty")]
    Empty { kind: SectionKind },
    #[error("Response for {kind} section does not match the expected schema: {source}")]
    Schema {
        kind: SectionKind,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    pub headline: String,
    pub subheadline: String,
    pub body: String,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureItem {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturesContent {
    pub headline: String,
    pub features: Vec<FeatureItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub number: u32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HowItWorksContent {
    pub headline: String,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    pub rating: u8,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialsContent {
    pub headline: String,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqContent {
    pub headline: String,
    pub faqs: Vec<FaqItem>,
}

/// A comparison cell: a check mark or a short phrase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComparisonValue {
    Flag(bool),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub name: String,
    pub our_product: ComparisonValue,
    pub competitor_a: ComparisonValue,
    pub competitor_b: ComparisonValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonContent {
    pub headline: String,
    pub competitors: Vec<String>,
    pub highlight_column: String,
    pub features: Vec<ComparisonRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CtaContent {
    pub headline: String,
    pub body: String,
    pub cta: String,
}

/// Parsed content for any section kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "kebab-case")]
pub enum SectionContent {
    Hero(HeroContent),
    Features(FeaturesContent),
    HowItWorks(HowItWorksContent),
    Testimonials(TestimonialsContent),
    Faq(FaqContent),
    Comparison(ComparisonContent),
    Cta(CtaContent),
}

/// Strip a surrounding markdown code fence if the model added one
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        // Single-line fence: drop an info string such as `json` before the payload
        None => rest
            .find(['{', '['])
            .map_or(rest, |start| &rest[start..]),
    };
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Parse a raw model response for the given section
pub fn parse_section_response(
    kind: SectionKind,
    raw: &str,
) -> Result<SectionContent, ResponseError> {
    let json = strip_code_fence(raw);
    if json.is_empty() {
        return Err(ResponseError::Empty { kind });
    }

    let schema = |source: serde_json::Error| ResponseError::Schema { kind, source };
    let content = match kind {
        SectionKind::Hero => SectionContent::Hero(serde_json::from_str(json).map_err(schema)?),
        SectionKind::Features => {
            SectionContent::Features(serde_json::from_str(json).map_err(schema)?)
        }
        SectionKind::HowItWorks => {
            SectionContent::HowItWorks(serde_json::from_str(json).map_err(schema)?)
        }
        SectionKind::Testimonials => {
            SectionContent::Testimonials(serde_json::from_str(json).map_err(schema)?)
        }
        SectionKind::Faq => SectionContent::Faq(serde_json::from_str(json).map_err(schema)?),
        SectionKind::Comparison => {
            SectionContent::Comparison(serde_json::from_str(json).map_err(schema)?)
        }
        SectionKind::Cta => SectionContent::Cta(serde_json::from_str(json).map_err(schema)?),
    };
    Ok(content)
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

struct IssueCollector {
    issues: Vec<String>,
}

impl IssueCollector {
    fn words(&mut self, field: &str, text: &str, min: usize, max: usize) {
        let count = word_count(text);
        if count < min || count > max {
            self.issues
                .push(format!("{field} has {count} words, expected {min}-{max}"));
        }
    }

    fn present(&mut self, field: &str, text: &str) {
        if text.trim().is_empty() {
            self.issues.push(format!("{field} is empty"));
        }
    }

    fn items(&mut self, field: &str, len: usize, min: usize, max: usize) {
        if len < min || len > max {
            let expected = if min == max {
                min.to_string()
            } else {
                format!("{min}-{max}")
            };
            self.issues
                .push(format!("{field} has {len} items, expected {expected}"));
        }
    }
}

impl SectionContent {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionContent::Hero(_) => SectionKind::Hero,
            SectionContent::Features(_) => SectionKind::Features,
            SectionContent::HowItWorks(_) => SectionKind::HowItWorks,
            SectionContent::Testimonials(_) => SectionKind::Testimonials,
            SectionContent::Faq(_) => SectionKind::Faq,
            SectionContent::Comparison(_) => SectionKind::Comparison,
            SectionContent::Cta(_) => SectionKind::Cta,
        }
    }

    /// Deviations from the counts, word ranges and required fields the
    /// prompt asked for.
    ///
    /// An empty list means the content honors every structural rule.
    pub fn structural_issues(&self) -> Vec<String> {
        let mut check = IssueCollector { issues: Vec::new() };

        match self {
            SectionContent::Hero(hero) => {
                check.words("headline", &hero.headline, 1, 8);
                check.words("subheadline", &hero.subheadline, 12, 15);
                check.words("body", &hero.body, 25, 35);
                check.words("cta", &hero.cta, 2, 3);
            }
            SectionContent::Features(features) => {
                check.words("headline", &features.headline, 4, 6);
                check.items("features", features.features.len(), 3, 3);
                for (index, feature) in features.features.iter().enumerate() {
                    check.words(&format!("features[{index}].title"), &feature.title, 1, 4);
                    check.words(
                        &format!("features[{index}].description"),
                        &feature.description,
                        15,
                        20,
                    );
                    check.present(
                        &format!("features[{index}].icon"),
                        feature.icon.as_deref().unwrap_or_default(),
                    );
                }
            }
            SectionContent::HowItWorks(how) => {
                check.words("headline", &how.headline, 4, 6);
                check.items("steps", how.steps.len(), 3, 3);
                for (index, step) in how.steps.iter().enumerate() {
                    let expected = index as u32 + 1;
                    if step.number != expected {
                        check.issues.push(format!(
                            "steps[{index}].number is {}, expected {expected}",
                            step.number
                        ));
                    }
                    check.words(&format!("steps[{index}].title"), &step.title, 1, 4);
                    check.words(
                        &format!("steps[{index}].description"),
                        &step.description,
                        18,
                        22,
                    );
                }
            }
            SectionContent::Testimonials(section) => {
                check.words("headline", &section.headline, 4, 6);
                check.items("testimonials", section.testimonials.len(), 3, 3);
                for (index, testimonial) in section.testimonials.iter().enumerate() {
                    let field = |name: &str| format!("testimonials[{index}].{name}");
                    check.words(&field("content"), &testimonial.content, 25, 35);
                    check.present(&field("name"), &testimonial.name);
                    check.present(&field("role"), &testimonial.role);
                    check.present(&field("company"), &testimonial.company);
                    check.present(&field("avatar"), &testimonial.avatar);
                    if testimonial.rating != 5 {
                        check.issues.push(format!(
                            "testimonials[{index}].rating is {}, expected 5",
                            testimonial.rating
                        ));
                    }
                }
            }
            SectionContent::Faq(faq) => {
                check.words("headline", &faq.headline, 4, 6);
                check.items("faqs", faq.faqs.len(), 5, 5);
                for (index, item) in faq.faqs.iter().enumerate() {
                    check.words(&format!("faqs[{index}].question"), &item.question, 6, 10);
                    check.words(&format!("faqs[{index}].answer"), &item.answer, 30, 40);
                }
            }
            SectionContent::Comparison(comparison) => {
                check.words("headline", &comparison.headline, 4, 6);
                check.items("competitors", comparison.competitors.len(), 2, 2);
                for (index, name) in comparison.competitors.iter().enumerate() {
                    check.present(&format!("competitors[{index}]"), name);
                }
                check.items("features", comparison.features.len(), 5, 6);
                for (index, row) in comparison.features.iter().enumerate() {
                    check.present(&format!("features[{index}].name"), &row.name);
                    let cells = [
                        ("ourProduct", &row.our_product),
                        ("competitorA", &row.competitor_a),
                        ("competitorB", &row.competitor_b),
                    ];
                    for (column, value) in cells {
                        if let ComparisonValue::Text(text) = value {
                            check.words(&format!("features[{index}].{column}"), text, 1, 4);
                        }
                    }
                }
                if comparison.highlight_column != "ourProduct" {
                    check.issues.push(format!(
                        "highlightColumn is '{}', expected 'ourProduct'",
                        comparison.highlight_column
                    ));
                }
            }
            SectionContent::Cta(cta) => {
                check.words("headline", &cta.headline, 4, 6);
                check.words("body", &cta.body, 20, 30);
                check.present("cta", &cta.cta);
            }
        }

        check.issues
    }

    /// Structural issues plus checks that depend on the campaign's funnel
    /// stage: the hero and closing CTA must come from its vocabulary.
    pub fn contract_issues(&self, guidelines: &GuidelineSet) -> Vec<String> {
        let mut issues = self.structural_issues();
        let cta = match self {
            SectionContent::Hero(hero) => Some(&hero.cta),
            SectionContent::Cta(cta) => Some(&cta.cta),
            _ => None,
        };
        if let Some(cta) = cta {
            let cta = cta.trim();
            let known = guidelines
                .cta_candidates()
                .any(|candidate| candidate.eq_ignore_ascii_case(cta));
            if !cta.is_empty() && !known {
                issues.push(format!("cta '{cta}' is not one of: {}", guidelines.cta));
            }
        }
        issues
    }
}
