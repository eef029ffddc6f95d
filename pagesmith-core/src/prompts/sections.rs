use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Landing page content blocks the composer can write a prompt for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Hero,
    Features,
    HowItWorks,
    Testimonials,
    Faq,
    Comparison,
    Cta,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown section kind: {0}")]
pub struct UnknownSectionKind(pub String);

impl SectionKind {
    /// All kinds in page order
    pub const ALL: [SectionKind; 7] = [
        SectionKind::Hero,
        SectionKind::Features,
        SectionKind::HowItWorks,
        SectionKind::Testimonials,
        SectionKind::Faq,
        SectionKind::Comparison,
        SectionKind::Cta,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Features => "features",
            SectionKind::HowItWorks => "how-it-works",
            SectionKind::Testimonials => "testimonials",
            SectionKind::Faq => "faq",
            SectionKind::Comparison => "comparison",
            SectionKind::Cta => "cta",
        }
    }

    /// Human readable label used inside prompts
    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Features => "features",
            SectionKind::HowItWorks => "how it works",
            SectionKind::Testimonials => "testimonials",
            SectionKind::Faq => "FAQ",
            SectionKind::Comparison => "comparison",
            SectionKind::Cta => "call-to-action",
        }
    }

    pub fn template(&self) -> &'static SectionTemplate {
        match self {
            SectionKind::Hero => &HERO,
            SectionKind::Features => &FEATURES,
            SectionKind::HowItWorks => &HOW_IT_WORKS,
            SectionKind::Testimonials => &TESTIMONIALS,
            SectionKind::Faq => &FAQ,
            SectionKind::Comparison => &COMPARISON,
            SectionKind::Cta => &CTA,
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = UnknownSectionKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "hero" => Ok(SectionKind::Hero),
            "features" => Ok(SectionKind::Features),
            "how-it-works" | "howitworks" => Ok(SectionKind::HowItWorks),
            "testimonials" => Ok(SectionKind::Testimonials),
            "faq" => Ok(SectionKind::Faq),
            "comparison" => Ok(SectionKind::Comparison),
            "cta" | "call-to-action" => Ok(SectionKind::Cta),
            _ => Err(UnknownSectionKind(s.to_string())),
        }
    }
}

/// Per-section prompt data.
///
/// `requirements` and `example` may contain the `{primary_cta}` and
/// `{cta_options}` placeholders, filled from the funnel guidelines.
#[derive(Debug)]
pub struct SectionTemplate {
    pub kind: SectionKind,
    pub task: &'static str,
    pub requirements: &'static [&'static str],
    pub example: &'static str,
}

pub const PRIMARY_CTA_PLACEHOLDER: &str = "{primary_cta}";
pub const CTA_OPTIONS_PLACEHOLDER: &str = "{cta_options}";

const HERO: SectionTemplate = SectionTemplate {
    kind: SectionKind::Hero,
    task: "Write the hero section that visitors see first.",
    requirements: &[
        "headline: a benefit-driven statement of maximum 8 words",
        "subheadline: 12-15 words that expand on the headline",
        "body: 25-35 words connecting the offer to the audience's goal",
        "cta: button text of 2-3 words drawn from: {cta_options}",
    ],
    example: r#"{
  "headline": "Benefit-driven headline of maximum 8 words",
  "subheadline": "Subheadline of 12-15 words that expands on the headline",
  "body": "Body copy of 25-35 words",
  "cta": "{primary_cta}"
}"#,
};

const FEATURES: SectionTemplate = SectionTemplate {
    kind: SectionKind::Features,
    task: "Write the features section that explains why the offer is worth it.",
    requirements: &[
        "headline: 4-6 words summarizing the overall value",
        "features: exactly 3 features",
        "each feature title: maximum 4 words",
        "each feature description: 15-20 words focused on the outcome for the audience",
        "each feature icon: a single emoji that represents the feature",
    ],
    example: r#"{
  "headline": "Section headline of 4-6 words",
  "features": [
    {
      "title": "Feature title",
      "description": "Outcome-focused description of 15-20 words",
      "icon": "⚡"
    },
    {
      "title": "Feature title",
      "description": "Outcome-focused description of 15-20 words",
      "icon": "🛡️"
    },
    {
      "title": "Feature title",
      "description": "Outcome-focused description of 15-20 words",
      "icon": "📈"
    }
  ]
}"#,
};

const HOW_IT_WORKS: SectionTemplate = SectionTemplate {
    kind: SectionKind::HowItWorks,
    task: "Write the how it works section that walks visitors through getting value from the offer.",
    requirements: &[
        "headline: 4-6 words introducing the process",
        "steps: exactly 3 steps, numbered 1 to 3 in order",
        "each step title: maximum 4 words",
        "step 1 description: exactly 18-22 words",
        "step 2 description: exactly 18-22 words",
        "step 3 description: exactly 18-22 words",
    ],
    example: r#"{
  "headline": "Section headline of 4-6 words",
  "steps": [
    {
      "number": 1,
      "title": "First step title",
      "description": "Description of exactly 18-22 words"
    },
    {
      "number": 2,
      "title": "Second step title",
      "description": "Description of exactly 18-22 words"
    },
    {
      "number": 3,
      "title": "Third step title",
      "description": "Description of exactly 18-22 words"
    }
  ]
}"#,
};

const TESTIMONIALS: SectionTemplate = SectionTemplate {
    kind: SectionKind::Testimonials,
    task: "Write the testimonials section with realistic customer quotes.",
    requirements: &[
        "headline: 4-6 words that frame the social proof",
        "testimonials: exactly 3 testimonials",
        "each testimonial content: 25-35 words describing a specific result",
        "each testimonial includes a name, role, company and avatar image reference",
        "rating: always 5 for every testimonial",
    ],
    example: r#"{
  "headline": "Section headline of 4-6 words",
  "testimonials": [
    {
      "name": "Full name",
      "role": "Job title",
      "company": "Company name",
      "content": "Testimonial of 25-35 words",
      "rating": 5,
      "avatar": "/avatars/testimonial-1.jpg"
    },
    {
      "name": "Full name",
      "role": "Job title",
      "company": "Company name",
      "content": "Testimonial of 25-35 words",
      "rating": 5,
      "avatar": "/avatars/testimonial-2.jpg"
    },
    {
      "name": "Full name",
      "role": "Job title",
      "company": "Company name",
      "content": "Testimonial of 25-35 words",
      "rating": 5,
      "avatar": "/avatars/testimonial-3.jpg"
    }
  ]
}"#,
};

const FAQ: SectionTemplate = SectionTemplate {
    kind: SectionKind::Faq,
    task: "Write the FAQ section answering the questions that stop visitors from acting.",
    requirements: &[
        "headline: 4-6 words introducing the questions",
        "faqs: exactly 5 question and answer pairs",
        "each question: 6-10 words, phrased the way the audience would ask it",
        "each answer: 30-40 words that resolve the objection",
    ],
    example: r#"{
  "headline": "Section headline of 4-6 words",
  "faqs": [
    {
      "question": "Question of 6-10 words?",
      "answer": "Answer of 30-40 words"
    },
    {
      "question": "Question of 6-10 words?",
      "answer": "Answer of 30-40 words"
    },
    {
      "question": "Question of 6-10 words?",
      "answer": "Answer of 30-40 words"
    },
    {
      "question": "Question of 6-10 words?",
      "answer": "Answer of 30-40 words"
    },
    {
      "question": "Question of 6-10 words?",
      "answer": "Answer of 30-40 words"
    }
  ]
}"#,
};

const COMPARISON: SectionTemplate = SectionTemplate {
    kind: SectionKind::Comparison,
    task: "Write the comparison section showing how the offer stacks up against alternatives.",
    requirements: &[
        "headline: 4-6 words positioning the offer as the better choice",
        "competitors: exactly 2 competitor names; use generic category names when real brands are unknown",
        "features: 5-6 comparison rows",
        "each row value for ourProduct, competitorA and competitorB: either true/false or a short descriptive phrase of at most 4 words",
        "highlightColumn: always \"ourProduct\" so the offer is shown as the winning column",
    ],
    example: r#"{
  "headline": "Section headline of 4-6 words",
  "competitors": ["Competitor A", "Competitor B"],
  "highlightColumn": "ourProduct",
  "features": [
    {
      "name": "Compared feature",
      "ourProduct": true,
      "competitorA": false,
      "competitorB": false
    },
    {
      "name": "Compared feature",
      "ourProduct": true,
      "competitorA": true,
      "competitorB": false
    },
    {
      "name": "Compared feature",
      "ourProduct": "Short phrase",
      "competitorA": "Short phrase",
      "competitorB": "Short phrase"
    },
    {
      "name": "Compared feature",
      "ourProduct": true,
      "competitorA": false,
      "competitorB": true
    },
    {
      "name": "Compared feature",
      "ourProduct": "Short phrase",
      "competitorA": false,
      "competitorB": "Short phrase"
    }
  ]
}"#,
};

const CTA: SectionTemplate = SectionTemplate {
    kind: SectionKind::Cta,
    task: "Write the closing call-to-action section that turns interest into the campaign goal.",
    requirements: &[
        "headline: 4-6 words that create momentum",
        "body: 20-30 words restating the core benefit and removing hesitation",
        "cta: one phrase from: {cta_options}; use \"{primary_cta}\" unless another option fits the goal better",
    ],
    example: r#"{
  "headline": "Closing headline of 4-6 words",
  "body": "Closing copy of 20-30 words",
  "cta": "{primary_cta}"
}"#,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_round_trip_through_from_str() {
        for kind in SectionKind::ALL {
            assert_eq!(kind.as_str().parse::<SectionKind>(), Ok(kind));
            assert_eq!(kind.template().kind, kind);
        }
        assert_eq!("call-to-action".parse::<SectionKind>(), Ok(SectionKind::Cta));
        assert_eq!("how_it_works".parse::<SectionKind>(), Ok(SectionKind::HowItWorks));
        assert!("pricing".parse::<SectionKind>().is_err());
    }

    #[test]
    fn examples_are_valid_json_once_placeholders_are_filled() {
        for kind in SectionKind::ALL {
            let example = kind
                .template()
                .example
                .replace(PRIMARY_CTA_PLACEHOLDER, "Get Started");
            let parsed: Result<serde_json::Value, _> = serde_json::from_str(&example);
            assert!(parsed.is_ok(), "{kind} example is not valid JSON");
        }
    }
}
