use crate::campaign::{CopywritingStrategy, FunnelStage};
use serde::Serialize;

/// Guidance attributes derived from the funnel stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuidelineSet {
    pub focus: &'static str,
    pub tone: &'static str,
    /// Comma separated call-to-action vocabulary, strongest candidate first
    pub cta: &'static str,
    pub length: &'static str,
}

impl GuidelineSet {
    /// Individual call-to-action phrases in preference order
    pub fn cta_candidates(&self) -> impl Iterator<Item = &'static str> {
        self.cta
            .split(',')
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    /// First call-to-action candidate, used as the literal default
    pub fn primary_cta(&self) -> &'static str {
        self.cta_candidates().next().unwrap_or(self.cta)
    }
}

const AWARENESS: GuidelineSet = GuidelineSet {
    focus: "Educate visitors about the problem and introduce the solution without pressure",
    tone: "Informative, approachable and curiosity-driven",
    cta: "Learn More, Discover How, Explore Features",
    length: "Longer, educational copy that builds understanding",
};

const CONSIDERATION: GuidelineSet = GuidelineSet {
    focus: "Differentiate the offer and prove its value against alternatives",
    tone: "Persuasive, credible and detail-oriented",
    cta: "See How It Works, Compare Plans, Book a Demo",
    length: "Moderate length with specific benefits and proof points",
};

const CONVERSION: GuidelineSet = GuidelineSet {
    focus: "Drive immediate action and remove the final objections",
    tone: "Confident, direct and action-oriented",
    cta: "Get Started, Start Free Trial, Buy Now",
    length: "Concise, punchy copy that gets to the point",
};

const RETENTION: GuidelineSet = GuidelineSet {
    focus: "Reinforce the value existing customers already receive and deepen engagement",
    tone: "Appreciative, supportive and community-minded",
    cta: "Upgrade Now, Unlock More, Invite a Friend",
    length: "Short to moderate copy that highlights added value",
};

const GENERIC_STRATEGY_GUIDANCE: &str =
    "Lead with the clearest benefits and a compelling value proposition.";

impl FunnelStage {
    pub fn guidelines(&self) -> &'static GuidelineSet {
        match self {
            FunnelStage::Awareness => &AWARENESS,
            FunnelStage::Consideration => &CONSIDERATION,
            FunnelStage::Conversion => &CONVERSION,
            FunnelStage::Retention => &RETENTION,
        }
    }
}

impl CopywritingStrategy {
    /// One sentence of tactical guidance for the strategy
    pub fn guidance(&self) -> &'static str {
        match self {
            CopywritingStrategy::DirectResponse => {
                "Use clear, direct language with a strong call-to-action and a sense of urgency."
            }
            CopywritingStrategy::StoryDriven => {
                "Frame the copy as a narrative the audience can see themselves in, moving from struggle to success."
            }
            CopywritingStrategy::ProblemSolution => {
                "Name the audience's pain points explicitly, then present the offer as the direct solution."
            }
            CopywritingStrategy::BenefitFocused => {
                "Translate every feature into a concrete outcome and emphasize what the customer gains."
            }
            CopywritingStrategy::SocialProof => {
                "Lean on results, customer voices and popularity signals to build trust."
            }
        }
    }
}

/// Resolve funnel guidelines from a raw stage value.
///
/// Unknown or empty values resolve to the conversion guidelines.
pub fn resolve_funnel_guidelines(stage: &str) -> &'static GuidelineSet {
    match stage.parse::<FunnelStage>() {
        Ok(stage) => stage.guidelines(),
        Err(_) => {
            tracing::warn!(stage, "unknown funnel stage, using conversion guidelines");
            FunnelStage::Conversion.guidelines()
        }
    }
}

/// Resolve strategy guidance from a raw strategy value.
///
/// Unknown values resolve to a generic benefit-focused instruction.
pub fn resolve_strategy_guidance(strategy: &str) -> &'static str {
    match strategy.parse::<CopywritingStrategy>() {
        Ok(strategy) => strategy.guidance(),
        Err(_) => {
            tracing::warn!(strategy, "unknown copywriting strategy, using generic guidance");
            GENERIC_STRATEGY_GUIDANCE
        }
    }
}

/// Generic fallback sentence returned for unrecognized strategies
pub fn generic_strategy_guidance() -> &'static str {
    GENERIC_STRATEGY_GUIDANCE
}
