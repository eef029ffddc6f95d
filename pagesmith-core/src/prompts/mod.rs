//! Section prompt generation
//!
//! Campaign configuration flows through the funnel and strategy guideline
//! tables into one of seven data-driven section templates. The output is a
//! plain instruction string ending with the JSON shape the caller should
//! expect back.

pub mod composer;
pub mod guidelines;
pub mod response;
pub mod sections;

pub use composer::{
    PromptComposer, compose, compose_all, compose_comparison_prompt, compose_cta_prompt,
    compose_faq_prompt, compose_features_prompt, compose_hero_prompt,
    compose_how_it_works_prompt, compose_testimonials_prompt,
};
pub use guidelines::{
    GuidelineSet, generic_strategy_guidance, resolve_funnel_guidelines, resolve_strategy_guidance,
};
pub use response::{ResponseError, SectionContent, parse_section_response};
pub use sections::{SectionKind, SectionTemplate, UnknownSectionKind};
