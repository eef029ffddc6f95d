use crate::cli::campaign::load_campaign;
use anyhow::{Context, Result};
use console::style;
use pagesmith_core::config::PagesmithConfig;
use pagesmith_core::prompts::{PromptComposer, SectionKind};
use serde_json::json;
use std::fs;
use std::path::Path;

/// Handle the prompt command
pub fn handle_prompt_command(
    config: &PagesmithConfig,
    section: SectionKind,
    campaign: &Path,
    as_json: bool,
) -> Result<()> {
    let campaign = load_campaign(campaign, &config.campaign)?;
    let composer = PromptComposer::new(&campaign);
    let prompt = composer.compose(section);

    if as_json {
        let payload = json!({
            "section": section,
            "funnelStage": campaign.funnel_stage,
            "primaryCta": composer.guidelines().primary_cta(),
            "prompt": prompt,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{prompt}");
    }
    Ok(())
}

/// Handle the prompts command
pub fn handle_prompts_command(
    config: &PagesmithConfig,
    campaign: &Path,
    output_dir: Option<&Path>,
) -> Result<()> {
    let campaign = load_campaign(campaign, &config.campaign)?;
    let composer = PromptComposer::new(&campaign);

    if let Some(dir) = output_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }

    for kind in SectionKind::ALL {
        let prompt = composer.compose(kind);
        match output_dir {
            Some(dir) => {
                let path = dir.join(format!("{}.txt", kind.as_str()));
                fs::write(&path, &prompt)
                    .with_context(|| format!("Failed to write prompt file: {}", path.display()))?;
                println!("{} {}", style("wrote").green(), path.display());
            }
            None => {
                println!("{}", style(format!("=== {} ===", kind.label())).cyan().bold());
                println!("{prompt}\n");
            }
        }
    }
    Ok(())
}
