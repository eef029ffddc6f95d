use anyhow::{Context, Result, bail};
use console::style;
use pagesmith_core::campaign::FunnelStage;
use pagesmith_core::prompts::{SectionKind, parse_section_response};
use std::fs;
use std::path::Path;

/// Handle the check command
pub fn handle_check_command(
    section: SectionKind,
    response: &Path,
    funnel_stage: FunnelStage,
) -> Result<()> {
    let raw = fs::read_to_string(response)
        .with_context(|| format!("Failed to read response file: {}", response.display()))?;
    let content = parse_section_response(section, &raw)?;

    let issues = content.contract_issues(funnel_stage.guidelines());
    if issues.is_empty() {
        println!(
            "{} {section} response matches the expected shape",
            style("ok").green().bold()
        );
        return Ok(());
    }

    for issue in &issues {
        println!("{} {issue}", style("warning:").yellow().bold());
    }
    bail!("{} structural issue(s) in {section} response", issues.len())
}
