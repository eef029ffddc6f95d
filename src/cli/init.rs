use anyhow::{Context, Result};
use console::style;
use pagesmith_core::config::PagesmithConfig;
use std::path::Path;

/// Handle the init command
pub fn handle_init_command(workspace: &Path, force: bool) -> Result<()> {
    println!("{}", style("Initialize pagesmith configuration").blue().bold());
    println!("Workspace: {}", workspace.display());

    let created = PagesmithConfig::bootstrap_project(workspace, force)
        .with_context(|| "failed to initialize configuration files")?;

    if created.is_empty() {
        println!(
            "{} configuration already exists; pass --force to overwrite",
            style("skipped").yellow()
        );
    }
    for file in created {
        println!("{} {file}", style("created").green());
    }
    Ok(())
}
