use crate::cli::ThemeCommands;
use anyhow::{Context, Result, anyhow};
use console::style;
use pagesmith_core::config::PagesmithConfig;
use pagesmith_core::page::{InMemoryPageStore, apply_theme};
use pagesmith_core::themes::{LandingPageTheme, available_themes, get_theme_by_id, resolve_theme};
use std::fs;

/// Handle the themes command
pub fn handle_themes_command(config: &PagesmithConfig, action: ThemeCommands) -> Result<()> {
    match action {
        ThemeCommands::List { json } => list_themes(&config.themes.default_theme, json),
        ThemeCommands::Show { id } => {
            let theme = lookup(&id)?;
            print_theme(theme);
            Ok(())
        }
        ThemeCommands::Apply { id, output } => {
            let theme = match id {
                Some(id) => lookup(&id)?,
                None => resolve_theme(Some(&config.themes.default_theme)),
            };
            let store = InMemoryPageStore::default();
            let applied = apply_theme(&store, theme);

            match output {
                Some(path) => {
                    fs::write(&path, &applied.stylesheet).with_context(|| {
                        format!("Failed to write style sheet: {}", path.display())
                    })?;
                    println!(
                        "{} {} -> {}",
                        style("applied").green().bold(),
                        applied.theme_id,
                        path.display()
                    );
                }
                None => print!("{}", applied.stylesheet),
            }
            Ok(())
        }
    }
}

fn lookup(id: &str) -> Result<&'static LandingPageTheme> {
    get_theme_by_id(id).ok_or_else(|| {
        let known: Vec<&str> = available_themes().iter().map(|theme| theme.id).collect();
        anyhow!("Unknown theme '{id}'. Available: {}", known.join(", "))
    })
}

fn list_themes(default_id: &str, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(available_themes())?);
        return Ok(());
    }

    for theme in available_themes() {
        let marker = if theme.id == default_id { "*" } else { " " };
        println!(
            "{marker} {:<18} {}",
            style(theme.id).cyan(),
            style(theme.description).dim()
        );
    }
    Ok(())
}

fn print_theme(theme: &LandingPageTheme) {
    let brand = &theme.brand_settings;
    println!("{} ({})", style(theme.name).bold(), theme.id);
    println!("{}", theme.description);
    println!();
    println!("Primary:     {}", brand.primary_color);
    println!("Secondary:   {}", brand.secondary_color);
    println!("Accent:      {}", brand.accent_color);
    println!("Background:  {}", brand.background_color);
    println!("Text:        {}", brand.text_color);
    println!("Fonts:       {} / {}", brand.heading_font, brand.body_font);
    if let Some(ratio) = theme.text_contrast() {
        println!("Contrast:    {ratio:.2}:1");
    }
    println!();
    println!("Hero:        {}", theme.style.hero);
    println!("Section:     {}", theme.style.section);
    println!("Card:        {}", theme.style.card);
    println!("Button:      {}", theme.style.button);
    println!("Heading:     {}", theme.style.heading);
}
