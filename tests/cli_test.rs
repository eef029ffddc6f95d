//! End-to-end tests for the pagesmith binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn pagesmith(workspace: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pagesmith"))
        .arg("--workspace")
        .arg(workspace)
        .arg("--no-color")
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("PAGESMITH_LOG")
        .output()
        .expect("Failed to run pagesmith")
}

fn write_campaign(dir: &Path) -> String {
    let path = dir.join("campaign.toml");
    fs::write(
        &path,
        r#"
target_audience = "Freelance photographers"
product_offer = "Client gallery hosting"
funnel_stage = "awareness"
campaign_goal = "Grow the newsletter"
key_benefits = "Fast uploads, Branded galleries"
brand_voice = "casual"
"#,
    )
    .expect("Failed to write campaign file");
    path.display().to_string()
}

#[test]
fn test_init_writes_config_once() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = pagesmith(temp_dir.path(), &["init"]);
    assert!(output.status.success());
    assert!(temp_dir.path().join("pagesmith.toml").exists());

    let again = pagesmith(temp_dir.path(), &["init"]);
    assert!(again.status.success());
    assert!(String::from_utf8_lossy(&again.stdout).contains("already exists"));
}

#[test]
fn test_hero_prompt_from_campaign_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let campaign = write_campaign(temp_dir.path());

    let output = pagesmith(temp_dir.path(), &["prompt", "hero", "--campaign", &campaign]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Freelance photographers"));
    assert!(stdout.contains("12-15 words"));
    assert!(stdout.contains("\"cta\": \"Learn More\""));
}

#[test]
fn test_prompts_written_per_section() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let campaign = write_campaign(temp_dir.path());
    let out_dir = temp_dir.path().join("prompts");

    let output = pagesmith(
        temp_dir.path(),
        &[
            "prompts",
            "--campaign",
            &campaign,
            "--output-dir",
            &out_dir.display().to_string(),
        ],
    );
    assert!(output.status.success());
    for section in [
        "hero",
        "features",
        "how-it-works",
        "testimonials",
        "faq",
        "comparison",
        "cta",
    ] {
        assert!(out_dir.join(format!("{section}.txt")).exists(), "{section} prompt missing");
    }
}

#[test]
fn test_incomplete_campaign_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("campaign.json");
    fs::write(&path, r#"{"targetAudience": "Dentists"}"#).expect("Failed to write campaign");

    let output = pagesmith(
        temp_dir.path(),
        &["prompt", "cta", "--campaign", &path.display().to_string()],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("productOffer"));
}

#[test]
fn test_theme_apply_writes_stylesheet() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let css = temp_dir.path().join("theme.css");

    let output = pagesmith(
        temp_dir.path(),
        &["themes", "apply", "modern-business", "--output", &css.display().to_string()],
    );
    assert!(output.status.success());

    let stylesheet = fs::read_to_string(&css).expect("Failed to read style sheet");
    assert!(stylesheet.contains("#2563eb"));
    assert!(stylesheet.contains("Inter"));

    let unknown = pagesmith(temp_dir.path(), &["themes", "show", "nonexistent-theme-id"]);
    assert!(!unknown.status.success());
}

#[test]
fn test_settings_persist_in_workspace() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = pagesmith(temp_dir.path(), &["settings", "set-provider", "anthropic"]);
    assert!(output.status.success());
    assert!(temp_dir.path().join(".pagesmith/settings.json").exists());

    let show = pagesmith(temp_dir.path(), &["settings", "show"]);
    assert!(show.status.success());
    assert!(String::from_utf8_lossy(&show.stdout).contains("anthropic"));
}

#[test]
fn test_check_uses_funnel_stage_cta_vocabulary() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let response = temp_dir.path().join("cta.json");
    fs::write(
        &response,
        r#"{
  "headline": "Start sharing galleries with clients",
  "body": "Join thousands of photographers who share polished client galleries in minutes and spend their evenings editing instead of answering download requests from anxious clients.",
  "cta": "Learn More"
}"#,
    )
    .expect("Failed to write response");
    let response = response.display().to_string();

    // Without a config file the campaign defaults to the conversion stage.
    let conversion = pagesmith(temp_dir.path(), &["check", "cta", "--response", &response]);
    assert!(!conversion.status.success());
    assert!(String::from_utf8_lossy(&conversion.stdout).contains("cta 'Learn More' is not one of"));

    let awareness = pagesmith(
        temp_dir.path(),
        &["check", "cta", "--response", &response, "--funnel-stage", "awareness"],
    );
    assert!(awareness.status.success());
}
