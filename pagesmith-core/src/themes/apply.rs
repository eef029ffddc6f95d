use super::catalog::{BrandSettings, LandingPageTheme};
use serde::Serialize;

/// Result of applying a theme: what to merge into page state plus the
/// generated style sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedTheme {
    pub brand_settings: BrandSettings,
    pub theme_id: String,
    pub stylesheet: String,
}

/// Project a catalog theme into page brand settings and CSS.
///
/// Pure; merging the result into page state is the caller's job
/// (see [`crate::page::apply_theme`]).
pub fn apply_theme_to_page(theme: &LandingPageTheme) -> AppliedTheme {
    AppliedTheme {
        brand_settings: theme.brand_settings.clone(),
        theme_id: theme.id.to_string(),
        stylesheet: generate_stylesheet(&theme.brand_settings),
    }
}

/// Render the page style sheet for a set of brand settings
pub fn generate_stylesheet(brand: &BrandSettings) -> String {
    format!(
        r#":root {{
  --color-primary: {primary};
  --color-secondary: {secondary};
  --color-accent: {accent};
  --color-background: {background};
  --color-text: {text};
  --font-heading: '{heading}', system-ui, sans-serif;
  --font-body: '{body}', system-ui, sans-serif;
}}

body {{
  background-color: var(--color-background);
  color: var(--color-text);
  font-family: var(--font-body);
}}

h1, h2, h3, h4, h5, h6 {{
  font-family: var(--font-heading);
  color: var(--color-text);
}}

a {{
  color: var(--color-primary);
}}

.btn-primary {{
  background-color: var(--color-primary);
  border-color: var(--color-primary);
  color: #ffffff;
}}

.btn-primary:hover {{
  background-color: var(--color-secondary);
  border-color: var(--color-secondary);
}}

.btn-secondary {{
  background-color: transparent;
  border-color: var(--color-secondary);
  color: var(--color-secondary);
}}

.text-accent {{
  color: var(--color-accent);
}}

.bg-accent {{
  background-color: var(--color-accent);
}}
"#,
        primary = brand.primary_color,
        secondary = brand.secondary_color,
        accent = brand.accent_color,
        background = brand.background_color,
        text = brand.text_color,
        heading = brand.heading_font,
        body = brand.body_font,
    )
}
