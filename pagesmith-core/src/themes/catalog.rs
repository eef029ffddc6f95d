use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Identifier for the default theme.
pub const DEFAULT_THEME_ID: &str = "modern-business";

const MIN_CONTRAST: f64 = 4.5;

/// Overall visual direction of a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignStyle {
    Modern,
    Minimal,
    Bold,
    Elegant,
    Playful,
    Corporate,
}

/// Colors and fonts applied to a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandSettings {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub text_color: String,
    pub heading_font: String,
    pub body_font: String,
}

impl BrandSettings {
    #[allow(clippy::too_many_arguments)]
    fn new(
        primary: &str,
        secondary: &str,
        accent: &str,
        background: &str,
        text: &str,
        heading_font: &str,
        body_font: &str,
    ) -> Self {
        Self {
            primary_color: primary.to_string(),
            secondary_color: secondary.to_string(),
            accent_color: accent.to_string(),
            background_color: background.to_string(),
            text_color: text.to_string(),
            heading_font: heading_font.to_string(),
            body_font: body_font.to_string(),
        }
    }
}

impl Default for BrandSettings {
    fn default() -> Self {
        default_theme().brand_settings.clone()
    }
}

/// Class bundles the page renderer attaches to each block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeStyle {
    pub hero: &'static str,
    pub section: &'static str,
    pub card: &'static str,
    pub button: &'static str,
    pub heading: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPageTheme {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub preview: &'static str,
    pub design_style: DesignStyle,
    pub brand_settings: BrandSettings,
    pub style: ThemeStyle,
}

impl LandingPageTheme {
    /// WCAG contrast ratio of the text color over the background color
    pub fn text_contrast(&self) -> Option<f64> {
        let text = parse_hex(&self.brand_settings.text_color)?;
        let background = parse_hex(&self.brand_settings.background_color)?;
        Some(contrast_ratio(text, background))
    }
}

fn modern_business() -> LandingPageTheme {
    LandingPageTheme {
        id: "modern-business",
        name: "Modern Business",
        description: "Clean blue palette with crisp typography for SaaS and professional services",
        preview: "💼",
        design_style: DesignStyle::Modern,
        brand_settings: BrandSettings::new(
            "#2563eb", "#1e40af", "#f59e0b", "#ffffff", "#1f2937", "Inter", "Inter",
        ),
        style: ThemeStyle {
            hero: "bg-gradient-to-br from-blue-600 to-blue-800 text-white",
            section: "py-20 bg-white",
            card: "rounded-xl shadow-md border border-gray-100",
            button: "rounded-lg bg-blue-600 hover:bg-blue-700 text-white font-semibold",
            heading: "font-bold tracking-tight text-gray-900",
        },
    }
}

static CATALOG: Lazy<Vec<LandingPageTheme>> = Lazy::new(|| {
    let catalog = vec![
        modern_business(),
        LandingPageTheme {
            id: "creative-agency",
            name: "Creative Agency",
            description: "Vivid purple and pink gradients for studios, portfolios and launches",
            preview: "🎨",
            design_style: DesignStyle::Bold,
            brand_settings: BrandSettings::new(
                "#7c3aed", "#db2777", "#f97316", "#ffffff", "#111827", "Poppins", "Open Sans",
            ),
            style: ThemeStyle {
                hero: "bg-gradient-to-r from-violet-600 via-pink-600 to-orange-500 text-white",
                section: "py-24 bg-white",
                card: "rounded-2xl shadow-xl",
                button: "rounded-full bg-violet-600 hover:bg-pink-600 text-white font-bold",
                heading: "font-extrabold text-gray-900",
            },
        },
        LandingPageTheme {
            id: "minimal-startup",
            name: "Minimal Startup",
            description: "Monochrome layout with a single green accent and generous whitespace",
            preview: "✨",
            design_style: DesignStyle::Minimal,
            brand_settings: BrandSettings::new(
                "#111827", "#4b5563", "#10b981", "#ffffff", "#111827", "DM Sans", "DM Sans",
            ),
            style: ThemeStyle {
                hero: "bg-white text-gray-900",
                section: "py-16 bg-white",
                card: "border border-gray-200 rounded-md",
                button: "rounded-md bg-gray-900 hover:bg-gray-700 text-white",
                heading: "font-semibold text-gray-900",
            },
        },
        LandingPageTheme {
            id: "elegant-luxury",
            name: "Elegant Luxury",
            description: "Warm ivory background, gold accents and serif headlines for premium brands",
            preview: "💎",
            design_style: DesignStyle::Elegant,
            brand_settings: BrandSettings::new(
                "#b45309",
                "#78350f",
                "#d4af37",
                "#fdfbf7",
                "#1c1917",
                "Playfair Display",
                "Lato",
            ),
            style: ThemeStyle {
                hero: "bg-stone-50 text-stone-900",
                section: "py-24 bg-stone-50",
                card: "border border-amber-200 rounded-none",
                button: "bg-amber-700 hover:bg-amber-800 text-white uppercase tracking-widest",
                heading: "font-serif text-stone-900",
            },
        },
        LandingPageTheme {
            id: "fresh-wellness",
            name: "Fresh Wellness",
            description: "Soft greens and rounded shapes for health, fitness and wellbeing offers",
            preview: "🌿",
            design_style: DesignStyle::Playful,
            brand_settings: BrandSettings::new(
                "#059669", "#0d9488", "#fbbf24", "#f0fdf4", "#064e3b", "Nunito", "Nunito",
            ),
            style: ThemeStyle {
                hero: "bg-gradient-to-b from-emerald-50 to-teal-100 text-emerald-900",
                section: "py-20 bg-emerald-50",
                card: "rounded-3xl bg-white shadow-sm",
                button: "rounded-full bg-emerald-600 hover:bg-emerald-700 text-white",
                heading: "font-bold text-emerald-900",
            },
        },
        LandingPageTheme {
            id: "dark-tech",
            name: "Dark Tech",
            description: "Dark slate canvas with neon cyan highlights for developer tools and AI products",
            preview: "🚀",
            design_style: DesignStyle::Bold,
            brand_settings: BrandSettings::new(
                "#22d3ee",
                "#6366f1",
                "#a855f7",
                "#0f172a",
                "#e2e8f0",
                "Space Grotesk",
                "Inter",
            ),
            style: ThemeStyle {
                hero: "bg-slate-900 text-slate-100",
                section: "py-20 bg-slate-900",
                card: "rounded-xl bg-slate-800 border border-slate-700",
                button: "rounded-lg bg-cyan-400 hover:bg-cyan-300 text-slate-900 font-semibold",
                heading: "font-bold text-white",
            },
        },
        LandingPageTheme {
            id: "corporate-trust",
            name: "Corporate Trust",
            description: "Navy and slate tones that signal stability for finance, legal and B2B",
            preview: "🏛️",
            design_style: DesignStyle::Corporate,
            brand_settings: BrandSettings::new(
                "#1e3a8a",
                "#334155",
                "#0ea5e9",
                "#f8fafc",
                "#0f172a",
                "Source Sans Pro",
                "Source Sans Pro",
            ),
            style: ThemeStyle {
                hero: "bg-blue-900 text-white",
                section: "py-20 bg-slate-50",
                card: "rounded-lg bg-white shadow border border-slate-200",
                button: "rounded bg-blue-900 hover:bg-blue-800 text-white",
                heading: "font-semibold text-slate-900",
            },
        },
    ];

    for theme in &catalog {
        match theme.text_contrast() {
            Some(ratio) if ratio < MIN_CONTRAST => {
                tracing::warn!(theme = theme.id, ratio, "theme text contrast below {MIN_CONTRAST}");
            }
            None => tracing::warn!(theme = theme.id, "theme colors are not valid hex values"),
            _ => {}
        }
    }
    catalog
});

/// All themes in gallery order
pub fn available_themes() -> &'static [LandingPageTheme] {
    CATALOG.as_slice()
}

/// Look up a theme by its identifier
pub fn get_theme_by_id(id: &str) -> Option<&'static LandingPageTheme> {
    CATALOG.iter().find(|theme| theme.id == id)
}

static FALLBACK_THEME: Lazy<LandingPageTheme> = Lazy::new(modern_business);

pub fn default_theme() -> &'static LandingPageTheme {
    get_theme_by_id(DEFAULT_THEME_ID)
        .or_else(|| CATALOG.first())
        .unwrap_or_else(|| &*FALLBACK_THEME)
}

/// Resolve a theme identifier from configuration or CLI input.
pub fn resolve_theme(preferred: Option<&str>) -> &'static LandingPageTheme {
    preferred
        .map(|candidate| candidate.trim().to_lowercase())
        .filter(|candidate| !candidate.is_empty())
        .and_then(|candidate| get_theme_by_id(&candidate))
        .unwrap_or_else(default_theme)
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim().strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn relative_luminance(color: (u8, u8, u8)) -> f64 {
    fn channel(value: u8) -> f64 {
        let c = (value as f64) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * channel(color.0) + 0.7152 * channel(color.1) + 0.0722 * channel(color.2)
}

fn contrast_ratio(foreground: (u8, u8, u8), background: (u8, u8, u8)) -> f64 {
    let fg = relative_luminance(foreground);
    let bg = relative_luminance(background);
    let (lighter, darker) = if fg > bg { (fg, bg) } else { (bg, fg) };
    (lighter + 0.05) / (darker + 0.05)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique_and_ordered() {
        let ids: Vec<&str> = available_themes().iter().map(|theme| theme.id).collect();
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
        assert_eq!(ids[0], DEFAULT_THEME_ID);
    }

    #[test]
    fn every_theme_meets_minimum_contrast() {
        for theme in available_themes() {
            let ratio = theme.text_contrast().expect("catalog colors are hex");
            assert!(ratio >= MIN_CONTRAST, "{} has contrast {ratio}", theme.id);
        }
    }

    #[test]
    fn resolve_theme_falls_back_to_default() {
        assert_eq!(resolve_theme(Some(" Dark-Tech ")).id, "dark-tech");
        assert_eq!(resolve_theme(Some("unknown")).id, DEFAULT_THEME_ID);
        assert_eq!(resolve_theme(None).id, DEFAULT_THEME_ID);
    }

    #[test]
    fn default_theme_is_the_first_catalog_entry() {
        assert_eq!(default_theme().id, DEFAULT_THEME_ID);
        assert_eq!(default_theme(), &available_themes()[0]);
        assert_eq!(*FALLBACK_THEME, available_themes()[0]);
    }

    #[test]
    fn hex_parsing_rejects_malformed_values() {
        assert_eq!(parse_hex("#2563eb"), Some((0x25, 0x63, 0xeb)));
        assert_eq!(parse_hex("2563eb"), None);
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
    }

    #[test]
    fn contrast_of_black_on_white_is_maximal() {
        let ratio = contrast_ratio((0, 0, 0), (0xff, 0xff, 0xff));
        assert!((ratio - 21.0).abs() < 1e-9);
    }
}
