//! Shared page state touched by theme selection and the brand settings panel

use crate::themes::{AppliedTheme, BrandSettings, LandingPageTheme, apply_theme_to_page};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Branding portion of the page being edited
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    /// Theme the page was built from, if any
    pub theme_id: Option<String>,
    pub brand_settings: BrandSettings,
}

/// Partial brand settings; `None` fields leave the current value untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrandSettingsUpdate {
    pub theme_id: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub accent_color: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub heading_font: Option<String>,
    pub body_font: Option<String>,
}

impl From<&AppliedTheme> for BrandSettingsUpdate {
    fn from(applied: &AppliedTheme) -> Self {
        let brand = applied.brand_settings.clone();
        Self {
            theme_id: Some(applied.theme_id.clone()),
            primary_color: Some(brand.primary_color),
            secondary_color: Some(brand.secondary_color),
            accent_color: Some(brand.accent_color),
            background_color: Some(brand.background_color),
            text_color: Some(brand.text_color),
            heading_font: Some(brand.heading_font),
            body_font: Some(brand.body_font),
        }
    }
}

impl PageState {
    /// Merge an update into this state, last writer wins per field
    pub fn merge(&mut self, update: BrandSettingsUpdate) {
        let brand = &mut self.brand_settings;
        let fields = [
            (&mut brand.primary_color, update.primary_color),
            (&mut brand.secondary_color, update.secondary_color),
            (&mut brand.accent_color, update.accent_color),
            (&mut brand.background_color, update.background_color),
            (&mut brand.text_color, update.text_color),
            (&mut brand.heading_font, update.heading_font),
            (&mut brand.body_font, update.body_font),
        ];
        for (slot, value) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
        if update.theme_id.is_some() {
            self.theme_id = update.theme_id;
        }
    }
}

/// The hosting application's page store
pub trait PageStore {
    /// Merge fields into the current page's brand settings
    fn merge_brand_settings(&self, update: BrandSettingsUpdate);

    /// Copy of the current page state
    fn snapshot(&self) -> PageState;
}

/// Page store held in memory; one editor at a time
#[derive(Debug, Default)]
pub struct InMemoryPageStore {
    state: RwLock<PageState>,
}

impl InMemoryPageStore {
    pub fn new(state: PageState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }
}

impl PageStore for InMemoryPageStore {
    fn merge_brand_settings(&self, update: BrandSettingsUpdate) {
        self.state.write().merge(update);
    }

    fn snapshot(&self) -> PageState {
        self.state.read().clone()
    }
}

/// Apply a catalog theme and merge it into the page store
pub fn apply_theme(store: &dyn PageStore, theme: &LandingPageTheme) -> AppliedTheme {
    let applied = apply_theme_to_page(theme);
    store.merge_brand_settings(BrandSettingsUpdate::from(&applied));
    tracing::info!(theme = theme.id, "applied theme to page");
    applied
}
