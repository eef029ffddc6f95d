//! Theme gallery
//!
//! A fixed, ordered catalog of landing page themes. Selecting a theme never
//! mutates the catalog; [`apply_theme_to_page`] produces the brand settings
//! and style sheet to merge into page state.

pub mod apply;
pub mod catalog;

pub use apply::{AppliedTheme, apply_theme_to_page, generate_stylesheet};
pub use catalog::{
    BrandSettings, DEFAULT_THEME_ID, DesignStyle, LandingPageTheme, ThemeStyle, available_themes,
    default_theme, get_theme_by_id, resolve_theme,
};
