//! Style and color tables for the preview picker, plus the typed lookups callers
//! use before handing a selection to the swap sequencer.

use rand::{seq::IndexedRandom, Rng};
use serde::Serialize;

use crate::{
    domain::{ColorEntry, StyleEntry, SwapRequest},
    error::CatalogError,
};

pub const DEFAULT_STYLE: &str = "Boho_french_curl";
pub const DEFAULT_COLOR: &str = "Black";
pub const FALLBACK_COLOR_DESCRIPTION: &str = "Beautiful color option";

const ALL_COLORS: &[&str] = &["Black", "Blonde", "Red", "Blue"];

pub const STYLE_CATALOG: &[StyleEntry] = &[
    StyleEntry {
        id: 1,
        folder: DEFAULT_STYLE,
        name: "Boho French Curl",
        description: "A beautiful boho-inspired style perfect for protective styling with loose, flowing curls that add volume and movement.",
        colors: ALL_COLORS,
        duration: "4-6 hours",
        price: "$150-200",
    },
    StyleEntry {
        id: 2,
        folder: "Jumbo_Black_Knotless_Braids",
        name: "Jumbo Knotless Braids",
        description: "Large, chunky knotless box braids that make a bold statement while providing excellent hair protection. Perfect for clients who want a dramatic, voluminous look.",
        colors: ALL_COLORS,
        duration: "5-7 hours",
        price: "$180-250",
    },
];

/// Catalog order is also keyboard navigation order.
pub const COLOR_CATALOG: &[ColorEntry] = &[
    ColorEntry {
        key: DEFAULT_COLOR,
        display_name: "Natural Black",
        description: "Classic and versatile, perfect for a natural look",
    },
    ColorEntry {
        key: "Blonde",
        display_name: "Golden Blonde",
        description: "Bright and bold, adds warmth and dimension",
    },
    ColorEntry {
        key: "Red",
        display_name: "Auburn Red",
        description: "Rich and vibrant, makes a stunning statement",
    },
    ColorEntry {
        key: "Blue",
        display_name: "Midnight Blue",
        description: "Creative and unique, perfect for artistic expression",
    },
];

pub fn style_by_folder(folder: &str) -> Option<&'static StyleEntry> {
    STYLE_CATALOG.iter().find(|style| style.folder == folder)
}

/// Matches either the asset folder or the human-readable name.
pub fn style_info(name_or_folder: &str) -> Option<&'static StyleEntry> {
    STYLE_CATALOG
        .iter()
        .find(|style| style.folder == name_or_folder || style.name == name_or_folder)
}

pub fn color_by_key(key: &str) -> Option<&'static ColorEntry> {
    COLOR_CATALOG.iter().find(|color| color.key == key)
}

pub fn color_display_name(key: &str) -> &str {
    match color_by_key(key) {
        Some(color) => color.display_name,
        None => key,
    }
}

pub fn color_description(key: &str) -> &'static str {
    color_by_key(key).map_or(FALLBACK_COLOR_DESCRIPTION, |color| color.description)
}

pub fn available_colors(name_or_folder: &str) -> &'static [&'static str] {
    style_info(name_or_folder)
        .map(|style| style.colors)
        .unwrap_or_default()
}

pub fn total_colors() -> usize {
    COLOR_CATALOG.len()
}

pub fn total_styles() -> usize {
    STYLE_CATALOG.len()
}

/// Validates both identifiers and builds the request the sequencer consumes.
pub fn swap_request(style_folder: &str, color_key: &str) -> Result<SwapRequest, CatalogError> {
    let style = style_by_folder(style_folder)
        .ok_or_else(|| CatalogError::UnknownStyle(style_folder.to_string()))?;
    let color =
        color_by_key(color_key).ok_or_else(|| CatalogError::UnknownColor(color_key.to_string()))?;
    request_for(style, color)
}

fn request_for(style: &StyleEntry, color: &ColorEntry) -> Result<SwapRequest, CatalogError> {
    if !style.offers_color(color.key) {
        return Err(CatalogError::ColorNotOffered {
            style: style.folder.to_string(),
            color: color.key.to_string(),
        });
    }

    Ok(SwapRequest::new(
        style.folder,
        color.key,
        style.name,
        color.display_name,
    ))
}

fn color_index(key: &str) -> Option<usize> {
    COLOR_CATALOG.iter().position(|color| color.key == key)
}

/// Next color in catalog order, wrapping. An unknown key starts from the first.
pub fn next_color(current: &str) -> &'static ColorEntry {
    let next = match color_index(current) {
        Some(index) => (index + 1) % COLOR_CATALOG.len(),
        None => 0,
    };
    &COLOR_CATALOG[next]
}

/// Previous color in catalog order, wrapping. An unknown key starts from the last.
pub fn previous_color(current: &str) -> &'static ColorEntry {
    let previous = match color_index(current) {
        Some(index) if index > 0 => index - 1,
        _ => COLOR_CATALOG.len() - 1,
    };
    &COLOR_CATALOG[previous]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorSuggestion {
    pub color: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
}

pub fn random_color_suggestion<R: Rng + ?Sized>(rng: &mut R) -> ColorSuggestion {
    let entry = COLOR_CATALOG.choose(rng).unwrap_or(&COLOR_CATALOG[0]);
    ColorSuggestion {
        color: entry.key,
        display_name: entry.display_name,
        description: entry.description,
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
