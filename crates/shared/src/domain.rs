use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! slug_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

slug_newtype!(StyleId);
slug_newtype!(ColorId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleEntry {
    pub id: u32,
    pub folder: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub colors: &'static [&'static str],
    pub duration: &'static str,
    pub price: &'static str,
}

impl StyleEntry {
    pub fn offers_color(&self, color_key: &str) -> bool {
        self.colors.iter().any(|color| *color == color_key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorEntry {
    pub key: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
}

/// One preview swap, already checked against the catalog by whoever built it.
///
/// The sequencer trusts these fields as given. Use
/// [`crate::catalog::swap_request`] to build one from raw identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    pub style_id: StyleId,
    pub color_id: ColorId,
    pub style_name: String,
    pub color_label: String,
}

impl SwapRequest {
    pub fn new(
        style_id: impl Into<StyleId>,
        color_id: impl Into<ColorId>,
        style_name: impl Into<String>,
        color_label: impl Into<String>,
    ) -> Self {
        Self {
            style_id: style_id.into(),
            color_id: color_id.into(),
            style_name: style_name.into(),
            color_label: color_label.into(),
        }
    }

    pub fn asset_path(&self) -> String {
        asset_path(&self.style_id, &self.color_id)
    }
}

pub fn asset_path(style_id: &StyleId, color_id: &ColorId) -> String {
    format!("assets/{style_id}/{color_id}.png")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    BoxBraids,
    Cornrows,
    Twists,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::BoxBraids, Category::Cornrows, Category::Twists];

    pub fn slug(self) -> &'static str {
        match self {
            Category::BoxBraids => "box-braids",
            Category::Cornrows => "cornrows",
            Category::Twists => "twists",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Category::BoxBraids => "Box Braids & Locs",
            Category::Cornrows => "Cornrows",
            Category::Twists => "Twists",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.slug() == slug.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GalleryFilter {
    All,
    Only(Category),
}

impl GalleryFilter {
    pub fn key(self) -> &'static str {
        match self {
            GalleryFilter::All => "all",
            GalleryFilter::Only(category) => category.slug(),
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            GalleryFilter::All => "All Styles",
            GalleryFilter::Only(category) => category.display_name(),
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        if key.trim() == "all" {
            return Some(GalleryFilter::All);
        }
        Category::from_slug(key).map(GalleryFilter::Only)
    }

    pub fn matches(self, item: &GalleryItem) -> bool {
        match self {
            GalleryFilter::All => true,
            GalleryFilter::Only(category) => item.category == category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GalleryItem {
    pub id: u32,
    pub image: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub tags: &'static [&'static str],
}
