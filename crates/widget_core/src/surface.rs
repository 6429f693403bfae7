//! Collaborators owned by the surrounding page. Widgets only write to them.

use std::time::Duration;

use async_trait::async_trait;
use shared::domain::{GalleryFilter, GalleryItem};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("image not found: {path}")]
    NotFound { path: String },
    #[error("image could not be loaded: {path}: {reason}")]
    Unreadable { path: String, reason: String },
}

/// Test-loads an asset before it is committed to a display surface.
#[async_trait]
pub trait AssetProbe: Send + Sync {
    async fn probe(&self, path: &str) -> Result<(), ProbeError>;
}

pub trait PreviewSurface: Send + Sync {
    fn set_image_source(&self, path: &str);
    fn set_image_opacity(&self, opacity: f32);
    fn set_color_label(&self, label: &str);
    fn set_style_label(&self, label: &str);
    /// Picker container "loading" state; option buttons stop taking input while set.
    fn set_loading(&self, loading: bool);
    fn set_active_color_option(&self, color_key: &str);
    fn set_active_style_option(&self, style_folder: &str);
}

pub trait GallerySurface: Send + Sync {
    fn render_items(&self, items: &[&'static GalleryItem]);
    fn set_grid_opacity(&self, opacity: f32);
    fn set_active_filter(&self, filter: GalleryFilter);
    /// Makes the modal visible at opacity 0 with the given image.
    fn show_modal(&self, image: &str, title: &str);
    fn set_modal_opacity(&self, opacity: f32);
    /// Hides the modal and clears its image.
    fn hide_modal(&self);
    fn set_page_scroll_locked(&self, locked: bool);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub ttl: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            ttl,
        }
    }
}

/// Fire-and-forget banner surface. There is no acknowledgment channel.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}
