//! Headless stand-ins for the page: assets come from disk, surface writes are
//! logged and kept in a snapshot for printing.

use std::{
    io::ErrorKind,
    path::PathBuf,
    sync::{Mutex, MutexGuard},
};

use async_trait::async_trait;
use serde::Serialize;
use shared::domain::{GalleryFilter, GalleryItem};
use tracing::debug;
use widget_core::{AssetProbe, GallerySurface, PreviewSurface, ProbeError};

pub struct FsAssetProbe {
    root: PathBuf,
}

impl FsAssetProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl AssetProbe for FsAssetProbe {
    async fn probe(&self, path: &str) -> Result<(), ProbeError> {
        let full_path = self.root.join(path);
        match tokio::fs::metadata(&full_path).await {
            Ok(meta) if meta.is_file() => Ok(()),
            Ok(_) => Err(ProbeError::Unreadable {
                path: path.to_string(),
                reason: "not a regular file".into(),
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(ProbeError::NotFound {
                path: path.to_string(),
            }),
            Err(err) => Err(ProbeError::Unreadable {
                path: path.to_string(),
                reason: err.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SurfaceSnapshot {
    pub image_source: Option<String>,
    pub image_opacity: Option<f32>,
    pub style_label: Option<String>,
    pub color_label: Option<String>,
    pub loading: bool,
    pub active_style: Option<String>,
    pub active_color: Option<String>,
    pub rendered_items: Vec<u32>,
    pub grid_opacity: Option<f32>,
    pub active_filter: Option<&'static str>,
    pub modal_image: Option<String>,
    pub modal_opacity: Option<f32>,
    pub scroll_locked: bool,
}

#[derive(Default)]
pub struct ConsoleSurface {
    snapshot: Mutex<SurfaceSnapshot>,
}

impl ConsoleSurface {
    pub fn snapshot(&self) -> SurfaceSnapshot {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, SurfaceSnapshot> {
        self.snapshot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PreviewSurface for ConsoleSurface {
    fn set_image_source(&self, path: &str) {
        debug!(path, "preview image source");
        self.lock().image_source = Some(path.to_string());
    }

    fn set_image_opacity(&self, opacity: f32) {
        debug!(opacity, "preview image opacity");
        self.lock().image_opacity = Some(opacity);
    }

    fn set_color_label(&self, label: &str) {
        debug!(label, "color label");
        self.lock().color_label = Some(label.to_string());
    }

    fn set_style_label(&self, label: &str) {
        debug!(label, "style label");
        self.lock().style_label = Some(label.to_string());
    }

    fn set_loading(&self, loading: bool) {
        debug!(loading, "picker loading");
        self.lock().loading = loading;
    }

    fn set_active_color_option(&self, color_key: &str) {
        self.lock().active_color = Some(color_key.to_string());
    }

    fn set_active_style_option(&self, style_folder: &str) {
        self.lock().active_style = Some(style_folder.to_string());
    }
}

impl GallerySurface for ConsoleSurface {
    fn render_items(&self, items: &[&'static GalleryItem]) {
        debug!(count = items.len(), "gallery rendered");
        self.lock().rendered_items = items.iter().map(|item| item.id).collect();
    }

    fn set_grid_opacity(&self, opacity: f32) {
        self.lock().grid_opacity = Some(opacity);
    }

    fn set_active_filter(&self, filter: GalleryFilter) {
        self.lock().active_filter = Some(filter.key());
    }

    fn show_modal(&self, image: &str, title: &str) {
        debug!(image, title, "modal shown");
        let mut snapshot = self.lock();
        snapshot.modal_image = Some(image.to_string());
        snapshot.modal_opacity = Some(0.0);
    }

    fn set_modal_opacity(&self, opacity: f32) {
        self.lock().modal_opacity = Some(opacity);
    }

    fn hide_modal(&self) {
        let mut snapshot = self.lock();
        snapshot.modal_image = None;
        snapshot.modal_opacity = None;
    }

    fn set_page_scroll_locked(&self, locked: bool) {
        self.lock().scroll_locked = locked;
    }
}

#[cfg(test)]
#[path = "tests/console_tests.rs"]
mod tests;
