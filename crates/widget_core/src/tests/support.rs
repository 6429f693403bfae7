use std::{
    collections::{HashMap, HashSet},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use shared::domain::{GalleryFilter, GalleryItem};
use tokio::sync::Notify;

use crate::surface::{AssetProbe, GallerySurface, PreviewSurface, ProbeError};

/// Resolves paths against a fixed set of present assets.
pub struct StaticProbe {
    present: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl StaticProbe {
    pub fn with_assets(paths: &[&str]) -> Self {
        Self {
            present: paths.iter().map(|path| path.to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls").clone()
    }
}

#[async_trait]
impl AssetProbe for StaticProbe {
    async fn probe(&self, path: &str) -> Result<(), ProbeError> {
        self.calls.lock().expect("calls").push(path.to_string());
        if self.present.contains(path) {
            Ok(())
        } else {
            Err(ProbeError::NotFound {
                path: path.to_string(),
            })
        }
    }
}

/// Parks every probe until the test releases it.
pub struct GatedProbe {
    pub entered: Notify,
    pub release: Notify,
    succeed: bool,
    calls: AtomicUsize,
}

impl GatedProbe {
    pub fn new(succeed: bool) -> Self {
        Self {
            entered: Notify::new(),
            release: Notify::new(),
            succeed,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AssetProbe for GatedProbe {
    async fn probe(&self, path: &str) -> Result<(), ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entered.notify_one();
        self.release.notified().await;
        if self.succeed {
            Ok(())
        } else {
            Err(ProbeError::NotFound {
                path: path.to_string(),
            })
        }
    }
}

/// Sends each path to its own gate; unrouted paths are missing.
pub struct RoutedProbe {
    routes: HashMap<String, Arc<GatedProbe>>,
}

impl RoutedProbe {
    pub fn new(routes: &[(&str, Arc<GatedProbe>)]) -> Self {
        Self {
            routes: routes
                .iter()
                .map(|(path, gate)| (path.to_string(), Arc::clone(gate)))
                .collect(),
        }
    }
}

#[async_trait]
impl AssetProbe for RoutedProbe {
    async fn probe(&self, path: &str) -> Result<(), ProbeError> {
        match self.routes.get(path) {
            Some(gate) => gate.probe(path).await,
            None => Err(ProbeError::NotFound {
                path: path.to_string(),
            }),
        }
    }
}

pub struct PendingProbe;

#[async_trait]
impl AssetProbe for PendingProbe {
    async fn probe(&self, _path: &str) -> Result<(), ProbeError> {
        std::future::pending::<()>().await;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    ImageSource(String),
    ImageOpacity(f32),
    ColorLabel(String),
    StyleLabel(String),
    Loading(bool),
    ActiveColor(String),
    ActiveStyle(String),
    Rendered(Vec<u32>),
    GridOpacity(f32),
    ActiveFilter(GalleryFilter),
    ModalShown(String),
    ModalOpacity(f32),
    ModalHidden,
    ScrollLocked(bool),
}

#[derive(Default)]
pub struct RecordingSurface {
    events: Mutex<Vec<SurfaceEvent>>,
}

impl RecordingSurface {
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.lock().expect("events").clone()
    }

    pub fn clear(&self) {
        self.events.lock().expect("events").clear();
    }

    fn push(&self, event: SurfaceEvent) {
        self.events.lock().expect("events").push(event);
    }

    pub fn last_color_label(&self) -> Option<String> {
        self.events().into_iter().rev().find_map(|event| match event {
            SurfaceEvent::ColorLabel(label) => Some(label),
            _ => None,
        })
    }

    pub fn last_rendered(&self) -> Option<Vec<u32>> {
        self.events().into_iter().rev().find_map(|event| match event {
            SurfaceEvent::Rendered(ids) => Some(ids),
            _ => None,
        })
    }
}

impl PreviewSurface for RecordingSurface {
    fn set_image_source(&self, path: &str) {
        self.push(SurfaceEvent::ImageSource(path.to_string()));
    }

    fn set_image_opacity(&self, opacity: f32) {
        self.push(SurfaceEvent::ImageOpacity(opacity));
    }

    fn set_color_label(&self, label: &str) {
        self.push(SurfaceEvent::ColorLabel(label.to_string()));
    }

    fn set_style_label(&self, label: &str) {
        self.push(SurfaceEvent::StyleLabel(label.to_string()));
    }

    fn set_loading(&self, loading: bool) {
        self.push(SurfaceEvent::Loading(loading));
    }

    fn set_active_color_option(&self, color_key: &str) {
        self.push(SurfaceEvent::ActiveColor(color_key.to_string()));
    }

    fn set_active_style_option(&self, style_folder: &str) {
        self.push(SurfaceEvent::ActiveStyle(style_folder.to_string()));
    }
}

impl GallerySurface for RecordingSurface {
    fn render_items(&self, items: &[&'static GalleryItem]) {
        self.push(SurfaceEvent::Rendered(
            items.iter().map(|item| item.id).collect(),
        ));
    }

    fn set_grid_opacity(&self, opacity: f32) {
        self.push(SurfaceEvent::GridOpacity(opacity));
    }

    fn set_active_filter(&self, filter: GalleryFilter) {
        self.push(SurfaceEvent::ActiveFilter(filter));
    }

    fn show_modal(&self, image: &str, _title: &str) {
        self.push(SurfaceEvent::ModalShown(image.to_string()));
    }

    fn set_modal_opacity(&self, opacity: f32) {
        self.push(SurfaceEvent::ModalOpacity(opacity));
    }

    fn hide_modal(&self) {
        self.push(SurfaceEvent::ModalHidden);
    }

    fn set_page_scroll_locked(&self, locked: bool) {
        self.push(SurfaceEvent::ScrollLocked(locked));
    }
}
