use std::{sync::Arc, time::Duration};

use rand::{seq::SliceRandom, Rng};
use serde::Serialize;
use shared::{
    domain::{GalleryFilter, GalleryItem},
    error::CatalogError,
    gallery,
};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::surface::{AssetProbe, GallerySurface};

pub const GRID_FADE_DELAY: Duration = Duration::from_millis(100);
pub const MODAL_FADE_IN_DELAY: Duration = Duration::from_millis(10);
pub const MODAL_FADE_OUT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "image", rename_all = "snake_case")]
pub enum ModalState {
    Closed,
    Opening(String),
    Open(String),
    Closing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalOutcome {
    Opened,
    /// Another modal was opening, open, or still fading out.
    AlreadyOpen,
    /// Closed before the image finished loading.
    Superseded,
    LoadFailed,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClickTarget {
    Backdrop,
    Image,
}

struct GalleryState {
    filter: GalleryFilter,
    visible: Vec<&'static GalleryItem>,
    modal: ModalState,
}

pub struct GalleryWidget {
    surface: Arc<dyn GallerySurface>,
    probe: Arc<dyn AssetProbe>,
    state: Mutex<GalleryState>,
}

impl GalleryWidget {
    pub fn new(surface: Arc<dyn GallerySurface>, probe: Arc<dyn AssetProbe>) -> Self {
        Self {
            surface,
            probe,
            state: Mutex::new(GalleryState {
                filter: GalleryFilter::All,
                visible: Vec::new(),
                modal: ModalState::Closed,
            }),
        }
    }

    pub async fn initialize(&self) {
        self.reset_modal().await;
        self.render(gallery::filtered(GalleryFilter::All)).await;
        info!(items = gallery::total_images(), "gallery initialized");
    }

    pub async fn render(&self, items: Vec<&'static GalleryItem>) {
        self.surface.render_items(&items);
        self.surface.set_grid_opacity(0.0);
        self.state.lock().await.visible = items;

        tokio::time::sleep(GRID_FADE_DELAY).await;
        self.surface.set_grid_opacity(1.0);
    }

    pub async fn filter(&self, filter: GalleryFilter) {
        debug!(filter = filter.key(), "filtering gallery");
        self.render(gallery::filtered(filter)).await;
        self.state.lock().await.filter = filter;
        self.surface.set_active_filter(filter);
    }

    pub async fn filter_by_key(&self, key: &str) -> Result<(), CatalogError> {
        let filter = GalleryFilter::from_key(key)
            .ok_or_else(|| CatalogError::UnknownCategory(key.to_string()))?;
        self.filter(filter).await;
        Ok(())
    }

    pub async fn shuffle<R: Rng + ?Sized>(&self, rng: &mut R) {
        let mut items = gallery::filtered(GalleryFilter::All);
        items.shuffle(rng);
        self.render(items).await;
        self.state.lock().await.filter = GalleryFilter::All;
        self.surface.set_active_filter(GalleryFilter::All);
    }

    pub async fn active_filter(&self) -> GalleryFilter {
        self.state.lock().await.filter
    }

    pub async fn visible_items(&self) -> Vec<&'static GalleryItem> {
        self.state.lock().await.visible.clone()
    }

    pub async fn modal_state(&self) -> ModalState {
        self.state.lock().await.modal.clone()
    }

    pub async fn open_item(&self, item: &GalleryItem) -> ModalOutcome {
        self.open_modal(item.image, item.title).await
    }

    /// Shows the lightbox, then fades it in once the image loads. A close that
    /// lands while the image is loading wins; the fade-in is skipped.
    pub async fn open_modal(&self, image: &str, title: &str) -> ModalOutcome {
        if image.is_empty() {
            return ModalOutcome::Ignored;
        }
        {
            let mut state = self.state.lock().await;
            if state.modal != ModalState::Closed {
                return ModalOutcome::AlreadyOpen;
            }
            state.modal = ModalState::Opening(image.to_string());
        }

        self.surface.hide_modal();
        self.surface.show_modal(image, title);
        self.surface.set_page_scroll_locked(true);

        if let Err(err) = self.probe.probe(image).await {
            warn!(%image, error = %err, "failed to load gallery image");
            {
                let mut state = self.state.lock().await;
                if !matches!(&state.modal, ModalState::Opening(current) if current == image) {
                    debug!(%image, "modal moved on before image failed");
                    return ModalOutcome::Superseded;
                }
                state.modal = ModalState::Closing;
            }
            self.finish_close().await;
            return ModalOutcome::LoadFailed;
        }

        tokio::time::sleep(MODAL_FADE_IN_DELAY).await;

        let mut state = self.state.lock().await;
        if !matches!(&state.modal, ModalState::Opening(current) if current == image) {
            debug!(%image, "modal closed before image loaded");
            return ModalOutcome::Superseded;
        }
        state.modal = ModalState::Open(image.to_string());
        self.surface.set_modal_opacity(1.0);
        ModalOutcome::Opened
    }

    /// Returns false when there was nothing to close.
    pub async fn close_modal(&self) -> bool {
        {
            let mut state = self.state.lock().await;
            if !matches!(state.modal, ModalState::Opening(_) | ModalState::Open(_)) {
                return false;
            }
            state.modal = ModalState::Closing;
        }
        self.finish_close().await;
        true
    }

    async fn finish_close(&self) {
        self.surface.set_modal_opacity(0.0);

        tokio::time::sleep(MODAL_FADE_OUT).await;

        self.surface.hide_modal();
        self.surface.set_page_scroll_locked(false);
        self.state.lock().await.modal = ModalState::Closed;
    }

    pub async fn reset_modal(&self) {
        self.surface.hide_modal();
        self.surface.set_modal_opacity(0.0);
        self.surface.set_page_scroll_locked(false);
        self.state.lock().await.modal = ModalState::Closed;
    }

    pub async fn handle_key(&self, key: &str) -> bool {
        if key != "Escape" {
            return false;
        }
        self.close_modal().await
    }

    pub async fn handle_modal_click(&self, target: ModalClickTarget) -> bool {
        match target {
            ModalClickTarget::Backdrop => self.close_modal().await,
            ModalClickTarget::Image => false,
        }
    }
}

#[cfg(test)]
#[path = "tests/gallery_tests.rs"]
mod tests;
