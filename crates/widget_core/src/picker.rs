//! Color/style picker controller: turns option clicks and arrow keys into swap
//! requests and reports failures through the notification surface.

use std::sync::Arc;

use rand::Rng;
use serde::Serialize;
use shared::{
    catalog::{self, ColorSuggestion},
    error::CatalogError,
};
use tracing::{debug, warn};

use crate::{
    sequencer::{ImageSwapSequencer, SwapOutcome},
    surface::{Notifier, PreviewSurface, Toast},
    toast::ERROR_TOAST_TTL,
};

pub const COLOR_FAILURE_MESSAGE: &str = "Failed to load color option";
pub const STYLE_FAILURE_MESSAGE: &str = "Failed to load style option";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Next,
    Previous,
}

impl NavKey {
    /// Maps DOM `KeyboardEvent.key` names; anything else is not a picker key.
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | "ArrowDown" => Some(NavKey::Next),
            "ArrowLeft" | "ArrowUp" => Some(NavKey::Previous),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The option is already active; no swap was attempted.
    Unchanged,
    /// Not a picker key, or a swap was already running.
    Ignored,
    Invalid(CatalogError),
    Swap(SwapOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentSelection {
    pub style: String,
    pub color: String,
    pub display_name: Option<String>,
}

pub struct ColorPicker {
    sequencer: Arc<ImageSwapSequencer>,
    surface: Arc<dyn PreviewSurface>,
    notifier: Arc<dyn Notifier>,
}

impl ColorPicker {
    pub fn new(
        sequencer: Arc<ImageSwapSequencer>,
        surface: Arc<dyn PreviewSurface>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            sequencer,
            surface,
            notifier,
        }
    }

    pub async fn select_color(&self, color_key: &str) -> SelectionOutcome {
        let state = self.sequencer.state().await;
        if state.active_color_id == color_key {
            return SelectionOutcome::Unchanged;
        }

        let request = match catalog::swap_request(state.active_style_id.as_str(), color_key) {
            Ok(request) => request,
            Err(err) => {
                warn!(color = color_key, code = ?err.code(), error = %err, "color selection rejected");
                return SelectionOutcome::Invalid(err);
            }
        };

        let outcome = self.sequencer.request_swap(request).await;
        match &outcome {
            SwapOutcome::Success(_) => self.surface.set_active_color_option(color_key),
            SwapOutcome::Failed(_) => self
                .notifier
                .notify(Toast::new(COLOR_FAILURE_MESSAGE, ERROR_TOAST_TTL)),
            SwapOutcome::Busy => {}
        }
        SelectionOutcome::Swap(outcome)
    }

    pub async fn select_style(&self, style_folder: &str) -> SelectionOutcome {
        let state = self.sequencer.state().await;
        if state.active_style_id == style_folder {
            return SelectionOutcome::Unchanged;
        }

        let request = match catalog::swap_request(style_folder, state.active_color_id.as_str()) {
            Ok(request) => request,
            Err(err) => {
                warn!(style = style_folder, code = ?err.code(), error = %err, "style selection rejected");
                return SelectionOutcome::Invalid(err);
            }
        };

        let outcome = self.sequencer.request_swap(request).await;
        match &outcome {
            SwapOutcome::Success(_) => self.surface.set_active_style_option(style_folder),
            SwapOutcome::Failed(_) => self
                .notifier
                .notify(Toast::new(STYLE_FAILURE_MESSAGE, ERROR_TOAST_TTL)),
            SwapOutcome::Busy => {}
        }
        SelectionOutcome::Swap(outcome)
    }

    /// Arrow keys step through the colors in catalog order, wrapping at both ends.
    pub async fn handle_key(&self, key: &str) -> SelectionOutcome {
        let Some(nav) = NavKey::from_key_name(key) else {
            return SelectionOutcome::Ignored;
        };

        let state = self.sequencer.state().await;
        if state.is_transitioning {
            debug!(key, "key ignored while a swap is in flight");
            return SelectionOutcome::Ignored;
        }

        let target = match nav {
            NavKey::Next => catalog::next_color(state.active_color_id.as_str()),
            NavKey::Previous => catalog::previous_color(state.active_color_id.as_str()),
        };
        self.select_color(target.key).await
    }

    pub async fn current_selection(&self) -> CurrentSelection {
        let state = self.sequencer.state().await;
        let display_name = catalog::color_by_key(state.active_color_id.as_str())
            .map(|color| color.display_name.to_string());
        CurrentSelection {
            style: state.active_style_id.0,
            color: state.active_color_id.0,
            display_name,
        }
    }

    pub fn random_suggestion<R: Rng + ?Sized>(&self, rng: &mut R) -> ColorSuggestion {
        catalog::random_color_suggestion(rng)
    }
}

#[cfg(test)]
#[path = "tests/picker_tests.rs"]
mod tests;
