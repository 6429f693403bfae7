use std::{sync::Arc, time::Duration};

use shared::domain::{ColorId, StyleId, SwapRequest};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::surface::{AssetProbe, PreviewSurface, ProbeError};

pub const SETTLE_DELAY: Duration = Duration::from_millis(150);
pub const FADE_OUT_OPACITY: f32 = 0.5;
const FULL_OPACITY: f32 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SequencerConfig {
    pub settle_delay: Duration,
    pub fade_out_opacity: f32,
    /// `None` waits on the probe indefinitely.
    pub probe_timeout: Option<Duration>,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            settle_delay: SETTLE_DELAY,
            fade_out_opacity: FADE_OUT_OPACITY,
            probe_timeout: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapPhase {
    Idle,
    Probing,
    FadingOut,
    Swapping,
    FadingIn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub active_style_id: StyleId,
    pub active_color_id: ColorId,
    pub is_transitioning: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwapFailure {
    #[error("asset missing: {0}")]
    AssetMissing(#[source] ProbeError),
    #[error("probe for {path} did not settle within {after:?}")]
    ProbeTimedOut { path: String, after: Duration },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    /// Carries the color label now shown on the surface.
    Success(String),
    /// Another swap was in flight; nothing happened.
    Busy,
    Failed(SwapFailure),
}

impl SwapOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SwapOutcome::Success(_))
    }
}

struct SequencerState {
    initial: SwapRequest,
    active_style_id: StyleId,
    active_color_id: ColorId,
    displayed_asset: String,
    phase: SwapPhase,
}

/// Swaps the preview image for a (style, color) pair: probe, fade out, settle,
/// swap, fade in. At most one swap runs at a time; requests arriving while one
/// is in flight are dropped with [`SwapOutcome::Busy`].
pub struct ImageSwapSequencer {
    probe: Arc<dyn AssetProbe>,
    surface: Arc<dyn PreviewSurface>,
    config: SequencerConfig,
    state: Mutex<SequencerState>,
}

impl ImageSwapSequencer {
    pub fn new(
        initial: SwapRequest,
        probe: Arc<dyn AssetProbe>,
        surface: Arc<dyn PreviewSurface>,
        config: SequencerConfig,
    ) -> Self {
        let state = SequencerState {
            active_style_id: initial.style_id.clone(),
            active_color_id: initial.color_id.clone(),
            displayed_asset: initial.asset_path(),
            phase: SwapPhase::Idle,
            initial,
        };
        Self {
            probe,
            surface,
            config,
            state: Mutex::new(state),
        }
    }

    /// Writes the labels for the initial selection. The page ships with the
    /// initial image already in place, so the source is left alone.
    pub async fn initialize(&self) {
        let state = self.state.lock().await;
        self.surface.set_style_label(&state.initial.style_name);
        self.surface.set_color_label(&state.initial.color_label);
        info!(
            style = %state.active_style_id,
            color = %state.active_color_id,
            "color picker initialized"
        );
    }

    pub async fn state(&self) -> SelectionState {
        let state = self.state.lock().await;
        SelectionState {
            active_style_id: state.active_style_id.clone(),
            active_color_id: state.active_color_id.clone(),
            is_transitioning: state.phase != SwapPhase::Idle,
        }
    }

    pub async fn phase(&self) -> SwapPhase {
        self.state.lock().await.phase
    }

    pub async fn displayed_asset(&self) -> String {
        self.state.lock().await.displayed_asset.clone()
    }

    /// Requesting the active pair again still runs the whole sequence.
    pub async fn request_swap(&self, request: SwapRequest) -> SwapOutcome {
        {
            let mut state = self.state.lock().await;
            if state.phase != SwapPhase::Idle {
                debug!(
                    style = %request.style_id,
                    color = %request.color_id,
                    phase = ?state.phase,
                    "swap dropped: another swap in flight"
                );
                return SwapOutcome::Busy;
            }
            state.phase = SwapPhase::Probing;
            self.surface.set_loading(true);
        }

        let path = request.asset_path();
        if let Err(failure) = self.probe_asset(&path).await {
            warn!(%path, error = %failure, "swap failed; keeping current preview");
            let mut state = self.state.lock().await;
            state.phase = SwapPhase::Idle;
            self.surface.set_loading(false);
            return SwapOutcome::Failed(failure);
        }

        self.set_phase(SwapPhase::FadingOut).await;
        self.surface.set_image_opacity(self.config.fade_out_opacity);
        tokio::time::sleep(self.config.settle_delay).await;

        {
            let mut state = self.state.lock().await;
            state.phase = SwapPhase::Swapping;
            self.surface.set_image_source(&path);
            state.displayed_asset = path.clone();

            state.phase = SwapPhase::FadingIn;
            self.surface.set_image_opacity(FULL_OPACITY);
            self.surface.set_style_label(&request.style_name);
            self.surface.set_color_label(&request.color_label);

            state.active_style_id = request.style_id.clone();
            state.active_color_id = request.color_id.clone();
            state.phase = SwapPhase::Idle;
            self.surface.set_loading(false);
        }

        info!(
            style = %request.style_id,
            color = %request.color_id,
            %path,
            "preview swapped"
        );
        SwapOutcome::Success(request.color_label)
    }

    async fn probe_asset(&self, path: &str) -> Result<(), SwapFailure> {
        let probe = self.probe.probe(path);
        let result = match self.config.probe_timeout {
            Some(after) => tokio::time::timeout(after, probe).await.map_err(|_elapsed| {
                SwapFailure::ProbeTimedOut {
                    path: path.to_string(),
                    after,
                }
            })?,
            None => probe.await,
        };
        result.map_err(SwapFailure::AssetMissing)
    }

    async fn set_phase(&self, phase: SwapPhase) {
        self.state.lock().await.phase = phase;
    }
}

#[cfg(test)]
#[path = "tests/sequencer_tests.rs"]
mod tests;
