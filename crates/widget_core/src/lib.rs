//! Interactive widgets for the salon site: the color/style preview picker and the
//! photo gallery. Everything that touches a real page is reached through the
//! traits in [`surface`].

pub mod gallery;
pub mod picker;
pub mod sequencer;
pub mod surface;
pub mod toast;

pub use gallery::{GalleryWidget, ModalClickTarget, ModalOutcome, ModalState};
pub use picker::{ColorPicker, CurrentSelection, NavKey, SelectionOutcome};
pub use sequencer::{
    ImageSwapSequencer, SelectionState, SequencerConfig, SwapFailure, SwapOutcome, SwapPhase,
};
pub use surface::{AssetProbe, GallerySurface, Notifier, PreviewSurface, ProbeError, Toast};
pub use toast::{ToastBoard, ERROR_TOAST_TTL};

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
