//! State for the portfolio lightbox.

use crate::gallery::ItemId;
use crate::ui::mvi::UiState;

/// Navigation found the view out of step with the lightbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inconsistency {
    /// The shown item is no longer in the visible subset; fell back to the first visible one.
    MissingFromView { item: ItemId },
    /// Nothing is visible any more; the lightbox closed.
    EmptyView,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LightboxState {
    pub open: bool,
    /// Item shown, by id. The catalog owns the item itself.
    pub current: Option<ItemId>,
    /// Image for `current` is still resolving.
    pub loading: bool,
    /// Bumped on every open, move and close.
    pub generation: u64,
    /// Last resolution failure for `current`.
    pub load_error: Option<String>,
    /// Set by the last navigation when the view had changed underneath.
    pub inconsistency: Option<Inconsistency>,
}

impl UiState for LightboxState {}

impl LightboxState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.open && self.loading
    }

    pub fn current(&self) -> Option<&ItemId> {
        if self.open {
            self.current.as_ref()
        } else {
            None
        }
    }

    /// The image that should be resolving now, with its generation.
    pub fn pending_resolution(&self) -> Option<(u64, &ItemId)> {
        if self.is_loading() {
            self.current.as_ref().map(|item| (self.generation, item))
        } else {
            None
        }
    }
}
