use std::time::Duration;

use crate::gallery::ItemId;
use crate::ui::filter::FilterCategory;
use crate::ui::form::{CharCount, ContactFields, FieldId, Notice};
use crate::ui::scroll::{ElementId, SmoothScroll};

/// What the page controller wants done after handling an event.
///
/// Scheduled effects are carried out by the runtime `Scheduler`; all others
/// are presentation changes for the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    // Scheduled.
    /// Cancel any auto-advance timer, then tick every `interval`.
    StartAutoAdvance { generation: u64, interval: Duration },
    CancelAutoAdvance,
    ResolveImage {
        generation: u64,
        item: ItemId,
        locator: String,
    },
    Submit {
        generation: u64,
        fields: ContactFields,
    },
    DismissNoticeAfter { generation: u64, after: Duration },
    RequestFrame,

    // Presentation.
    /// Mark this slide and its indicator active, all others inactive.
    ShowSlide { index: usize },
    CarouselPaused(bool),
    ShowFilter {
        active: FilterCategory,
        visible: Vec<usize>,
    },
    AnimateEntrance { index: usize, delay: Duration },
    LightboxShow { item: ItemId, loading: bool },
    LightboxLoaded { item: ItemId, error: Option<String> },
    LightboxClosed,
    FieldError {
        field: FieldId,
        message: Option<&'static str>,
    },
    FocusField(FieldId),
    SubmitButton { busy: bool },
    ShowNotice(Notice),
    HideNotice,
    CharCount(CharCount),
    FaqExpanded { open: Option<usize> },
    MenuOpen(bool),
    NavHighlight(String),
    Header { scrolled: bool, hidden: bool },
    ScrollToTopVisible(bool),
    /// Share of the page scrolled past, `0.0..=1.0`.
    ScrollProgress(f64),
    Revealed(ElementId),
    LoadImage { element: ElementId, source: String },
    /// Host resolves the section's offset and calls `Page::section_scroll`.
    ScrollToSection(String),
    ScrollTo(SmoothScroll),
}

impl Effect {
    pub fn is_scheduled(&self) -> bool {
        matches!(
            self,
            Effect::StartAutoAdvance { .. }
                | Effect::CancelAutoAdvance
                | Effect::ResolveImage { .. }
                | Effect::Submit { .. }
                | Effect::DismissNoticeAfter { .. }
                | Effect::RequestFrame
        )
    }
}

/// Applies presentation effects to whatever renders the page.
pub trait Presenter {
    fn present(&mut self, effect: &Effect);
}

/// Collects effects. Handy for hosts that batch per frame, and for tests.
impl Presenter for Vec<Effect> {
    fn present(&mut self, effect: &Effect) {
        self.push(effect.clone());
    }
}

/// Headless presenter: logs every change.
#[derive(Debug, Default)]
pub struct TracingPresenter {
    presented: u64,
}

impl TracingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl Presenter for TracingPresenter {
    fn present(&mut self, effect: &Effect) {
        self.presented += 1;
        tracing::info!(target: "studio_site::present", "{:?}", effect);
    }
}
