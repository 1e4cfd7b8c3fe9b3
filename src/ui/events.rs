use crate::gallery::ItemId;
use crate::ui::filter::FilterCategory;
use crate::ui::form::FieldId;
use crate::ui::lightbox::ResolveOutcome;
use crate::ui::scroll::{ElementId, ElementRect};
use crate::ui::Direction;

/// Keys the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
    Home,
    End,
}

/// Everything the host or the scheduler can tell the page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Document-level key press. `input_focused` when a form control has focus.
    Key { key: Key, input_focused: bool },
    /// Page visibility changed (tab hidden or shown again).
    VisibilityChanged { hidden: bool },
    Resize { width: f64, height: f64 },
    /// Full scrollable height of the document changed.
    DocumentHeight(f64),

    CarouselPointer { inside: bool },
    CarouselFocus { inside: bool },
    CarouselIndicator { index: usize },
    CarouselInViewport { visible: bool },
    /// Auto-advance timer fired.
    CarouselTick { generation: u64 },

    FilterSelected(FilterCategory),
    /// "View Gallery" on a portfolio tile.
    OpenGallery(ItemId),
    LightboxClose,
    LightboxNavigate(Direction),
    ImageResolved {
        generation: u64,
        item: ItemId,
        outcome: ResolveOutcome,
    },

    FieldInput { field: FieldId, value: String },
    FieldBlur(FieldId),
    FormSubmitted,
    SubmitFinished {
        generation: u64,
        outcome: Result<(), String>,
    },
    NoticeExpired { generation: u64 },

    /// Click, Enter or Space on an FAQ question.
    FaqQuestionActivated { index: usize },

    MenuToggled,
    NavItemClicked,
    ClickOutsideMenu,
    /// In-page link, e.g. `#contact`.
    LinkClicked { href: String },
    ScrollToTopClicked,

    Scroll { y: f64 },
    /// Animation frame requested through `Effect::RequestFrame`.
    Frame,
    ElementIntersected { element: ElementId, rect: ElementRect },
    /// A section crossed the nav highlight threshold.
    SectionVisible(String),

    /// A spawned task panicked. Its completion event follows as a failure.
    TaskFailed { task: &'static str, message: String },
}
