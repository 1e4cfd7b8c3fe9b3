//! Intents for the testimonial carousel.

use crate::ui::mvi::Intent;
use crate::ui::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselIntent {
    /// Slides were (re)discovered. Resets to the first slide, timer stopped.
    Load { len: usize },
    /// Show a slide. Out-of-range indices are ignored.
    Show { index: usize },
    Next,
    Previous,
    /// Indicator click: show the slide and restart the interval.
    Select { index: usize },
    /// Arrow key. Ignored unless the carousel is in the viewport.
    Arrow(Direction),
    /// Idempotent; refused while the page is hidden.
    StartAutoAdvance,
    StopAutoAdvance,
    /// Timer fired. Only the running generation advances the carousel.
    Tick { generation: u64 },
    PointerEnter,
    PointerLeave,
    FocusIn,
    FocusOut,
    VisibilityChanged { hidden: bool },
    ViewportChanged { visible: bool },
}

impl Intent for CarouselIntent {}
