//! State for the testimonial carousel.

use crate::ui::mvi::UiState;

/// Whether the auto-advance timer should be running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoAdvance {
    #[default]
    Stopped,
    /// Timer with this generation drives the carousel.
    Running { generation: u64 },
}

/// Carousel state.
///
/// Invariant: `current < len`, or `len == 0` and the carousel is disabled.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CarouselState {
    pub len: usize,
    pub current: usize,
    /// Pointer is over the carousel region.
    pub hovered: bool,
    /// Keyboard focus is inside the carousel region.
    pub focused: bool,
    /// The page is not visible. Overrides every other reason to run.
    pub page_hidden: bool,
    /// The carousel region is inside the viewport (arrow keys active).
    pub in_viewport: bool,
    pub auto_advance: AutoAdvance,
    /// Last timer generation handed out. Never reused.
    pub generation: u64,
}

impl UiState for CarouselState {}

impl CarouselState {
    pub fn with_len(len: usize) -> Self {
        Self {
            len,
            ..Self::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.len > 0
    }

    /// True for exactly one slide (and its indicator) while enabled.
    pub fn is_active(&self, index: usize) -> bool {
        self.is_enabled() && index == self.current
    }

    pub fn is_running(&self) -> bool {
        matches!(self.auto_advance, AutoAdvance::Running { .. })
    }

    pub fn running_generation(&self) -> Option<u64> {
        match self.auto_advance {
            AutoAdvance::Running { generation } => Some(generation),
            AutoAdvance::Stopped => None,
        }
    }

    /// Hover or focus keeps the carousel still (the "paused" look).
    pub fn is_paused_by_user(&self) -> bool {
        self.hovered || self.focused
    }

    /// No reason left to keep the timer stopped.
    pub fn may_resume(&self) -> bool {
        self.is_enabled() && !self.page_hidden && !self.is_paused_by_user()
    }

    pub fn next_index(&self) -> usize {
        if self.len == 0 {
            return 0;
        }
        (self.current + 1) % self.len
    }

    pub fn previous_index(&self) -> usize {
        if self.len == 0 {
            return 0;
        }
        if self.current == 0 {
            self.len - 1
        } else {
            self.current - 1
        }
    }
}
