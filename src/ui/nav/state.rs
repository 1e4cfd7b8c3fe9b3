use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    pub open: bool,
}

impl UiState for MenuState {}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Value for the toggle's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    /// The page body stops scrolling while the menu covers it.
    pub fn locks_body_scroll(&self) -> bool {
        self.open
    }
}
