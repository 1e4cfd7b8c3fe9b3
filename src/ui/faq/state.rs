use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FaqState {
    pub len: usize,
    pub open: Option<usize>,
}

impl UiState for FaqState {}

impl FaqState {
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Value for the question's `aria-expanded` attribute.
    pub fn aria_expanded(&self, index: usize) -> &'static str {
        if self.is_open(index) {
            "true"
        } else {
            "false"
        }
    }

    /// Icon rotation in degrees: a plus turns into a cross when open.
    pub fn icon_rotation(&self, index: usize) -> u16 {
        if self.is_open(index) {
            45
        } else {
            0
        }
    }
}
