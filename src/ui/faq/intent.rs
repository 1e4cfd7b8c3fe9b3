use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqIntent {
    Load { len: usize },
    /// Click, or Enter/Space on a focused question.
    Toggle { index: usize },
}

impl Intent for FaqIntent {}
