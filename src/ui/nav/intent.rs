use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIntent {
    /// Hamburger button.
    Toggle,
    /// Nav item chosen, click outside the menu, or Escape.
    Close,
}

impl Intent for MenuIntent {}
