//! State for the portfolio filter.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::gallery::{Category, UnknownCategory};
use crate::ui::mvi::UiState;

/// A filter control: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterCategory {
    #[default]
    All,
    Only(Category),
}

impl FilterCategory {
    /// Every filter control, in display order.
    pub fn controls() -> Vec<FilterCategory> {
        std::iter::once(FilterCategory::All)
            .chain(Category::ALL.into_iter().map(FilterCategory::Only))
            .collect()
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            FilterCategory::All => true,
            FilterCategory::Only(wanted) => wanted == category,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            FilterCategory::All => "all",
            FilterCategory::Only(category) => category.tag(),
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FilterCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(FilterCategory::All);
        }
        s.parse().map(FilterCategory::Only)
    }
}

/// Invariant: `visible` holds exactly the indices whose category matches
/// `active`, ascending (catalog order).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub categories: Vec<Category>,
    pub active: FilterCategory,
    pub visible: Vec<usize>,
    /// Indices that became visible with the last change, in `visible` order.
    pub entering: Vec<usize>,
}

impl UiState for FilterState {}

impl FilterState {
    /// Exactly one control is active at any time.
    pub fn is_active(&self, control: FilterCategory) -> bool {
        self.active == control
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.binary_search(&index).is_ok()
    }

    /// Entrance delays for newly shown items, staggered in `visible` order.
    pub fn entrance_schedule(&self, step: Duration) -> Vec<(usize, Duration)> {
        self.entering
            .iter()
            .enumerate()
            .map(|(position, &index)| (index, step * position as u32))
            .collect()
    }
}
