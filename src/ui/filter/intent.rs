use crate::gallery::Category;
use crate::ui::mvi::Intent;

use super::state::FilterCategory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterIntent {
    /// Item categories in catalog order. Resets to "all".
    Load { categories: Vec<Category> },
    Apply { category: FilterCategory },
}

impl Intent for FilterIntent {}
