use crate::ui::mvi::Reducer;

use super::intent::FilterIntent;
use super::state::{FilterCategory, FilterState};

pub struct FilterReducer;

impl Reducer for FilterReducer {
    type State = FilterState;
    type Intent = FilterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FilterIntent::Load { categories } => {
                let visible: Vec<usize> = (0..categories.len()).collect();
                FilterState {
                    entering: visible.clone(),
                    visible,
                    categories,
                    active: FilterCategory::All,
                }
            }
            FilterIntent::Apply { category } => {
                let visible: Vec<usize> = state
                    .categories
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| category.matches(**c))
                    .map(|(i, _)| i)
                    .collect();
                let entering = visible
                    .iter()
                    .copied()
                    .filter(|i| !state.is_visible(*i))
                    .collect();
                FilterState {
                    categories: state.categories,
                    active: category,
                    visible,
                    entering,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{Catalog, Category};
    use std::time::Duration;

    fn loaded() -> FilterState {
        FilterReducer::reduce(
            FilterState::default(),
            FilterIntent::Load {
                categories: Catalog::builtin().categories(),
            },
        )
    }

    fn apply(state: FilterState, category: FilterCategory) -> FilterState {
        FilterReducer::reduce(state, FilterIntent::Apply { category })
    }

    #[test]
    fn all_shows_everything_in_order() {
        let state = apply(loaded(), FilterCategory::Only(Category::Family));
        let state = apply(state, FilterCategory::All);
        assert_eq!(state.visible, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn category_keeps_catalog_order() {
        let state = apply(loaded(), FilterCategory::Only(Category::Family));
        assert_eq!(state.visible, vec![0, 1]);
        assert!(state.visible.iter().all(|&i| state.categories[i] == Category::Family));
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let once = apply(loaded(), FilterCategory::Only(Category::Newborn));
        let twice = apply(once.clone(), FilterCategory::Only(Category::Newborn));
        assert_eq!(once.visible, twice.visible);
        assert!(twice.entering.is_empty());
    }

    #[test]
    fn exactly_one_control_active() {
        let state = apply(loaded(), FilterCategory::Only(Category::Birthday));
        let active: Vec<FilterCategory> = FilterCategory::controls()
            .into_iter()
            .filter(|c| state.is_active(*c))
            .collect();
        assert_eq!(active, vec![FilterCategory::Only(Category::Birthday)]);
    }

    #[test]
    fn entering_lists_only_newly_shown_items() {
        let state = apply(loaded(), FilterCategory::Only(Category::Family));
        let state = apply(state, FilterCategory::All);
        assert_eq!(state.entering, vec![2, 3, 4, 5]);
    }

    #[test]
    fn stagger_follows_visible_order() {
        let state = apply(loaded(), FilterCategory::Only(Category::Maternity));
        let state = apply(state, FilterCategory::All);
        let schedule = state.entrance_schedule(Duration::from_millis(100));
        assert_eq!(
            schedule,
            vec![
                (0, Duration::from_millis(0)),
                (1, Duration::from_millis(100)),
                (2, Duration::from_millis(200)),
                (3, Duration::from_millis(300)),
                (4, Duration::from_millis(400)),
            ]
        );
    }

    #[test]
    fn empty_category_hides_all() {
        let state = FilterReducer::reduce(
            FilterState::default(),
            FilterIntent::Load {
                categories: vec![Category::Family],
            },
        );
        let state = apply(state, FilterCategory::Only(Category::Maternity));
        assert!(state.visible.is_empty());
    }

    #[test]
    fn parses_filter_tags() {
        assert_eq!("all".parse::<FilterCategory>(), Ok(FilterCategory::All));
        assert_eq!(
            "baby-shower".parse::<FilterCategory>(),
            Ok(FilterCategory::Only(Category::BabyShower))
        );
        assert!("weddings".parse::<FilterCategory>().is_err());
    }
}
