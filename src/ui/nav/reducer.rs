use crate::ui::mvi::Reducer;

use super::intent::MenuIntent;
use super::state::MenuState;

pub struct MenuReducer;

impl Reducer for MenuReducer {
    type State = MenuState;
    type Intent = MenuIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MenuIntent::Toggle => MenuState { open: !state.open },
            MenuIntent::Close => MenuState { open: false },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_close_closes() {
        let state = MenuReducer::reduce(MenuState::default(), MenuIntent::Toggle);
        assert!(state.is_open());
        assert_eq!(state.aria_expanded(), "true");
        assert!(state.locks_body_scroll());

        let state = MenuReducer::reduce(state, MenuIntent::Close);
        assert!(!state.is_open());
        assert_eq!(state.aria_expanded(), "false");
    }

    #[test]
    fn close_when_closed_stays_closed() {
        let state = MenuReducer::reduce(MenuState::default(), MenuIntent::Close);
        assert!(!state.is_open());
    }
}
