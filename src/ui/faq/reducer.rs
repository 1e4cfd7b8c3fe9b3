use crate::ui::mvi::Reducer;

use super::intent::FaqIntent;
use super::state::FaqState;

pub struct FaqReducer;

impl Reducer for FaqReducer {
    type State = FaqState;
    type Intent = FaqIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FaqIntent::Load { len } => FaqState { len, open: None },
            FaqIntent::Toggle { index } if index < state.len => FaqState {
                open: if state.open == Some(index) {
                    None
                } else {
                    Some(index)
                },
                ..state
            },
            FaqIntent::Toggle { .. } => state,
        }
    }
}
