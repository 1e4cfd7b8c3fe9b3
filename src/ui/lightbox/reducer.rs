//! Reducer for the portfolio lightbox.

use crate::gallery::ItemId;
use crate::ui::mvi::Reducer;
use crate::ui::Direction;

use super::intent::{LightboxIntent, ResolveOutcome};
use super::state::{Inconsistency, LightboxState};

/// Reducer for lightbox state transitions.
///
/// Pure function. The caller starts an image resolution whenever
/// `pending_resolution()` changes after a dispatch.
pub struct LightboxReducer;

impl Reducer for LightboxReducer {
    type State = LightboxState;
    type Intent = LightboxIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LightboxIntent::Open { item } => {
                state.inconsistency = None;
                show(state, item)
            }
            LightboxIntent::Close => {
                if !state.open {
                    return state;
                }
                state.open = false;
                state.loading = false;
                state.generation += 1;
                state
            }
            LightboxIntent::Navigate { direction, visible } => {
                if !state.open {
                    return state;
                }
                let Some(current) = state.current.clone() else {
                    return state;
                };
                if visible.is_empty() {
                    state.open = false;
                    state.loading = false;
                    state.generation += 1;
                    state.inconsistency = Some(Inconsistency::EmptyView);
                    return state;
                }

                match visible.iter().position(|id| *id == current) {
                    Some(position) => {
                        let len = visible.len();
                        let target = match direction {
                            Direction::Next => (position + 1) % len,
                            Direction::Previous => {
                                if position == 0 {
                                    len - 1
                                } else {
                                    position - 1
                                }
                            }
                        };
                        state.inconsistency = None;
                        show(state, visible[target].clone())
                    }
                    None => {
                        state.inconsistency = Some(Inconsistency::MissingFromView { item: current });
                        show(state, visible[0].clone())
                    }
                }
            }
            LightboxIntent::ImageResolved {
                generation,
                item,
                outcome,
            } => {
                let is_current = state.open
                    && state.generation == generation
                    && state.current.as_ref() == Some(&item);
                if !is_current {
                    // Stale: the lightbox moved on while the image resolved.
                    return state;
                }
                state.loading = false;
                state.load_error = match outcome {
                    ResolveOutcome::Loaded => None,
                    ResolveOutcome::Failed(message) => Some(message),
                };
                state
            }
        }
    }
}

fn show(mut state: LightboxState, item: ItemId) -> LightboxState {
    state.open = true;
    state.current = Some(item);
    state.loading = true;
    state.load_error = None;
    state.generation += 1;
    state
}
