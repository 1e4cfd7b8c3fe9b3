//! Reducer for the testimonial carousel.

use crate::ui::mvi::Reducer;
use crate::ui::Direction;

use super::intent::CarouselIntent;
use super::state::{AutoAdvance, CarouselState};

/// Reducer for carousel state transitions.
///
/// Pure function. Starting and cancelling the actual timer is done by the
/// caller, based on how `auto_advance` changed.
pub struct CarouselReducer;

impl Reducer for CarouselReducer {
    type State = CarouselState;
    type Intent = CarouselIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        if let CarouselIntent::Load { len } = intent {
            return CarouselState {
                len,
                current: 0,
                auto_advance: AutoAdvance::Stopped,
                ..state
            };
        }

        // Zero slides: the carousel is disabled and nothing moves.
        if !state.is_enabled() {
            return state;
        }

        match intent {
            CarouselIntent::Load { .. } => state,
            CarouselIntent::Show { index } => {
                if index < state.len {
                    state.current = index;
                }
                state
            }
            CarouselIntent::Next => {
                state.current = state.next_index();
                state
            }
            CarouselIntent::Previous => {
                state.current = state.previous_index();
                state
            }
            CarouselIntent::Select { index } => {
                if index >= state.len {
                    return state;
                }
                state.current = index;
                restart(state)
            }
            CarouselIntent::Arrow(direction) => {
                if !state.in_viewport {
                    return state;
                }
                state.current = match direction {
                    Direction::Next => state.next_index(),
                    Direction::Previous => state.previous_index(),
                };
                restart(state)
            }
            CarouselIntent::StartAutoAdvance => start(state),
            CarouselIntent::StopAutoAdvance => stop(state),
            CarouselIntent::Tick { generation } => {
                if state.running_generation() == Some(generation) {
                    state.current = state.next_index();
                }
                state
            }
            CarouselIntent::PointerEnter => {
                state.hovered = true;
                stop(state)
            }
            CarouselIntent::PointerLeave => {
                state.hovered = false;
                resume(state)
            }
            CarouselIntent::FocusIn => {
                state.focused = true;
                stop(state)
            }
            CarouselIntent::FocusOut => {
                state.focused = false;
                resume(state)
            }
            CarouselIntent::VisibilityChanged { hidden: true } => {
                state.page_hidden = true;
                stop(state)
            }
            CarouselIntent::VisibilityChanged { hidden: false } => {
                state.page_hidden = false;
                resume(state)
            }
            CarouselIntent::ViewportChanged { visible } => {
                state.in_viewport = visible;
                state
            }
        }
    }
}

fn start(mut state: CarouselState) -> CarouselState {
    if state.page_hidden || state.is_running() {
        return state;
    }
    state.generation += 1;
    state.auto_advance = AutoAdvance::Running {
        generation: state.generation,
    };
    state
}

fn stop(mut state: CarouselState) -> CarouselState {
    state.auto_advance = AutoAdvance::Stopped;
    state
}

/// Start only when hover, focus and page visibility all allow it.
fn resume(state: CarouselState) -> CarouselState {
    if state.may_resume() {
        start(state)
    } else {
        state
    }
}

/// User navigation: a running timer gets a fresh full interval.
fn restart(state: CarouselState) -> CarouselState {
    if state.is_running() {
        start(stop(state))
    } else {
        state
    }
}
