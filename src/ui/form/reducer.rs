//! Reducer for the contact form.

use crate::ui::mvi::Reducer;

use super::intent::FormIntent;
use super::state::{FormState, Notice, NoticeKind, SubmitPhase, SUCCESS_NOTICE};
use super::validate::{validate_form, validate_on_blur, ContactFields};

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Edit { field, value } => {
                if state.is_submitting() {
                    return state;
                }
                state.fields.set(field, value);
                state.errors.remove(&field);
                state
            }
            FormIntent::Blur { field } => {
                let result = validate_on_blur(field, state.fields.get(field));
                match result.message.filter(|_| !result.valid) {
                    Some(message) => {
                        state.errors.insert(field, message);
                    }
                    None => {
                        state.errors.remove(&field);
                    }
                }
                state
            }
            FormIntent::Submit => {
                if state.is_submitting() {
                    return state;
                }
                let report = validate_form(&state.fields);
                state.errors = report.errors().collect();
                state.focus = report.first_invalid();
                if report.is_valid() {
                    state.generation += 1;
                    state.phase = SubmitPhase::Submitting {
                        generation: state.generation,
                    };
                    state.notice = None;
                }
                state
            }
            FormIntent::SubmitFinished {
                generation,
                outcome,
            } => {
                if state.submitting_generation() != Some(generation) {
                    return state;
                }
                state.phase = SubmitPhase::Editing;
                state.generation += 1;
                state.notice = Some(match outcome {
                    Ok(()) => {
                        state.fields = ContactFields::default();
                        state.errors.clear();
                        Notice {
                            kind: NoticeKind::Success,
                            text: SUCCESS_NOTICE.to_string(),
                            generation: state.generation,
                        }
                    }
                    Err(message) => Notice {
                        kind: NoticeKind::Error,
                        text: message,
                        generation: state.generation,
                    },
                });
                state
            }
            FormIntent::DismissNotice { generation } => {
                if state.notice.as_ref().map(|n| n.generation) == Some(generation) {
                    state.notice = None;
                }
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::form::FieldId;

    fn edit(state: FormState, field: FieldId, value: &str) -> FormState {
        FormReducer::reduce(
            state,
            FormIntent::Edit {
                field,
                value: value.to_string(),
            },
        )
    }

    fn filled() -> FormState {
        let state = edit(FormState::default(), FieldId::Name, "Jane Doe");
        let state = edit(state, FieldId::Email, "jane@example.com");
        edit(state, FieldId::Message, "Looking for a family session.")
    }

    #[test]
    fn invalid_submit_records_all_errors_and_focus() {
        let state = edit(FormState::default(), FieldId::Phone, "12");
        let state = FormReducer::reduce(state, FormIntent::Submit);
        assert!(!state.is_submitting());
        assert_eq!(state.errors.len(), 4);
        assert_eq!(state.focus, Some(FieldId::Name));
    }

    #[test]
    fn valid_submit_enters_submitting() {
        let state = FormReducer::reduce(filled(), FormIntent::Submit);
        assert_eq!(state.submitting_generation(), Some(1));
        assert!(state.errors.is_empty());
        assert_eq!(state.focus, None);
    }

    #[test]
    fn second_submit_while_submitting_is_ignored() {
        let state = FormReducer::reduce(filled(), FormIntent::Submit);
        let again = FormReducer::reduce(state.clone(), FormIntent::Submit);
        assert_eq!(state, again);
    }

    #[test]
    fn success_clears_form_and_shows_notice() {
        let state = FormReducer::reduce(filled(), FormIntent::Submit);
        let state = FormReducer::reduce(
            state,
            FormIntent::SubmitFinished {
                generation: 1,
                outcome: Ok(()),
            },
        );
        assert!(!state.is_submitting());
        assert_eq!(state.fields, ContactFields::default());
        let notice = state.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(state.char_count().count, 0);
    }

    #[test]
    fn failure_keeps_fields() {
        let state = FormReducer::reduce(filled(), FormIntent::Submit);
        let state = FormReducer::reduce(
            state,
            FormIntent::SubmitFinished {
                generation: 1,
                outcome: Err("Service unavailable".into()),
            },
        );
        assert_eq!(state.fields.name, "Jane Doe");
        assert_eq!(state.notice.as_ref().unwrap().kind, NoticeKind::Error);
    }

    #[test]
    fn stale_finish_is_ignored() {
        let state = FormReducer::reduce(filled(), FormIntent::Submit);
        let state = FormReducer::reduce(
            state,
            FormIntent::SubmitFinished {
                generation: 7,
                outcome: Ok(()),
            },
        );
        assert!(state.is_submitting());
    }

    #[test]
    fn dismiss_only_matching_notice() {
        let state = FormReducer::reduce(filled(), FormIntent::Submit);
        let state = FormReducer::reduce(
            state,
            FormIntent::SubmitFinished {
                generation: 1,
                outcome: Ok(()),
            },
        );
        let generation = state.notice.as_ref().unwrap().generation;

        let state = FormReducer::reduce(state, FormIntent::DismissNotice { generation: 1 });
        assert!(state.notice.is_some());

        let state = FormReducer::reduce(state, FormIntent::DismissNotice { generation });
        assert!(state.notice.is_none());
    }

    #[test]
    fn edit_clears_field_error() {
        let state = FormReducer::reduce(FormState::default(), FormIntent::Submit);
        assert!(state.is_invalid(FieldId::Email));
        let state = edit(state, FieldId::Email, "j");
        assert!(!state.is_invalid(FieldId::Email));
        assert!(state.is_invalid(FieldId::Name));
    }

    #[test]
    fn blur_flags_and_clears() {
        let state = edit(FormState::default(), FieldId::Email, "jane@");
        let state = FormReducer::reduce(state, FormIntent::Blur { field: FieldId::Email });
        assert_eq!(state.error(FieldId::Email), Some("Please enter a valid email address"));

        let state = edit(state, FieldId::Email, "jane@example.com");
        let state = FormReducer::reduce(state, FormIntent::Blur { field: FieldId::Email });
        assert_eq!(state.error(FieldId::Email), None);
    }

    #[test]
    fn blur_on_empty_required_field_is_quiet() {
        let state = FormReducer::reduce(FormState::default(), FormIntent::Blur { field: FieldId::Name });
        assert!(state.errors.is_empty());
    }
}
