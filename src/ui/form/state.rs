//! State for the contact form.

use std::collections::BTreeMap;

use crate::ui::mvi::UiState;

use super::validate::{CharCount, ContactFields, FieldId};

pub const SUCCESS_NOTICE: &str =
    "Thank you! Your message has been sent successfully. I'll get back to you within 24 hours.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Editing,
    /// Waiting for the sink. The submit button shows "Sending..." and is disabled.
    Submitting { generation: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Banner shown above the form after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub fields: ContactFields,
    pub errors: BTreeMap<FieldId, &'static str>,
    /// Field to focus after a failed submit.
    pub focus: Option<FieldId>,
    pub phase: SubmitPhase,
    pub notice: Option<Notice>,
    /// Last generation handed out to a submission or a notice.
    pub generation: u64,
}

impl UiState for FormState {}

impl FormState {
    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmitPhase::Submitting { .. })
    }

    pub fn submitting_generation(&self) -> Option<u64> {
        match self.phase {
            SubmitPhase::Submitting { generation } => Some(generation),
            SubmitPhase::Editing => None,
        }
    }

    pub fn error(&self, field: FieldId) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// `aria-invalid` for the field.
    pub fn is_invalid(&self, field: FieldId) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn char_count(&self) -> CharCount {
        CharCount::of(&self.fields.message)
    }
}
