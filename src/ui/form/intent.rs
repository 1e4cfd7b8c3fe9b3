//! Intents for the contact form.

use crate::ui::mvi::Intent;

use super::validate::FieldId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIntent {
    /// Visitor typed into a field. Clears that field's error.
    Edit { field: FieldId, value: String },
    /// Visitor left a field.
    Blur { field: FieldId },
    Submit,
    /// Submission sink answered for the submission with this generation.
    SubmitFinished {
        generation: u64,
        outcome: Result<(), String>,
    },
    /// Notice timer fired.
    DismissNotice { generation: u64 },
}

impl Intent for FormIntent {}
