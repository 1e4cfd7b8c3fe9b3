//! Contact form feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `validate.rs` - Pure field validators and the form report
//! - `state.rs` - Field values, per-field errors, submission phase, notice
//! - `intent.rs` - Edit, Blur, Submit, SubmitFinished, DismissNotice
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `sink.rs` - Submission boundary (`SubmitSink`) and the simulated sink

mod intent;
mod reducer;
mod sink;
mod state;
pub mod validate;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use sink::{SimulatedSink, SubmitError, SubmitSink};
pub use state::{FormState, Notice, NoticeKind, SubmitPhase, SUCCESS_NOTICE};
pub use validate::{
    validate_form, CharCount, ContactFields, FieldId, FieldResult, ValidationReport,
};
