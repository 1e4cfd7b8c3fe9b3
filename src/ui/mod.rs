//! Page components and the controller that drives them.

pub mod carousel;
pub mod effect;
pub mod events;
pub mod faq;
pub mod filter;
pub mod form;
pub mod lightbox;
pub mod mvi;
pub mod nav;
pub mod page;
pub mod runtime;
pub mod scroll;

pub use effect::{Effect, Presenter, TracingPresenter};
pub use events::{Key, PageEvent};
pub use page::{Page, PageLayout};
pub use runtime::{PageRuntime, Scheduler};

/// Step direction shared by the carousel and the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}
