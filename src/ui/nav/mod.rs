//! Site navigation: the mobile menu and the active-section tracker.

mod intent;
mod reducer;
mod sections;
mod state;

pub use intent::MenuIntent;
pub use reducer::MenuReducer;
pub use sections::{SectionKey, SectionTracker, DEFAULT_SECTIONS};
pub use state::MenuState;
