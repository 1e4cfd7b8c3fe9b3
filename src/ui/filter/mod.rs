//! Portfolio filter feature module.
//!
//! Keeps the active category and the visible subset of portfolio items.
//! Filtering only hides and shows; the catalog itself never changes.

mod intent;
mod reducer;
mod state;

pub use intent::FilterIntent;
pub use reducer::FilterReducer;
pub use state::{FilterCategory, FilterState};
