//! FAQ accordion: at most one answer open at a time.

mod intent;
mod reducer;
mod state;

pub use intent::FaqIntent;
pub use reducer::FaqReducer;
pub use state::FaqState;
