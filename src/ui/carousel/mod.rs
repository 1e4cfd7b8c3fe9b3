//! Testimonial carousel feature module.
//!
//! Cycles a fixed list of slides and owns the auto-advance timer generation.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Current slide, pause reasons, timer generation
//! - `intent.rs` - Navigation, pause/resume triggers, timer ticks
//! - `reducer.rs` - State transitions (pure, no side effects)
//!
//! The timer itself lives in the runtime scheduler. The page controller
//! compares `auto_advance` before and after each dispatch and emits start
//! or cancel effects; ticks carry their generation so a cancelled timer can
//! never move the carousel.

mod intent;
mod reducer;
mod state;

pub use intent::CarouselIntent;
pub use reducer::CarouselReducer;
pub use state::{AutoAdvance, CarouselState};
