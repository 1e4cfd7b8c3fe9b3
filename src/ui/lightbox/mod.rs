//! Portfolio lightbox feature module.
//!
//! Shows one gallery item at a time over the filtered view, with prev/next
//! navigation and a loading indicator while the image resolves.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Open/closed, current item, loading flag, resolution generation
//! - `intent.rs` - Open, Close, Navigate, ImageResolved
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `resolver.rs` - Async image resolution boundary
//!
//! Every open or move bumps the generation. An image resolution carries the
//! generation it was started under and is dropped when it no longer matches.

mod intent;
mod reducer;
mod resolver;
mod state;

pub use intent::{LightboxIntent, ResolveOutcome};
pub use reducer::LightboxReducer;
pub use resolver::{ImageResolver, PassthroughResolver, ResolveError};
pub use state::{Inconsistency, LightboxState};
