//! Scroll-driven behaviour: reveal-on-scroll and lazy images, the header's
//! scrolled/hidden look, per-frame coalescing and smooth scrolling.

mod frame;
mod header;
mod observer;
pub mod smooth;

pub use frame::ScrollCoalescer;
pub use header::{HeaderPolicy, HeaderState};
pub use observer::{ElementId, ElementRect, ObservedKind, RevealAction, RevealObserver};
pub use smooth::SmoothScroll;
