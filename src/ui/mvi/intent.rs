//! Base trait for intents in the MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (clicks, key presses, pointer hover, focus)
/// - Host events (visibility change, viewport intersection)
/// - Completed waits (timer ticks, image resolution, form submission)
pub trait Intent: Send + 'static {}
