//! Base trait for component state in the MVI architecture.

/// Marker trait for component state objects.
///
/// States should be:
/// - Owned by exactly one page controller
/// - Self-contained (all data needed to present the component)
/// - Comparable (PartialEq, so the controller can derive effects from changes)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
