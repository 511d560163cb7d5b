//! Base trait for page state.

/// Marker trait for page state objects.
///
/// A state carries everything its view needs; derived data (filtered
/// rows, statistics) is recomputed from it at render time.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
