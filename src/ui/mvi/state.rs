//! Base trait for reducer-owned state.

/// Marker trait for state objects.
///
/// `Default` is the value a session starts from. `PartialEq` lets tests
/// and callers compare whole states structurally.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
