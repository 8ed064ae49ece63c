/// Marker trait for reducer-owned state.
///
/// `Default` is the initial state; `Clone` lets observers keep snapshots.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
