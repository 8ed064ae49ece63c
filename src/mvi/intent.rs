//! Marker trait for intents.

/// An intent describes one transition: a key press, a form edit, or the
/// start/completion of a network operation.
pub trait Intent: Send + 'static {}
