//! Base trait for page intents.

/// Marker trait for intent objects.
///
/// Intents are key presses already translated into page vocabulary
/// ("cycle sort", "submit form") or system events such as an arriving
/// assistant reply.
pub trait Intent: Send + 'static {}
