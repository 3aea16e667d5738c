//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents come from two places:
/// - the presentation layer (remove a story, type a query)
/// - the load orchestrator (a fetch started, resolved or failed)
pub trait Intent: Send + 'static {}
