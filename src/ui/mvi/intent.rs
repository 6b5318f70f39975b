//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent user actions (control clicks, key presses).
/// They are queued by view callbacks and applied by the store.
pub trait Intent: std::fmt::Debug + Send + 'static {}
