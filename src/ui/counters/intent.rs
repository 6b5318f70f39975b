//! Intents for the counter board.

use crate::ui::counters::model::CounterId;
use crate::ui::mvi::Intent;

/// Mutations the counter views can request.
///
/// Per-counter intents carry the counter's id rather than its position so
/// that a click queued before a deletion still resolves to the right row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountersIntent {
    Increment { id: CounterId },
    Decrement { id: CounterId },
    /// Set every counter back to zero.
    ResetAll,
    /// Append a fresh counter with the next unused id.
    AddCounter,
    Delete { id: CounterId },
}

impl Intent for CountersIntent {}
