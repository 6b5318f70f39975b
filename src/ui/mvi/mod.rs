//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the base traits and the store that drive the
//! unidirectional data flow of the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Store::dispatch ──→ Reducer ──→ State ──→ View
//!    ↑                                                  │
//!    └──────────────── callbacks ───────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of everything a view needs
//! - **Intent**: Named command queued by a view callback
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Store**: Sole owner of the state; applies intents one at a time

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::{IntentSender, Store};
